//! Thin request wrapper over `gloo-net`: attaches the session token,
//! encodes list queries and maps failed responses onto the shared error
//! taxonomy.

use contracts::common::{ApiError, ErrorEnvelope, ListQuery, NOT_FOUND_MESSAGE};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

/// Render a list query as an encoded query string, leading '?' included.
pub fn query_string(query: &ListQuery) -> String {
    let encoded: Vec<String> = query
        .query_pairs()
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
        .collect();
    format!("?{}", encoded.join("&"))
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::auth_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Map a non-2xx response onto the error taxonomy. Not-found keeps its own
/// kind so screens can word it differently from a generic failure.
fn classify(status: u16, envelope: Option<ErrorEnvelope>) -> ApiError {
    let message = envelope.as_ref().map(|e| e.message.clone());
    match status {
        404 => ApiError::not_found(message.unwrap_or_else(|| NOT_FOUND_MESSAGE.to_string())),
        400 | 409 | 422 => ApiError::validation(
            message.unwrap_or_else(|| "The submitted data was rejected".to_string()),
            envelope.map(|e| e.errors).unwrap_or_default(),
        ),
        _ => ApiError::server(
            message.unwrap_or_else(|| format!("Request failed with status {}", status)),
        ),
    }
}

async fn handle<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::server(format!("Failed to parse response: {}", e)))
    } else {
        let status = response.status();
        let envelope = response.json::<ErrorEnvelope>().await.ok();
        Err(classify(status, envelope))
    }
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = with_auth(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| ApiError::network(format!("Failed to send request: {}", e)))?;
    handle(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = with_auth(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| ApiError::network(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::network(format!("Failed to send request: {}", e)))?;
    handle(response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = with_auth(Request::put(&api_url(path)))
        .json(body)
        .map_err(|e| ApiError::network(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::network(format!("Failed to send request: {}", e)))?;
    handle(response).await
}

pub async fn patch_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = with_auth(Request::patch(&api_url(path)))
        .json(body)
        .map_err(|e| ApiError::network(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::network(format!("Failed to send request: {}", e)))?;
    handle(response).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = with_auth(Request::delete(&api_url(path)))
        .send()
        .await
        .map_err(|e| ApiError::network(format!("Failed to send request: {}", e)))?;
    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        let envelope = response.json::<ErrorEnvelope>().await.ok();
        Err(classify(status, envelope))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::common::{ApiErrorKind, EntityStatus};
    use std::collections::HashMap;

    #[test]
    fn query_string_is_encoded() {
        let mut query = ListQuery::default();
        query.name = Some("pipe & fitting".to_string());
        query.status = Some(EntityStatus::Active);
        let qs = query_string(&query);
        assert!(qs.starts_with("?page=1&limit=20&sortOrder=ASC"));
        assert!(qs.contains("name=pipe%20%26%20fitting"));
        assert!(qs.contains("status=ACTIVE"));
    }

    #[test]
    fn classify_not_found() {
        let err = classify(404, None);
        assert_eq!(err.kind, ApiErrorKind::NotFound);
        assert_eq!(err.message, NOT_FOUND_MESSAGE);
    }

    #[test]
    fn classify_validation_carries_field_errors() {
        let mut errors = HashMap::new();
        errors.insert("name".to_string(), vec!["taken".to_string()]);
        let envelope = ErrorEnvelope {
            status: "error".to_string(),
            message: "Invalid input".to_string(),
            errors,
        };
        let err = classify(422, Some(envelope));
        assert_eq!(err.kind, ApiErrorKind::Validation);
        assert_eq!(err.field_errors["name"], vec!["taken".to_string()]);
    }

    #[test]
    fn classify_server_fallback() {
        let err = classify(502, None);
        assert_eq!(err.kind, ApiErrorKind::Server);
        assert!(err.message.contains("502"));
    }
}
