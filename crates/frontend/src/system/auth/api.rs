use contracts::common::{ApiError, ItemEnvelope};
use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use crate::shared::api_client;

pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    let envelope: ItemEnvelope<LoginResponse> =
        api_client::post_json("/api/auth/login", request).await?;
    Ok(envelope.data)
}

pub async fn get_current_user() -> Result<UserInfo, ApiError> {
    let envelope: ItemEnvelope<UserInfo> = api_client::get_json("/api/auth/me").await?;
    Ok(envelope.data)
}

pub async fn logout() -> Result<(), ApiError> {
    let _: serde_json::Value =
        api_client::post_json("/api/auth/logout", &serde_json::json!({})).await?;
    Ok(())
}
