//! Presigned-upload flow: ask the backend for an upload slot, PUT the
//! bytes straight to storage, keep the public URL. The storage provider
//! itself stays out of the picture.

use contracts::common::{ApiError, ItemEnvelope};
use contracts::uploads::{UploadSlot, UploadSlotRequest};
use gloo_net::http::Request;
use web_sys::File;

use crate::shared::api_client;

pub async fn upload_file(file: File, purpose: &str) -> Result<String, ApiError> {
    let file_type = if file.type_().is_empty() {
        "application/octet-stream".to_string()
    } else {
        file.type_()
    };
    let slot_request = UploadSlotRequest {
        file_name: file.name(),
        file_type: file_type.clone(),
        file_size: file.size() as u64,
        purpose: purpose.to_string(),
        custom_path: None,
    };

    let slot: ItemEnvelope<UploadSlot> =
        api_client::post_json("/api/uploads/presign", &slot_request).await?;
    let slot = slot.data;

    // Direct PUT to storage; no auth header, the URL itself is the grant.
    let response = Request::put(&slot.upload_url)
        .header("Content-Type", &file_type)
        .body(file)
        .map_err(|e| ApiError::network(format!("Failed to start upload: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::network(format!("Upload failed: {}", e)))?;

    if !response.ok() {
        return Err(ApiError::server(format!(
            "Upload rejected with status {}",
            response.status()
        )));
    }
    Ok(slot.public_url)
}
