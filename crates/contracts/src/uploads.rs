//! Presigned-upload handshake: the client asks for a time-limited upload
//! slot, PUTs the bytes straight to storage, then keeps the public URL.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadSlotRequest {
    pub file_name: String,
    pub file_type: String,
    pub file_size: u64,
    /// What the file is for, e.g. "company-logo".
    pub purpose: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadSlot {
    pub upload_url: String,
    pub public_url: String,
}
