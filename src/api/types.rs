// Wire types for the four chat endpoints

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct ConsentRequest {
    pub consent: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConsentResponse {
    pub session_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub file_id: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub mime: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

/// Body of `/chat/send`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendRequest {
    pub session_id: String,
    pub message: String,
    /// Every file attached so far in this conversation
    pub file_ids: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SendResponse {
    #[serde(default)]
    pub assistant: String,
    /// Opaque agent events; only counted for logging
    #[serde(default)]
    pub events: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetRequest {
    pub session_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResetResponse {
    #[serde(default)]
    pub ok: bool,
}
