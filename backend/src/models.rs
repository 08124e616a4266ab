//! Wire types
//!
//! Request and response bodies for the four chat endpoints.

use serde::{Deserialize, Serialize};

/// Session identifier handed out by `/consent`
pub const MOCK_SESSION_ID: &str = "mock_session_12345";

/// File identifier handed out by `/files`
pub const MOCK_FILE_ID: &str = "mock_file_999";

/// Size reported for every upload, whatever was sent
pub const MOCK_FILE_SIZE: u64 = 12345;

/// Event type attached to every chat reply
pub const MOCK_EVENT_TYPE: &str = "mock_event";

#[allow(missing_docs)]
#[derive(Debug, Default, Deserialize)]
pub struct ConsentRequest {
    #[serde(default)]
    pub consent: bool,
}

#[allow(missing_docs)]
#[derive(Debug, Serialize, Deserialize)]
pub struct ConsentResponse {
    pub session_id: String,
}

#[allow(missing_docs)]
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub file_id: String,
    pub filename: String,
    pub mime: Option<String>,
    pub size: u64,
}

/// Body of `/chat/send`
///
/// Every field is optional on the wire; a missing message is treated as empty.
#[allow(missing_docs)]
#[derive(Debug, Default, Deserialize)]
pub struct SendRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub file_ids: Vec<String>,
}

/// A side-channel event reported alongside an assistant reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEvent {
    /// Event kind, e.g. `mock_event`
    #[serde(rename = "type")]
    pub event_type: String,
}

#[allow(missing_docs)]
#[derive(Debug, Serialize, Deserialize)]
pub struct SendResponse {
    pub assistant: String,
    pub events: Vec<ChatEvent>,
}

#[allow(missing_docs)]
#[derive(Debug, Default, Deserialize)]
pub struct ResetRequest {
    #[serde(default)]
    pub session_id: Option<String>,
}

#[allow(missing_docs)]
#[derive(Debug, Serialize, Deserialize)]
pub struct ResetResponse {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_event_uses_type_key() {
        let event = ChatEvent {
            event_type: MOCK_EVENT_TYPE.to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"mock_event"}"#);
    }

    #[test]
    fn test_send_request_tolerates_missing_fields() {
        let request: SendRequest = serde_json::from_str("{}").unwrap();
        assert!(request.session_id.is_none());
        assert!(request.message.is_empty());
        assert!(request.file_ids.is_empty());
    }
}
