//! Chat handlers
//!
//! `/chat/send` echoes the message back after the configured delay;
//! `/chat/reset` acknowledges without touching anything.

use axum::{body::Bytes, extract::State, Json};
use tracing::info;

use super::SharedConfig;
use crate::models::{
    ChatEvent, ResetRequest, ResetResponse, SendRequest, SendResponse, MOCK_EVENT_TYPE,
};

/// Build the canned assistant reply for a user message
pub fn mock_reply(message: &str) -> String {
    format!("Mock server here. You said: '{}'", message)
}

/// POST /chat/send - Answer a message after a fixed delay
pub async fn send_message(
    State(config): State<SharedConfig>,
    Json(request): Json<SendRequest>,
) -> Json<SendResponse> {
    info!(
        session_id = ?request.session_id,
        message_len = request.message.len(),
        file_count = request.file_ids.len(),
        "Chat message received"
    );

    tokio::time::sleep(config.reply_delay).await;

    Json(SendResponse {
        assistant: mock_reply(&request.message),
        events: vec![ChatEvent {
            event_type: MOCK_EVENT_TYPE.to_string(),
        }],
    })
}

/// POST /chat/reset - Acknowledge a conversation reset
///
/// The body is optional; anything unparseable is treated as an empty request.
pub async fn reset_chat(body: Bytes) -> Json<ResetResponse> {
    let request: ResetRequest = serde_json::from_slice(&body).unwrap_or_default();
    info!(session_id = ?request.session_id, "Conversation reset requested");
    Json(ResetResponse { ok: true })
}
