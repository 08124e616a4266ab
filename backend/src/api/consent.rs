//! Consent handler
//!
//! Hands out the one fixed session identifier, whatever the payload says.

use axum::{body::Bytes, Json};
use tracing::info;

use crate::models::{ConsentRequest, ConsentResponse, MOCK_SESSION_ID};

/// POST /consent - Issue a session identifier
pub async fn consent(body: Bytes) -> Json<ConsentResponse> {
    let request: ConsentRequest = serde_json::from_slice(&body).unwrap_or_default();
    info!(consent = request.consent, "Consent received");

    Json(ConsentResponse {
        session_id: MOCK_SESSION_ID.to_string(),
    })
}
