//! Client-side request errors

use thiserror::Error;

/// Errors that can occur while talking to the chat backend
///
/// None of these are fatal; each is surfaced inline at the call site.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never got a response (refused, reset, DNS, ...)
    #[error("Server connection error: {0}")]
    Connection(#[from] reqwest::Error),

    /// The server answered with a non-200 status
    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// `/chat/send` answered 403
    #[error("Session expired")]
    SessionExpired,

    /// The response body was not the expected JSON
    #[error("Failed to parse JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The file to upload could not be read
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}
