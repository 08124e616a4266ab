// API module
// HTTP client for the chat backend and its wire types

pub mod client;
pub mod error;
pub mod types;

pub use client::{ChatApiClient, FileUpload};
pub use error::ClientError;
pub use types::*;
