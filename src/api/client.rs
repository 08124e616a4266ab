//! Chat backend HTTP client
//!
//! Thin wrapper over `reqwest` that maps each endpoint onto a typed call.
//! Status handling follows one rule: 200 decodes the body, 403 on
//! `/chat/send` means the session expired, anything else becomes
//! `ClientError::Status` carrying the server's text.

use crate::api::error::ClientError;
use crate::api::types::{
    ConsentRequest, ConsentResponse, ResetRequest, ResetResponse, SendRequest, SendResponse,
    UploadResponse,
};
use reqwest::{multipart, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::path::Path;

/// A file ready to be sent to `/files`
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub filename: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// Build an upload from in-memory bytes, guessing the MIME type from the name
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        let filename = filename.into();
        let mime = mime_guess::from_path(&filename)
            .first_or_octet_stream()
            .to_string();
        Self {
            filename,
            mime,
            bytes,
        }
    }

    /// Read a file from disk; the upload keeps the file's own name
    pub async fn from_path(path: &Path, filename: String) -> Result<Self, ClientError> {
        let bytes = tokio::fs::read(path).await?;
        Ok(Self::new(filename, bytes))
    }
}

/// HTTP client bound to one backend base URL
#[derive(Debug, Clone)]
pub struct ChatApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ChatApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Use an existing `reqwest::Client` (shares its connection pool)
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST /consent
    pub async fn consent(&self) -> Result<ConsentResponse, ClientError> {
        let response = self
            .http
            .post(self.url("/consent"))
            .json(&ConsentRequest { consent: true })
            .send()
            .await?;
        decode(response).await
    }

    /// POST /files (multipart: `file` part plus `session_id` text field)
    pub async fn upload_file(
        &self,
        session_id: &str,
        upload: FileUpload,
    ) -> Result<UploadResponse, ClientError> {
        let part = multipart::Part::bytes(upload.bytes)
            .file_name(upload.filename)
            .mime_str(&upload.mime)?;
        let form = multipart::Form::new()
            .text("session_id", session_id.to_string())
            .part("file", part);

        let response = self
            .http
            .post(self.url("/files"))
            .multipart(form)
            .send()
            .await?;
        decode(response).await
    }

    /// POST /chat/send
    pub async fn send_message(&self, request: &SendRequest) -> Result<SendResponse, ClientError> {
        let response = self
            .http
            .post(self.url("/chat/send"))
            .json(request)
            .send()
            .await?;

        if response.status() == StatusCode::FORBIDDEN {
            return Err(ClientError::SessionExpired);
        }
        decode(response).await
    }

    /// POST /chat/reset
    pub async fn reset(&self, session_id: &str) -> Result<ResetResponse, ClientError> {
        let response = self
            .http
            .post(self.url("/chat/reset"))
            .json(&ResetRequest {
                session_id: session_id.to_string(),
            })
            .send()
            .await?;
        decode(response).await
    }
}

/// Decode a 200 body as JSON; any other status becomes `ClientError::Status`
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.text().await?;

    if status != StatusCode::OK {
        tracing::warn!(
            status_code = status.as_u16(),
            error_body = %body,
            "Backend returned error status"
        );
        return Err(ClientError::Status {
            status: status.as_u16(),
            body,
        });
    }

    Ok(serde_json::from_str(&body)?)
}
