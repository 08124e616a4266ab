//! File upload handler
//!
//! Accepts a multipart upload, reads it to the end and reports canned metadata.
//! Nothing is written to disk.

use axum::{extract::Multipart, Json};
use tracing::{info, warn};

use crate::error::AppError;
use crate::models::{UploadResponse, MOCK_FILE_ID, MOCK_FILE_SIZE};

/// POST /files - Accept an upload
///
/// Expects multipart form data with:
/// - file: the uploaded file (required)
/// - session_id: the caller's session (logged, not checked)
pub async fn upload_file(mut multipart: Multipart) -> Result<Json<UploadResponse>, AppError> {
    let mut session_id: Option<String> = None;
    let mut upload: Option<(String, Option<String>, usize)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::MalformedUpload(e.to_string()))?
    {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "session_id" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::MalformedUpload(e.to_string()))?;
                session_id = Some(text);
            }
            "file" => {
                // Capture metadata before the field is consumed
                let filename = field.file_name().unwrap_or_default().to_string();
                let mime = field.content_type().map(|s| s.to_string());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::MalformedUpload(e.to_string()))?;
                upload = Some((filename, mime, data.len()));
            }
            _ => {
                warn!("Unknown multipart field: {}", field_name);
            }
        }
    }

    let (filename, mime, received) =
        upload.ok_or_else(|| AppError::MissingField("file".to_string()))?;

    info!(
        session_id = ?session_id,
        filename = %filename,
        received_bytes = received,
        "Upload accepted"
    );

    Ok(Json(UploadResponse {
        file_id: MOCK_FILE_ID.to_string(),
        filename,
        mime,
        size: MOCK_FILE_SIZE,
    }))
}
