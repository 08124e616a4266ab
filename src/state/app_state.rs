// Client-side chat state
// Session id, transcript and attached files, plus the transient UI status

use crate::api::{
    ClientError, ConsentResponse, ResetResponse, SendRequest, SendResponse, UploadResponse,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message typed by the user
    User,
    /// Reply from the backend
    Assistant,
}

/// A single transcript entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// A server-issued file identifier paired with the name it was uploaded under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    pub file_id: String,
    pub filename: String,
}

/// Request currently in flight
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Busy {
    Consenting,
    Uploading(String),
    Sending,
    Resetting,
}

impl Busy {
    /// Transient status text shown while waiting
    pub fn label(&self) -> String {
        match self {
            Busy::Consenting => "Requesting session...".to_string(),
            Busy::Uploading(name) => format!("Uploading {}...", name),
            Busy::Sending => "Analyzing...".to_string(),
            Busy::Resetting => "Resetting conversation...".to_string(),
        }
    }
}

/// Severity of an inline notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// Inline message surfaced to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// Precondition failures, detected before any request is issued
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// No session yet; consent has to come first
    #[error("No active session, consent first")]
    NoSession,

    /// A file with this name is already attached to the session
    #[error("File already attached: {0}")]
    DuplicateFile(String),

    /// Message text is blank
    #[error("Message cannot be empty")]
    EmptyMessage,

    /// Upload path has no file name component
    #[error("Invalid file path: {0}")]
    InvalidPath(String),

    /// Another request has not finished yet
    #[error("Still waiting on: {0}")]
    Busy(String),
}

/// Main client state
///
/// Every user action goes through a `begin_*` / `complete_*` pair: `begin_*`
/// checks preconditions and applies the optimistic part, `complete_*`
/// reconciles with the server's answer. Messages and files only ever grow
/// until `clear_conversation`, which empties both at once.
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    session_id: Option<String>,
    messages: Vec<ChatMessage>,
    files: Vec<FileRef>,
    busy: Option<Busy>,
    notice: Option<Notice>,
}

impl ChatState {
    /// Create an empty state (no session, nothing attached)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn has_session(&self) -> bool {
        self.session_id.as_deref().is_some_and(|id| !id.is_empty())
    }

    /// True while the UI should show the consent step instead of the chat
    pub fn needs_consent(&self) -> bool {
        !self.has_session()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn files(&self) -> &[FileRef] {
        &self.files
    }

    /// Identifiers of every attached file, in upload order
    pub fn file_ids(&self) -> Vec<String> {
        self.files.iter().map(|f| f.file_id.clone()).collect()
    }

    /// Original names of every attached file, in upload order
    pub fn file_names(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.filename.as_str()).collect()
    }

    /// Check whether a file with this name was already uploaded
    pub fn is_uploaded(&self, filename: &str) -> bool {
        self.files.iter().any(|f| f.filename == filename)
    }

    pub fn busy(&self) -> Option<&Busy> {
        self.busy.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_some()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn ensure_idle(&self) -> Result<(), ActionError> {
        match &self.busy {
            Some(busy) => Err(ActionError::Busy(busy.label())),
            None => Ok(()),
        }
    }

    fn require_session(&self) -> Result<String, ActionError> {
        match &self.session_id {
            Some(id) if !id.is_empty() => Ok(id.clone()),
            _ => Err(ActionError::NoSession),
        }
    }

    /// Mark a consent request as in flight
    pub fn begin_consent(&mut self) -> Result<(), ActionError> {
        self.ensure_idle()?;
        self.busy = Some(Busy::Consenting);
        self.notice = None;
        Ok(())
    }

    /// Store the issued session, or surface why consent failed
    pub fn complete_consent(&mut self, result: Result<ConsentResponse, ClientError>) {
        self.busy = None;
        match result {
            Ok(response) if !response.session_id.is_empty() => {
                self.notice = Some(Notice::success(format!(
                    "Session issued: {}",
                    response.session_id
                )));
                self.session_id = Some(response.session_id);
            }
            Ok(_) => {
                self.session_id = None;
                self.notice = Some(Notice::error(
                    "Consent failed: server returned an empty session id",
                ));
            }
            Err(e) => {
                self.session_id = None;
                self.notice = Some(Notice::error(format!("Consent failed: {}", e)));
            }
        }
    }

    /// Check the duplicate-name guard and mark an upload as in flight
    ///
    /// Returns the session id the upload has to carry.
    pub fn begin_upload(&mut self, filename: &str) -> Result<String, ActionError> {
        self.ensure_idle()?;
        let session_id = self.require_session()?;
        if self.is_uploaded(filename) {
            return Err(ActionError::DuplicateFile(filename.to_string()));
        }
        self.busy = Some(Busy::Uploading(filename.to_string()));
        self.notice = None;
        Ok(session_id)
    }

    /// Attach the uploaded file under its original name; lists stay untouched on failure
    pub fn complete_upload(
        &mut self,
        filename: String,
        result: Result<UploadResponse, ClientError>,
    ) {
        self.busy = None;
        match result {
            Ok(response) => {
                self.notice = Some(Notice::success(format!("Upload complete: {}", filename)));
                self.files.push(FileRef {
                    file_id: response.file_id,
                    filename,
                });
            }
            Err(e) => {
                self.notice = Some(Notice::error(format!("Upload failed: {}", e)));
            }
        }
    }

    /// Optimistically append the user's message and build the request for it
    pub fn begin_send(&mut self, text: &str) -> Result<SendRequest, ActionError> {
        self.ensure_idle()?;
        let session_id = self.require_session()?;
        if text.trim().is_empty() {
            return Err(ActionError::EmptyMessage);
        }

        self.messages.push(ChatMessage::user(text));
        self.busy = Some(Busy::Sending);
        self.notice = None;

        Ok(SendRequest {
            session_id,
            message: text.to_string(),
            file_ids: self.file_ids(),
        })
    }

    /// Confirm the send with the assistant's reply, or settle the failure
    ///
    /// The optimistic user message is kept either way. A 403 drops the session
    /// so the consent step comes back.
    pub fn complete_send(&mut self, result: Result<SendResponse, ClientError>) {
        self.busy = None;
        match result {
            Ok(response) => {
                self.messages.push(ChatMessage::assistant(response.assistant));
            }
            Err(ClientError::SessionExpired) => {
                self.session_id = None;
                self.notice = Some(Notice::error("Session expired. Please reconnect."));
            }
            Err(e) => {
                self.notice = Some(Notice::error(format!("Error: {}", e)));
            }
        }
    }

    /// Mark a reset as in flight; returns the session id to reset
    pub fn begin_reset(&mut self) -> Result<String, ActionError> {
        self.ensure_idle()?;
        let session_id = self.require_session()?;
        self.busy = Some(Busy::Resetting);
        self.notice = None;
        Ok(session_id)
    }

    /// Clear the conversation whatever the server said
    pub fn complete_reset(&mut self, result: Result<ResetResponse, ClientError>) {
        self.busy = None;
        self.clear_conversation();
        if let Err(e) = result {
            self.notice = Some(Notice::error(format!("Reset error: {}", e)));
        }
    }

    /// Empty the transcript and the attached files together
    pub fn clear_conversation(&mut self) {
        self.messages.clear();
        self.files.clear();
    }
}
