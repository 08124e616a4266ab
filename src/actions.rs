//! User actions
//!
//! An action runs in three steps so the GUI can keep the network off its
//! frame loop:
//!
//! 1. [`begin`] validates against the current [`ChatState`], applies the
//!    optimistic part and returns the [`Command`] to run.
//! 2. [`execute`] performs the HTTP call and yields an [`Outcome`].
//! 3. [`apply`] reconciles the state with that outcome.
//!
//! [`perform`] chains all three for callers that can simply await.

use crate::api::{
    ChatApiClient, ClientError, ConsentResponse, FileUpload, ResetResponse, SendRequest,
    SendResponse, UploadResponse,
};
use crate::state::{ActionError, ChatState};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Something the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Consent,
    Upload { path: PathBuf },
    Send { text: String },
    Reset,
}

/// A request that passed validation and is ready to go out
#[derive(Debug, Clone)]
pub enum Command {
    Consent,
    Upload {
        session_id: String,
        path: PathBuf,
        filename: String,
    },
    Send(SendRequest),
    Reset {
        session_id: String,
    },
}

/// Server answer for a command
#[derive(Debug)]
pub enum Outcome {
    Consented(Result<ConsentResponse, ClientError>),
    Uploaded {
        filename: String,
        result: Result<UploadResponse, ClientError>,
    },
    Replied(Result<SendResponse, ClientError>),
    Reset(Result<ResetResponse, ClientError>),
}

/// Name a file is uploaded under: the last component of its path
pub fn upload_name(path: &Path) -> Result<String, ActionError> {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ActionError::InvalidPath(path.display().to_string()))
}

/// Phase one: validate and apply the optimistic update
pub fn begin(state: &mut ChatState, action: Action) -> Result<Command, ActionError> {
    match action {
        Action::Consent => {
            state.begin_consent()?;
            Ok(Command::Consent)
        }
        Action::Upload { path } => {
            let filename = upload_name(&path)?;
            let session_id = state.begin_upload(&filename)?;
            Ok(Command::Upload {
                session_id,
                path,
                filename,
            })
        }
        Action::Send { text } => Ok(Command::Send(state.begin_send(&text)?)),
        Action::Reset => Ok(Command::Reset {
            session_id: state.begin_reset()?,
        }),
    }
}

/// Phase two: run the request
pub async fn execute(client: &ChatApiClient, command: Command) -> Outcome {
    match command {
        Command::Consent => {
            let result = client.consent().await;
            match &result {
                Ok(response) => info!(session_id = %response.session_id, "Session issued"),
                Err(e) => warn!(error = %e, "Consent failed"),
            }
            Outcome::Consented(result)
        }
        Command::Upload {
            session_id,
            path,
            filename,
        } => {
            let result = match FileUpload::from_path(&path, filename.clone()).await {
                Ok(upload) => client.upload_file(&session_id, upload).await,
                Err(e) => Err(e),
            };
            match &result {
                Ok(response) => info!(
                    filename = %filename,
                    file_id = %response.file_id,
                    "File uploaded"
                ),
                Err(e) => warn!(filename = %filename, error = %e, "Upload failed"),
            }
            Outcome::Uploaded { filename, result }
        }
        Command::Send(request) => {
            let result = client.send_message(&request).await;
            match &result {
                Ok(response) => info!(
                    session_id = %request.session_id,
                    reply_len = response.assistant.len(),
                    event_count = response.events.len(),
                    "Assistant replied"
                ),
                Err(ClientError::SessionExpired) => {
                    warn!(session_id = %request.session_id, "Session expired")
                }
                Err(e) => warn!(error = %e, "Send failed"),
            }
            Outcome::Replied(result)
        }
        Command::Reset { session_id } => {
            let result = client.reset(&session_id).await;
            if let Err(e) = &result {
                warn!(session_id = %session_id, error = %e, "Reset request failed");
            }
            Outcome::Reset(result)
        }
    }
}

/// Phase three: reconcile
pub fn apply(state: &mut ChatState, outcome: Outcome) {
    match outcome {
        Outcome::Consented(result) => state.complete_consent(result),
        Outcome::Uploaded { filename, result } => state.complete_upload(filename, result),
        Outcome::Replied(result) => state.complete_send(result),
        Outcome::Reset(result) => state.complete_reset(result),
    }
}

/// Run an action end to end and return the next state
///
/// `state` itself is left untouched; a precondition failure returns the
/// error without issuing any request.
pub async fn perform(
    client: &ChatApiClient,
    state: &ChatState,
    action: Action,
) -> Result<ChatState, ActionError> {
    let mut next = state.clone();
    let command = begin(&mut next, action)?;
    let outcome = execute(client, command).await;
    apply(&mut next, outcome);
    Ok(next)
}

pub async fn request_consent(
    client: &ChatApiClient,
    state: &ChatState,
) -> Result<ChatState, ActionError> {
    perform(client, state, Action::Consent).await
}

pub async fn upload_file(
    client: &ChatApiClient,
    state: &ChatState,
    path: impl Into<PathBuf>,
) -> Result<ChatState, ActionError> {
    perform(client, state, Action::Upload { path: path.into() }).await
}

pub async fn send_message(
    client: &ChatApiClient,
    state: &ChatState,
    text: impl Into<String>,
) -> Result<ChatState, ActionError> {
    perform(client, state, Action::Send { text: text.into() }).await
}

pub async fn reset_conversation(
    client: &ChatApiClient,
    state: &ChatState,
) -> Result<ChatState, ActionError> {
    perform(client, state, Action::Reset).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NoticeLevel;
    use mockito::{Matcher, Server, ServerGuard};
    use serde_json::json;
    use tempfile::tempdir;

    async fn consent_mock(server: &mut ServerGuard) -> mockito::Mock {
        server
            .mock("POST", "/consent")
            .with_status(200)
            .with_body(r#"{"session_id": "s-1"}"#)
            .create_async()
            .await
    }

    async fn connected(client: &ChatApiClient) -> ChatState {
        request_consent(client, &ChatState::new()).await.unwrap()
    }

    #[test]
    fn test_upload_name_takes_last_component() {
        assert_eq!(upload_name(Path::new("/tmp/dir/report.pdf")).unwrap(), "report.pdf");
        assert!(matches!(
            upload_name(Path::new("/")),
            Err(ActionError::InvalidPath(_))
        ));
    }

    #[tokio::test]
    async fn test_consent_failure_surfaces_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/consent")
            .with_status(503)
            .with_body("maintenance")
            .create_async()
            .await;

        let client = ChatApiClient::new(server.url());
        let state = request_consent(&client, &ChatState::new()).await.unwrap();

        mock.assert_async().await;
        assert!(state.needs_consent());
        assert!(state.notice().unwrap().text.contains("maintenance"));
    }

    #[tokio::test]
    async fn test_send_without_session_makes_no_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/send")
            .expect(0)
            .create_async()
            .await;

        let client = ChatApiClient::new(server.url());
        let state = ChatState::new();
        let result = send_message(&client, &state, "hello").await;

        mock.assert_async().await;
        assert_eq!(result.unwrap_err(), ActionError::NoSession);
        assert!(state.messages().is_empty());
    }

    #[tokio::test]
    async fn test_send_carries_attached_file_ids() {
        let mut server = Server::new_async().await;
        let _consent = consent_mock(&mut server).await;
        let upload = server
            .mock("POST", "/files")
            .with_status(200)
            .with_body(r#"{"file_id": "f-7", "filename": "a.txt", "mime": "text/plain", "size": 3}"#)
            .create_async()
            .await;
        let send = server
            .mock("POST", "/chat/send")
            .match_body(Matcher::Json(json!({
                "session_id": "s-1",
                "message": "summarize",
                "file_ids": ["f-7"],
            })))
            .with_status(200)
            .with_body(r#"{"assistant": "done", "events": []}"#)
            .create_async()
            .await;

        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "abc").expect("Failed to create test file");

        let client = ChatApiClient::new(server.url());
        let state = connected(&client).await;
        let state = upload_file(&client, &state, &path).await.unwrap();
        let state = send_message(&client, &state, "summarize").await.unwrap();

        upload.assert_async().await;
        send.assert_async().await;
        assert_eq!(state.file_names(), vec!["a.txt"]);
        assert_eq!(state.messages().len(), 2);
        assert_eq!(state.messages()[1].content, "done");
    }

    #[tokio::test]
    async fn test_duplicate_upload_makes_no_request() {
        let mut server = Server::new_async().await;
        let _consent = consent_mock(&mut server).await;
        let upload = server
            .mock("POST", "/files")
            .with_status(200)
            .with_body(r#"{"file_id": "f-1", "filename": "a.txt", "mime": null, "size": 3}"#)
            .expect(1)
            .create_async()
            .await;

        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "abc").expect("Failed to create test file");

        let client = ChatApiClient::new(server.url());
        let state = connected(&client).await;
        let state = upload_file(&client, &state, &path).await.unwrap();
        let again = upload_file(&client, &state, &path).await;

        upload.assert_async().await;
        assert_eq!(again.unwrap_err(), ActionError::DuplicateFile("a.txt".to_string()));
        assert_eq!(state.files().len(), 1);
    }

    #[tokio::test]
    async fn test_upload_of_unreadable_file_leaves_lists() {
        let mut server = Server::new_async().await;
        let _consent = consent_mock(&mut server).await;
        let upload = server.mock("POST", "/files").expect(0).create_async().await;

        let client = ChatApiClient::new(server.url());
        let state = connected(&client).await;
        let state = upload_file(&client, &state, "/nonexistent/path/12345.txt")
            .await
            .unwrap();

        upload.assert_async().await;
        assert!(state.files().is_empty());
        assert_eq!(state.notice().unwrap().level, NoticeLevel::Error);
        assert!(!state.is_busy());
    }

    #[tokio::test]
    async fn test_send_forbidden_drops_session() {
        let mut server = Server::new_async().await;
        let _consent = consent_mock(&mut server).await;
        let _send = server
            .mock("POST", "/chat/send")
            .with_status(403)
            .create_async()
            .await;

        let client = ChatApiClient::new(server.url());
        let state = connected(&client).await;
        let state = send_message(&client, &state, "hello").await.unwrap();

        assert!(state.session_id().is_none());
        assert!(state.needs_consent());
        // Input is disabled again until re-consent
        assert_eq!(
            send_message(&client, &state, "again").await.unwrap_err(),
            ActionError::NoSession
        );
    }

    #[tokio::test]
    async fn test_send_server_error_shows_inline() {
        let mut server = Server::new_async().await;
        let _consent = consent_mock(&mut server).await;
        let _send = server
            .mock("POST", "/chat/send")
            .with_status(500)
            .with_body("agent crashed")
            .create_async()
            .await;

        let client = ChatApiClient::new(server.url());
        let state = connected(&client).await;
        let state = send_message(&client, &state, "hello").await.unwrap();

        assert_eq!(state.session_id(), Some("s-1"));
        assert_eq!(state.messages().len(), 1);
        assert!(state.notice().unwrap().text.contains("agent crashed"));
    }

    #[tokio::test]
    async fn test_reset_clears_even_if_server_unreachable() {
        let mut server = Server::new_async().await;
        let _consent = consent_mock(&mut server).await;
        let _send = server
            .mock("POST", "/chat/send")
            .with_status(200)
            .with_body(r#"{"assistant": "ok", "events": []}"#)
            .create_async()
            .await;

        let client = ChatApiClient::new(server.url());
        let state = connected(&client).await;
        let state = send_message(&client, &state, "hello").await.unwrap();
        assert_eq!(state.messages().len(), 2);

        let unreachable = ChatApiClient::new("http://127.0.0.1:9");
        let state = reset_conversation(&unreachable, &state).await.unwrap();

        assert!(state.messages().is_empty());
        assert!(state.files().is_empty());
        assert_eq!(state.notice().unwrap().level, NoticeLevel::Error);
    }

    #[tokio::test]
    async fn test_perform_leaves_input_state_untouched() {
        let mut server = Server::new_async().await;
        let _consent = consent_mock(&mut server).await;

        let client = ChatApiClient::new(server.url());
        let before = ChatState::new();
        let after = request_consent(&client, &before).await.unwrap();

        assert!(before.needs_consent());
        assert!(!after.needs_consent());
    }
}
