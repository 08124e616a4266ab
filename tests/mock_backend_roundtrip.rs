//! Client actions against the real mock backend
//!
//! Serves the backend router on an ephemeral port and drives the full
//! consent, upload, send, reset flow through the client.

use chat_client_gui::actions::{
    request_consent, reset_conversation, send_message, upload_file,
};
use chat_client_gui::api::ChatApiClient;
use chat_client_gui::state::{ChatState, MessageRole};
use mock_chat_backend::models::{MOCK_FILE_ID, MOCK_SESSION_ID};
use mock_chat_backend::{serve, MockConfig};
use std::time::{Duration, Instant};
use tempfile::tempdir;

async fn spawn_backend(reply_delay: Duration) -> ChatApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        let mock = MockConfig {
            reply_delay,
            ..MockConfig::default()
        };
        serve(listener, mock, std::future::pending::<()>())
            .await
            .expect("Server failed");
    });

    ChatApiClient::new(format!("http://{}", addr))
}

#[tokio::test]
async fn test_full_conversation_against_mock() {
    let client = spawn_backend(Duration::from_millis(50)).await;

    let state = request_consent(&client, &ChatState::new()).await.unwrap();
    assert_eq!(state.session_id(), Some(MOCK_SESSION_ID));

    let dir = tempdir().expect("Failed to create temp dir");
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.md");
    std::fs::write(&first, "one").expect("Failed to create test file");
    std::fs::write(&second, "# two").expect("Failed to create test file");

    let state = upload_file(&client, &state, &first).await.unwrap();
    let state = upload_file(&client, &state, &second).await.unwrap();
    assert_eq!(state.file_names(), vec!["first.txt", "second.md"]);
    assert!(state.file_ids().iter().all(|id| id == MOCK_FILE_ID));

    let start = Instant::now();
    let state = send_message(&client, &state, "hello").await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(50));

    let messages = state.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, MessageRole::User);
    assert_eq!(messages[1].role, MessageRole::Assistant);
    assert!(messages[1].content.contains("hello"));

    let state = reset_conversation(&client, &state).await.unwrap();
    assert!(state.messages().is_empty());
    assert!(state.files().is_empty());
    assert_eq!(state.session_id(), Some(MOCK_SESSION_ID));
}

#[tokio::test]
async fn test_reupload_same_name_is_noop_against_mock() {
    let client = spawn_backend(Duration::ZERO).await;
    let state = request_consent(&client, &ChatState::new()).await.unwrap();

    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("data.csv");
    std::fs::write(&path, "a,b").expect("Failed to create test file");

    let state = upload_file(&client, &state, &path).await.unwrap();
    assert!(upload_file(&client, &state, &path).await.is_err());
    assert_eq!(state.files().len(), 1);
}
