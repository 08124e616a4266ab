// State management module
// Handles the session, transcript and attached-file bookkeeping

pub mod app_state;

pub use app_state::{
    ActionError, Busy, ChatMessage, ChatState, FileRef, MessageRole, Notice, NoticeLevel,
};
