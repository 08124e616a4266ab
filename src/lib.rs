//! Chat Client Library
//!
//! State, HTTP client and action plumbing behind the chat GUI.
//! The egui front-end lives in `src/main.rs` and `src/ui/`.

pub mod actions;
pub mod api;
pub mod config;
pub mod state;
