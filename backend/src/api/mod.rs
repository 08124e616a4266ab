//! API module
//!
//! Contains HTTP request handlers for the mock chat endpoints

pub mod chat;
pub mod consent;
pub mod files;

use crate::config::MockConfig;
use std::sync::Arc;

/// Shared, read-only handler state
pub type SharedConfig = Arc<MockConfig>;
