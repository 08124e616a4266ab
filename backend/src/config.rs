//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;
use std::time::Duration;

/// Default port the mock backend listens on (the client's default base URL points here)
pub const DEFAULT_PORT: u16 = 5177;

/// Default artificial latency for `/chat/send`, in milliseconds
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;

/// Default cap on a `/files` request body (100 MiB)
pub const DEFAULT_UPLOAD_LIMIT_BYTES: usize = 100 * 1024 * 1024;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Canned-response configuration
    pub mock: MockConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Behaviour of the fabricated responses
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// How long `/chat/send` waits before answering
    pub reply_delay: Duration,
    /// Largest request body `/files` accepts, replacing axum's 2 MB default
    pub upload_limit_bytes: usize,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(DEFAULT_REPLY_DELAY_MS),
            upload_limit_bytes: DEFAULT_UPLOAD_LIMIT_BYTES,
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(DEFAULT_PORT),
                host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            },
            mock: MockConfig {
                reply_delay: Duration::from_millis(
                    env::var("MOCK_REPLY_DELAY_MS")
                        .ok()
                        .and_then(|d| d.parse().ok())
                        .unwrap_or(DEFAULT_REPLY_DELAY_MS),
                ),
                upload_limit_bytes: env::var("MOCK_UPLOAD_LIMIT_BYTES")
                    .ok()
                    .and_then(|l| l.parse().ok())
                    .unwrap_or(DEFAULT_UPLOAD_LIMIT_BYTES),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
