//! Client configuration
//!
//! Environment variable support with defaults that match the mock backend.

use std::env;

/// Where the mock backend listens by default
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5177";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the chat API, without a trailing slash
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let base_url = env::var("CHAT_API_BASE_URL")
            .ok()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_default_base_url() {
        env::remove_var("CHAT_API_BASE_URL");
        assert_eq!(ClientConfig::from_env().base_url, DEFAULT_BASE_URL);
    }

    #[test]
    #[serial]
    fn test_base_url_override_trims_slash() {
        env::set_var("CHAT_API_BASE_URL", "http://10.0.0.5:8000/");
        assert_eq!(ClientConfig::from_env().base_url, "http://10.0.0.5:8000");
        env::remove_var("CHAT_API_BASE_URL");
    }

    #[test]
    #[serial]
    fn test_blank_base_url_falls_back() {
        env::set_var("CHAT_API_BASE_URL", "   ");
        assert_eq!(ClientConfig::from_env().base_url, DEFAULT_BASE_URL);
        env::remove_var("CHAT_API_BASE_URL");
    }
}
