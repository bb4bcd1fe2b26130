//! Configuration options for the Hidden Haul client

use std::time::Duration;

/// Default API base address when no override is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Environment variable consulted at process start for the API base address
pub const ENV_BASE_URL: &str = "HIDDENHAUL_API_URL";

/// Configuration options for the Hidden Haul client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// The API base address, including the `/api` prefix
    pub base_url: String,

    /// The overall request timeout
    pub request_timeout: Option<Duration>,

    /// Whether to persist the session to durable local storage
    pub persist_session: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Some(Duration::from_secs(10)),
            persist_session: true,
        }
    }
}

impl ClientOptions {
    /// Build options from the environment, falling back to defaults
    ///
    /// Reads the base address override from `HIDDENHAUL_API_URL`.
    pub fn from_env() -> Self {
        let mut options = Self::default();
        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            if !url.is_empty() {
                options.base_url = url.trim_end_matches('/').to_string();
            }
        }
        options
    }

    /// Set the API base address
    pub fn with_base_url(mut self, value: &str) -> Self {
        self.base_url = value.trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set whether to persist the session
    pub fn with_persist_session(mut self, value: bool) -> Self {
        self.persist_session = value;
        self
    }
}
