//! Console-wide settings.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_TOAST_TTL_MS: u32 = 3_500;
pub const DEFAULT_USERS_PAGE_SIZE: u32 = 50;
pub const DEFAULT_ERROR_LOG_LIMIT: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Prefix joined in front of every endpoint path.
    pub api_base: String,
    pub toast_ttl_ms: u32,
    pub users_page_size: u32,
    pub error_log_limit: u32,
    /// `None` waits indefinitely; the backend is normally co-located.
    pub request_timeout_ms: Option<u32>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            toast_ttl_ms: DEFAULT_TOAST_TTL_MS,
            users_page_size: DEFAULT_USERS_PAGE_SIZE,
            error_log_limit: DEFAULT_ERROR_LOG_LIMIT,
            request_timeout_ms: None,
        }
    }
}

impl ConsoleConfig {
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: Option<u32>) -> Self {
        self.request_timeout_ms = timeout_ms;
        self
    }
}
