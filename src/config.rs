//! Fixed client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client talks to a single local service. There is no environment
//! override in this layer; embedding code that needs another address builds
//! its own `ClientConfig`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Address of the local feed service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// `localStorage` key holding the raw bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Identity of the caller associated with the supplied token.
pub const WHOAMI_PATH: &str = "/whoami";

/// User listing and registration.
pub const USERS_PATH: &str = "/users";

/// Where the client sends requests and keeps its token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub token_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            token_key: TOKEN_STORAGE_KEY.to_owned(),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Join `path` onto the base URL with exactly one `/` between them.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
