//! Errors for the typed API calls.
//!
//! `auth_fetch` hands back the network primitive's own error and `get_me`
//! never fails, so only the user listing/registration helpers use this.

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("username already taken")]
    UsernameTaken,
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}
