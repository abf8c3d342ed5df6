//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by user-aware components to choose between the signed-in and
//! anonymous views once `/whoami` has been resolved.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::CurrentUser;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<serde_json::Value>,
    pub loading: bool,
}

impl Default for AuthState {
    /// Nothing is known until the first `/whoami` lookup completes.
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// State after a `/whoami` lookup.
    pub fn resolved(current: CurrentUser) -> Self {
        Self { user: current.into_option(), loading: false }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the anonymous view should be shown.
    pub fn is_anonymous(&self) -> bool {
        !self.loading && self.user.is_none()
    }

    /// `username` field of the resolved user, when it is a string.
    pub fn username(&self) -> Option<&str> {
        self.user.as_ref()?.get("username")?.as_str()
    }
}
