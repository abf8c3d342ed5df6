//! Wire DTOs for the client/server boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A registered user as listed by `GET /users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// Body of `POST /users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub username: String,
}

impl NewUser {
    /// Build a registration payload; surrounding whitespace is dropped.
    pub fn new(username: &str) -> Self {
        Self { username: username.trim().to_owned() }
    }
}

/// A single feed entry, as supplied by the feed listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub user_id: i64,
    pub username: String,
    /// Any `Date`-parseable timestamp, usually RFC 3339.
    pub created_at: String,
    #[serde(default)]
    pub contents: Option<String>,
}

/// Outcome of the `/whoami` lookup.
///
/// `Absent` covers both "not signed in" and "lookup failed"; callers only
/// use this to gate UI state.
#[derive(Clone, Debug, PartialEq)]
pub enum CurrentUser {
    /// Parsed response body, passed through without shape validation.
    Found(serde_json::Value),
    Absent,
}

impl CurrentUser {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn into_option(self) -> Option<serde_json::Value> {
        match self {
            Self::Found(user) => Some(user),
            Self::Absent => None,
        }
    }
}
