//! Authenticated REST calls against the feed service.
//!
//! ERROR HANDLING
//! ==============
//! `auth_fetch` does not catch anything: the primitive's error reaches the
//! caller unchanged. `get_me` is a best-effort identity check and folds every
//! failure into `CurrentUser::Absent`. The user listing helpers report
//! failures as `ApiError`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::fetch::{AuthRequest, BrowserFetch, Fetch, FetchResponse, Method, RequestOptions};
use super::types::{CurrentUser, NewUser, User};
use crate::config::{ClientConfig, USERS_PATH, WHOAMI_PATH};
use crate::error::ApiError;
use crate::state::token::{self, LocalStorageTokenStore, TokenStore};

/// HTTP client that attaches the stored bearer token to every request.
#[derive(Debug)]
pub struct ApiClient<S, F> {
    config: ClientConfig,
    tokens: S,
    fetch: F,
}

impl ApiClient<LocalStorageTokenStore, BrowserFetch> {
    /// Client backed by `localStorage` and the browser `fetch`.
    pub fn browser() -> Self {
        let config = ClientConfig::default();
        let tokens = LocalStorageTokenStore::new(config.token_key.clone());
        Self::new(config, tokens, BrowserFetch)
    }
}

impl<S: TokenStore, F: Fetch> ApiClient<S, F> {
    pub fn new(config: ClientConfig, tokens: S, fetch: F) -> Self {
        Self { config, tokens, fetch }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    /// Store a token obtained from a login; empty tokens are ignored.
    pub fn sign_in(&self, token: Option<&str>) {
        token::set_token(&self.tokens, token);
    }

    pub fn sign_out(&self) {
        token::clear_token(&self.tokens);
    }

    /// Send `options` to `url` with the JSON content type and, when a token
    /// is stored, the bearer header.
    ///
    /// # Errors
    ///
    /// Returns the network primitive's error unchanged.
    pub async fn auth_fetch(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<F::Response, F::Error> {
        let token = token::get_token(&self.tokens);
        let request = AuthRequest::prepare(url, options, token.as_deref());
        log::debug!("{} {}", request.method, request.url);
        self.fetch.fetch(request).await
    }

    /// Resolve the signed-in user from `/whoami`.
    ///
    /// Any failure (transport, non-success status, unreadable or non-JSON
    /// body) yields `Absent`.
    pub async fn get_me(&self) -> CurrentUser {
        let url = self.config.endpoint(WHOAMI_PATH);
        let resp = match self.auth_fetch(&url, RequestOptions::new()).await {
            Ok(resp) => resp,
            Err(e) => {
                log::debug!("whoami: request failed: {e}");
                return CurrentUser::Absent;
            }
        };
        if !resp.ok() {
            log::debug!("whoami: status {}", resp.status());
            return CurrentUser::Absent;
        }
        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                log::debug!("whoami: body read failed: {e}");
                return CurrentUser::Absent;
            }
        };
        match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(serde_json::Value::Null) => CurrentUser::Absent,
            Ok(user) => CurrentUser::Found(user),
            Err(e) => {
                log::debug!("whoami: invalid JSON: {e}");
                CurrentUser::Absent
            }
        }
    }

    /// List all registered users, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-success status, or an
    /// undecodable body.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let url = self.config.endpoint(USERS_PATH);
        let resp = self
            .auth_fetch(&url, RequestOptions::new())
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(resp).await
    }

    /// Register `username` (trimmed) and return the created user.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::UsernameTaken` on `409`, otherwise the same
    /// failures as `list_users`.
    pub async fn create_user(&self, username: &str) -> Result<User, ApiError> {
        let url = self.config.endpoint(USERS_PATH);
        let options = RequestOptions::new()
            .method(Method::Post)
            .json(&NewUser::new(username))?;
        let resp = self
            .auth_fetch(&url, options)
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if resp.status() == 409 {
            return Err(ApiError::UsernameTaken);
        }
        read_json(resp).await
    }
}

async fn read_json<R: FetchResponse, T: DeserializeOwned>(resp: R) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    Ok(serde_json::from_str(&body)?)
}
