//! # feed-client
//!
//! Leptos + WASM helper layer for the feed web client.
//!
//! This crate stores the session token, wraps the network fetch primitive so
//! every request carries it, resolves the current user from `/whoami`, and
//! renders a single feed post.
//!
//! Browser-only code lives behind the `hydrate` feature. Native builds expose
//! the same API with inert browser paths so the request and rendering logic
//! can be exercised by plain unit tests.

pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod state;
pub mod util;

pub use config::ClientConfig;
pub use error::ApiError;
pub use net::api::ApiClient;
pub use net::types::{CurrentUser, Post, User};
pub use state::token::{LocalStorageTokenStore, MemoryTokenStore, TokenStore};

/// Browser entry point: installs the panic hook and the console logger.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
    // A repeated init keeps the logger already installed.
    console_log::init_with_level(log::Level::Debug).ok();
}
