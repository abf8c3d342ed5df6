//! Session token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only shared mutable state on the client: written once
//! after login, read by every authenticated request, removed on logout.
//! Storage is reached through the small `TokenStore` capability so request
//! code can be driven against an in-memory double.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures are ignored. A store that cannot be read behaves as if
//! no token were present.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use std::cell::RefCell;

/// Raw get/set/clear access to the persisted token slot.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, value: &str);
    fn clear(&self);
}

/// Read the persisted token, if any.
pub fn get_token<S: TokenStore + ?Sized>(store: &S) -> Option<String> {
    store.get()
}

/// Persist `value` unless it is absent or empty.
///
/// An empty value must not overwrite an existing session, so it is a no-op
/// rather than a clear.
pub fn set_token<S: TokenStore + ?Sized>(store: &S, value: Option<&str>) {
    match value {
        Some(token) if !token.is_empty() => store.set(token),
        _ => log::debug!("token: ignoring empty token"),
    }
}

/// Remove the persisted token unconditionally.
pub fn clear_token<S: TokenStore + ?Sized>(store: &S) {
    store.clear();
}

/// In-memory token slot for tests and non-browser callers.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self { slot: RefCell::new(Some(token.into())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn set(&self, value: &str) {
        *self.slot.borrow_mut() = Some(value.to_owned());
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

/// Token slot backed by the browser's `localStorage`.
///
/// Outside the browser this is an always-empty store.
#[derive(Clone, Debug)]
pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Default for LocalStorageTokenStore {
    fn default() -> Self {
        Self::new(crate::config::TOKEN_STORAGE_KEY)
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(&self.key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(&self.key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(&self.key);
            }
        }
    }
}
