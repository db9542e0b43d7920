//! # Browser `sessionStorage` backend
//!
//! Session-scoped persistence on the web: the keys live for the lifetime of
//! the tab and are gone when it closes, which is exactly the session model
//! the application wants. Storage that is unavailable (disabled, sandboxed
//! iframe) behaves as empty rather than failing.

use crate::session::SessionBackend;

/// `sessionStorage`-backed SessionBackend for the web.
#[derive(Clone, Debug, Default)]
pub struct WebBackend;

impl WebBackend {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok().flatten()
    }
}

impl SessionBackend for WebBackend {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
