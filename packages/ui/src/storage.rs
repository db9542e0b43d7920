//! Shared session-store constructor for all platforms.
//!
//! Returns a [`store::SessionStore`] backed by the appropriate
//! [`store::SessionBackend`]:
//! - **Web** (WASM + `web` feature): tab-scoped `sessionStorage` via
//!   [`store::WebBackend`]
//! - **Native** (tests, tooling): filesystem via [`store::FileBackend`]

/// Create a platform-appropriate session store.
pub fn make_session_store() -> store::SessionStore<impl store::SessionBackend> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::SessionStore::new(store::WebBackend::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("comandas")
            .join("session");
        store::SessionStore::new(store::FileBackend::new(base))
    }
}
