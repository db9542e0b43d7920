//! # Filesystem-backed session storage
//!
//! [`FileBackend`] persists session keys as one file per key under a base
//! directory. It backs the session on native targets, where no
//! `sessionStorage` exists, and keeps the web and native session code paths
//! identical above the backend trait.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── loginRealizado     # "true"
//! └── usuarioInfo        # JSON profile
//! ```

use std::path::PathBuf;

use crate::session::SessionBackend;

/// Filesystem-backed SessionBackend for native targets.
#[derive(Clone, Debug)]
pub struct FileBackend {
    base: PathBuf,
}

impl FileBackend {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl SessionBackend for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        let path = self.key_path(key);
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = std::fs::write(path, value);
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.key_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Grupo, UsuarioInfo};
    use crate::session::{Session, SessionStore};

    #[test]
    fn test_file_backend_roundtrip() {
        let dir = std::env::temp_dir().join(format!("comandas_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = SessionStore::new(FileBackend::new(dir.clone()));
        store.save(&Session::authenticated(UsuarioInfo {
            usuario: "carla".to_string(),
            grupo: Grupo::AtendimentoCaixa,
        }));

        // Re-open from the same directory
        let store2 = SessionStore::new(FileBackend::new(dir.clone()));
        let loaded = store2.load();
        assert!(loaded.is_authenticated());
        assert_eq!(loaded.usuario_info().unwrap().usuario, "carla");

        store2.clear();
        assert!(!SessionStore::new(FileBackend::new(dir.clone()))
            .load()
            .is_authenticated());

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }
}
