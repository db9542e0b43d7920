use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::SessionBackend;

/// In-memory SessionBackend for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Grupo, UsuarioInfo};
    use crate::session::{Session, SessionStore, LOGIN_FLAG_KEY};

    fn store() -> SessionStore<MemoryBackend> {
        SessionStore::new(MemoryBackend::new())
    }

    #[test]
    fn test_save_and_load_session() {
        let store = store();

        // Initially unauthenticated
        assert!(!store.load().is_authenticated());

        let session = Session::authenticated(UsuarioInfo {
            usuario: "joao".to_string(),
            grupo: Grupo::AtendimentoBalcao,
        });
        store.save(&session);

        let loaded = store.load();
        assert!(loaded.is_authenticated());
        assert_eq!(loaded.usuario_info().unwrap().usuario, "joao");
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let store = store();
        store.save(&Session::authenticated(UsuarioInfo {
            usuario: "ana".to_string(),
            grupo: Grupo::Admin,
        }));

        store.clear();
        assert!(!store.load().is_authenticated());
    }

    #[test]
    fn test_saving_unauthenticated_clears() {
        let store = store();
        store.save(&Session::authenticated(UsuarioInfo {
            usuario: "ana".to_string(),
            grupo: Grupo::Admin,
        }));

        store.save(&Session::unauthenticated());
        assert!(!store.load().is_authenticated());
    }

    #[test]
    fn test_corrupt_profile_loads_unauthenticated() {
        let backend = MemoryBackend::new();
        backend.set(LOGIN_FLAG_KEY, "true");
        backend.set(crate::session::USER_INFO_KEY, "not json");

        let store = SessionStore::new(backend);
        assert!(!store.load().is_authenticated());
    }
}
