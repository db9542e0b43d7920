//! # Session state and persistence
//!
//! The authenticated-user state of the application, persisted across page
//! reloads. Two keys are stored:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`LOGIN_FLAG_KEY`] (`loginRealizado`) | the literal string `"true"` |
//! | [`USER_INFO_KEY`] (`usuarioInfo`) | the JSON-serialized [`UsuarioInfo`] |
//!
//! [`Session`] owns the in-memory state. The invariant is structural:
//! the session is authenticated if and only if a profile is present — there
//! is no independently stored boolean to drift out of sync.
//!
//! Conversion to and from the persisted key pair is a pure function pair
//! ([`Session::serialize`] / [`Session::deserialize`]); backends only move
//! strings. A half-written or corrupt pair deserializes to the
//! unauthenticated session rather than erroring.

use crate::models::UsuarioInfo;

/// Storage key for the login flag.
pub const LOGIN_FLAG_KEY: &str = "loginRealizado";

/// Storage key for the serialized user profile.
pub const USER_INFO_KEY: &str = "usuarioInfo";

/// Authenticated-user state for one tab.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    usuario_info: Option<UsuarioInfo>,
}

impl Session {
    /// The session of a user that has not logged in.
    pub fn unauthenticated() -> Self {
        Self::default()
    }

    /// The session of a user that just logged in with `info`.
    pub fn authenticated(info: UsuarioInfo) -> Self {
        Self {
            usuario_info: Some(info),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.usuario_info.is_some()
    }

    pub fn usuario_info(&self) -> Option<&UsuarioInfo> {
        self.usuario_info.as_ref()
    }

    /// Pure conversion to the persisted pair: `Some((flag, profile_json))`
    /// when authenticated, `None` when there is nothing to persist.
    pub fn serialize(&self) -> Option<(String, String)> {
        let info = self.usuario_info.as_ref()?;
        let json = serde_json::to_string(info).ok()?;
        Some(("true".to_string(), json))
    }

    /// Pure conversion from the persisted pair. Authenticated only when the
    /// flag is exactly `"true"` and the profile parses; everything else is
    /// the unauthenticated session.
    pub fn deserialize(flag: Option<&str>, info: Option<&str>) -> Self {
        if flag != Some("true") {
            return Self::unauthenticated();
        }
        let parsed = info.and_then(|raw| serde_json::from_str::<UsuarioInfo>(raw).ok());
        Self {
            usuario_info: parsed,
        }
    }
}

/// Key-value persistence behind the session. Implementations must not fail
/// loudly: a storage that is unavailable behaves as empty.
pub trait SessionBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// [`Session`] persistence over any [`SessionBackend`].
///
/// All storage-key knowledge lives here; callers only see whole sessions.
#[derive(Clone, Debug)]
pub struct SessionStore<B> {
    backend: B,
}

impl<B: SessionBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read the persisted session, falling back to unauthenticated.
    pub fn load(&self) -> Session {
        let flag = self.backend.get(LOGIN_FLAG_KEY);
        let info = self.backend.get(USER_INFO_KEY);
        Session::deserialize(flag.as_deref(), info.as_deref())
    }

    /// Persist `session`. An unauthenticated session clears the keys.
    pub fn save(&self, session: &Session) {
        match session.serialize() {
            Some((flag, info)) => {
                self.backend.set(LOGIN_FLAG_KEY, &flag);
                self.backend.set(USER_INFO_KEY, &info);
            }
            None => self.clear(),
        }
    }

    /// Remove both keys. Unconditional, cannot fail.
    pub fn clear(&self) {
        self.backend.remove(LOGIN_FLAG_KEY);
        self.backend.remove(USER_INFO_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Grupo;

    fn profile() -> UsuarioInfo {
        UsuarioInfo {
            usuario: "admin".to_string(),
            grupo: Grupo::Admin,
        }
    }

    #[test]
    fn authenticated_iff_profile_present() {
        assert!(!Session::unauthenticated().is_authenticated());
        let session = Session::authenticated(profile());
        assert!(session.is_authenticated());
        assert_eq!(session.usuario_info().unwrap().usuario, "admin");
    }

    #[test]
    fn serialize_deserialize_roundtrip() {
        let session = Session::authenticated(profile());
        let (flag, info) = session.serialize().unwrap();
        assert_eq!(flag, "true");
        let back = Session::deserialize(Some(&flag), Some(&info));
        assert_eq!(back, session);
    }

    #[test]
    fn unauthenticated_serializes_to_nothing() {
        assert!(Session::unauthenticated().serialize().is_none());
    }

    #[test]
    fn deserialize_rejects_bad_pairs() {
        let (_, info) = Session::authenticated(profile()).serialize().unwrap();

        // Flag missing or wrong: profile alone does not authenticate.
        assert!(!Session::deserialize(None, Some(&info)).is_authenticated());
        assert!(!Session::deserialize(Some("yes"), Some(&info)).is_authenticated());

        // Flag without a parseable profile.
        assert!(!Session::deserialize(Some("true"), None).is_authenticated());
        assert!(!Session::deserialize(Some("true"), Some("{broken")).is_authenticated());
    }
}
