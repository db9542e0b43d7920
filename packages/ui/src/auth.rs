//! Authentication context and session transitions for the UI.
//!
//! The session state machine has two states — unauthenticated and
//! authenticated with a profile — and exactly two transitions, [`login`] and
//! [`logout`]. Both mutate the shared context signal and the persisted
//! session together; views own the side effects around them (toast,
//! navigation), so this module stays free of router types.

use api::ApiError;
use dioxus::prelude::*;
use store::{Session, UsuarioInfo};

use crate::storage::make_session_store;

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub usuario_info: Option<UsuarioInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.usuario_info.is_some()
    }

    fn from_session(session: &Session) -> Self {
        Self {
            usuario_info: session.usuario_info().cloned(),
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
///
/// The initial state is read synchronously from the persisted session, so a
/// reload inside an authenticated tab stays authenticated.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(|| AuthState::from_session(&make_session_store().load()));

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Attempt a login. On success the context and the persisted session are
/// updated together and the profile is returned; on failure both are left
/// untouched and the message to show the user is returned. No retry.
pub async fn login(
    mut auth: Signal<AuthState>,
    usuario: &str,
    senha: &str,
) -> Result<UsuarioInfo, String> {
    match api::auth::login(usuario, senha).await {
        Ok(info) => {
            let session = Session::authenticated(info.clone());
            make_session_store().save(&session);
            auth.set(AuthState::from_session(&session));
            Ok(info)
        }
        Err(err) => {
            tracing::warn!("login falhou: {err}");
            Err(login_error_message(&err))
        }
    }
}

/// End the session: clear the context and the persisted keys. Unconditional,
/// no network call, cannot fail.
pub fn logout(mut auth: Signal<AuthState>) {
    make_session_store().clear();
    auth.set(AuthState::default());
}

fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Server { .. } | ApiError::Business(_) => err
            .server_message()
            .map(str::to_string)
            .unwrap_or_else(|| "Usuário ou senha inválidos".to_string()),
        _ => "Erro ao tentar realizar login".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Grupo;

    #[test]
    fn state_follows_session() {
        assert!(!AuthState::from_session(&Session::unauthenticated()).is_authenticated());

        let session = Session::authenticated(UsuarioInfo {
            usuario: "admin".to_string(),
            grupo: Grupo::Admin,
        });
        let state = AuthState::from_session(&session);
        assert!(state.is_authenticated());
        assert_eq!(state.usuario_info.unwrap().usuario, "admin");
    }

    #[test]
    fn login_failure_messages() {
        let rejected = ApiError::Server {
            status: 401,
            message: Some("Usuário local inválido".to_string()),
        };
        assert_eq!(login_error_message(&rejected), "Usuário local inválido");

        let anonymous = ApiError::Server {
            status: 401,
            message: None,
        };
        assert_eq!(login_error_message(&anonymous), "Usuário ou senha inválidos");

        assert_eq!(
            login_error_message(&ApiError::Decode),
            "Erro ao tentar realizar login"
        );
    }
}
