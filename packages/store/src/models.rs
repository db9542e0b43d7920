//! # Persisted user profile
//!
//! The profile returned by `auth/login` and kept in the session store for the
//! lifetime of the tab. The front-end treats it as opaque beyond display:
//! `usuario` names the logged-in user, `grupo` is the access group the
//! backend assigned.
//!
//! [`Grupo`] is serialized as the bare integer the backend sends (`1`, `2`,
//! `3`); any other value is rejected at the deserialization boundary so an
//! invalid persisted profile falls back to an unauthenticated session.

use serde::{Deserialize, Serialize};

/// Access group of a logged-in user or funcionário.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Grupo {
    Admin,
    AtendimentoBalcao,
    AtendimentoCaixa,
}

impl Grupo {
    /// Label shown in selects and on the home page.
    pub fn label(&self) -> &'static str {
        match self {
            Grupo::Admin => "Admin",
            Grupo::AtendimentoBalcao => "Atendimento Balcão",
            Grupo::AtendimentoCaixa => "Atendimento Caixa",
        }
    }

    /// All groups, in backend order.
    pub fn all() -> [Grupo; 3] {
        [Grupo::Admin, Grupo::AtendimentoBalcao, Grupo::AtendimentoCaixa]
    }
}

impl TryFrom<u8> for Grupo {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Grupo::Admin),
            2 => Ok(Grupo::AtendimentoBalcao),
            3 => Ok(Grupo::AtendimentoCaixa),
            other => Err(format!("grupo inválido: {other}")),
        }
    }
}

impl From<Grupo> for u8 {
    fn from(value: Grupo) -> u8 {
        match value {
            Grupo::Admin => 1,
            Grupo::AtendimentoBalcao => 2,
            Grupo::AtendimentoCaixa => 3,
        }
    }
}

/// Profile of the authenticated user, exactly as the login endpoint returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsuarioInfo {
    pub usuario: String,
    pub grupo: Grupo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grupo_roundtrips_as_integer() {
        let json = serde_json::to_string(&Grupo::AtendimentoBalcao).unwrap();
        assert_eq!(json, "2");
        let back: Grupo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Grupo::AtendimentoBalcao);
    }

    #[test]
    fn grupo_rejects_out_of_range() {
        assert!(serde_json::from_str::<Grupo>("0").is_err());
        assert!(serde_json::from_str::<Grupo>("4").is_err());
    }

    #[test]
    fn usuario_info_wire_shape() {
        let info: UsuarioInfo =
            serde_json::from_str(r#"{"usuario":"maria","grupo":3}"#).unwrap();
        assert_eq!(info.usuario, "maria");
        assert_eq!(info.grupo, Grupo::AtendimentoCaixa);
        assert_eq!(info.grupo.label(), "Atendimento Caixa");
    }
}
