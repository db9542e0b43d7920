//! Error taxonomy for backend calls.
//!
//! Three kinds reach callers: transport failures ([`ApiError::Network`]),
//! non-2xx responses ([`ApiError::Server`], keeping any `erro` message the
//! body carried), and business-rule rejections the backend reports inside a
//! 2xx body ([`ApiError::Business`]). Field validation never reaches this
//! layer — it is resolved client-side before a request is made.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (DNS, refused connection, aborted).
    #[error("falha de comunicação: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("erro do servidor (status {status})")]
    Server {
        status: u16,
        /// `erro` message from the response body, when one was present.
        message: Option<String>,
    },

    /// 2xx response whose body carried an `erro` field (e.g. duplicate CPF
    /// rejected at the database layer).
    #[error("{0}")]
    Business(String),

    /// 2xx response whose body matched neither success nor error shape.
    #[error("resposta inesperada do servidor")]
    Decode,
}

impl ApiError {
    /// The message the backend attached to this failure, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => message.as_deref(),
            ApiError::Business(message) => Some(message),
            _ => None,
        }
    }

    /// Text fit for a toast: the backend's message when present, otherwise a
    /// generic fallback per kind.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Erro de comunicação com o servidor".to_string(),
            ApiError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Server { .. } => "Erro no servidor".to_string(),
            ApiError::Business(message) => message.clone(),
            ApiError::Decode => "Resposta inesperada do servidor".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_server_text() {
        let err = ApiError::Server {
            status: 400,
            message: Some("CPF já cadastrado".to_string()),
        };
        assert_eq!(err.user_message(), "CPF já cadastrado");
        assert_eq!(err.server_message(), Some("CPF já cadastrado"));
    }

    #[test]
    fn user_message_falls_back_per_kind() {
        let err = ApiError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message(), "Erro no servidor");
        assert_eq!(ApiError::Decode.user_message(), "Resposta inesperada do servidor");
    }
}
