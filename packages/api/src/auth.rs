//! Login against the proxy/BFF.

use serde_json::json;
use store::UsuarioInfo;

use crate::client::{expect_ok, http, url};
use crate::error::ApiError;

/// POST `auth/login` with the typed credentials. A 2xx response is the
/// profile; a non-2xx response surfaces the backend's `erro` message through
/// [`ApiError::Server`]. There is no retry.
pub async fn login(usuario: &str, senha: &str) -> Result<UsuarioInfo, ApiError> {
    let response = http()
        .post(url("auth/login"))
        .json(&json!({ "usuario": usuario, "senha": senha }))
        .send()
        .await?;
    let response = expect_ok(response).await?;
    response
        .json::<UsuarioInfo>()
        .await
        .map_err(|_| ApiError::Decode)
}
