//! Shared HTTP plumbing: base URL, the one `reqwest::Client`, the generic
//! per-entity [`Resource`] contract, and the single place where the
//! backend's dual-channel response body is decoded into a `Result`.

use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/";

static BASE_URL: OnceLock<String> = OnceLock::new();

fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}

/// Override the backend base URL before the first request is made.
/// Later calls are ignored; tests use this to point at a local fixture.
pub fn set_base_url(url: &str) {
    let _ = BASE_URL.set(with_trailing_slash(url));
}

pub(crate) fn base_url() -> &'static str {
    BASE_URL.get_or_init(|| {
        with_trailing_slash(option_env!("COMANDAS_PROXY_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    })
}

pub(crate) fn url(path: &str) -> String {
    format!("{}{}", base_url(), path)
}

pub(crate) fn http() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}

/// Fail non-2xx responses, keeping the `erro` message when the body has one.
pub(crate) async fn expect_ok(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| erro_field(&body));
    tracing::warn!(status = status.as_u16(), ?message, "backend returned error status");
    Err(ApiError::Server {
        status: status.as_u16(),
        message,
    })
}

fn erro_field(body: &Value) -> Option<String> {
    body.get("erro").and_then(Value::as_str).map(str::to_string)
}

/// Decode a create/update response body. Success carries `{id}`; a 2xx body
/// with `{erro}` is a business failure; anything else is a decode failure.
pub(crate) fn decode_save(body: &Value) -> Result<i64, ApiError> {
    if let Some(id) = body.get("id").and_then(Value::as_i64) {
        return Ok(id);
    }
    if let Some(erro) = erro_field(body) {
        return Err(ApiError::Business(erro));
    }
    Err(ApiError::Decode)
}

/// Decode a delete acknowledgement: any 2xx body is fine unless it carries
/// `{erro}`.
pub(crate) fn decode_ack(body: &Value) -> Result<(), ApiError> {
    match erro_field(body) {
        Some(erro) => Err(ApiError::Business(erro)),
        None => Ok(()),
    }
}

/// The uniform CRUD wire contract, parameterized by resource path and the
/// name of its id query parameter. Update and delete send the id as a query
/// parameter, not in the path or body — that is the backend's contract.
pub(crate) struct Resource {
    path: &'static str,
    id_param: &'static str,
}

impl Resource {
    pub(crate) const fn new(path: &'static str, id_param: &'static str) -> Self {
        Self { path, id_param }
    }

    pub(crate) async fn list<T: DeserializeOwned>(&self) -> Result<Vec<T>, ApiError> {
        let response = http()
            .get(url(&format!("{}/all", self.path)))
            .send()
            .await?;
        let response = expect_ok(response).await?;
        response.json::<Vec<T>>().await.map_err(|_| ApiError::Decode)
    }

    /// GET `<path>/one?<id_param>=<id>`. The backend answers with an array;
    /// an empty array means the record does not exist.
    pub(crate) async fn get_by_id<T: DeserializeOwned>(
        &self,
        id: i64,
    ) -> Result<Option<T>, ApiError> {
        let response = http()
            .get(url(&format!("{}/one", self.path)))
            .query(&[(self.id_param, id)])
            .send()
            .await?;
        let response = expect_ok(response).await?;
        let matches = response
            .json::<Vec<T>>()
            .await
            .map_err(|_| ApiError::Decode)?;
        Ok(matches.into_iter().next())
    }

    pub(crate) async fn create<T: Serialize>(&self, entity: &T) -> Result<i64, ApiError> {
        let response = http()
            .post(url(&format!("{}/", self.path)))
            .json(entity)
            .send()
            .await?;
        let response = expect_ok(response).await?;
        let body = response.json::<Value>().await.map_err(|_| ApiError::Decode)?;
        decode_save(&body)
    }

    pub(crate) async fn update<T: Serialize>(&self, id: i64, entity: &T) -> Result<i64, ApiError> {
        let response = http()
            .put(url(&format!("{}/", self.path)))
            .query(&[(self.id_param, id)])
            .json(entity)
            .send()
            .await?;
        let response = expect_ok(response).await?;
        let body = response.json::<Value>().await.map_err(|_| ApiError::Decode)?;
        decode_save(&body)
    }

    pub(crate) async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let response = http()
            .delete(url(&format!("{}/", self.path)))
            .query(&[(self.id_param, id)])
            .send()
            .await?;
        let response = expect_ok(response).await?;
        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        decode_ack(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_save_accepts_id() {
        assert_eq!(decode_save(&json!({"id": 42})).unwrap(), 42);
    }

    #[test]
    fn decode_save_maps_erro_to_business() {
        let err = decode_save(&json!({"erro": "CPF já cadastrado"})).unwrap_err();
        match err {
            ApiError::Business(message) => assert_eq!(message, "CPF já cadastrado"),
            other => panic!("expected Business, got {other:?}"),
        }
    }

    #[test]
    fn decode_save_rejects_unknown_shape() {
        assert!(matches!(decode_save(&json!({"ok": true})), Err(ApiError::Decode)));
        assert!(matches!(decode_save(&json!(null)), Err(ApiError::Decode)));
    }

    #[test]
    fn decode_ack_only_fails_on_erro() {
        assert!(decode_ack(&json!({"mensagem": "excluído"})).is_ok());
        assert!(decode_ack(&Value::Null).is_ok());
        assert!(matches!(
            decode_ack(&json!({"erro": "registro em uso"})),
            Err(ApiError::Business(_))
        ));
    }

    #[test]
    fn urls_join_with_single_slash() {
        assert_eq!(with_trailing_slash("http://x/api"), "http://x/api/");
        assert_eq!(with_trailing_slash("http://x/api/"), "http://x/api/");
    }
}
