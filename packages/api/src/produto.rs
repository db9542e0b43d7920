//! Produto resource service. The UI only lists produtos today; the service
//! still carries the uniform contract so the surface matches the backend.

use crate::client::Resource;
use crate::error::ApiError;
use crate::models::Produto;

const RESOURCE: Resource = Resource::new("produto", "id_produto");

/// All produtos.
pub async fn get_produtos() -> Result<Vec<Produto>, ApiError> {
    RESOURCE.list().await
}

/// One produto by id; `Ok(None)` when no record matches.
pub async fn get_produto_by_id(id: i64) -> Result<Option<Produto>, ApiError> {
    RESOURCE.get_by_id(id).await
}

/// Create a produto, returning the generated id.
pub async fn create_produto(produto: &Produto) -> Result<i64, ApiError> {
    RESOURCE.create(produto).await
}

/// Update the produto with `id` (sent as a query parameter).
pub async fn update_produto(id: i64, produto: &Produto) -> Result<i64, ApiError> {
    RESOURCE.update(id, produto).await
}

/// Delete the produto with `id`.
pub async fn delete_produto(id: i64) -> Result<(), ApiError> {
    RESOURCE.delete(id).await
}
