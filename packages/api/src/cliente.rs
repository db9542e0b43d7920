//! Cliente resource service.

use crate::client::Resource;
use crate::error::ApiError;
use crate::models::Cliente;

const RESOURCE: Resource = Resource::new("cliente", "id_cliente");

/// All clientes.
pub async fn get_clientes() -> Result<Vec<Cliente>, ApiError> {
    RESOURCE.list().await
}

/// One cliente by id; `Ok(None)` when no record matches.
pub async fn get_cliente_by_id(id: i64) -> Result<Option<Cliente>, ApiError> {
    RESOURCE.get_by_id(id).await
}

/// Create a cliente, returning the generated id.
pub async fn create_cliente(cliente: &Cliente) -> Result<i64, ApiError> {
    RESOURCE.create(cliente).await
}

/// Update the cliente with `id` (sent as a query parameter).
pub async fn update_cliente(id: i64, cliente: &Cliente) -> Result<i64, ApiError> {
    RESOURCE.update(id, cliente).await
}

/// Delete the cliente with `id`.
pub async fn delete_cliente(id: i64) -> Result<(), ApiError> {
    RESOURCE.delete(id).await
}
