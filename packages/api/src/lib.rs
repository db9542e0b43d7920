//! # API crate — resource services for the Comandas proxy/BFF
//!
//! Every HTTP call the front-end makes goes through this crate. Each entity
//! gets one service module with the uniform CRUD contract; the dual-channel
//! success/error body the backend uses (`{id}` on success, `{erro}` on
//! business failure, both under a 2xx status) is decoded exactly once here,
//! so callers only ever see `Result`.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Login against `auth/login` |
//! | [`cliente`] | Cliente CRUD (`cliente/all`, `cliente/one`, `cliente/`) |
//! | [`funcionario`] | Funcionário CRUD plus the advisory CPF duplicate check |
//! | [`produto`] | Produto CRUD (list-only in the UI) |
//! | [`models`] | Wire types (`Cliente`, `Funcionario`, `Produto`) |
//! | [`error`] | [`ApiError`] taxonomy with user-facing messages |
//!
//! The backend base URL comes from the `COMANDAS_PROXY_BASE_URL` build-time
//! environment variable (see [`set_base_url`] for the test override).

pub mod auth;
pub mod cliente;
mod client;
pub mod error;
pub mod funcionario;
pub mod models;
pub mod produto;

pub use client::set_base_url;
pub use error::ApiError;
pub use funcionario::CpfCheck;
pub use models::{Cliente, Funcionario, Produto};

pub use store::{Grupo, UsuarioInfo};
