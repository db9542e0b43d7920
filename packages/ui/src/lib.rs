//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const COMANDAS_CSS: Asset = asset!("/assets/comandas.css");

pub mod auth;
pub use auth::{use_auth, AuthProvider, AuthState};

mod storage;
pub use storage::make_session_store;

pub mod form;
pub use form::{optional, FieldErrors, FormMode, Rule};

pub mod mask;

mod navbar;
pub use navbar::Navbar;
