pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryBackend;

mod file_store;
pub use file_store::FileBackend;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::WebBackend;

pub use models::{Grupo, UsuarioInfo};
pub use session::{Session, SessionBackend, SessionStore, LOGIN_FLAG_KEY, USER_INFO_KEY};
