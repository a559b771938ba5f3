//! Auth module - form validation and display-name persistence.

mod auth_service;
mod auth_traits;
mod session_store;

pub use auth_service::AuthService;
pub use auth_traits::{AuthServiceTrait, SessionStoreTrait};
pub use session_store::MemorySessionStore;
