//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by storage adapters; each
//! exposes a typed error generated by `define_port_error!` so adapters map
//! their failures into predictable variants. [`LoginService`] is a driving
//! port called by the HTTP adapter.

mod macros;
pub(crate) use macros::define_port_error;

mod login_service;
mod snippet_repository;
mod user_repository;

#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use snippet_repository::MockSnippetRepository;
pub use snippet_repository::{SnippetPersistenceError, SnippetRepository};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
