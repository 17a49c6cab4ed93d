//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local store backing the snippet and user
//!   repositories and the login port.
//!
//! Adapters are thin translators between domain types and storage. They
//! contain no business logic.

pub mod memory;
