//! Snippets backend library modules.
//!
//! Hexagonal layout: `domain` holds snippet and user semantics plus the
//! ports they depend on, `inbound::http` renders them as linked JSON
//! documents, and `outbound::memory` stores them.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
