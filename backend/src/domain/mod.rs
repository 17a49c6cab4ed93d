//! Domain primitives, aggregates, and use-case services.
//!
//! Purpose: define the snippet and user entities independently of HTTP or
//! storage. Types validate on construction and keep their fields private
//! where an invariant applies.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Snippet and its field types (Title, Code, Language, Style).
//! - User, UserId, Username.
//! - SnippetService / UserService: use-cases over the ports in [`ports`].

pub mod auth;
pub mod choices;
pub mod error;
pub mod highlight;
pub mod ports;
pub mod snippet;
pub mod snippet_service;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::auth::{LoginCredentials, LoginValidationError, PasswordDigest};
pub use self::choices::{Language, Style, UnknownChoice};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::snippet::{
    Code, NewSnippet, Snippet, SnippetChanges, SnippetId, SnippetValidationError, TITLE_MAX,
    Title,
};
pub use self::snippet_service::SnippetService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{USERNAME_MAX, User, UserId, UserValidationError, Username};
pub use self::user_service::{UserService, UserSnippets};
