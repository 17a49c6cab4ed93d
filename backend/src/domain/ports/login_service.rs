//! Driving port for login.
//!
//! Inbound adapters call it to turn credentials into a user id without
//! knowing where credentials are kept.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, UserId};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user id.
    ///
    /// Unknown users and wrong passwords both yield `unauthorized` with the
    /// same message.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error>;
}
