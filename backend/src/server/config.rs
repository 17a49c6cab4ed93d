//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use actix_web::cookie::{Key, SameSite};
use snippets::inbound::http::state::RepresentationSettings;
use zeroize::Zeroizing;

/// Account registered in the store before the server accepts traffic.
pub struct AdminAccount {
    pub(crate) username: String,
    pub(crate) password: Zeroizing<String>,
}

impl AdminAccount {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
        }
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) representation: RepresentationSettings,
    pub(crate) admin: Option<AdminAccount>,
}

impl ServerConfig {
    /// Construct a server configuration using application preferences.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            representation: RepresentationSettings::default(),
            admin: None,
        }
    }

    /// Shape rendered documents.
    #[must_use]
    pub fn with_representation(mut self, representation: RepresentationSettings) -> Self {
        self.representation = representation;
        self
    }

    /// Seed an account at startup.
    #[must_use]
    pub fn with_admin(mut self, admin: AdminAccount) -> Self {
        self.admin = Some(admin);
        self
    }
}
