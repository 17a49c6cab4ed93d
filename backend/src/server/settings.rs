//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `SNIPPETS_*` environment variables and
//! config files. Raw values stay strings here and are parsed by the typed
//! accessors so a bad value names the setting it came from.

use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use snippets::inbound::http::representation::RelatedStyle;
use snippets::inbound::http::state::{DEFAULT_PAGE_SIZE, RepresentationSettings};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_KEY_FILE: &str = "/var/run/secrets/session_key";
const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Rejected setting value.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind_addr {value:?}: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error("page_size must be at least 1")]
    PageSize,
    #[error("invalid public_base_url {value:?}: {source}")]
    PublicBaseUrl {
        value: String,
        source: url::ParseError,
    },
    #[error("invalid user_snippets_relation: {0}")]
    Relation(#[from] snippets::inbound::http::representation::UnknownRelatedStyle),
}

impl From<SettingsError> for std::io::Error {
    fn from(err: SettingsError) -> Self {
        Self::new(std::io::ErrorKind::InvalidInput, err)
    }
}

/// Configuration values for the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SNIPPETS")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// File holding the session signing key material.
    pub session_key_file: Option<PathBuf>,
    /// Use a generated session key when the key file is unreadable.
    #[ortho_config(default = false)]
    pub allow_ephemeral_session_key: bool,
    /// Mark the session cookie `Secure`. Defaults to `true`.
    pub cookie_secure: Option<bool>,
    /// Items per list page.
    pub page_size: Option<usize>,
    /// Base for absolute links in documents.
    pub public_base_url: Option<String>,
    /// `hyperlink`, `primary-key` or `nested`.
    pub user_snippets_relation: Option<String>,
    /// Username of the account seeded at startup.
    pub admin_username: Option<String>,
    /// Password of the seeded account.
    pub admin_password: Option<String>,
}

impl ServerSettings {
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|source| SettingsError::BindAddr {
            value: raw.to_owned(),
            source,
        })
    }

    pub fn session_key_file(&self) -> PathBuf {
        self.session_key_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_KEY_FILE))
    }

    pub fn cookie_secure(&self) -> bool {
        self.cookie_secure.unwrap_or(true)
    }

    pub fn page_size(&self) -> Result<NonZeroUsize, SettingsError> {
        match self.page_size {
            None => Ok(DEFAULT_PAGE_SIZE),
            Some(size) => NonZeroUsize::new(size).ok_or(SettingsError::PageSize),
        }
    }

    pub fn public_base_url(&self) -> Result<Option<Url>, SettingsError> {
        self.public_base_url
            .as_deref()
            .map(|raw| {
                Url::parse(raw).map_err(|source| SettingsError::PublicBaseUrl {
                    value: raw.to_owned(),
                    source,
                })
            })
            .transpose()
    }

    pub fn user_snippets_relation(&self) -> Result<RelatedStyle, SettingsError> {
        match self.user_snippets_relation.as_deref() {
            None => Ok(RelatedStyle::default()),
            Some(raw) => Ok(raw.parse()?),
        }
    }

    pub fn admin_username(&self) -> &str {
        self.admin_username
            .as_deref()
            .unwrap_or(DEFAULT_ADMIN_USERNAME)
    }

    /// Every setting that shapes rendered documents.
    pub fn representation(&self) -> Result<RepresentationSettings, SettingsError> {
        Ok(RepresentationSettings {
            user_snippets: self.user_snippets_relation()?,
            public_base_url: self.public_base_url()?,
            page_size: self.page_size()?,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const KEYS: [&str; 9] = [
        "SNIPPETS_BIND_ADDR",
        "SNIPPETS_SESSION_KEY_FILE",
        "SNIPPETS_ALLOW_EPHEMERAL_SESSION_KEY",
        "SNIPPETS_COOKIE_SECURE",
        "SNIPPETS_PAGE_SIZE",
        "SNIPPETS_PUBLIC_BASE_URL",
        "SNIPPETS_USER_SNIPPETS_RELATION",
        "SNIPPETS_ADMIN_USERNAME",
        "SNIPPETS_ADMIN_PASSWORD",
    ];

    fn load_with(overrides: &[(&str, &str)]) -> ServerSettings {
        let _guard = lock_env(KEYS.map(|key| {
            let value = overrides
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value).to_owned());
            (key, value)
        }));
        ServerSettings::load_from_iter([OsString::from("snippets")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let settings = load_with(&[]);
        assert_eq!(
            settings.bind_addr().expect("bind addr"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("addr")
        );
        assert_eq!(
            settings.session_key_file(),
            PathBuf::from(DEFAULT_SESSION_KEY_FILE)
        );
        assert!(settings.cookie_secure());
        assert!(!settings.allow_ephemeral_session_key);
        assert_eq!(settings.admin_username(), "admin");
        assert!(settings.admin_password.is_none());

        let representation = settings.representation().expect("representation");
        assert_eq!(representation.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(representation.user_snippets, RelatedStyle::ByLocator);
        assert!(representation.public_base_url.is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let settings = load_with(&[
            ("SNIPPETS_BIND_ADDR", "127.0.0.1:9000"),
            ("SNIPPETS_COOKIE_SECURE", "false"),
            ("SNIPPETS_PAGE_SIZE", "3"),
            ("SNIPPETS_PUBLIC_BASE_URL", "https://snippets.example/"),
            ("SNIPPETS_USER_SNIPPETS_RELATION", "nested"),
            ("SNIPPETS_ADMIN_USERNAME", "root"),
        ]);
        assert_eq!(settings.bind_addr().expect("bind addr").port(), 9000);
        assert!(!settings.cookie_secure());
        assert_eq!(settings.admin_username(), "root");

        let representation = settings.representation().expect("representation");
        assert_eq!(representation.page_size.get(), 3);
        assert_eq!(representation.user_snippets, RelatedStyle::Nested);
        assert_eq!(
            representation.public_base_url.as_ref().map(Url::as_str),
            Some("https://snippets.example/")
        );
    }

    #[rstest]
    #[case("true", true)]
    #[case("false", false)]
    fn cookie_secure_follows_an_explicit_value(#[case] raw: &str, #[case] expected: bool) {
        let settings = load_with(&[("SNIPPETS_COOKIE_SECURE", raw)]);
        assert_eq!(settings.cookie_secure(), expected);
    }

    #[rstest]
    #[case("SNIPPETS_PAGE_SIZE", "0")]
    #[case("SNIPPETS_BIND_ADDR", "not an address")]
    #[case("SNIPPETS_PUBLIC_BASE_URL", "relative/path")]
    #[case("SNIPPETS_USER_SNIPPETS_RELATION", "sideways")]
    fn bad_values_are_reported(#[case] key: &str, #[case] value: &str) {
        let settings = load_with(&[(key, value)]);
        let outcome = settings.representation().and(settings.bind_addr());
        assert!(outcome.is_err(), "{key}={value} should be rejected");
    }
}
