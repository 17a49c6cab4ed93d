//! Named routes and the resolvers that turn them into absolute URLs.
//!
//! Documents never hard-code paths. They ask a [`Locate`] implementation for
//! the URL of a [`Route`], which is either resolved through actix-web's
//! route map or joined onto a configured public base URL.

use actix_web::HttpRequest;
use tracing::error;
use url::Url;

use crate::domain::{Error, SnippetId, UserId};
use crate::inbound::http::API_PREFIX;

/// Named route plus the parameters needed to build its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    ApiRoot,
    SnippetList,
    SnippetDetail(SnippetId),
    SnippetHighlight(SnippetId),
    UserList,
    UserDetail(UserId),
}

impl Route {
    /// Route name registered with actix-web.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ApiRoot => "api-root",
            Self::SnippetList => "snippet-list",
            Self::SnippetDetail(_) => "snippet-detail",
            Self::SnippetHighlight(_) => "snippet-highlight",
            Self::UserList => "user-list",
            Self::UserDetail(_) => "user-detail",
        }
    }

    /// Positional path parameters.
    pub fn params(&self) -> Vec<String> {
        match self {
            Self::ApiRoot | Self::SnippetList | Self::UserList => Vec::new(),
            Self::SnippetDetail(id) | Self::SnippetHighlight(id) => vec![id.to_string()],
            Self::UserDetail(id) => vec![id.to_string()],
        }
    }

    /// Path relative to the API prefix.
    pub fn path(&self) -> String {
        match self {
            Self::ApiRoot => "/".to_owned(),
            Self::SnippetList => "/snippets".to_owned(),
            Self::SnippetDetail(id) => format!("/snippets/{id}"),
            Self::SnippetHighlight(id) => format!("/snippets/{id}/highlight.html"),
            Self::UserList => "/users".to_owned(),
            Self::UserDetail(id) => format!("/users/{id}"),
        }
    }
}

/// Resolve a [`Route`] to an absolute URL.
pub trait Locate {
    fn locate(&self, route: &Route) -> Result<Url, Error>;
}

/// Resolver backed by the route map of the request being served.
pub struct RequestLocator<'a> {
    request: &'a HttpRequest,
}

impl<'a> RequestLocator<'a> {
    pub fn new(request: &'a HttpRequest) -> Self {
        Self { request }
    }
}

impl Locate for RequestLocator<'_> {
    fn locate(&self, route: &Route) -> Result<Url, Error> {
        self.request
            .url_for(route.name(), route.params())
            .map_err(|err| {
                error!(route = route.name(), error = %err, "route resolution failed");
                Error::internal(format!("failed to resolve route {}: {err}", route.name()))
            })
    }
}

/// Resolver that joins paths onto a fixed public base URL.
///
/// # Examples
/// ```
/// use snippets::domain::SnippetId;
/// use snippets::inbound::http::representation::{Locate, Route, StaticLocator};
/// use url::Url;
///
/// let base = Url::parse("https://snippets.example/").expect("url");
/// let locator = StaticLocator::new(base);
/// let url = locator
///     .locate(&Route::SnippetDetail(SnippetId::new(7)))
///     .expect("resolves");
/// assert_eq!(url.as_str(), "https://snippets.example/api/v1/snippets/7");
/// ```
#[derive(Debug, Clone)]
pub struct StaticLocator {
    base: Url,
}

impl StaticLocator {
    pub fn new(base: Url) -> Self {
        Self { base }
    }
}

impl Locate for StaticLocator {
    fn locate(&self, route: &Route) -> Result<Url, Error> {
        let prefix = self.base.path().trim_end_matches('/');
        let path = format!("{prefix}{API_PREFIX}{}", route.path());
        let mut url = self.base.clone();
        url.set_path(&path);
        url.set_query(None);
        url.set_fragment(None);
        Ok(url)
    }
}
