//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain services and ports and remain testable without I/O.

use std::num::NonZeroUsize;
use std::sync::Arc;

use actix_web::HttpRequest;
use url::Url;

use super::representation::{Locate, RelatedStyle, RequestLocator, StaticLocator};
use crate::domain::ports::LoginService;
use crate::domain::{SnippetService, UserService};

/// Default number of items per list page.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => unreachable!(),
};

/// Settings that shape rendered documents.
#[derive(Debug, Clone)]
pub struct RepresentationSettings {
    /// How a user's snippets are rendered.
    pub user_snippets: RelatedStyle,
    /// Base for absolute links. Links follow the request host when unset.
    pub public_base_url: Option<Url>,
    /// Items per list page.
    pub page_size: NonZeroUsize,
}

impl Default for RepresentationSettings {
    fn default() -> Self {
        Self {
            user_snippets: RelatedStyle::default(),
            public_base_url: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub snippets: SnippetService,
    pub users: UserService,
    pub login: Arc<dyn LoginService>,
    pub representation: RepresentationSettings,
}

impl HttpState {
    /// Construct state from services and settings.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use snippets::domain::{SnippetService, UserService};
    /// use snippets::inbound::http::state::{HttpState, RepresentationSettings};
    /// use snippets::outbound::memory::InMemoryStore;
    ///
    /// let store = Arc::new(InMemoryStore::new());
    /// let state = HttpState::new(
    ///     SnippetService::new(store.clone()),
    ///     UserService::new(store.clone(), store.clone()),
    ///     store,
    ///     RepresentationSettings::default(),
    /// );
    /// assert_eq!(state.representation.page_size.get(), 10);
    /// ```
    pub fn new(
        snippets: SnippetService,
        users: UserService,
        login: Arc<dyn LoginService>,
        representation: RepresentationSettings,
    ) -> Self {
        Self {
            snippets,
            users,
            login,
            representation,
        }
    }

    /// Link resolver for documents rendered while serving `request`.
    pub fn locator<'a>(&'a self, request: &'a HttpRequest) -> Box<dyn Locate + 'a> {
        match &self.representation.public_base_url {
            Some(base) => Box::new(StaticLocator::new(base.clone())),
            None => Box::new(RequestLocator::new(request)),
        }
    }
}
