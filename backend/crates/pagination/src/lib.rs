//! Page-number pagination for collection endpoints.
//!
//! A [`PageRequest`] is parsed from the `page` query parameter, checked
//! against the collection size to yield a [`PageWindow`], and the fetched
//! items are wrapped in a [`Page`] envelope:
//!
//! ```text
//! {"count": 23, "next": "…?page=3", "previous": "…", "results": [...]}
//! ```
//!
//! Link generation keeps every other query parameter of the base URL and
//! drops the `page` parameter when pointing at the first page.

use std::num::NonZeroUsize;

use serde::Serialize;
use thiserror::Error;
use url::Url;

/// Query parameter carrying the 1-based page number.
pub const PAGE_QUERY_PARAM: &str = "page";

/// Failures raised while interpreting a page request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// The `page` parameter is not a positive integer.
    #[error("page number must be a positive integer, got {raw:?}")]
    InvalidNumber {
        /// Raw parameter value supplied by the client.
        raw: String,
    },
    /// The requested page lies past the last page.
    #[error("page {page} is out of range (last page is {last})")]
    OutOfRange {
        /// Requested page number.
        page: usize,
        /// Last valid page number.
        last: usize,
    },
}

/// Validated page selection.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use pagination::PageRequest;
///
/// let size = NonZeroUsize::new(10).expect("non-zero");
/// let request = PageRequest::parse(Some("2"), size).expect("valid page");
/// let window = request.window(15).expect("page 2 exists");
/// assert_eq!((window.offset(), window.limit()), (10, 10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    number: NonZeroUsize,
    size: NonZeroUsize,
}

impl PageRequest {
    /// Request the first page.
    #[must_use]
    pub const fn first(size: NonZeroUsize) -> Self {
        Self {
            number: NonZeroUsize::MIN,
            size,
        }
    }

    /// Parse the raw `page` parameter. A missing value selects page one.
    ///
    /// # Errors
    /// Returns [`PaginationError::InvalidNumber`] when the value is not a
    /// positive integer.
    pub fn parse(raw: Option<&str>, size: NonZeroUsize) -> Result<Self, PaginationError> {
        let Some(raw) = raw else {
            return Ok(Self::first(size));
        };
        let number = raw
            .parse::<NonZeroUsize>()
            .map_err(|_| PaginationError::InvalidNumber {
                raw: raw.to_owned(),
            })?;
        Ok(Self { number, size })
    }

    /// 1-based page number.
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number.get()
    }

    /// Maximum number of items per page.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size.get()
    }

    /// Resolve the item window for a collection of `count` items.
    ///
    /// Page one is always valid, even for an empty collection.
    ///
    /// # Errors
    /// Returns [`PaginationError::OutOfRange`] when the page lies past the
    /// last page.
    pub fn window(&self, count: usize) -> Result<PageWindow, PaginationError> {
        let last = last_page(count, self.size);
        if self.number() > last {
            return Err(PaginationError::OutOfRange {
                page: self.number(),
                last,
            });
        }
        let offset = (self.number() - 1).saturating_mul(self.size());
        Ok(PageWindow {
            offset,
            limit: self.size(),
            has_next: self.number() < last,
        })
    }
}

fn last_page(count: usize, size: NonZeroUsize) -> usize {
    count.div_ceil(size.get()).max(1)
}

/// Slice of a collection selected by a [`PageRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    offset: usize,
    limit: usize,
    has_next: bool,
}

impl PageWindow {
    /// Number of items to skip.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Maximum number of items to return.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Whether a later page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.has_next
    }
}

/// Pagination envelope returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Total number of items across all pages.
    pub count: usize,
    /// Link to the following page, if any.
    pub next: Option<Url>,
    /// Link to the preceding page, if any.
    pub previous: Option<Url>,
    /// Items on this page.
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Assemble the envelope for `request`, linking neighbours off `base`.
    #[must_use]
    pub fn new(
        base: &Url,
        request: PageRequest,
        window: PageWindow,
        count: usize,
        results: Vec<T>,
    ) -> Self {
        let number = request.number();
        let next = window.has_next().then(|| page_url(base, number + 1));
        let previous = (number > 1).then(|| page_url(base, number - 1));
        Self {
            count,
            next,
            previous,
            results,
        }
    }

    /// Convert each item while keeping the envelope.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            count: self.count,
            next: self.next,
            previous: self.previous,
            results: self.results.into_iter().map(f).collect(),
        }
    }
}

/// Build the link for `page`, replacing any `page` parameter on `base`.
///
/// # Examples
/// ```
/// use pagination::page_url;
/// use url::Url;
///
/// let base = Url::parse("http://localhost/snippets?page=4&q=x").expect("url");
/// assert_eq!(page_url(&base, 2).as_str(), "http://localhost/snippets?q=x&page=2");
/// assert_eq!(page_url(&base, 1).as_str(), "http://localhost/snippets?q=x");
/// ```
#[must_use]
pub fn page_url(base: &Url, page: usize) -> Url {
    let retained: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(key, _)| key != PAGE_QUERY_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    let mut url = base.clone();
    url.set_query(None);
    if retained.is_empty() && page == 1 {
        return url;
    }
    {
        let mut pairs = url.query_pairs_mut();
        pairs.extend_pairs(retained);
        if page > 1 {
            pairs.append_pair(PAGE_QUERY_PARAM, &page.to_string());
        }
    }
    url
}
