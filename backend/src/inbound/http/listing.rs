//! Page selection shared by list endpoints.

use std::num::NonZeroUsize;

use pagination::{Page, PageRequest, PageWindow, PaginationError};
use serde::Deserialize;
use tracing::debug;
use url::Url;
use utoipa::IntoParams;

use crate::domain::Error;

/// Query string accepted by list endpoints.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number. Defaults to the first page.
    pub page: Option<String>,
}

/// A validated page request together with the slice of items it covers.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PagePlan {
    request: PageRequest,
    window: PageWindow,
}

impl PagePlan {
    /// Resolve `query` against a collection of `count` items.
    pub(crate) fn resolve(
        query: &PageQuery,
        size: NonZeroUsize,
        count: usize,
    ) -> Result<Self, Error> {
        let request = PageRequest::parse(query.page.as_deref(), size).map_err(invalid_page)?;
        let window = request.window(count).map_err(invalid_page)?;
        Ok(Self { request, window })
    }

    pub(crate) fn offset(&self) -> usize {
        self.window.offset()
    }

    pub(crate) fn limit(&self) -> usize {
        self.window.limit()
    }

    /// Wrap `results` in the envelope, linking neighbours off `base`.
    pub(crate) fn page<T>(&self, base: &Url, count: usize, results: Vec<T>) -> Page<T> {
        Page::new(base, self.request, self.window, count, results)
    }
}

fn invalid_page(err: PaginationError) -> Error {
    debug!(error = %err, "page request rejected");
    Error::not_found("Invalid page.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    const SIZE: NonZeroUsize = match NonZeroUsize::new(2) {
        Some(size) => size,
        None => unreachable!(),
    };

    fn query(page: Option<&str>) -> PageQuery {
        PageQuery {
            page: page.map(str::to_owned),
        }
    }

    #[rstest]
    #[case(None, 0, 2)]
    #[case(Some("2"), 2, 2)]
    #[case(Some("3"), 4, 2)]
    fn windows_follow_the_page_number(
        #[case] page: Option<&str>,
        #[case] offset: usize,
        #[case] limit: usize,
    ) {
        let plan = PagePlan::resolve(&query(page), SIZE, 5).expect("valid page");
        assert_eq!((plan.offset(), plan.limit()), (offset, limit));
    }

    #[rstest]
    #[case(Some("0"))]
    #[case(Some("four"))]
    #[case(Some("4"))]
    fn bad_pages_are_not_found(#[case] page: Option<&str>) {
        let err = PagePlan::resolve(&query(page), SIZE, 5).expect_err("invalid page");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), "Invalid page.");
    }

    #[rstest]
    fn envelope_links_neighbours() {
        let base = Url::parse("http://h/api/v1/snippets").expect("url");
        let plan = PagePlan::resolve(&query(Some("2")), SIZE, 5).expect("valid page");
        let page = plan.page(&base, 5, vec!["c", "d"]);
        assert_eq!(
            page.next.as_ref().map(Url::as_str),
            Some("http://h/api/v1/snippets?page=3")
        );
        assert_eq!(
            page.previous.as_ref().map(Url::as_str),
            Some("http://h/api/v1/snippets")
        );
    }
}
