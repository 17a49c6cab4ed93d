//! User documents with their snippet relation.

use serde::Serialize;
use utoipa::ToSchema;

use super::locator::{Locate, Route};
use super::relation::{RelatedStyle, RelatedValue};
use super::snippet::SnippetDocument;
use crate::domain::{Error, Snippet, UserSnippets, Username};

/// Outbound user document. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserDocument {
    /// Absolute URL of this user.
    #[schema(example = "http://localhost:8080/api/v1/users/1")]
    pub url: String,
    pub id: u64,
    #[schema(example = "admin")]
    pub username: String,
    /// Owned snippets, oldest first.
    pub snippets: Vec<RelatedValue>,
}

impl UserDocument {
    /// Render a user and its snippets in the given relation style.
    pub fn render(
        entry: &UserSnippets,
        style: RelatedStyle,
        locator: &dyn Locate,
    ) -> Result<Self, Error> {
        let user = &entry.user;
        let url = locator.locate(&Route::UserDetail(user.id()))?;
        let snippets = entry
            .snippets
            .iter()
            .map(|snippet| related(snippet, user.username(), style, locator))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            url: url.into(),
            id: user.id().get(),
            username: user.username().to_string(),
            snippets,
        })
    }
}

fn related(
    snippet: &Snippet,
    owner: &Username,
    style: RelatedStyle,
    locator: &dyn Locate,
) -> Result<RelatedValue, Error> {
    Ok(match style {
        RelatedStyle::ByIdentifier => RelatedValue::Identifier(snippet.id().get()),
        RelatedStyle::ByLocator => {
            RelatedValue::Locator(locator.locate(&Route::SnippetDetail(snippet.id()))?.into())
        }
        RelatedStyle::Nested => {
            RelatedValue::Nested(Box::new(SnippetDocument::render(snippet, owner, locator)?))
        }
    })
}
