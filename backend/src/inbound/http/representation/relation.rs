//! Rendering styles for the user → snippets relation.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use utoipa::ToSchema;

use super::snippet::SnippetDocument;

/// How related snippets appear inside a user document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RelatedStyle {
    /// Bare snippet identifiers.
    ByIdentifier,
    /// Absolute URLs of the `snippet-detail` route.
    #[default]
    ByLocator,
    /// Full snippet documents.
    Nested,
}

impl RelatedStyle {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ByIdentifier => "primary-key",
            Self::ByLocator => "hyperlink",
            Self::Nested => "nested",
        }
    }
}

impl fmt::Display for RelatedStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a configured relation style is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown relation style {0:?}; expected primary-key, hyperlink or nested")]
pub struct UnknownRelatedStyle(pub String);

impl FromStr for RelatedStyle {
    type Err = UnknownRelatedStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary-key" | "primary_key" | "id" => Ok(Self::ByIdentifier),
            "hyperlink" | "url" => Ok(Self::ByLocator),
            "nested" => Ok(Self::Nested),
            _ => Err(UnknownRelatedStyle(s.to_owned())),
        }
    }
}

/// One rendered entry of a relation.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum RelatedValue {
    Identifier(u64),
    Locator(String),
    Nested(Box<SnippetDocument>),
}
