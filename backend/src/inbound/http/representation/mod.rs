//! Resource representation layer.
//!
//! Converts stored snippets and users into JSON documents and validates
//! inbound snippet documents into domain field sets. Documents carry
//! absolute links produced by a [`Locate`] implementation; the user → snippet
//! relation is rendered in the [`RelatedStyle`] chosen at configuration time.

mod fields;
mod locator;
mod metadata;
mod relation;
mod snippet;
mod user;

pub use fields::{
    FieldDefault, FieldDescriptor, FieldKind, FieldTable, SNIPPET_FIELDS, USER_FIELDS,
};
pub use locator::{Locate, RequestLocator, Route, StaticLocator};
pub use metadata::EndpointMetadata;
pub use relation::{RelatedStyle, RelatedValue, UnknownRelatedStyle};
pub use snippet::{SnippetDocument, SnippetInput, WriteMode};
pub use user::UserDocument;
