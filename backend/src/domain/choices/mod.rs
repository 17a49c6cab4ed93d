//! Enumerated choice fields.
//!
//! Each choice set is a closed enum generated by [`define_choices!`], carrying
//! its wire value, a human label, and a default. `CHOICES` exposes the table
//! for metadata responses.

mod macros;
pub(crate) use macros::define_choices;

mod language;
mod style;

pub use language::Language;
pub use style::Style;

/// Raised when a raw value is not part of a choice set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("\"{value}\" is not a valid {kind}")]
pub struct UnknownChoice {
    /// Choice set name, e.g. `language`.
    pub kind: &'static str,
    /// Rejected raw value.
    pub value: String,
}
