//! Snippet aggregate and its validated field types.
//!
//! A snippet's identifier, creation time and owner are fixed when the store
//! inserts it. Everything else changes through [`Snippet::apply`], which
//! only overwrites the fields a [`SnippetChanges`] carries.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Language, Style, UserId};

/// Maximum title length in characters.
pub const TITLE_MAX: usize = 100;

/// Validation failures for snippet fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnippetValidationError {
    /// Title longer than [`TITLE_MAX`] characters.
    #[error("title must be at most {max} characters")]
    TitleTooLong { max: usize },
    /// Code empty or whitespace only.
    #[error("code must not be blank")]
    BlankCode,
}

/// Stable numeric snippet identifier assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnippetId(u64);

impl SnippetId {
    /// Wrap a raw identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SnippetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SnippetId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Optional snippet title; blank is allowed. Stored trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    /// Trim surrounding whitespace, then validate the length.
    ///
    /// # Examples
    /// ```
    /// use snippets::domain::Title;
    ///
    /// assert!(Title::new("").is_ok());
    /// assert!(Title::new("x".repeat(101)).is_err());
    /// assert_eq!(Title::new("  hello  ").expect("title").as_str(), "hello");
    /// ```
    pub fn new(title: impl AsRef<str>) -> Result<Self, SnippetValidationError> {
        let title = title.as_ref().trim();
        if title.chars().count() > TITLE_MAX {
            return Err(SnippetValidationError::TitleTooLong { max: TITLE_MAX });
        }
        Ok(Self(title.to_owned()))
    }

    /// Borrow the title text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Snippet source text. Never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code(String);

impl Code {
    /// Trim surrounding whitespace and reject what is left if empty.
    pub fn new(code: impl AsRef<str>) -> Result<Self, SnippetValidationError> {
        let code = code.as_ref().trim();
        if code.is_empty() {
            return Err(SnippetValidationError::BlankCode);
        }
        Ok(Self(code.to_owned()))
    }

    /// Borrow the source text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Validated field set for a snippet that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSnippet {
    pub title: Title,
    pub code: Code,
    pub linenos: bool,
    pub language: Language,
    pub style: Style,
}

impl NewSnippet {
    /// Start from `code` with every optional field at its default.
    pub fn new(code: Code) -> Self {
        Self {
            title: Title::default(),
            code,
            linenos: false,
            language: Language::default(),
            style: Style::default(),
        }
    }
}

/// Partial field set applied by updates. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetChanges {
    pub title: Option<Title>,
    pub code: Option<Code>,
    pub linenos: Option<bool>,
    pub language: Option<Language>,
    pub style: Option<Style>,
}

impl SnippetChanges {
    /// Whether applying these changes would leave a snippet untouched.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Stored code snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    id: SnippetId,
    created: DateTime<Utc>,
    title: Title,
    code: Code,
    linenos: bool,
    language: Language,
    style: Style,
    owner: UserId,
}

impl Snippet {
    /// Materialise a snippet from its stored parts.
    pub fn new(id: SnippetId, owner: UserId, created: DateTime<Utc>, fields: NewSnippet) -> Self {
        let NewSnippet {
            title,
            code,
            linenos,
            language,
            style,
        } = fields;
        Self {
            id,
            created,
            title,
            code,
            linenos,
            language,
            style,
            owner,
        }
    }

    /// Overwrite each field present in `changes`; absent fields stay as they are.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use snippets::domain::{
    ///     Code, Language, NewSnippet, Snippet, SnippetChanges, SnippetId, UserId,
    /// };
    ///
    /// let code = Code::new("print(1)").expect("code");
    /// let mut snippet = Snippet::new(SnippetId::new(1), UserId::new(1), Utc::now(), NewSnippet::new(code));
    /// snippet.apply(SnippetChanges { language: Some(Language::Rust), ..SnippetChanges::default() });
    /// assert_eq!(snippet.language(), Language::Rust);
    /// assert_eq!(snippet.code().as_str(), "print(1)");
    /// ```
    pub fn apply(&mut self, changes: SnippetChanges) {
        let SnippetChanges {
            title,
            code,
            linenos,
            language,
            style,
        } = changes;
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(code) = code {
            self.code = code;
        }
        if let Some(linenos) = linenos {
            self.linenos = linenos;
        }
        if let Some(language) = language {
            self.language = language;
        }
        if let Some(style) = style {
            self.style = style;
        }
    }

    pub fn id(&self) -> SnippetId {
        self.id
    }

    /// Insertion time; orders listings.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn code(&self) -> &Code {
        &self.code
    }

    /// Whether the highlight page shows line numbers.
    pub fn linenos(&self) -> bool {
        self.linenos
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Owning user. Fixed at creation.
    pub fn owner(&self) -> UserId {
        self.owner
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for snippet fields and merge semantics.
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn snippet() -> Snippet {
        let fields = NewSnippet {
            title: Title::new("greeting").expect("title"),
            code: Code::new("print('hi')").expect("code"),
            linenos: true,
            language: Language::Python,
            style: Style::Monokai,
        };
        Snippet::new(SnippetId::new(7), UserId::new(3), Utc::now(), fields)
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n\t")]
    fn blank_code_is_rejected(#[case] raw: &str) {
        assert_eq!(Code::new(raw), Err(SnippetValidationError::BlankCode));
    }

    #[rstest]
    #[case("  print(1)\n", "print(1)")]
    #[case("\tif x:\n    y()\n", "if x:\n    y()")]
    fn code_is_trimmed(#[case] raw: &str, #[case] stored: &str) {
        assert_eq!(Code::new(raw).expect("code").as_str(), stored);
    }

    #[rstest]
    #[case("  hello  ", "hello")]
    #[case("   ", "")]
    fn title_is_trimmed(#[case] raw: &str, #[case] stored: &str) {
        assert_eq!(Title::new(raw).expect("title").as_str(), stored);
    }

    #[rstest]
    fn title_length_is_checked_after_trimming() {
        let padded = format!("x{}", " ".repeat(110));
        assert_eq!(Title::new(padded).expect("fits once trimmed").as_str(), "x");
    }

    #[rstest]
    fn title_length_counts_characters() {
        assert!(Title::new("é".repeat(TITLE_MAX)).is_ok());
        assert_eq!(
            Title::new("é".repeat(TITLE_MAX + 1)),
            Err(SnippetValidationError::TitleTooLong { max: TITLE_MAX })
        );
    }

    #[rstest]
    fn new_snippet_defaults() {
        let fields = NewSnippet::new(Code::new("print(1)").expect("code"));
        assert_eq!(fields.title.as_str(), "");
        assert!(!fields.linenos);
        assert_eq!(fields.language, Language::Python);
        assert_eq!(fields.style, Style::Friendly);
    }

    #[rstest]
    fn empty_changes_leave_snippet_untouched(snippet: Snippet) {
        let mut updated = snippet.clone();
        let changes = SnippetChanges::default();
        assert!(changes.is_empty());
        updated.apply(changes);
        assert_eq!(updated, snippet);
    }

    #[rstest]
    fn apply_overwrites_only_present_fields(snippet: Snippet) {
        let mut updated = snippet.clone();
        updated.apply(SnippetChanges {
            title: Some(Title::default()),
            linenos: Some(false),
            ..SnippetChanges::default()
        });
        assert_eq!(updated.title().as_str(), "");
        assert!(!updated.linenos());
        assert_eq!(updated.code(), snippet.code());
        assert_eq!(updated.language(), snippet.language());
        assert_eq!(updated.style(), snippet.style());
        assert_eq!(updated.owner(), snippet.owner());
        assert_eq!(updated.id(), snippet.id());
    }
}
