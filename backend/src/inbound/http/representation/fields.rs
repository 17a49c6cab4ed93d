//! Field descriptor tables for the snippet and user documents.
//!
//! Each table lists the document's keys in output order together with the
//! rules inbound validation and `OPTIONS` metadata read from it.

use crate::domain::{Language, Style, TITLE_MAX, USERNAME_MAX};

/// Validation rule and metadata type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Absolute URL derived from a route.
    Link,
    /// Value computed from another entity.
    Derived,
    Integer,
    Text,
    Boolean,
    /// One of a fixed `(value, label)` set.
    Choice(&'static [(&'static str, &'static str)]),
    /// Collection of related entities.
    Related,
}

impl FieldKind {
    /// Type name reported by `OPTIONS` metadata.
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Link | Self::Derived | Self::Related => "field",
            Self::Integer => "integer",
            Self::Text => "string",
            Self::Boolean => "boolean",
            Self::Choice(_) => "choice",
        }
    }
}

/// Value used when an optional input field is omitted on create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    Text(&'static str),
    Flag(bool),
}

/// Static description of one document field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub read_only: bool,
    pub required: bool,
    pub default: Option<FieldDefault>,
    pub max_length: Option<usize>,
}

impl FieldDescriptor {
    const fn read_only(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            read_only: true,
            required: false,
            default: None,
            max_length: None,
        }
    }

    const fn writable(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            read_only: false,
            required: false,
            default: None,
            max_length: None,
        }
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn default(mut self, value: FieldDefault) -> Self {
        self.default = Some(value);
        self
    }

    const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Choices offered by a choice field.
    pub const fn choices(&self) -> Option<&'static [(&'static str, &'static str)]> {
        match self.kind {
            FieldKind::Choice(choices) => Some(choices),
            _ => None,
        }
    }
}

/// Ordered field table of one document type.
#[derive(Debug, Clone, Copy)]
pub struct FieldTable(&'static [FieldDescriptor]);

impl FieldTable {
    pub const fn fields(&self) -> &'static [FieldDescriptor] {
        self.0
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.0.iter().find(|field| field.name == name)
    }

    /// Field names in output order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.0.iter().map(|field| field.name)
    }
}

/// Snippet document fields in output order.
pub const SNIPPET_FIELDS: FieldTable = FieldTable(&[
    FieldDescriptor::read_only("url", "Url", FieldKind::Link),
    FieldDescriptor::read_only("id", "ID", FieldKind::Integer),
    FieldDescriptor::read_only("highlight", "Highlight", FieldKind::Link),
    FieldDescriptor::read_only("owner", "Owner", FieldKind::Derived),
    FieldDescriptor::writable("title", "Title", FieldKind::Text)
        .default(FieldDefault::Text(""))
        .max_length(TITLE_MAX),
    FieldDescriptor::writable("code", "Code", FieldKind::Text).required(),
    FieldDescriptor::writable("linenos", "Linenos", FieldKind::Boolean)
        .default(FieldDefault::Flag(false)),
    FieldDescriptor::writable("language", "Language", FieldKind::Choice(Language::CHOICES))
        .default(FieldDefault::Text(Language::DEFAULT.as_str())),
    FieldDescriptor::writable("style", "Style", FieldKind::Choice(Style::CHOICES))
        .default(FieldDefault::Text(Style::DEFAULT.as_str())),
]);

/// User document fields in output order.
pub const USER_FIELDS: FieldTable = FieldTable(&[
    FieldDescriptor::read_only("url", "Url", FieldKind::Link),
    FieldDescriptor::read_only("id", "ID", FieldKind::Integer),
    FieldDescriptor::read_only("username", "Username", FieldKind::Text).max_length(USERNAME_MAX),
    FieldDescriptor::read_only("snippets", "Snippets", FieldKind::Related),
]);
