//! Snippet documents: outbound rendering and inbound validation.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use super::fields::{FieldDefault, FieldDescriptor, SNIPPET_FIELDS};
use super::locator::{Locate, Route};
use crate::domain::{
    Code, Error, Language, NewSnippet, Snippet, SnippetChanges, Style, TITLE_MAX, Title, Username,
};
use crate::inbound::http::validation::FieldErrors;

/// Outbound snippet document. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SnippetDocument {
    /// Absolute URL of this snippet.
    #[schema(example = "http://localhost:8080/api/v1/snippets/1")]
    pub url: String,
    pub id: u64,
    /// Absolute URL of the highlighted HTML page.
    #[schema(example = "http://localhost:8080/api/v1/snippets/1/highlight.html")]
    pub highlight: String,
    /// Username of the owner.
    #[schema(example = "admin")]
    pub owner: String,
    pub title: String,
    #[schema(example = "print(\"hello, world\")")]
    pub code: String,
    pub linenos: bool,
    #[schema(example = "python")]
    pub language: String,
    #[schema(example = "friendly")]
    pub style: String,
}

impl SnippetDocument {
    /// Render `snippet`, owned by `owner`, with links from `locator`.
    pub fn render(
        snippet: &Snippet,
        owner: &Username,
        locator: &dyn Locate,
    ) -> Result<Self, Error> {
        let url = locator.locate(&Route::SnippetDetail(snippet.id()))?;
        let highlight = locator.locate(&Route::SnippetHighlight(snippet.id()))?;
        Ok(Self {
            url: url.into(),
            id: snippet.id().get(),
            highlight: highlight.into(),
            owner: owner.to_string(),
            title: snippet.title().as_str().to_owned(),
            code: snippet.code().as_str().to_owned(),
            linenos: snippet.linenos(),
            language: snippet.language().as_str().to_owned(),
            style: snippet.style().as_str().to_owned(),
        })
    }
}

/// How strictly an inbound document is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// `POST`: required fields must be present; omitted fields take defaults.
    Create,
    /// `PUT`: required fields must be present; omitted fields keep their value.
    Replace,
    /// `PATCH`: every field is optional; omitted fields keep their value.
    Partial,
}

impl WriteMode {
    fn demands(self, field: &FieldDescriptor) -> bool {
        field.required && !matches!(self, Self::Partial)
    }
}

/// Inbound snippet document.
///
/// `url`, `id`, `highlight` and `owner` have no slot here and are dropped
/// along with any unknown key. Each slot tells an omitted key (`None`) apart
/// from an explicit JSON `null` (`Some(None)`), which is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SnippetInput {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, max_length = 100)]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "print(\"hello, world\")")]
    pub code: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<bool>)]
    pub linenos: Option<Option<bool>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "python")]
    pub language: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "friendly")]
    pub style: Option<Option<String>>,
}

/// Only called for keys that appear in the document, so `null` lands in
/// `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn descriptor(name: &str) -> Result<&'static FieldDescriptor, Error> {
    SNIPPET_FIELDS
        .get(name)
        .ok_or_else(|| Error::internal(format!("snippet field {name} is not described")))
}

fn missing_default(name: &str) -> Error {
    Error::internal(format!("snippet field {name} has no usable default"))
}

fn text_default(name: &str) -> Result<&'static str, Error> {
    match descriptor(name)?.default {
        Some(FieldDefault::Text(value)) => Ok(value),
        _ => Err(missing_default(name)),
    }
}

fn flag_default(name: &str) -> Result<bool, Error> {
    match descriptor(name)?.default {
        Some(FieldDefault::Flag(value)) => Ok(value),
        _ => Err(missing_default(name)),
    }
}

fn parsed_default<T: FromStr>(name: &str) -> Result<T, Error> {
    text_default(name)?
        .parse()
        .map_err(|_| missing_default(name))
}

/// Record a `null` failure and drop the slot; pass values through.
fn non_null<'a, T>(
    errors: &mut FieldErrors,
    name: &'static str,
    slot: &'a Option<Option<T>>,
) -> Option<&'a T> {
    match slot {
        None => None,
        Some(None) => {
            errors.null(name);
            None
        }
        Some(Some(value)) => Some(value),
    }
}

impl SnippetInput {
    /// Validate for `mode`, reporting every failing field at once.
    ///
    /// # Examples
    /// ```
    /// use snippets::inbound::http::representation::{SnippetInput, WriteMode};
    ///
    /// let input = SnippetInput { title: Some(Some("x".into())), ..SnippetInput::default() };
    /// assert!(input.clone().validate(WriteMode::Create).is_err());
    /// assert!(input.validate(WriteMode::Partial).is_ok());
    /// ```
    pub fn validate(self, mode: WriteMode) -> Result<SnippetChanges, Error> {
        let mut errors = FieldErrors::default();
        let title = self.check_title(&mut errors)?;
        let code = self.check_code(&mut errors, mode)?;
        let linenos = non_null(&mut errors, descriptor("linenos")?.name, &self.linenos).copied();
        let language =
            check_choice::<Language>(&mut errors, descriptor("language")?, &self.language);
        let style = check_choice::<Style>(&mut errors, descriptor("style")?, &self.style);
        errors.into_result()?;
        Ok(SnippetChanges {
            title,
            code,
            linenos,
            language,
            style,
        })
    }

    /// Validate as a create and fill omitted fields from the field table's
    /// defaults.
    pub fn into_new_snippet(self) -> Result<NewSnippet, Error> {
        let changes = self.validate(WriteMode::Create)?;
        let code = changes
            .code
            .ok_or_else(|| Error::internal("validated snippet is missing its code"))?;
        let title = match changes.title {
            Some(title) => title,
            None => Title::new(text_default("title")?).map_err(|_| missing_default("title"))?,
        };
        let linenos = match changes.linenos {
            Some(linenos) => linenos,
            None => flag_default("linenos")?,
        };
        let language = match changes.language {
            Some(language) => language,
            None => parsed_default("language")?,
        };
        let style = match changes.style {
            Some(style) => style,
            None => parsed_default("style")?,
        };
        Ok(NewSnippet {
            title,
            code,
            linenos,
            language,
            style,
        })
    }

    fn check_title(&self, errors: &mut FieldErrors) -> Result<Option<Title>, Error> {
        let field = descriptor("title")?;
        let Some(raw) = non_null(errors, field.name, &self.title) else {
            return Ok(None);
        };
        match Title::new(raw) {
            Ok(title) => Ok(Some(title)),
            Err(_) => {
                errors.max_length(field.name, field.max_length.unwrap_or(TITLE_MAX));
                Ok(None)
            }
        }
    }

    fn check_code(
        &self,
        errors: &mut FieldErrors,
        mode: WriteMode,
    ) -> Result<Option<Code>, Error> {
        let field = descriptor("code")?;
        match &self.code {
            None => {
                if mode.demands(field) {
                    errors.required(field.name);
                }
                Ok(None)
            }
            Some(None) => {
                errors.null(field.name);
                Ok(None)
            }
            Some(Some(raw)) => match Code::new(raw) {
                Ok(code) => Ok(Some(code)),
                Err(_) => {
                    errors.blank(field.name);
                    Ok(None)
                }
            },
        }
    }
}

fn check_choice<T: FromStr>(
    errors: &mut FieldErrors,
    field: &'static FieldDescriptor,
    slot: &Option<Option<String>>,
) -> Option<T> {
    let raw = non_null(errors, field.name, slot)?;
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.invalid_choice(field.name, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    //! Rendering order and inbound validation rules.
    use super::*;
    use crate::domain::{ErrorCode, SnippetId, UserId};
    use crate::inbound::http::representation::StaticLocator;
    use chrono::Utc;
    use rstest::{fixture, rstest};
    use serde_json::{Value, json};
    use url::Url;

    #[fixture]
    fn locator() -> StaticLocator {
        StaticLocator::new(Url::parse("http://testserver").expect("url"))
    }

    fn stored() -> Snippet {
        let code = Code::new("print(1)").expect("code");
        let mut fields = NewSnippet::new(code);
        fields.title = Title::new("hello").expect("title");
        Snippet::new(SnippetId::new(7), UserId::new(1), Utc::now(), fields)
    }

    fn input(value: Value) -> SnippetInput {
        serde_json::from_value(value).expect("input decodes")
    }

    fn field_codes(err: &Error) -> Vec<(String, String)> {
        err.details()
            .and_then(|details| details["fieldErrors"].as_array())
            .map(|failures| {
                failures
                    .iter()
                    .map(|f| {
                        (
                            f["field"].as_str().unwrap_or_default().to_owned(),
                            f["code"].as_str().unwrap_or_default().to_owned(),
                        )
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    #[rstest]
    fn rendered_keys_follow_the_field_table(locator: StaticLocator) {
        let owner = Username::new("ada").expect("username");
        let document = SnippetDocument::render(&stored(), &owner, &locator).expect("render");
        let value = serde_json::to_value(&document).expect("json");

        let keys: Vec<&str> = value
            .as_object()
            .expect("object")
            .keys()
            .map(String::as_str)
            .collect();
        let expected: Vec<&str> = SNIPPET_FIELDS.names().collect();
        assert_eq!(keys, expected);
        assert_eq!(
            value,
            json!({
                "url": "http://testserver/api/v1/snippets/7",
                "id": 7,
                "highlight": "http://testserver/api/v1/snippets/7/highlight.html",
                "owner": "ada",
                "title": "hello",
                "code": "print(1)",
                "linenos": false,
                "language": "python",
                "style": "friendly",
            })
        );
    }

    #[rstest]
    fn code_alone_fills_every_default() {
        let fields = input(json!({"code": "print(1)"}))
            .into_new_snippet()
            .expect("valid");
        assert_eq!(fields.title.as_str(), "");
        assert_eq!(fields.code.as_str(), "print(1)");
        assert!(!fields.linenos);
        assert_eq!(fields.language, Language::Python);
        assert_eq!(fields.style, Style::Friendly);
    }

    #[rstest]
    #[case(WriteMode::Create)]
    #[case(WriteMode::Replace)]
    fn missing_code_is_required(#[case] mode: WriteMode) {
        let err = input(json!({"title": "t"}))
            .validate(mode)
            .expect_err("code required");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(field_codes(&err), vec![("code".into(), "required".into())]);
    }

    #[rstest]
    fn partial_updates_accept_an_empty_document() {
        let changes = input(json!({})).validate(WriteMode::Partial).expect("valid");
        assert!(changes.is_empty());
    }

    #[rstest]
    fn omitted_and_null_keys_decode_differently() {
        let decoded = input(json!({"title": null}));
        assert_eq!(decoded.title, Some(None));
        assert_eq!(decoded.code, None);
    }

    #[rstest]
    #[case(WriteMode::Create, json!({"code": null}), "code")]
    #[case(WriteMode::Replace, json!({"code": null}), "code")]
    #[case(WriteMode::Partial, json!({"code": null}), "code")]
    #[case(WriteMode::Partial, json!({"title": null}), "title")]
    #[case(WriteMode::Partial, json!({"linenos": null}), "linenos")]
    #[case(WriteMode::Replace, json!({"code": "x", "language": null}), "language")]
    #[case(WriteMode::Create, json!({"code": "x", "style": null}), "style")]
    fn null_values_are_rejected(
        #[case] mode: WriteMode,
        #[case] body: Value,
        #[case] field: &str,
    ) {
        let err = input(body).validate(mode).expect_err("null rejected");
        assert_eq!(field_codes(&err), vec![(field.to_owned(), "null".to_owned())]);
    }

    #[rstest]
    fn surrounding_whitespace_is_trimmed() {
        let fields = input(json!({"title": "  hello  ", "code": "  print(1)  "}))
            .into_new_snippet()
            .expect("valid");
        assert_eq!(fields.title.as_str(), "hello");
        assert_eq!(fields.code.as_str(), "print(1)");
    }

    #[rstest]
    fn title_limit_applies_after_trimming() {
        let title = format!("x{}", " ".repeat(110));
        let fields = input(json!({"title": title, "code": "x"}))
            .into_new_snippet()
            .expect("fits once trimmed");
        assert_eq!(fields.title.as_str(), "x");
    }

    #[rstest]
    fn create_defaults_come_from_the_field_table() {
        let default = |name: &str| SNIPPET_FIELDS.get(name).and_then(|f| f.default);
        let fields = input(json!({"code": "x"})).into_new_snippet().expect("valid");
        assert_eq!(default("title"), Some(FieldDefault::Text("")));
        assert_eq!(fields.title.as_str(), "");
        assert_eq!(default("linenos"), Some(FieldDefault::Flag(fields.linenos)));
        assert_eq!(default("language"), Some(FieldDefault::Text(fields.language.as_str())));
        assert_eq!(default("style"), Some(FieldDefault::Text(fields.style.as_str())));
    }

    #[rstest]
    #[case(json!({"code": "   \n"}), "code", "blank")]
    #[case(json!({"code": "x", "language": "not-a-real-language"}), "language", "invalid_choice")]
    #[case(json!({"code": "x", "style": "Monokai"}), "style", "invalid_choice")]
    #[case(json!({"code": "x", "title": "t".repeat(101)}), "title", "max_length")]
    fn single_field_failures(#[case] body: Value, #[case] field: &str, #[case] code: &str) {
        let err = input(body)
            .validate(WriteMode::Create)
            .expect_err("invalid");
        assert_eq!(field_codes(&err), vec![(field.to_owned(), code.to_owned())]);
    }

    #[rstest]
    fn all_failures_are_reported_together() {
        let err = input(json!({
            "title": "é".repeat(101),
            "language": "klingon",
            "style": "neon",
        }))
        .validate(WriteMode::Create)
        .expect_err("invalid");
        let fields: Vec<String> = field_codes(&err).into_iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec!["title", "code", "language", "style"]);
    }

    #[rstest]
    fn title_limit_counts_characters() {
        let changes = input(json!({"title": "é".repeat(100)}))
            .validate(WriteMode::Partial)
            .expect("100 characters fit");
        assert_eq!(changes.title.map(|t| t.as_str().chars().count()), Some(100));
    }

    #[rstest]
    fn read_only_and_unknown_keys_are_ignored() {
        let fields = input(json!({
            "code": "x",
            "id": 99,
            "owner": "mallory",
            "url": "http://evil/",
            "highlight": "http://evil/h",
            "colour": "red",
        }))
        .into_new_snippet()
        .expect("valid");
        assert_eq!(fields.code.as_str(), "x");
    }

    #[rstest]
    fn blank_title_is_allowed() {
        let changes = input(json!({"title": "", "code": "x"}))
            .validate(WriteMode::Replace)
            .expect("valid");
        assert_eq!(changes.title.map(|t| t.as_str().to_owned()), Some(String::new()));
    }
}
