//! Shared validation helpers for inbound HTTP adapters.
//!
//! Field failures are collected into [`FieldErrors`] so one response
//! reports every offending field.

use serde::Serialize;
use serde_json::json;

use crate::domain::Error;

/// Machine-readable reason attached to a field failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum FieldErrorCode {
    Required,
    Blank,
    Null,
    MaxLength,
    InvalidChoice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct FieldError {
    field: &'static str,
    code: FieldErrorCode,
    message: String,
}

/// Accumulator for field-level validation failures.
#[derive(Debug, Default)]
pub(crate) struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub(crate) fn push(
        &mut self,
        field: &'static str,
        code: FieldErrorCode,
        message: impl Into<String>,
    ) {
        self.0.push(FieldError {
            field,
            code,
            message: message.into(),
        });
    }

    pub(crate) fn required(&mut self, field: &'static str) {
        self.push(field, FieldErrorCode::Required, "This field is required.");
    }

    pub(crate) fn blank(&mut self, field: &'static str) {
        self.push(field, FieldErrorCode::Blank, "This field may not be blank.");
    }

    pub(crate) fn null(&mut self, field: &'static str) {
        self.push(field, FieldErrorCode::Null, "This field may not be null.");
    }

    pub(crate) fn max_length(&mut self, field: &'static str, max: usize) {
        self.push(
            field,
            FieldErrorCode::MaxLength,
            format!("Ensure this field has no more than {max} characters."),
        );
    }

    pub(crate) fn invalid_choice(&mut self, field: &'static str, value: &str) {
        self.push(
            field,
            FieldErrorCode::InvalidChoice,
            format!("\"{value}\" is not a valid choice."),
        );
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok` when nothing was recorded, otherwise an `invalid_request` error
    /// listing every failure under `details.fieldErrors`.
    pub(crate) fn into_result(self) -> Result<(), Error> {
        if self.is_empty() {
            return Ok(());
        }
        let summary = self
            .0
            .iter()
            .map(|failure| failure.field)
            .collect::<Vec<_>>()
            .join(", ");
        Err(
            Error::invalid_request(format!("invalid fields: {summary}"))
                .with_details(json!({ "fieldErrors": self.0 })),
        )
    }
}

/// Error raised when a request body cannot be decoded at all.
pub(crate) fn malformed_body_error(reason: impl std::fmt::Display) -> Error {
    Error::invalid_request(format!("malformed request body: {reason}"))
        .with_details(json!({ "code": "malformed_body" }))
}
