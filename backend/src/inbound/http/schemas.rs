//! OpenAPI schema definitions for domain and envelope types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serialised shape but live in the inbound
//! adapter layer where framework concerns belong.

use utoipa::ToSchema;

use super::representation::{SnippetDocument, UserDocument};

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Authentication failed or is missing.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// Authenticated but not permitted to perform this action.
    #[schema(rename = "forbidden")]
    Forbidden,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "invalid fields: code")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(rename = "traceId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details, such as `fieldErrors`.
    details: Option<serde_json::Value>,
}

/// Page of snippet documents.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SnippetPageSchema {
    /// Total number of snippets.
    count: usize,
    /// Link to the following page.
    #[schema(example = "http://localhost:8080/api/v1/snippets?page=2")]
    next: Option<String>,
    /// Link to the preceding page.
    previous: Option<String>,
    results: Vec<SnippetDocument>,
}

/// Page of user documents.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserPageSchema {
    /// Total number of users.
    count: usize,
    /// Link to the following page.
    #[schema(example = "http://localhost:8080/api/v1/users?page=2")]
    next: Option<String>,
    /// Link to the preceding page.
    previous: Option<String>,
    results: Vec<UserDocument>,
}

/// Metadata returned by `OPTIONS` requests.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EndpointMetadataSchema {
    #[schema(example = "Snippet List")]
    name: String,
    description: String,
    #[schema(example = json!(["application/json"]))]
    renders: Vec<String>,
    #[schema(example = json!(["application/json"]))]
    parses: Vec<String>,
    /// Field descriptions keyed by method. Only present for sessions that
    /// may create.
    actions: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_code_schema_has_expected_name() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        // utoipa replaces :: with . in schema names
        assert_eq!(ErrorCodeSchema::name(), "crate.domain.ErrorCode");
        for code in [
            "invalid_request",
            "unauthorized",
            "forbidden",
            "not_found",
            "internal_error",
        ] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }

    #[test]
    fn error_schema_uses_wire_field_names() {
        let schema_json = schema_to_json::<ErrorSchema>();
        assert_eq!(ErrorSchema::name(), "crate.domain.Error");
        assert!(schema_json.contains("traceId"), "schema should use camelCase");
        assert!(!schema_json.contains("trace_id"));
    }

    #[test]
    fn snippet_page_references_snippet_documents() {
        let schema_json = schema_to_json::<SnippetPageSchema>();
        assert!(schema_json.contains("SnippetDocument"));
        assert!(schema_json.contains("previous"));
    }

    #[test]
    fn user_page_references_user_documents() {
        let schema_json = schema_to_json::<UserPageSchema>();
        assert!(schema_json.contains("UserDocument"));
    }
}
