//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every endpoint from the inbound HTTP layer, the
//! document and envelope schemas, and the session cookie security scheme.
//! Swagger UI serves it in debug builds and `openapi-dump` prints it.

use crate::inbound::http::representation::{
    RelatedValue, SnippetDocument, SnippetInput, UserDocument,
};
use crate::inbound::http::root::ApiRoot;
use crate::inbound::http::schemas::{
    EndpointMetadataSchema, ErrorCodeSchema, ErrorSchema, SnippetPageSchema, UserPageSchema,
};
use crate::inbound::http::users::LoginRequest;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Snippets API",
        description = "Code snippets with owners, hyperlinked documents and highlighted HTML pages."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::root::api_root,
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::snippets::list_snippets,
        crate::inbound::http::snippets::create_snippet,
        crate::inbound::http::snippets::snippet_list_metadata,
        crate::inbound::http::snippets::get_snippet,
        crate::inbound::http::snippets::replace_snippet,
        crate::inbound::http::snippets::patch_snippet,
        crate::inbound::http::snippets::delete_snippet,
        crate::inbound::http::snippets::snippet_highlight,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ApiRoot,
        LoginRequest,
        SnippetInput,
        SnippetDocument,
        UserDocument,
        RelatedValue,
        SnippetPageSchema,
        UserPageSchema,
        EndpointMetadataSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "snippets", description = "Code snippets and their highlighted pages"),
        (name = "users", description = "Users, login and logout"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
