//! Snippet API handlers.
//!
//! ```text
//! GET    /api/v1/snippets?page=2
//! POST   /api/v1/snippets {"code":"print(1)"}
//! GET    /api/v1/snippets/1
//! PATCH  /api/v1/snippets/1 {"language":"rust"}
//! GET    /api/v1/snippets/1/highlight.html
//! ```
//!
//! Reads are open to everyone. Writes need a session, and updates and
//! deletes need the session user to own the snippet.

use std::collections::HashMap;

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpRequest, HttpResponse, delete, get, options, patch, post, put, web};
use pagination::Page;
use serde_json::Value;

use super::ApiResult;
use super::listing::{PagePlan, PageQuery};
use super::representation::{
    EndpointMetadata, Locate, Route, SNIPPET_FIELDS, SnippetDocument, SnippetInput, WriteMode,
};
use super::schemas::{EndpointMetadataSchema, ErrorSchema, SnippetPageSchema};
use super::session::SessionContext;
use super::state::HttpState;
use crate::domain::{Error, Snippet, SnippetId, UserId, Username, highlight};

const SNIPPET_LIST_METADATA: EndpointMetadata = EndpointMetadata {
    name: "Snippet List",
    description: "List all code snippets, or create a new snippet.",
    fields: SNIPPET_FIELDS,
};

/// Resolve the username of every distinct owner in `snippets`.
async fn owner_names(
    state: &HttpState,
    snippets: &[Snippet],
) -> Result<HashMap<UserId, Username>, Error> {
    let mut names = HashMap::new();
    for snippet in snippets {
        let owner = snippet.owner();
        if names.contains_key(&owner) {
            continue;
        }
        let user = state.users.find(owner).await?.ok_or_else(|| {
            Error::internal(format!("snippet {} references missing owner {owner}", snippet.id()))
        })?;
        names.insert(owner, user.username().clone());
    }
    Ok(names)
}

async fn render_one(
    state: &HttpState,
    snippet: &Snippet,
    locator: &dyn Locate,
) -> Result<SnippetDocument, Error> {
    let names = owner_names(state, std::slice::from_ref(snippet)).await?;
    render_with(&names, snippet, locator)
}

fn render_with(
    names: &HashMap<UserId, Username>,
    snippet: &Snippet,
    locator: &dyn Locate,
) -> Result<SnippetDocument, Error> {
    let owner = names
        .get(&snippet.owner())
        .ok_or_else(|| Error::internal("owner name was not resolved"))?;
    SnippetDocument::render(snippet, owner, locator)
}

/// List snippets, oldest first.
#[utoipa::path(
    get,
    path = "/api/v1/snippets",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of snippets", body = SnippetPageSchema),
        (status = 404, description = "Invalid page", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["snippets"],
    operation_id = "listSnippets",
    security([])
)]
#[get("/snippets", name = "snippet-list")]
pub async fn list_snippets(
    state: web::Data<HttpState>,
    req: HttpRequest,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<Page<SnippetDocument>>> {
    let count = state.snippets.count().await?;
    let plan = PagePlan::resolve(&query, state.representation.page_size, count)?;
    let snippets = state.snippets.list(plan.offset(), plan.limit()).await?;
    let names = owner_names(&state, &snippets).await?;
    let locator = state.locator(&req);
    let results = snippets
        .iter()
        .map(|snippet| render_with(&names, snippet, locator.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    let base = locator.locate(&Route::SnippetList)?;
    Ok(web::Json(plan.page(&base, count, results)))
}

/// Create a snippet owned by the session user.
#[utoipa::path(
    post,
    path = "/api/v1/snippets",
    request_body = SnippetInput,
    responses(
        (status = 201, description = "Snippet created", body = SnippetDocument,
            headers(("Location" = String, description = "URL of the new snippet"))),
        (status = 400, description = "Invalid snippet document", body = ErrorSchema),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["snippets"],
    operation_id = "createSnippet"
)]
#[post("/snippets")]
pub async fn create_snippet(
    state: web::Data<HttpState>,
    req: HttpRequest,
    session: SessionContext,
    payload: web::Json<SnippetInput>,
) -> ApiResult<HttpResponse> {
    let owner = session.require_user_id()?;
    let fields = payload.into_inner().into_new_snippet()?;
    let snippet = state.snippets.create(owner, fields).await?;
    let locator = state.locator(&req);
    let document = render_one(&state, &snippet, locator.as_ref()).await?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, document.url.clone()))
        .json(document))
}

/// Describe the snippet list endpoint.
#[utoipa::path(
    options,
    path = "/api/v1/snippets",
    responses(
        (status = 200, description = "Endpoint metadata", body = EndpointMetadataSchema)
    ),
    tags = ["snippets"],
    operation_id = "describeSnippets",
    security([])
)]
#[options("/snippets")]
pub async fn snippet_list_metadata(session: SessionContext) -> ApiResult<web::Json<Value>> {
    let can_create = session.user_id()?.is_some();
    Ok(web::Json(SNIPPET_LIST_METADATA.render(can_create)))
}

/// Fetch one snippet.
#[utoipa::path(
    get,
    path = "/api/v1/snippets/{id}",
    params(("id" = u64, Path, description = "Snippet identifier")),
    responses(
        (status = 200, description = "Snippet", body = SnippetDocument),
        (status = 404, description = "Unknown snippet", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["snippets"],
    operation_id = "getSnippet",
    security([])
)]
#[get("/snippets/{id}", name = "snippet-detail")]
pub async fn get_snippet(
    state: web::Data<HttpState>,
    req: HttpRequest,
    path: web::Path<u64>,
) -> ApiResult<web::Json<SnippetDocument>> {
    let snippet = state.snippets.get(SnippetId::new(path.into_inner())).await?;
    let locator = state.locator(&req);
    Ok(web::Json(render_one(&state, &snippet, locator.as_ref()).await?))
}

async fn update(
    state: web::Data<HttpState>,
    req: HttpRequest,
    session: SessionContext,
    id: SnippetId,
    input: SnippetInput,
    mode: WriteMode,
) -> ApiResult<web::Json<SnippetDocument>> {
    let actor = session.require_user_id()?;
    state.snippets.get_owned(actor, id).await?;
    let changes = input.validate(mode)?;
    let snippet = state.snippets.update(actor, id, changes).await?;
    let locator = state.locator(&req);
    Ok(web::Json(render_one(&state, &snippet, locator.as_ref()).await?))
}

/// Replace a snippet's writable fields. `code` is required; other omitted
/// fields keep their value.
#[utoipa::path(
    put,
    path = "/api/v1/snippets/{id}",
    params(("id" = u64, Path, description = "Snippet identifier")),
    request_body = SnippetInput,
    responses(
        (status = 200, description = "Snippet updated", body = SnippetDocument),
        (status = 400, description = "Invalid snippet document", body = ErrorSchema),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 403, description = "Not the owner", body = ErrorSchema),
        (status = 404, description = "Unknown snippet", body = ErrorSchema)
    ),
    tags = ["snippets"],
    operation_id = "replaceSnippet"
)]
#[put("/snippets/{id}")]
pub async fn replace_snippet(
    state: web::Data<HttpState>,
    req: HttpRequest,
    session: SessionContext,
    path: web::Path<u64>,
    payload: web::Json<SnippetInput>,
) -> ApiResult<web::Json<SnippetDocument>> {
    let id = SnippetId::new(path.into_inner());
    update(state, req, session, id, payload.into_inner(), WriteMode::Replace).await
}

/// Update only the fields present in the document.
#[utoipa::path(
    patch,
    path = "/api/v1/snippets/{id}",
    params(("id" = u64, Path, description = "Snippet identifier")),
    request_body = SnippetInput,
    responses(
        (status = 200, description = "Snippet updated", body = SnippetDocument),
        (status = 400, description = "Invalid snippet document", body = ErrorSchema),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 403, description = "Not the owner", body = ErrorSchema),
        (status = 404, description = "Unknown snippet", body = ErrorSchema)
    ),
    tags = ["snippets"],
    operation_id = "patchSnippet"
)]
#[patch("/snippets/{id}")]
pub async fn patch_snippet(
    state: web::Data<HttpState>,
    req: HttpRequest,
    session: SessionContext,
    path: web::Path<u64>,
    payload: web::Json<SnippetInput>,
) -> ApiResult<web::Json<SnippetDocument>> {
    let id = SnippetId::new(path.into_inner());
    update(state, req, session, id, payload.into_inner(), WriteMode::Partial).await
}

/// Delete a snippet.
#[utoipa::path(
    delete,
    path = "/api/v1/snippets/{id}",
    params(("id" = u64, Path, description = "Snippet identifier")),
    responses(
        (status = 204, description = "Snippet deleted"),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 403, description = "Not the owner", body = ErrorSchema),
        (status = 404, description = "Unknown snippet", body = ErrorSchema)
    ),
    tags = ["snippets"],
    operation_id = "deleteSnippet"
)]
#[delete("/snippets/{id}")]
pub async fn delete_snippet(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    let actor = session.require_user_id()?;
    state
        .snippets
        .delete(actor, SnippetId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Render a snippet as a standalone HTML page.
#[utoipa::path(
    get,
    path = "/api/v1/snippets/{id}/highlight.html",
    params(("id" = u64, Path, description = "Snippet identifier")),
    responses(
        (status = 200, description = "HTML page", content_type = "text/html", body = String),
        (status = 404, description = "Unknown snippet", body = ErrorSchema)
    ),
    tags = ["snippets"],
    operation_id = "highlightSnippet",
    security([])
)]
#[get("/snippets/{id}/highlight.html", name = "snippet-highlight")]
pub async fn snippet_highlight(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    let snippet = state.snippets.get(SnippetId::new(path.into_inner())).await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(highlight::render(&snippet)))
}
