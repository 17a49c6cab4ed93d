//! API entry point listing the top-level collections.

use actix_web::{HttpRequest, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use super::ApiResult;
use super::representation::Route;
use super::schemas::ErrorSchema;
use super::state::HttpState;

/// Links to the top-level collections.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiRoot {
    #[schema(example = "http://localhost:8080/api/v1/users")]
    pub users: String,
    #[schema(example = "http://localhost:8080/api/v1/snippets")]
    pub snippets: String,
}

/// Describe the API's collections.
#[utoipa::path(
    get,
    path = "/api/v1/",
    responses(
        (status = 200, description = "Collection links", body = ApiRoot),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["snippets"],
    operation_id = "apiRoot",
    security([])
)]
#[get("/", name = "api-root")]
pub async fn api_root(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> ApiResult<web::Json<ApiRoot>> {
    let locator = state.locator(&req);
    Ok(web::Json(ApiRoot {
        users: locator.locate(&Route::UserList)?.into(),
        snippets: locator.locate(&Route::SnippetList)?.into(),
    }))
}
