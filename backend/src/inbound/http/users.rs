//! Users and session API handlers.
//!
//! ```text
//! POST /api/v1/login {"username":"admin","password":"password"}
//! POST /api/v1/logout
//! GET  /api/v1/users?page=2
//! GET  /api/v1/users/1
//! ```

use actix_web::{HttpRequest, HttpResponse, get, post, web};
use pagination::Page;
use serde::{Deserialize, Serialize};

use super::ApiResult;
use super::listing::{PagePlan, PageQuery};
use super::representation::{Locate, Route, UserDocument};
use super::schemas::{ErrorSchema, UserPageSchema};
use super::session::SessionContext;
use super::state::HttpState;
use super::validation::FieldErrors;
use crate::domain::{Error, LoginCredentials, LoginValidationError, UserId};

/// Login request body for `POST /api/v1/login`.
///
/// Example JSON:
/// `{"username":"admin","password":"password"}`
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    fn into_credentials(self) -> Result<LoginCredentials, Error> {
        let mut errors = FieldErrors::default();
        if self.username.is_none() {
            errors.required("username");
        }
        if self.password.is_none() {
            errors.required("password");
        }
        errors.into_result()?;
        let username = self.username.unwrap_or_default();
        let password = self.password.unwrap_or_default();
        LoginCredentials::try_from_parts(&username, &password).map_err(map_login_validation_error)
    }
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    let mut errors = FieldErrors::default();
    match err {
        LoginValidationError::EmptyUsername => errors.blank("username"),
        LoginValidationError::EmptyPassword => errors.blank("password"),
    }
    match errors.into_result() {
        Ok(()) => Error::invalid_request(err.to_string()),
        Err(error) => error,
    }
}

/// Authenticate a user and establish a session.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Invalid credentials", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials = payload.into_inner().into_credentials()?;
    let user_id = state.login.authenticate(&credentials).await?;
    session.persist_user(user_id)?;
    Ok(HttpResponse::Ok().finish())
}

/// End the current session.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses(
        (status = 204, description = "Session cleared")
    ),
    tags = ["users"],
    operation_id = "logout",
    security([])
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.purge();
    HttpResponse::NoContent().finish()
}

/// List users with their snippets.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use snippets::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/users",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of users", body = UserPageSchema),
        (status = 404, description = "Invalid page", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers",
    security([])
)]
#[get("/users", name = "user-list")]
pub async fn list_users(
    state: web::Data<HttpState>,
    req: HttpRequest,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<Page<UserDocument>>> {
    let count = state.users.count().await?;
    let plan = PagePlan::resolve(&query, state.representation.page_size, count)?;
    let entries = state.users.list(plan.offset(), plan.limit()).await?;
    let locator = state.locator(&req);
    let style = state.representation.user_snippets;
    let results = entries
        .iter()
        .map(|entry| UserDocument::render(entry, style, locator.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    let base = locator.locate(&Route::UserList)?;
    Ok(web::Json(plan.page(&base, count, results)))
}

/// Fetch one user with their snippets.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserDocument),
        (status = 404, description = "Unknown user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser",
    security([])
)]
#[get("/users/{id}", name = "user-detail")]
pub async fn get_user(
    state: web::Data<HttpState>,
    req: HttpRequest,
    path: web::Path<u64>,
) -> ApiResult<web::Json<UserDocument>> {
    let entry = state.users.get(UserId::new(path.into_inner())).await?;
    let locator = state.locator(&req);
    Ok(web::Json(UserDocument::render(
        &entry,
        state.representation.user_snippets,
        locator.as_ref(),
    )?))
}
