//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod error;
pub mod health;
pub mod listing;
pub mod representation;
pub mod root;
pub mod schemas;
pub mod session;
pub mod snippets;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;

/// Path prefix every API route is mounted under.
pub const API_PREFIX: &str = "/api/v1";

/// Register every API route and the extractor configs that shape their
/// errors. Mount under [`API_PREFIX`] inside a session-wrapped scope.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use snippets::inbound::http::{API_PREFIX, configure};
///
/// let app = App::new().service(web::scope(API_PREFIX).configure(configure));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(error::json_config())
        .app_data(error::path_config())
        .service(root::api_root)
        .service(users::login)
        .service(users::logout)
        .service(users::list_users)
        .service(users::get_user)
        .service(snippets::list_snippets)
        .service(snippets::create_snippet)
        .service(snippets::snippet_list_metadata)
        .service(snippets::get_snippet)
        .service(snippets::replace_snippet)
        .service(snippets::patch_snippet)
        .service(snippets::delete_snippet)
        .service(snippets::snippet_highlight);
}
