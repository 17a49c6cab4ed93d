//! Builders for the store and the HTTP state wired over it.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use snippets::domain::{SnippetService, UserService, Username};
use snippets::inbound::http::state::{HttpState, RepresentationSettings};
use snippets::outbound::memory::InMemoryStore;

use super::config::AdminAccount;

/// Create the store, seed the admin account when configured and wrap the
/// services in shared HTTP state.
///
/// # Errors
/// Returns [`std::io::Error`] when the admin username is not a valid
/// username.
pub(super) async fn build_http_state(
    admin: Option<&AdminAccount>,
    representation: RepresentationSettings,
) -> std::io::Result<web::Data<HttpState>> {
    let store = Arc::new(InMemoryStore::new());
    if let Some(admin) = admin {
        let username = Username::new(admin.username.as_str()).map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid admin username {:?}: {err}", admin.username),
            )
        })?;
        let id = store.seed_user(username, admin.password.as_str()).await;
        info!(user_id = %id, username = %admin.username, "admin account seeded");
    }
    Ok(web::Data::new(HttpState::new(
        SnippetService::new(store.clone()),
        UserService::new(store.clone(), store.clone()),
        store,
        representation,
    )))
}
