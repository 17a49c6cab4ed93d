//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{body::MessageBody, test};
use serde_json::json;

use super::state::{HttpState, RepresentationSettings};
use crate::domain::{SnippetService, UserId, UserService, Username};
use crate::outbound::memory::InMemoryStore;

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// State over a fresh store holding `alice` and `bob`, both with password
/// `secret`.
pub async fn seeded_state(
    representation: RepresentationSettings,
) -> (HttpState, InMemoryStore, UserId, UserId) {
    let store = InMemoryStore::new();
    let alice = store
        .seed_user(Username::new("alice").expect("username"), "secret")
        .await;
    let bob = store
        .seed_user(Username::new("bob").expect("username"), "secret")
        .await;
    let shared = Arc::new(store.clone());
    let state = HttpState::new(
        SnippetService::new(shared.clone()),
        UserService::new(shared.clone(), shared.clone()),
        shared,
        representation,
    );
    (state, store, alice, bob)
}

/// Log `username` in through `/api/v1/login` and return the session cookie.
pub async fn login_cookie<S, B>(app: &S, username: &str) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let request = test::TestRequest::post()
        .uri("/api/v1/login")
        .set_json(json!({ "username": username, "password": "secret" }))
        .to_request();
    let response = test::call_service(app, request).await;
    assert!(response.status().is_success(), "login failed");
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
        .expect("session cookie")
}
