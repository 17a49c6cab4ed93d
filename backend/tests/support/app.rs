//! Shared app construction for HTTP integration tests.

use std::sync::Arc;

use actix_http::Request;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::{
    App,
    body::BoxBody,
    dev::{Service, ServiceResponse},
    test::{self, TestRequest},
    web,
};
use serde_json::{Value, json};
use snippets::Trace;
use snippets::domain::{SnippetService, UserService, Username};
use snippets::inbound::http::state::{HttpState, RepresentationSettings};
use snippets::inbound::http::{API_PREFIX, configure};
use snippets::outbound::memory::InMemoryStore;

/// Password shared by every seeded account.
pub const PASSWORD: &str = "secret";

/// Store seeded with `alice` and `bob`.
pub async fn seeded_store() -> InMemoryStore {
    let store = InMemoryStore::new();
    for name in ["alice", "bob"] {
        store
            .seed_user(Username::new(name).expect("username"), PASSWORD)
            .await;
    }
    store
}

/// Build the API over `store` with the given representation settings.
pub async fn init_app(
    store: InMemoryStore,
    representation: RepresentationSettings,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    let shared = Arc::new(store);
    let state = HttpState::new(
        SnippetService::new(shared.clone()),
        UserService::new(shared.clone(), shared.clone()),
        shared,
        representation,
    );
    let session = SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build();
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .service(web::scope(API_PREFIX).wrap(session).configure(configure)),
    )
    .await
}

/// Log in and return the session cookie.
pub async fn login<S>(app: &S, username: &str) -> Cookie<'static>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let response = test::call_service(
        app,
        TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "username": username, "password": PASSWORD }))
            .to_request(),
    )
    .await;
    assert!(response.status().is_success(), "login as {username} failed");
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
        .expect("session cookie")
}

/// Send `request` and decode the JSON body, returning the status too.
pub async fn send<S>(app: &S, request: TestRequest) -> (actix_web::http::StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let response = test::call_service(app, request.to_request()).await;
    let status = response.status();
    let body = test::read_body(response).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|_| Value::String(
            String::from_utf8_lossy(&body).into_owned(),
        ))
    };
    (status, value)
}

/// Create a snippet as the holder of `cookie` and return its document.
pub async fn create<S>(app: &S, cookie: &Cookie<'static>, body: Value) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let (status, value) = send(
        app,
        TestRequest::post()
            .uri("/api/v1/snippets")
            .cookie(cookie.clone())
            .set_json(body),
    )
    .await;
    assert_eq!(status, actix_web::http::StatusCode::CREATED, "{value}");
    value
}
