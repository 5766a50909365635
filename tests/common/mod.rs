#![allow(dead_code)]

use articlegen::application::services::{ArticleRequester, SessionAuthenticator};
use articlegen::domain::repositories::SessionRepository;
use articlegen::infrastructure::generation::GeminiClient;
use articlegen::infrastructure::identity::HttpIdentityClient;
use articlegen::infrastructure::persistence::MemorySessionRepository;
use articlegen::state::AppState;
use articlegen::web;
use articlegen::web::middleware::session;
use axum::http::{HeaderValue, header};
use axum::{Router, middleware};
use axum_test::{TestRequest, TestResponse, TestServer};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const PHONE: &str = "+911234567890";
pub const PASSWORD: &str = "correct-horse";
pub const GEMINI_KEY: &str = "test-gemini-key";
pub const GEMINI_MODEL: &str = "gemini-1.5-flash";

pub const LOGIN_PATH: &str = "/api/v1/auth/login";
pub const GENERATE_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

/// Builds state pointing at fake upstream servers.
///
/// `gemini_uri` of `None` leaves generation disabled.
pub fn create_test_state(identity_uri: &str, gemini_uri: Option<&str>) -> AppState {
    let identity = HttpIdentityClient::new(identity_uri, Duration::from_secs(2)).unwrap();
    let auth_service = Arc::new(SessionAuthenticator::new(Arc::new(identity)));

    let article_service = gemini_uri.map(|uri| {
        let client = GeminiClient::new(GEMINI_KEY, GEMINI_MODEL, Some(Duration::from_secs(5)))
            .unwrap()
            .with_base_url(format!("{uri}/v1beta"));
        Arc::new(ArticleRequester::new(Arc::new(client)))
    });

    let sessions: Arc<dyn SessionRepository> = Arc::new(MemorySessionRepository::new());

    AppState::new(auth_service, article_service, sessions, false)
}

/// Web routes with the session middleware, without rate limiting.
pub fn web_app(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::page_routes())
        .merge(web::routes::action_routes())
        .layer(middleware::from_fn_with_state(state.clone(), session::layer))
        .with_state(state)
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(web_app(state)).unwrap()
}

/// Returns the `name=value` pair from the response's session `Set-Cookie`.
pub fn session_cookie_pair(response: &TestResponse) -> String {
    let set_cookie = response.header(header::SET_COOKIE);
    set_cookie
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

/// A well-formed session cookie naming no stored session.
pub fn unknown_session_cookie() -> String {
    format!("{}={}", session::SESSION_COOKIE, "ab".repeat(32))
}

pub fn with_cookie(request: TestRequest, cookie: &str) -> TestRequest {
    request.add_header(header::COOKIE, HeaderValue::from_str(cookie).unwrap())
}

/// Mounts a successful login for [`PHONE`]/[`PASSWORD`].
pub async fn mount_login_success(identity: &MockServer) {
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-123",
            "token_type": "bearer"
        })))
        .mount(identity)
        .await;
}

/// Logs in from a fresh browser; returns the issued cookie pair.
pub async fn logged_in_cookie(server: &TestServer, identity: &MockServer) -> String {
    mount_login_success(identity).await;

    let response = server
        .post("/login")
        .form(&[("phone", PHONE), ("password", PASSWORD)])
        .await;
    response.assert_status_ok();

    session_cookie_pair(&response)
}

/// Gemini response body carrying `text` as the only part.
pub fn gemini_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": text }]
            },
            "finishReason": "STOP"
        }]
    })
}
