//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::{generate_handler, index_handler, login_handler, logout_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Page routes.
///
/// # Endpoints
///
/// - `GET /` - Login form or title form, depending on the session
pub fn page_routes() -> Router<AppState> {
    Router::new().route("/", get(index_handler))
}

/// Form action routes. Each performs one operation and renders the page.
///
/// # Endpoints
///
/// - `POST /login` - Authenticate against the identity API
/// - `POST /logout` - Clear the session's credentials
/// - `POST /generate` - Generate an article for a title
pub fn action_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login_handler))
        .route("/logout", post(logout_handler))
        .route("/generate", post(generate_handler))
}
