//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`          - Page (anonymous visits store no session)
//! - `POST /login`     - Login action; sets the session cookie (rate limited)
//! - `POST /logout`    - Logout action (rate limited)
//! - `POST /generate`  - Generate action (rate limited)
//! - `GET  /health`    - Health check (no session)
//! - `/static/*`       - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on form actions
//! - **Session** - Cookie-based session resolution on page and actions
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::middleware::session;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let actions = web::routes::action_routes().layer(rate_limit::action_layer());

    let web_router = Router::new()
        .merge(web::routes::page_routes())
        .merge(actions)
        .layer(middleware::from_fn_with_state(state.clone(), session::layer));

    let router = Router::new()
        .merge(web_router)
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
