//! Handler for the health check endpoint.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::health::{
    ComponentCheck, ComponentStatus, HealthChecks, HealthResponse, ServiceStatus, SessionCheck,
};
use crate::state::AppState;

/// Reports whether the page can serve both of its actions.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Generation enabled
/// - **503 Service Unavailable**: Generation disabled (no API key)
///
/// No remote API is contacted; the identity and Gemini endpoints are only
/// called on user actions.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "generation": { "status": "ok", "message": "Gemini API key configured" },
///     "sessions": { "status": "ok", "active": 3 }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Response {
    let generation = if state.is_generation_enabled() {
        ComponentCheck {
            status: ComponentStatus::Ok,
            message: "Gemini API key configured",
        }
    } else {
        ComponentCheck {
            status: ComponentStatus::Error,
            message: "GEMINI_API_KEY is missing",
        }
    };

    let (status, code) = match generation.status {
        ComponentStatus::Ok => (ServiceStatus::Healthy, StatusCode::OK),
        ComponentStatus::Error => (ServiceStatus::Degraded, StatusCode::SERVICE_UNAVAILABLE),
    };

    let body = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        checks: HealthChecks {
            generation,
            sessions: SessionCheck {
                status: ComponentStatus::Ok,
                active: state.sessions.count().await,
            },
        },
    };

    (code, Json(body)).into_response()
}
