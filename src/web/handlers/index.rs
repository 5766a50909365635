//! Page render handler.

use axum::{Extension, extract::State, response::IntoResponse};

use super::page::{IndexTemplate, current_session};
use crate::state::AppState;
use crate::web::middleware::session::CurrentSession;

/// Renders the page for the current session.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentSession>,
) -> impl IntoResponse {
    let session = current_session(&state, &current).await;
    IndexTemplate::new(&state, session.is_authenticated())
}
