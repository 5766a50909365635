//! Logout handler.

use axum::{Extension, extract::State, response::IntoResponse};

use super::page::{Flash, IndexTemplate};
use crate::state::AppState;
use crate::web::middleware::session::CurrentSession;

/// Clears the session's credentials. The session cookie itself is kept.
///
/// Anonymous requests have nothing to clear and store nothing.
///
/// # Endpoint
///
/// `POST /logout`
pub async fn logout_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentSession>,
) -> impl IntoResponse {
    if let Some(id) = current.id()
        && let Some(mut session) = state.sessions.get(id).await
    {
        state.auth_service.logout(&mut session);
        state.sessions.save(id, session).await;
        tracing::info!(session = ?id, "Logged out");
    }

    IndexTemplate::new(&state, false).with_flash(Flash::info("Logged out."))
}
