//! Login form handler.

use axum::{
    Extension, Form,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use super::page::{Flash, IndexTemplate, current_session};
use crate::state::AppState;
use crate::web::middleware::session::{CurrentSession, attach_session_cookie};

/// Fields posted by the sidebar login form.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub password: String,
}

/// Handles a login submission.
///
/// # Endpoint
///
/// `POST /login` (`application/x-www-form-urlencoded`)
///
/// # Behavior
///
/// On success the authenticated session returned by
/// [`crate::application::services::SessionAuthenticator::login`] replaces the
/// browser's stored session. A browser without a live session gets a new one
/// and a `Set-Cookie` header. On failure nothing is stored and the page is
/// rendered with the error.
///
/// # Response Codes
///
/// - **200 OK**: Logged in
/// - **400 Bad Request**: Phone or password missing
/// - **401 Unauthorized**: Identity API rejected the login
/// - **422 Unprocessable Entity**: Identity API rejected the input format
/// - **502 Bad Gateway**: Identity API unreachable or answered nonsense
pub async fn login_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentSession>,
    Form(form): Form<LoginForm>,
) -> Response {
    match state.auth_service.login(&form.phone, &form.password).await {
        Ok(session) => {
            let created = match current.id() {
                Some(id) if state.sessions.save(id, session.clone()).await => None,
                _ => Some(state.sessions.create(session).await),
            };

            let mut response = IndexTemplate::new(&state, true)
                .with_flash(Flash::success("Logged in successfully."))
                .into_response();

            if let Some(id) = created {
                tracing::debug!(session = ?id, "Session stored after login");
                attach_session_cookie(&mut response, &id, state.cookie_secure);
            }

            response
        }
        Err(e) => {
            let session = current_session(&state, &current).await;
            let page = IndexTemplate::new(&state, session.is_authenticated())
                .with_flash(Flash::error(e.to_string()));

            (e.status_code(), page).into_response()
        }
    }
}
