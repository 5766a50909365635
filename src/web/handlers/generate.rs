//! Article generation form handler.

use axum::{
    Extension, Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use super::page::{Flash, IndexTemplate, current_session};
use crate::error::GenerationError;
use crate::state::AppState;
use crate::web::middleware::session::CurrentSession;

/// Fields posted by the title form.
#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub title: String,
}

/// Handles a title submission.
///
/// # Endpoint
///
/// `POST /generate` (`application/x-www-form-urlencoded`)
///
/// # Preconditions
///
/// - The session must be authenticated. The token is not forwarded to the
///   model; this is a UI gate only.
/// - A Gemini API key must be configured.
///
/// Neither failed precondition results in a network call.
///
/// # Response Codes
///
/// - **200 OK**: Article rendered
/// - **400 Bad Request**: Title blank
/// - **401 Unauthorized**: Session not logged in
/// - **502 Bad Gateway**: Model call failed
/// - **503 Service Unavailable**: Generation disabled (no API key)
pub async fn generate_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentSession>,
    Form(form): Form<GenerateForm>,
) -> Response {
    let session = current_session(&state, &current).await;
    if !session.is_authenticated() {
        return (
            StatusCode::UNAUTHORIZED,
            IndexTemplate::new(&state, false),
        )
            .into_response();
    }

    let page = IndexTemplate::new(&state, true).with_title(form.title.trim());

    let Some(article_service) = state.article_service.as_ref() else {
        // The page already carries the missing-key banner.
        return (GenerationError::ConfigMissing.status_code(), page).into_response();
    };

    match article_service.generate(&form.title).await {
        Ok(article) => page.with_article(article.into_string()).into_response(),
        Err(e) => (e.status_code(), page.with_flash(Flash::error(e.to_string()))).into_response(),
    }
}
