//! The single page and the pieces every handler uses to render it.

use askama::Template;
use askama_web::WebTemplate;

use crate::domain::session::Session;
use crate::state::AppState;
use crate::web::middleware::session::CurrentSession;

/// Message shown above the form after an action.
pub struct Flash {
    pub kind: &'static str,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: "success",
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: "error",
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: "info",
            message: message.into(),
        }
    }
}

/// Template for the application page.
///
/// Renders `templates/index.html` with:
/// - Login form or logout button in the sidebar
/// - Title form (only when authenticated)
/// - Flash message and generated article, when present
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub authenticated: bool,
    pub generation_enabled: bool,
    pub flash: Option<Flash>,
    pub title: String,
    pub article: Option<String>,
}

impl IndexTemplate {
    pub fn new(state: &AppState, authenticated: bool) -> Self {
        Self {
            authenticated,
            generation_enabled: state.is_generation_enabled(),
            flash: None,
            title: String::new(),
            article: None,
        }
    }

    pub fn with_flash(mut self, flash: Flash) -> Self {
        self.flash = Some(flash);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_article(mut self, article: impl Into<String>) -> Self {
        self.article = Some(article.into());
        self
    }
}

/// Loads the request's session. Anonymous visitors, and sessions that
/// expired mid-request, get an empty one.
pub async fn current_session(state: &AppState, current: &CurrentSession) -> Session {
    match current.id() {
        Some(id) => state.sessions.get(id).await.unwrap_or_default(),
        None => Session::default(),
    }
}
