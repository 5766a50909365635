//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{ArticleRequester, SessionAuthenticator};
use crate::domain::repositories::SessionRepository;
use crate::infrastructure::generation::GeminiClient;
use crate::infrastructure::identity::HttpIdentityClient;

pub type Authenticator = SessionAuthenticator<HttpIdentityClient>;
pub type Requester = ArticleRequester<GeminiClient>;

/// State shared by every request.
///
/// `article_service` is `None` when no Gemini API key is configured; the
/// generate action is then disabled.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<Authenticator>,
    pub article_service: Option<Arc<Requester>>,
    pub sessions: Arc<dyn SessionRepository>,
    pub cookie_secure: bool,
}

impl AppState {
    pub fn new(
        auth_service: Arc<Authenticator>,
        article_service: Option<Arc<Requester>>,
        sessions: Arc<dyn SessionRepository>,
        cookie_secure: bool,
    ) -> Self {
        Self {
            auth_service,
            article_service,
            sessions,
            cookie_secure,
        }
    }

    pub fn is_generation_enabled(&self) -> bool {
        self.article_service.is_some()
    }
}
