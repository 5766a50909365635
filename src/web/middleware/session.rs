//! Cookie-based session middleware for the web UI.

use axum::{
    extract::{Request, State},
    http::{HeaderValue, header::SET_COOKIE},
    middleware::Next,
    response::Response,
};

use crate::domain::repositories::SessionId;
use crate::state::AppState;
use crate::utils::cookie::{find_cookie, session_cookie};

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "articlegen_session";

/// The stored session a request belongs to, if any.
///
/// `None` for anonymous visitors: no cookie, a malformed one, or one naming
/// a session that no longer exists. Anonymous requests see an empty
/// [`crate::domain::session::Session`] and nothing is stored for them.
#[derive(Debug, Clone, Default)]
pub struct CurrentSession(pub Option<SessionId>);

impl CurrentSession {
    pub fn id(&self) -> Option<&SessionId> {
        self.0.as_ref()
    }
}

/// Resolves the browser's session and exposes it to handlers.
///
/// # Cookie Format
///
/// ```text
/// Cookie: articlegen_session=<64 hex chars>
/// ```
///
/// # Flow
///
/// 1. Extract `articlegen_session` cookie from request
/// 2. If it names a live session, mark it as used
/// 3. Insert [`CurrentSession`] into request extensions
///
/// Sessions are only created by a successful login (see
/// [`attach_session_cookie`]), so anonymous traffic never grows the store.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::web::middleware::session;
///
/// let app = Router::new()
///     .route("/", get(index_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), session::layer));
/// ```
pub async fn layer(State(st): State<AppState>, mut req: Request, next: Next) -> Response {
    let mut current = CurrentSession::default();

    if let Some(id) =
        find_cookie(req.headers(), SESSION_COOKIE).and_then(|raw| SessionId::parse(&raw))
        && st.sessions.get(&id).await.is_some()
    {
        current.0 = Some(id);
    }

    req.extensions_mut().insert(current);

    next.run(req).await
}

/// Appends the `Set-Cookie` header for a newly stored session.
pub fn attach_session_cookie(response: &mut Response, id: &SessionId, secure: bool) {
    match HeaderValue::from_str(&session_cookie(SESSION_COOKIE, id.as_str(), secure)) {
        Ok(value) => {
            response.headers_mut().append(SET_COOKIE, value);
        }
        Err(e) => tracing::error!(session = ?id, "Invalid session cookie value: {}", e),
    }
}
