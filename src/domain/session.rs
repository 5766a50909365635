//! Authentication state of one browser session.

use std::fmt;

/// Token type assumed when the identity API does not report one.
pub const DEFAULT_TOKEN_TYPE: &str = "Bearer";

/// Authentication state of a single user session.
///
/// The session is authenticated exactly when `access_token` is present.
/// Constructors never store an empty token.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    access_token: Option<String>,
    token_type: String,
}

impl Session {
    /// Creates an authenticated session.
    ///
    /// Returns `None` when `access_token` is empty, which keeps the
    /// token-present-iff-authenticated invariant intact.
    pub fn authenticated(access_token: impl Into<String>, token_type: Option<String>) -> Option<Self> {
        let access_token = access_token.into();
        if access_token.is_empty() {
            return None;
        }

        let token_type = token_type
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TOKEN_TYPE.to_string());

        Some(Self {
            access_token: Some(access_token),
            token_type,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// Value suitable for an `Authorization` header, e.g. `Bearer abc`.
    pub fn authorization(&self) -> Option<String> {
        self.access_token
            .as_ref()
            .map(|token| format!("{} {}", self.token_type, token))
    }

    /// Resets to the unauthenticated state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self {
            access_token: None,
            token_type: DEFAULT_TOKEN_TYPE.to_string(),
        }
    }
}

// Tokens stay out of logs.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .field("token_type", &self.token_type)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unauthenticated() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.access_token(), None);
        assert_eq!(session.token_type(), "Bearer");
        assert_eq!(session.authorization(), None);
    }

    #[test]
    fn test_authenticated_defaults_token_type() {
        let session = Session::authenticated("abc", None).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.access_token(), Some("abc"));
        assert_eq!(session.token_type(), "Bearer");
        assert_eq!(session.authorization().as_deref(), Some("Bearer abc"));
    }

    #[test]
    fn test_authenticated_keeps_reported_token_type() {
        let session = Session::authenticated("abc", Some("JWT".to_string())).unwrap();
        assert_eq!(session.token_type(), "JWT");
    }

    #[test]
    fn test_empty_token_is_rejected() {
        assert!(Session::authenticated("", None).is_none());
    }

    #[test]
    fn test_clear_resets_state() {
        let mut session = Session::authenticated("abc", Some("JWT".to_string())).unwrap();
        session.clear();
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_debug_hides_token() {
        let session = Session::authenticated("secret-token", None).unwrap();
        assert!(!format!("{session:?}").contains("secret-token"));
    }
}
