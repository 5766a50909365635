//! Repository trait for hosted browser sessions.

use async_trait::async_trait;
use rand::Rng;
use std::fmt;
use std::time::Duration;

use crate::domain::session::Session;

/// Opaque handle identifying one browser session.
///
/// Generated from 32 random bytes, hex-encoded (64 characters).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Generates a fresh random session id.
    pub fn generate() -> Self {
        let bytes: [u8; 32] = rand::rng().random();
        Self(hex::encode(bytes))
    }

    /// Accepts a client-supplied id only if it has the generated shape.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.len() == 64 && raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            Some(Self(raw.to_ascii_lowercase()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Prints an 8-character prefix only.
impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({}…)", &self.0[..8.min(self.0.len())])
    }
}

/// Storage for the [`Session`] values owned by the hosting application.
///
/// A session is stored by the first successful login of a browser, mutated
/// by later logins and logouts, and dropped when it idles out.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemorySessionRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Stores `session` under a fresh id and returns the id.
    async fn create(&self, session: Session) -> SessionId;

    /// Returns the session and marks it as recently used.
    ///
    /// Returns `None` for unknown or expired ids.
    async fn get(&self, id: &SessionId) -> Option<Session>;

    /// Replaces the stored session value.
    ///
    /// Returns `false` if the id is unknown (e.g. it expired meanwhile).
    async fn save(&self, id: &SessionId, session: Session) -> bool;

    /// Removes a session entirely.
    async fn remove(&self, id: &SessionId);

    /// Removes sessions idle for at least `max_idle`; returns how many.
    async fn purge_idle(&self, max_idle: Duration) -> usize;

    /// Number of live sessions.
    async fn count(&self) -> usize;
}
