//! In-process implementation of the session repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::domain::repositories::{SessionId, SessionRepository};
use crate::domain::session::Session;

struct Entry {
    session: Session,
    last_seen: Instant,
}

/// Session storage held in memory for the lifetime of the process.
///
/// A restart drops every session, which leaves all browsers unauthenticated.
#[derive(Default)]
pub struct MemorySessionRepository {
    entries: RwLock<HashMap<SessionId, Entry>>,
}

impl MemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for MemorySessionRepository {
    async fn create(&self, session: Session) -> SessionId {
        let id = SessionId::generate();
        self.entries.write().await.insert(
            id.clone(),
            Entry {
                session,
                last_seen: Instant::now(),
            },
        );
        tracing::debug!(session = ?id, "Session created");
        id
    }

    async fn get(&self, id: &SessionId) -> Option<Session> {
        let mut entries = self.entries.write().await;
        let entry = entries.get_mut(id)?;
        entry.last_seen = Instant::now();
        Some(entry.session.clone())
    }

    async fn save(&self, id: &SessionId, session: Session) -> bool {
        match self.entries.write().await.get_mut(id) {
            Some(entry) => {
                entry.session = session;
                entry.last_seen = Instant::now();
                true
            }
            None => false,
        }
    }

    async fn remove(&self, id: &SessionId) {
        if self.entries.write().await.remove(id).is_some() {
            tracing::debug!(session = ?id, "Session removed");
        }
    }

    async fn purge_idle(&self, max_idle: Duration) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.last_seen.elapsed() < max_idle);
        before - entries.len()
    }

    async fn count(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_stores_given_session() {
        let repo = MemorySessionRepository::new();
        let session = Session::authenticated("tok", None).unwrap();
        let id = repo.create(session.clone()).await;

        assert_eq!(repo.get(&id).await, Some(session));
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_save_and_get() {
        let repo = MemorySessionRepository::new();
        let id = repo.create(Session::default()).await;

        let session = Session::authenticated("tok", None).unwrap();
        assert!(repo.save(&id, session.clone()).await);

        assert_eq!(repo.get(&id).await, Some(session));
    }

    #[tokio::test]
    async fn test_save_unknown_id_fails() {
        let repo = MemorySessionRepository::new();
        let unknown = SessionId::generate();

        assert!(!repo.save(&unknown, Session::default()).await);
        assert_eq!(repo.get(&unknown).await, None);
        assert_eq!(repo.count().await, 0);
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let repo = MemorySessionRepository::new();
        let a = repo.create(Session::default()).await;
        let b = repo.create(Session::default()).await;

        repo.save(&a, Session::authenticated("tok-a", None).unwrap())
            .await;

        assert!(repo.get(&a).await.unwrap().is_authenticated());
        assert!(!repo.get(&b).await.unwrap().is_authenticated());
    }

    #[tokio::test]
    async fn test_remove() {
        let repo = MemorySessionRepository::new();
        let id = repo.create(Session::default()).await;

        repo.remove(&id).await;

        assert_eq!(repo.get(&id).await, None);
        assert_eq!(repo.count().await, 0);
    }

    #[tokio::test]
    async fn test_purge_idle() {
        let repo = MemorySessionRepository::new();
        repo.create(Session::default()).await;
        repo.create(Session::default()).await;

        assert_eq!(repo.purge_idle(Duration::from_secs(3600)).await, 0);
        assert_eq!(repo.count().await, 2);

        assert_eq!(repo.purge_idle(Duration::ZERO).await, 2);
        assert_eq!(repo.count().await, 0);
    }
}
