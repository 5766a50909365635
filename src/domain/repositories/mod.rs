//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`; mocks are
//! generated via `mockall` for unit tests.

pub mod session_repository;

pub use session_repository::{SessionId, SessionRepository};

#[cfg(test)]
pub use session_repository::MockSessionRepository;
