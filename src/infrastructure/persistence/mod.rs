//! Session storage implementations.

mod memory_session_repository;

pub use memory_session_repository::MemorySessionRepository;
