//! Infrastructure layer for external integrations.
//!
//! Implements the traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`identity`] - Identity API client (reqwest)
//! - [`generation`] - Gemini text generation client (reqwest)
//! - [`persistence`] - In-memory session storage

pub mod generation;
pub mod identity;
pub mod persistence;
