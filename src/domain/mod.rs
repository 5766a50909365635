//! Domain layer: session state, article requests, and the contracts the
//! outer layers implement.
//!
//! # Architecture
//!
//! - [`session`] - Authentication state of one browser session
//! - [`article`] - Article requests, prompt text, and fallback normalization
//! - [`clients`] - Traits for the identity API and the text model
//! - [`repositories`] - Session storage contract
//! - [`session_sweeper`] - Background expiry of idle sessions
//!
//! The domain layer has no dependency on HTTP clients or the web framework
//! beyond status-code mapping on errors.

pub mod article;
pub mod clients;
pub mod repositories;
pub mod session;
pub mod session_sweeper;
