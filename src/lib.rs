//! # ArticleGen
//!
//! A single-page web form: sign in against a remote identity API with phone
//! and password, then turn an article title into an HTML article with Gemini.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Session state, article requests, client traits
//! - **Application Layer** ([`application`]) - Login/logout and generation services
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest clients and session storage
//! - **API Layer** ([`api`]) - Health endpoint and HTTP middleware
//! - **Web Layer** ([`web`]) - The page and its form actions
//!
//! ## Workflow
//!
//! 1. `POST /login` calls [`application::services::SessionAuthenticator::login`]
//!    and stores the returned [`domain::session::Session`]
//! 2. `POST /generate` (authenticated sessions only) calls
//!    [`application::services::ArticleRequester::generate`]
//! 3. `POST /logout` resets the session
//!
//! ## Quick Start
//!
//! ```bash
//! export GEMINI_API_KEY="..."   # optional; generation is disabled without it
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::{AuthError, GenerationError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ArticleRequester, SessionAuthenticator};
    pub use crate::domain::article::{ArticleHtml, ArticleRequest};
    pub use crate::domain::session::Session;
    pub use crate::error::{AuthError, GenerationError};
    pub use crate::infrastructure::generation::GeminiClient;
    pub use crate::infrastructure::identity::HttpIdentityClient;
    pub use crate::state::AppState;
}
