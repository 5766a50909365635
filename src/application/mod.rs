//! Application layer services implementing the two user actions.
//!
//! Services depend on the client traits in [`crate::domain::clients`] and
//! provide a small API for the web handlers and the console client.
//!
//! # Available Services
//!
//! - [`services::auth_service::SessionAuthenticator`] - Login and logout
//! - [`services::article_service::ArticleRequester`] - Article generation

pub mod services;
