//! Business logic services for the application layer.

pub mod article_service;
pub mod auth_service;

pub use article_service::ArticleRequester;
pub use auth_service::SessionAuthenticator;
