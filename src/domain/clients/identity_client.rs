//! Client trait for the remote identity API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AuthError;

/// Credentials sent to the identity API as a JSON body.
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct LoginCredentials {
    pub phone: String,
    pub password: String,
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("phone", &self.phone)
            .field("password", &"***")
            .finish()
    }
}

/// Successful login payload returned by the identity API.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct TokenGrant {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

impl fmt::Debug for TokenGrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenGrant")
            .field("access_token", &"***")
            .field("token_type", &self.token_type)
            .finish()
    }
}

/// Exchanges phone/password credentials for a bearer token.
///
/// Implementations make exactly one attempt per call.
///
/// # Implementations
///
/// - [`crate::infrastructure::identity::HttpIdentityClient`] - reqwest-backed client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityClient: Send + Sync {
    /// Submits credentials to the login endpoint.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Validation`] on HTTP 422
    /// - [`AuthError::LoginFailed`] on any other non-200 status
    /// - [`AuthError::Network`] on transport failure or timeout
    /// - [`AuthError::MalformedResponse`] when a 200 body has no token
    async fn login(&self, credentials: &LoginCredentials) -> Result<TokenGrant, AuthError>;
}
