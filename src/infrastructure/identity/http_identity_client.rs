//! reqwest-backed client for the identity API.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::domain::clients::{IdentityClient, LoginCredentials, TokenGrant};
use crate::error::AuthError;

/// Path of the login endpoint relative to the API base.
pub const LOGIN_PATH: &str = "/api/v1/auth/login";

/// Default time allowed for a login round trip.
pub const DEFAULT_LOGIN_TIMEOUT: Duration = Duration::from_secs(15);

/// Identity API client issuing `POST {base}/api/v1/auth/login`.
///
/// One request per call. No retries.
#[derive(Clone)]
pub struct HttpIdentityClient {
    client: Client,
    login_url: String,
}

impl HttpIdentityClient {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// A trailing slash on `base_url` is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            login_url: format!("{}{}", base_url.trim_end_matches('/'), LOGIN_PATH),
        })
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }
}

#[async_trait]
impl IdentityClient for HttpIdentityClient {
    async fn login(&self, credentials: &LoginCredentials) -> Result<TokenGrant, AuthError> {
        let response = self
            .client
            .post(&self.login_url)
            .json(credentials)
            .send()
            .await
            .map_err(|e| AuthError::Network {
                message: e.to_string(),
            })?;

        match response.status() {
            StatusCode::OK => response
                .json::<TokenGrant>()
                .await
                .map_err(|e| AuthError::MalformedResponse {
                    message: e.to_string(),
                }),
            StatusCode::UNPROCESSABLE_ENTITY => Err(AuthError::Validation),
            status => Err(AuthError::LoginFailed {
                status: status.as_u16(),
            }),
        }
    }
}
