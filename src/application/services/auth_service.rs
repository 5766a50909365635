//! Login and logout for a single session.

use std::sync::Arc;

use crate::domain::clients::{IdentityClient, LoginCredentials};
use crate::domain::session::Session;
use crate::error::AuthError;
use crate::utils::mask::mask_secret;

/// Turns a phone/password pair into an authenticated [`Session`].
///
/// The authenticator holds no session state itself; the caller owns the
/// [`Session`] value and stores whatever `login` returns.
pub struct SessionAuthenticator<C: IdentityClient> {
    client: Arc<C>,
}

impl<C: IdentityClient> SessionAuthenticator<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Attempts a single login against the identity API.
    ///
    /// Blank phone or password is rejected locally and no request is sent.
    /// Both are sent exactly as entered. Logs carry a masked phone number.
    ///
    /// # Errors
    ///
    /// - [`AuthError::MissingCredentials`] for blank input
    /// - Any error reported by the [`IdentityClient`]
    /// - [`AuthError::MalformedResponse`] if the returned token is empty
    pub async fn login(&self, phone: &str, password: &str) -> Result<Session, AuthError> {
        if phone.trim().is_empty() || password.trim().is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let credentials = LoginCredentials {
            phone: phone.to_string(),
            password: password.to_string(),
        };
        let masked_phone = mask_secret(phone.trim());

        let grant = match self.client.login(&credentials).await {
            Ok(grant) => grant,
            Err(e) => {
                tracing::warn!(phone = %masked_phone, error = %e, "Login rejected");
                return Err(e);
            }
        };

        let session = Session::authenticated(grant.access_token, grant.token_type).ok_or_else(
            || AuthError::MalformedResponse {
                message: "access_token is empty".to_string(),
            },
        )?;

        tracing::info!(phone = %masked_phone, token_type = session.token_type(), "Login succeeded");
        Ok(session)
    }

    /// Resets the session to unauthenticated. No network call is made.
    pub fn logout(&self, session: &mut Session) {
        session.clear();
    }
}
