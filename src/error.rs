//! Error types for the login and article workflows.
//!
//! Every error is terminal for the action that triggered it only. Handlers
//! render the message back to the user and leave the session as it was.

use axum::http::StatusCode;
use thiserror::Error;

/// Reasons a login attempt did not produce an authenticated session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Phone or password was empty; rejected before any network call.
    #[error("Phone and password are required.")]
    MissingCredentials,

    /// The identity API answered `422 Unprocessable Entity`.
    #[error("Validation error. Check your input format.")]
    Validation,

    /// The identity API answered with a status other than 200 or 422.
    #[error("Login failed ({status}).")]
    LoginFailed { status: u16 },

    /// DNS failure, refused connection, or timeout.
    #[error("Network error: {message}")]
    Network { message: String },

    /// A 200 response whose body carried no usable access token.
    #[error("Unexpected login response: {message}")]
    MalformedResponse { message: String },
}

impl AuthError {
    /// HTTP status used when rendering this error back to the browser.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingCredentials => StatusCode::BAD_REQUEST,
            Self::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            Self::LoginFailed { .. } => StatusCode::UNAUTHORIZED,
            Self::Network { .. } | Self::MalformedResponse { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Reasons an article could not be produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Title was empty after trimming; rejected before any network call.
    #[error("Please enter a title.")]
    EmptyTitle,

    /// No Gemini API key is configured, so generation is disabled.
    #[error("GEMINI_API_KEY is missing. Add it to the environment, .env, or GEMINI_API_KEY_FILE.")]
    ConfigMissing,

    /// The model call failed (auth, quota, transport, empty response).
    #[error("Error: {message}")]
    Model { message: String },
}

impl GenerationError {
    /// HTTP status used when rendering this error back to the browser.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::EmptyTitle => StatusCode::BAD_REQUEST,
            Self::ConfigMissing => StatusCode::SERVICE_UNAVAILABLE,
            Self::Model { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_messages() {
        assert_eq!(
            AuthError::LoginFailed { status: 500 }.to_string(),
            "Login failed (500)."
        );
        assert_eq!(
            AuthError::Validation.to_string(),
            "Validation error. Check your input format."
        );
        assert_eq!(
            AuthError::Network {
                message: "connection refused".into()
            }
            .to_string(),
            "Network error: connection refused"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AuthError::MissingCredentials.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::Validation.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AuthError::LoginFailed { status: 403 }.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            GenerationError::ConfigMissing.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            GenerationError::Model {
                message: "quota".into()
            }
            .status_code(),
            StatusCode::BAD_GATEWAY
        );
    }
}
