//! Identity API integration.

mod http_identity_client;

pub use http_identity_client::{DEFAULT_LOGIN_TIMEOUT, HttpIdentityClient, LOGIN_PATH};
