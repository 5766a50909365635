//! Abstractions over the two remote APIs.
//!
//! Services depend on these traits; concrete HTTP clients live in
//! [`crate::infrastructure`].

pub mod identity_client;
pub mod text_generator;

pub use identity_client::{IdentityClient, LoginCredentials, TokenGrant};
pub use text_generator::TextGenerator;

#[cfg(test)]
pub use identity_client::MockIdentityClient;
#[cfg(test)]
pub use text_generator::MockTextGenerator;
