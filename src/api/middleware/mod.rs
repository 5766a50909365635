//! Tower layers shared by the router.
//!
//! - [`rate_limit`] - Per-IP throttling of the form actions
//! - [`tracing`] - Request spans and response logging

pub mod rate_limit;
pub mod tracing;
