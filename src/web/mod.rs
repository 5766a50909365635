//! Browser-facing layer.
//!
//! Serves one page whose forms post back to explicit action handlers
//! (login, logout, generate). Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Page render and form action handlers
//! - [`middleware`] - Session cookie resolution
//! - [`routes`] - Route configuration

pub mod handlers;
pub mod middleware;
pub mod routes;
