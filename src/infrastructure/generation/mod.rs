//! Generative model integration.

mod gemini_client;

pub use gemini_client::{DEFAULT_GEMINI_API_BASE, DEFAULT_GEMINI_MODEL, GeminiClient};
