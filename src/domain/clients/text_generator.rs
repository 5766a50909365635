//! Client trait for the generative text model.

use async_trait::async_trait;

use crate::error::GenerationError;

/// Produces text for a single prompt, without streaming.
///
/// # Implementations
///
/// - [`crate::infrastructure::generation::GeminiClient`] - Gemini REST API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Runs the prompt through the model and returns its text.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Model`] on any failure of the call.
    async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError>;
}
