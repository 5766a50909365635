//! Article generation service.

use std::sync::Arc;

use crate::domain::article::{ArticleHtml, ArticleRequest};
use crate::domain::clients::TextGenerator;
use crate::error::GenerationError;

/// Produces displayable HTML for a title by invoking a text model.
///
/// The session token is never passed to the model; gating on login happens
/// in the web layer.
pub struct ArticleRequester<G: TextGenerator> {
    generator: Arc<G>,
}

impl<G: TextGenerator> ArticleRequester<G> {
    pub fn new(generator: Arc<G>) -> Self {
        Self { generator }
    }

    /// Generates an article for `title`.
    ///
    /// Output that lacks both `<h1` and `<p` is rebuilt as a heading plus one
    /// paragraph per blank-line-separated block
    /// (see [`crate::domain::article::normalize_article_html`]).
    ///
    /// # Errors
    ///
    /// - [`GenerationError::EmptyTitle`] for a blank title, before any call
    /// - [`GenerationError::Model`] if the model call fails
    pub async fn generate(&self, title: &str) -> Result<ArticleHtml, GenerationError> {
        let request = ArticleRequest::new(title)?;

        let raw = self
            .generator
            .generate_text(&request.prompt())
            .await
            .inspect_err(|e| tracing::warn!(title = request.title(), error = %e, "Generation failed"))?;

        let article = request.finish(&raw);
        tracing::info!(
            title = request.title(),
            bytes = article.as_str().len(),
            normalized = article.as_str() != raw.trim(),
            "Article generated"
        );

        Ok(article)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clients::MockTextGenerator;

    #[tokio::test]
    async fn test_blank_title_skips_model() {
        let mut generator = MockTextGenerator::new();
        generator.expect_generate_text().never();

        let requester = ArticleRequester::new(Arc::new(generator));

        assert_eq!(requester.generate("   ").await, Err(GenerationError::EmptyTitle));
    }

    #[tokio::test]
    async fn test_plain_output_uses_fallback() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate_text()
            .withf(|prompt| prompt.contains("for the title: \"Cats\"."))
            .times(1)
            .returning(|_| Ok("Cats are great.\n\nThey purr.".to_string()));

        let requester = ArticleRequester::new(Arc::new(generator));

        let article = requester.generate(" Cats ").await.unwrap();
        assert_eq!(
            article.as_str(),
            "<h1>Cats</h1><p>Cats are great.</p><p>They purr.</p>"
        );
    }

    #[tokio::test]
    async fn test_structured_output_passes_through() {
        let html = "<h1>Cats</h1>\n<p>They purr.</p>";
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate_text()
            .times(1)
            .returning(move |_| Ok(format!("\n{html}\n")));

        let requester = ArticleRequester::new(Arc::new(generator));

        assert_eq!(requester.generate("Cats").await.unwrap().as_str(), html);
    }

    #[tokio::test]
    async fn test_prompt_escapes_title() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate_text()
            .withf(|prompt| prompt.contains("&lt;script&gt;") && !prompt.contains("<script>"))
            .times(1)
            .returning(|_| Ok("<p>ok</p>".to_string()));

        let requester = ArticleRequester::new(Arc::new(generator));

        assert!(requester.generate("<script>").await.is_ok());
    }

    #[tokio::test]
    async fn test_model_error_is_surfaced() {
        let mut generator = MockTextGenerator::new();
        generator.expect_generate_text().times(1).returning(|_| {
            Err(GenerationError::Model {
                message: "RESOURCE_EXHAUSTED: quota".to_string(),
            })
        });

        let requester = ArticleRequester::new(Arc::new(generator));

        assert_eq!(
            requester.generate("Cats").await,
            Err(GenerationError::Model {
                message: "RESOURCE_EXHAUSTED: quota".to_string()
            })
        );
    }
}
