//! Article requests, prompt construction, and output normalization.

use crate::error::GenerationError;
use crate::utils::html::escape_html;

/// Instructions sent ahead of every title.
pub const ARTICLE_SYSTEM_INSTRUCTIONS: &str = "\
You are an assistant that writes clean HTML articles.
Output ONLY HTML (no markdown). Structure with:
- <h1> title
- <p> paragraphs
- <h2>/<h3> subheadings
- <ul>/<ol> lists when helpful
- <strong>/<em> sparingly
Do not include <html>, <head>, or <body> tags. Return valid, minimal HTML only.
";

/// One generation attempt for a title.
///
/// The title is stored trimmed and is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRequest {
    title: String,
}

impl ArticleRequest {
    /// # Errors
    ///
    /// Returns [`GenerationError::EmptyTitle`] if the title is blank.
    pub fn new(title: &str) -> Result<Self, GenerationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(GenerationError::EmptyTitle);
        }
        Ok(Self {
            title: title.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Builds the full model prompt. The title is HTML-escaped.
    pub fn prompt(&self) -> String {
        format!(
            "{ARTICLE_SYSTEM_INSTRUCTIONS}\n\n\
             Write a full-length, well-structured article for the title: \"{}\".\n\
             Target length: ~900-1200 words. Use clear subheadings and short paragraphs.",
            escape_html(&self.title)
        )
    }

    /// Turns raw model output into displayable markup for this request.
    pub fn finish(&self, raw: &str) -> ArticleHtml {
        ArticleHtml(normalize_article_html(&self.title, raw))
    }
}

/// Markup ready for display. Either the model's own structured output or
/// the synthesized fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleHtml(String);

impl ArticleHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ArticleHtml {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Returns `raw` (trimmed) when it already contains an `<h1` or `<p` tag.
///
/// Otherwise the text is treated as plain prose: it is split on blank lines,
/// each non-empty segment is escaped and wrapped in `<p>`, and an `<h1>` with
/// the escaped title is prepended.
pub fn normalize_article_html(title: &str, raw: &str) -> String {
    let raw = raw.trim();
    if raw.contains("<h1") || raw.contains("<p") {
        return raw.to_string();
    }

    let text = raw.replace("\r\n", "\n");
    let paragraphs: String = text
        .split("\n\n")
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| format!("<p>{}</p>", escape_html(segment)))
        .collect();

    format!("<h1>{}</h1>{}", escape_html(title.trim()), paragraphs)
}
