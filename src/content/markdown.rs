//! Markdown rendering and citation-link rewriting

use indexmap::IndexMap;
use lazy_static::lazy_static;
use pulldown_cmark::{html, Options, Parser};
use regex::{Captures, Regex};

lazy_static! {
    /// Bracketed-integer citation tokens in rendered HTML, e.g. `[1]`, `[13]`
    static ref CITATION: Regex = Regex::new(r"\[(\d+)\]").unwrap();
}

/// Markdown renderer
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_HEADING_ATTRIBUTES
            | Options::ENABLE_GFM;
        Self { options }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Rewrite bracketed citation tokens into anchor links.
///
/// Runs once over already-rendered HTML as a plain text substitution:
/// tokens whose number has an entry in `references` become anchors
/// opening in a new browsing context, the rest stay verbatim.
pub fn rewrite_citations(html: &str, references: &IndexMap<String, String>) -> String {
    CITATION
        .replace_all(html, |caps: &Captures| match references.get(&caps[1]) {
            Some(url) => format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="citation-link">{}</a>"#,
                url, &caps[0]
            ),
            None => caps[0].to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn references(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Hello World\n\nThis is a test.");
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_render_keeps_citation_tokens() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("As shown in [1], things changed.");
        assert!(html.contains("[1]"));
    }

    #[test]
    fn test_rewrite_resolves_known_citation() {
        let refs = references(&[("1", "https://example.com/a")]);
        let html = rewrite_citations("<p>References: [1] and [5]</p>", &refs);
        assert!(html.contains(
            r#"<a href="https://example.com/a" target="_blank" rel="noopener noreferrer" class="citation-link">[1]</a>"#
        ));
        // No entry for 5 - the token stays literal
        assert!(html.contains("and [5]"));
        assert!(!html.contains(r#"href="">"#));
    }

    #[test]
    fn test_rewrite_multi_digit() {
        let refs = references(&[("13", "https://example.com/m")]);
        let html = rewrite_citations("<p>See [13].</p>", &refs);
        assert!(html.contains(r#">[13]</a>"#));
    }

    #[test]
    fn test_rewrite_idempotent_on_unmatched_tokens() {
        let refs = references(&[]);
        let once = rewrite_citations("<p>[1] [2] [3]</p>", &refs);
        let twice = rewrite_citations(&once, &refs);
        assert_eq!(once, "<p>[1] [2] [3]</p>");
        assert_eq!(once, twice);
    }
}
