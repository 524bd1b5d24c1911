//! Markdown rendering

use pulldown_cmark::{html, Options, Parser};

/// Markdown renderer producing CommonMark HTML
///
/// The option set is fixed: tables and strikethrough on top of plain
/// CommonMark. Output is not sanitized.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, render_options());
        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, parser);
        html_output
    }

    /// Render raw file bytes, decoding invalid UTF-8 lossily
    pub fn render_bytes(&self, bytes: &[u8]) -> String {
        self.render(&String::from_utf8_lossy(bytes))
    }
}

fn render_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_heading_and_paragraph() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Hello\n\nWorld");
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<p>World</p>"));
    }

    #[test]
    fn test_render_inline_and_blocks() {
        let renderer = MarkdownRenderer::new();
        let markdown = "Some *emphasis* and **strong** with `code` and [a link](https://example.com).\n\n\
                        - one\n- two\n\n\
                        > quoted\n\n\
                        ```\nlet x = 1;\n```\n";
        let html = renderer.render(markdown);
        assert!(html.contains("<em>emphasis</em>"));
        assert!(html.contains("<strong>strong</strong>"));
        assert!(html.contains("<code>code</code>"));
        assert!(html.contains(r#"<a href="https://example.com">a link</a>"#));
        assert!(html.contains("<ul>\n<li>one</li>\n<li>two</li>\n</ul>"));
        assert!(html.contains("<blockquote>"));
        assert!(html.contains("<pre><code>let x = 1;\n</code></pre>"));
    }

    #[test]
    fn test_render_tables_and_strikethrough() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~");
        assert!(html.contains("<table>"));
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn test_raw_html_passes_through() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("<div class=\"note\">hi</div>\n");
        assert!(html.contains("<div class=\"note\">hi</div>"));
    }

    #[test]
    fn test_render_bytes_lossy() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render_bytes(b"caf\xff");
        assert!(html.starts_with("<p>caf"));
        assert!(html.contains('\u{FFFD}'));
    }
}
