//! Rendering bridge: markup in, HTML fragment out.
//!
//! Parsing markdown is not this crate's job; [`MarkdownRenderer`] hands the
//! buffer to `pulldown-cmark` with the GFM extensions the toolbar can emit.

use pulldown_cmark::{Options, Parser, html};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Renderer failed: {0}")]
    Failed(String),
}

/// Converts markup into an HTML fragment.
///
/// Implementations must be deterministic: the same input always renders to
/// the same output.
pub trait Renderer {
    fn render(&self, markup: &str) -> Result<String, RenderError>;
}

#[derive(Debug, Clone, Copy)]
pub struct MarkdownRenderer {
    options: Options,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self {
            options: Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS,
        }
    }
}

impl Renderer for MarkdownRenderer {
    fn render(&self, markup: &str) -> Result<String, RenderError> {
        let parser = Parser::new_ext(markup, self.options);
        let mut out = String::with_capacity(markup.len() * 3 / 2);
        html::push_html(&mut out, parser);
        Ok(out)
    }
}

const EXPORT_STYLE: &str = "\
body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; line-height: 1.8; padding: 2rem; }
h1, h2 { border-bottom: 1px solid #eaecef; padding-bottom: 0.3rem; }
blockquote { padding: 0 1em; color: #6a737d; border-left: 0.25em solid #dfe2e5; }
pre { background-color: #f6f8fa; border-radius: 3px; padding: 1rem; overflow-x: auto; }
code { font-family: 'Fira Code', monospace; font-size: 0.9rem; }
table { border-collapse: collapse; width: 100%; }
th, td { padding: 0.75rem; text-align: left; border-bottom: 1px solid #eaecef; }
img { max-width: 100%; }
";

/// Wrap a rendered fragment into a self-contained HTML page for export
pub fn render_standalone_html(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{EXPORT_STYLE}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        html_escape::encode_text(title)
    )
}
