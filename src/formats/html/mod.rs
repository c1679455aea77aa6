//! HTML format (HTML import → content tree)
//!
//! Used when upstream content arrives pre-serialized as HTML instead of as a
//! Tiptap tree. The HTML is parsed into the same content tree the tree
//! pipeline uses, then rendered by the shared LaTeX serializer — the two
//! pipelines cannot diverge structurally.

pub mod parser;

pub use parser::parse_to_tree;

use crate::content::ContentNode;
use crate::error::RenderError;
use crate::format::ContentFormat;

/// HTML input format
pub struct HtmlFormat;

impl ContentFormat for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML document or fragment"
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<ContentNode, RenderError> {
        Ok(parser::parse_to_tree(source))
    }
}

/// Convert raw HTML straight to a LaTeX fragment. Total.
pub fn transpile_markup(raw: &str) -> String {
    crate::formats::latex::transpile(&parser::parse_to_tree(raw))
}
