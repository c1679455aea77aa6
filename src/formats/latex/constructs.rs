//! Shared LaTeX construct table
//!
//! The single mapping from structural kinds to LaTeX commands and
//! environments. Every front end renders through this table, so the tree and
//! markup pipelines cannot drift apart.

/// Marker emitted after block-level content (one blank line).
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// Forced line break.
pub const LINE_BREAK: &str = "\\\\\n";

/// Sectioning command for a heading level. Levels clamp to three tiers:
/// 1 → `\section`, 2 → `\subsection`, 3 and deeper → `\subsubsection`.
pub fn heading(level: i64, content: &str) -> String {
    let command = match level {
        i64::MIN..=1 => "section",
        2 => "subsection",
        _ => "subsubsection",
    };
    format!("\\{command}{{{content}}}{PARAGRAPH_BREAK}")
}

/// Paragraph: bare content followed by a paragraph break.
pub fn paragraph(content: &str) -> String {
    format!("{content}{PARAGRAPH_BREAK}")
}

/// List environment wrapping already-rendered items.
pub fn list(ordered: bool, items: &str) -> String {
    let environment = if ordered { "enumerate" } else { "itemize" };
    format!("\\begin{{{environment}}}\n{items}\\end{{{environment}}}{PARAGRAPH_BREAK}")
}

/// Single list item.
pub fn item(content: &str) -> String {
    format!("\\item {content}\n")
}
