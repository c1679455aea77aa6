//! Content tree data model
//!
//! The editing surface sends documents as Tiptap-style JSON: nodes tagged by
//! a `type` field, with `content` children, optional `attrs`, and `text` plus
//! `marks` on text leaves. This module deserializes that wire shape into a
//! closed tagged union so every fallback (unrecognized node kinds,
//! unrecognized marks, text nodes with bogus children) is an explicit branch
//! rather than dynamic field probing.

use serde::Deserialize;

/// A node in the rich-text content tree.
///
/// The supported kinds are closed; anything else lands in [`ContentNode::Unknown`],
/// which keeps its children so unrecognized wrappers degrade to a structural
/// pass-through instead of dropping authored content.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawNode")]
pub enum ContentNode {
    /// Document root
    Doc { children: Vec<ContentNode> },
    Paragraph { children: Vec<ContentNode> },
    /// Heading with a 1-based level; emission clamps levels >= 3 to the
    /// third sectioning tier
    Heading { level: i64, children: Vec<ContentNode> },
    BulletList { children: Vec<ContentNode> },
    OrderedList { children: Vec<ContentNode> },
    ListItem { children: Vec<ContentNode> },
    /// Text leaf; marks are ordered, last mark wraps outermost
    Text { text: String, marks: Vec<Mark> },
    /// Forced line break (`<br>` / Tiptap `hardBreak`)
    HardBreak,
    /// Any node kind outside the supported set; children pass through unwrapped
    Unknown { children: Vec<ContentNode> },
}

/// An inline emphasis mark on a text leaf.
///
/// Unrecognized mark kinds are preserved as [`Mark::Other`] and ignored at
/// render time, so new editor marks never break transpilation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawMark")]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Other(String),
}

/// A titled block of content to render.
///
/// Titles are matched case- and whitespace-sensitively against named
/// template markers; see [`crate::template`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Section {
    pub title: String,
    pub content: ContentNode,
}

/// Wire shape of a Tiptap node. Every field is optional on the wire; the
/// conversion below decides what each kind actually keeps.
#[derive(Debug, Deserialize)]
struct RawNode {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    content: Vec<ContentNode>,
    attrs: Option<RawAttrs>,
    text: Option<String>,
    #[serde(default)]
    marks: Vec<Mark>,
}

#[derive(Debug, Deserialize)]
struct RawAttrs {
    // Kept loose: a level of the wrong JSON type counts as absent
    level: Option<serde_json::Value>,
}

impl From<RawNode> for ContentNode {
    fn from(raw: RawNode) -> Self {
        let children = raw.content;
        match raw.kind.as_str() {
            "doc" => ContentNode::Doc { children },
            "paragraph" => ContentNode::Paragraph { children },
            "heading" => {
                // Absent or non-positive levels fall back to the top tier
                let level = match raw.attrs.and_then(|a| a.level).and_then(|v| v.as_i64()) {
                    Some(level) if level >= 1 => level,
                    _ => 1,
                };
                ContentNode::Heading { level, children }
            }
            "bulletList" => ContentNode::BulletList { children },
            "orderedList" => ContentNode::OrderedList { children },
            "listItem" => ContentNode::ListItem { children },
            // A text leaf with children is malformed; the children are
            // dropped and the text kept (recover locally, never abort)
            "text" => ContentNode::Text {
                text: raw.text.unwrap_or_default(),
                marks: raw.marks,
            },
            "hardBreak" => ContentNode::HardBreak,
            _ => ContentNode::Unknown { children },
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawMark {
    #[serde(rename = "type")]
    kind: String,
}

impl From<RawMark> for Mark {
    fn from(raw: RawMark) -> Self {
        match raw.kind.as_str() {
            "bold" => Mark::Bold,
            "italic" => Mark::Italic,
            "underline" => Mark::Underline,
            other => Mark::Other(other.to_string()),
        }
    }
}

impl ContentNode {
    /// An empty document root.
    pub fn empty() -> Self {
        ContentNode::Doc { children: vec![] }
    }

    /// A plain text leaf with no marks.
    pub fn text(text: impl Into<String>) -> Self {
        ContentNode::Text {
            text: text.into(),
            marks: vec![],
        }
    }
}
