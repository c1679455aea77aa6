//! HTML parsing (HTML import → content tree)
//!
//! Pipeline: raw HTML → html5ever RcDom → content tree. Entities are decoded
//! by the parser; structural tags map onto the closed node set; emphasis tags
//! accumulate marks onto the text leaves they contain; script/style blocks
//! are dropped with their content; any other tag is unwrapped, keeping its
//! children. Because the result is an ordinary content tree, nested lists and
//! overlapping emphasis come out correctly — no string rewriting involved.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::content::{ContentNode, Mark};

/// Parse an HTML fragment or document into a content tree rooted at a
/// document node. Total; malformed HTML is repaired by the parser.
pub fn parse_to_tree(raw: &str) -> ContentNode {
    let dom = parse_document(RcDom::default(), Default::default()).one(raw);
    let children = match find_body(&dom.document) {
        Some(body) => convert_children(&body, &[], true),
        None => convert_children(&dom.document, &[], true),
    };
    ContentNode::Doc { children }
}

/// html5ever wraps fragments in html/head/body; the content we care about
/// lives under body.
fn find_body(handle: &Handle) -> Option<Handle> {
    if let NodeData::Element { name, .. } = &handle.data {
        if &name.local[..] == "body" {
            return Some(handle.clone());
        }
    }
    for child in handle.children.borrow().iter() {
        if let Some(found) = find_body(child) {
            return Some(found);
        }
    }
    None
}

/// Convert the children of a DOM node.
///
/// `marks` is the emphasis path from enclosing tags, outermost first; text
/// leaves store it innermost first so sequential wrapping reproduces the
/// original nesting. `block_context` controls whether whitespace-only text
/// nodes (indentation between block tags) are dropped.
fn convert_children(handle: &Handle, marks: &[Mark], block_context: bool) -> Vec<ContentNode> {
    let mut out = Vec::new();
    for child in handle.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => {
                let text = contents.borrow().to_string();
                if block_context && text.trim().is_empty() {
                    continue;
                }
                out.push(ContentNode::Text {
                    text,
                    marks: marks.iter().rev().cloned().collect(),
                });
            }
            NodeData::Element { name, .. } => {
                let tag: &str = &name.local;
                match tag {
                    "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                        let level = tag[1..].parse().unwrap_or(1);
                        out.push(ContentNode::Heading {
                            level,
                            children: convert_children(child, &[], false),
                        });
                    }
                    "p" => out.push(ContentNode::Paragraph {
                        children: convert_children(child, &[], false),
                    }),
                    "ul" => out.push(ContentNode::BulletList {
                        children: convert_children(child, &[], true),
                    }),
                    "ol" => out.push(ContentNode::OrderedList {
                        children: convert_children(child, &[], true),
                    }),
                    "li" => out.push(ContentNode::ListItem {
                        children: convert_children(child, &[], true),
                    }),
                    "strong" | "b" => out.extend(with_mark(child, marks, Mark::Bold, block_context)),
                    "em" | "i" => out.extend(with_mark(child, marks, Mark::Italic, block_context)),
                    "u" => out.extend(with_mark(child, marks, Mark::Underline, block_context)),
                    "br" => out.push(ContentNode::HardBreak),
                    // Executable / metadata content is dropped entirely
                    "script" | "style" | "head" | "title" | "template" => {}
                    // Unrecognized tags are unwrapped, content preserved
                    _ => out.push(ContentNode::Unknown {
                        children: convert_children(child, marks, block_context),
                    }),
                }
            }
            // Comments, doctypes, processing instructions
            _ => {}
        }
    }
    out
}

fn with_mark(
    handle: &Handle,
    marks: &[Mark],
    mark: Mark,
    block_context: bool,
) -> Vec<ContentNode> {
    let mut nested = marks.to_vec();
    nested.push(mark);
    convert_children(handle, &nested, block_context)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_of(raw: &str) -> Vec<ContentNode> {
        match parse_to_tree(raw) {
            ContentNode::Doc { children } => children,
            other => panic!("expected document root, got {other:?}"),
        }
    }

    #[test]
    fn parses_paragraph_and_heading() {
        let children = body_of("<h2>Title</h2><p>Body</p>");
        assert_eq!(
            children,
            vec![
                ContentNode::Heading {
                    level: 2,
                    children: vec![ContentNode::text("Title")],
                },
                ContentNode::Paragraph {
                    children: vec![ContentNode::text("Body")],
                },
            ]
        );
    }

    #[test]
    fn nested_emphasis_accumulates_marks_innermost_first() {
        let children = body_of("<p><strong><em>x</em></strong></p>");
        assert_eq!(
            children,
            vec![ContentNode::Paragraph {
                children: vec![ContentNode::Text {
                    text: "x".to_string(),
                    marks: vec![Mark::Italic, Mark::Bold],
                }],
            }]
        );
    }

    #[test]
    fn b_i_u_aliases_map_to_marks() {
        let children = body_of("<p><b>a</b><i>b</i><u>c</u></p>");
        let marks: Vec<_> = children
            .iter()
            .flat_map(|n| match n {
                ContentNode::Paragraph { children } => children.clone(),
                _ => vec![],
            })
            .collect();
        assert_eq!(
            marks,
            vec![
                ContentNode::Text {
                    text: "a".to_string(),
                    marks: vec![Mark::Bold],
                },
                ContentNode::Text {
                    text: "b".to_string(),
                    marks: vec![Mark::Italic],
                },
                ContentNode::Text {
                    text: "c".to_string(),
                    marks: vec![Mark::Underline],
                },
            ]
        );
    }

    #[test]
    fn script_content_is_dropped() {
        let children = body_of("<p>keep</p><script>alert('x')</script>");
        assert_eq!(
            children,
            vec![ContentNode::Paragraph {
                children: vec![ContentNode::text("keep")],
            }]
        );
    }

    #[test]
    fn unknown_tags_are_unwrapped() {
        let children = body_of("<blockquote><p>quoted</p></blockquote>");
        assert_eq!(
            children,
            vec![ContentNode::Unknown {
                children: vec![ContentNode::Paragraph {
                    children: vec![ContentNode::text("quoted")],
                }],
            }]
        );
    }

    #[test]
    fn lists_parse_with_items() {
        let children = body_of("<ul><li>one</li><li>two</li></ul>");
        assert_eq!(
            children,
            vec![ContentNode::BulletList {
                children: vec![
                    ContentNode::ListItem {
                        children: vec![ContentNode::text("one")],
                    },
                    ContentNode::ListItem {
                        children: vec![ContentNode::text("two")],
                    },
                ],
            }]
        );
    }

    #[test]
    fn nested_lists_keep_their_structure() {
        let children = body_of("<ul><li>outer<ul><li>inner</li></ul></li></ul>");
        assert_eq!(
            children,
            vec![ContentNode::BulletList {
                children: vec![ContentNode::ListItem {
                    children: vec![
                        ContentNode::text("outer"),
                        ContentNode::BulletList {
                            children: vec![ContentNode::ListItem {
                                children: vec![ContentNode::text("inner")],
                            }],
                        },
                    ],
                }],
            }]
        );
    }

    #[test]
    fn br_becomes_hard_break() {
        let children = body_of("<p>a<br>b</p>");
        assert_eq!(
            children,
            vec![ContentNode::Paragraph {
                children: vec![
                    ContentNode::text("a"),
                    ContentNode::HardBreak,
                    ContentNode::text("b"),
                ],
            }]
        );
    }

    #[test]
    fn entities_are_decoded_by_the_parser() {
        let children = body_of("<p>Tom &amp; Jerry</p>");
        assert_eq!(
            children,
            vec![ContentNode::Paragraph {
                children: vec![ContentNode::text("Tom & Jerry")],
            }]
        );
    }

    #[test]
    fn whitespace_between_blocks_is_dropped() {
        let children = body_of("<p>a</p>\n  <p>b</p>\n");
        assert_eq!(children.len(), 2);
    }
}
