//! LaTeX serialization (content tree → LaTeX export)
//!
//! Recursive, total walk over the content tree. Text leaves are escaped and
//! mark-wrapped; everything else concatenates its children into the construct
//! from the shared table. Raw unescaped user text never reaches the output
//! outside the text branch.

use super::constructs;
use super::escape::escape;
use super::inline::apply_marks;
use crate::content::ContentNode;

/// Transpile a content tree to a LaTeX fragment.
pub fn transpile(node: &ContentNode) -> String {
    match node {
        ContentNode::Doc { children } => children
            .iter()
            .map(transpile)
            .collect::<Vec<_>>()
            .join("\n"),
        ContentNode::Paragraph { children } => constructs::paragraph(&transpile_all(children)),
        ContentNode::Heading { level, children } => {
            constructs::heading(*level, &transpile_all(children))
        }
        ContentNode::BulletList { children } => constructs::list(false, &transpile_all(children)),
        ContentNode::OrderedList { children } => constructs::list(true, &transpile_all(children)),
        ContentNode::ListItem { children } => constructs::item(&transpile_all(children)),
        ContentNode::Text { text, marks } => apply_marks(&escape(text), marks),
        ContentNode::HardBreak => constructs::LINE_BREAK.to_string(),
        // Unrecognized kinds degrade to their children, unwrapped
        ContentNode::Unknown { children } => transpile_all(children),
    }
}

fn transpile_all(children: &[ContentNode]) -> String {
    children.iter().map(transpile).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Mark;

    fn doc(children: Vec<ContentNode>) -> ContentNode {
        ContentNode::Doc { children }
    }

    fn paragraph(children: Vec<ContentNode>) -> ContentNode {
        ContentNode::Paragraph { children }
    }

    #[test]
    fn empty_document_is_empty_string() {
        assert_eq!(transpile(&ContentNode::empty()), "");
    }

    #[test]
    fn empty_paragraph_still_emits_break() {
        assert_eq!(transpile(&paragraph(vec![])), "\n\n");
    }

    #[test]
    fn heading_and_paragraph_end_to_end() {
        let tree = doc(vec![
            ContentNode::Heading {
                level: 1,
                children: vec![ContentNode::text("Intro")],
            },
            paragraph(vec![ContentNode::text("Cost: $50 & rising")]),
        ]);
        assert_eq!(
            transpile(&tree),
            "\\section{Intro}\n\n\nCost: \\$50 \\& rising\n\n"
        );
    }

    #[test]
    fn marked_text_is_escaped_then_wrapped() {
        let tree = ContentNode::Text {
            text: "50%".to_string(),
            marks: vec![Mark::Bold],
        };
        assert_eq!(transpile(&tree), "\\textbf{50\\%}");
    }

    #[test]
    fn bullet_list_with_items() {
        let tree = ContentNode::BulletList {
            children: vec![
                ContentNode::ListItem {
                    children: vec![ContentNode::text("one")],
                },
                ContentNode::ListItem {
                    children: vec![ContentNode::text("two")],
                },
            ],
        };
        assert_eq!(
            transpile(&tree),
            "\\begin{itemize}\n\\item one\n\\item two\n\\end{itemize}\n\n"
        );
    }

    #[test]
    fn ordered_list_uses_enumerate() {
        let tree = ContentNode::OrderedList {
            children: vec![ContentNode::ListItem {
                children: vec![ContentNode::text("first")],
            }],
        };
        assert!(transpile(&tree).starts_with("\\begin{enumerate}\n"));
    }

    #[test]
    fn nested_list_inside_item() {
        let tree = ContentNode::BulletList {
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
        };
        let latex = transpile(&tree);
        assert_eq!(latex.matches("\\begin{itemize}").count(), 2);
        assert_eq!(latex.matches("\\end{itemize}").count(), 2);
        assert!(latex.contains("\\item inner"));
    }

    #[test]
    fn unknown_kind_passes_children_through() {
        let tree = ContentNode::Unknown {
            children: vec![paragraph(vec![ContentNode::text("kept")])],
        };
        assert_eq!(transpile(&tree), "kept\n\n");
    }

    #[test]
    fn hard_break_renders_forced_line_break() {
        let tree = paragraph(vec![
            ContentNode::text("a"),
            ContentNode::HardBreak,
            ContentNode::text("b"),
        ]);
        assert_eq!(transpile(&tree), "a\\\\\nb\n\n");
    }

    #[test]
    fn document_joins_children_with_newline() {
        let tree = doc(vec![
            paragraph(vec![ContentNode::text("a")]),
            paragraph(vec![ContentNode::text("b")]),
        ]);
        assert_eq!(transpile(&tree), "a\n\n\nb\n\n");
    }

    #[test]
    fn reserved_chars_from_text_never_reach_output_unescaped() {
        let tree = doc(vec![paragraph(vec![ContentNode::text("a_b#c")])]);
        let latex = transpile(&tree);
        assert!(latex.contains("a\\_b\\#c"));
    }
}
