//! Template composition
//!
//! Splices transpiled LaTeX fragments into a document template. Templates are
//! read-only; composition always builds a derived copy. Placeholder syntax:
//!
//! - `{{CONTENT}}` — generic marker, collects every section not claimed by a
//!   named marker, in arrival order
//! - `{{SECTION:<title>}}` — named marker, claims exactly the section with
//!   that title (matched case- and whitespace-sensitively)
//! - `\end{document}` — recognized end-of-document boundary, the landing slot
//!   of last resort
//!
//! Every section is guaranteed a slot, so composition is total; the cleanup
//! pass guarantees no literal marker syntax survives in the output.

use once_cell::sync::Lazy;
use regex::Regex;

/// Generic marker collecting unclaimed sections.
pub const GENERIC_MARKER: &str = "{{CONTENT}}";

/// End-of-document boundary used when a template carries no generic marker.
pub const END_OF_DOCUMENT: &str = "\\end{document}";

/// Sentinel titles meaning "untitled/auto" content; these always fold into
/// the generic slot without attempting a named match.
pub const DEFAULT_SECTION_TITLES: [&str; 2] = ["Main", "Auto-Generated Section"];

static ANY_SECTION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{SECTION:[^}]*\}\}").expect("valid marker pattern"));

/// The named marker a template author embeds to claim a specific section.
pub fn section_marker(title: &str) -> String {
    format!("{{{{SECTION:{title}}}}}")
}

/// A section after transpilation, ready to land in a template.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSection {
    pub title: String,
    pub latex: String,
}

impl RenderedSection {
    pub fn new(title: impl Into<String>, latex: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            latex: latex.into(),
        }
    }
}

/// Merge rendered sections into a template. Total and deterministic.
///
/// Resolution per section, in order of arrival:
/// 1. a named marker matching the title (consumed on first use),
/// 2. the generic marker (re-inserted after each fold so later unclaimed
///    sections keep arriving in order),
/// 3. splice immediately before `\end{document}`, or append at the end.
///
/// A final cleanup removes the leftover generic marker and any named markers
/// no section claimed.
pub fn compose(template: &str, sections: &[RenderedSection]) -> String {
    let mut out = template.to_string();

    for section in sections {
        let marker = section_marker(&section.title);
        let is_default = DEFAULT_SECTION_TITLES.contains(&section.title.as_str());

        if !is_default && out.contains(marker.as_str()) {
            out = out.replacen(marker.as_str(), &section.latex, 1);
        } else if out.contains(GENERIC_MARKER) {
            let fold = format!("{}\n{}", section.latex, GENERIC_MARKER);
            out = out.replacen(GENERIC_MARKER, &fold, 1);
        } else if let Some(pos) = out.find(END_OF_DOCUMENT) {
            out.insert_str(pos, &format!("{}\n", section.latex));
        } else {
            out.push('\n');
            out.push_str(&section.latex);
        }
    }

    let out = out.replace(GENERIC_MARKER, "");
    ANY_SECTION_MARKER.replace_all(&out, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(pairs: &[(&str, &str)]) -> Vec<RenderedSection> {
        pairs
            .iter()
            .map(|(t, l)| RenderedSection::new(*t, *l))
            .collect()
    }

    #[test]
    fn generic_marker_collects_sections_in_order() {
        let template = "\\begin{document}\n{{CONTENT}}\n\\end{document}";
        let out = compose(
            template,
            &sections(&[("A", "alpha"), ("B", "beta"), ("C", "gamma")]),
        );
        let a = out.find("alpha").unwrap();
        let b = out.find("beta").unwrap();
        let c = out.find("gamma").unwrap();
        assert!(a < b && b < c);
        assert!(!out.contains(GENERIC_MARKER));
    }

    #[test]
    fn named_marker_claims_its_section() {
        let template = "intro\n{{SECTION:Appendix}}\n{{CONTENT}}\nend";
        let out = compose(
            template,
            &sections(&[("Appendix", "APPENDIX-LATEX"), ("Other", "OTHER-LATEX")]),
        );
        assert_eq!(out, "intro\nAPPENDIX-LATEX\nOTHER-LATEX\n\nend");
    }

    #[test]
    fn default_title_ignores_named_markers() {
        // Even if a template author writes a marker named like the sentinel,
        // default-titled content folds into the generic slot
        let template = "{{SECTION:Main}}\n{{CONTENT}}";
        let out = compose(template, &sections(&[("Main", "BODY")]));
        assert_eq!(out, "\nBODY\n");
    }

    #[test]
    fn splices_before_end_of_document_when_no_markers() {
        let template = "\\begin{document}\nhello\n\\end{document}\n";
        let out = compose(template, &sections(&[("Main", "BODY")]));
        assert_eq!(out, "\\begin{document}\nhello\nBODY\n\\end{document}\n");
    }

    #[test]
    fn appends_at_end_when_no_boundary_either() {
        let out = compose("just text", &sections(&[("Main", "BODY")]));
        assert_eq!(out, "just text\nBODY");
    }

    #[test]
    fn named_marker_consumed_once_for_duplicate_titles() {
        let template = "{{SECTION:Notes}}\n{{CONTENT}}";
        let out = compose(
            template,
            &sections(&[("Notes", "FIRST"), ("Notes", "SECOND")]),
        );
        // First occurrence lands at the marker, second falls to the generic slot
        assert_eq!(out, "FIRST\nSECOND\n");
    }

    #[test]
    fn unmatched_named_markers_are_removed() {
        let template = "a {{SECTION:Ghost}} b {{CONTENT}}";
        let out = compose(template, &sections(&[("Main", "BODY")]));
        assert_eq!(out, "a  b BODY\n");
    }

    #[test]
    fn no_marker_syntax_survives() {
        let template = "{{SECTION:X}} {{CONTENT}} {{CONTENT}} {{SECTION:Y}}";
        let out = compose(template, &sections(&[("X", "x"), ("Z", "z")]));
        assert!(!out.contains("{{SECTION:"));
        assert!(!out.contains(GENERIC_MARKER));
        assert!(out.contains('x'));
        assert!(out.contains('z'));
    }

    #[test]
    fn empty_section_list_strips_markers() {
        let out = compose("pre {{CONTENT}} post", &[]);
        assert_eq!(out, "pre  post");
    }

    #[test]
    fn template_text_is_otherwise_untouched() {
        let template = "\\documentclass{article}\n\\begin{document}\n{{CONTENT}}\n\\end{document}";
        let out = compose(template, &sections(&[("Main", "BODY")]));
        assert!(out.starts_with("\\documentclass{article}"));
        assert!(out.ends_with("\\end{document}"));
    }
}
