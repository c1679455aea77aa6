//! Inline emphasis wrapping
//!
//! Applies ordered emphasis marks around an already-escaped text span. The
//! escaper runs first at the text leaf; this module never escapes.

use crate::content::Mark;

/// Wrap `text` in the LaTeX construct for each mark, in sequence order, so
/// the last mark ends up outermost. Unrecognized marks pass through — marks
/// the transpiler does not yet render must not break output.
pub fn apply_marks(text: &str, marks: &[Mark]) -> String {
    let mut out = text.to_string();
    for mark in marks {
        out = match mark {
            Mark::Bold => format!("\\textbf{{{out}}}"),
            Mark::Italic => format!("\\textit{{{out}}}"),
            Mark::Underline => format!("\\underline{{{out}}}"),
            Mark::Other(_) => out,
        };
    }
    out
}
