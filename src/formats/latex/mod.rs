//! LaTeX format (content tree → LaTeX export)
//!
//! The single serialization back end. Both input front ends (Tiptap JSON,
//! HTML) produce the same content tree, which renders through the shared
//! construct table here:
//!
//! | Tree node | LaTeX construct |
//! |--------------|--------------------------------|
//! | Heading 1 | `\section{..}` |
//! | Heading 2 | `\subsection{..}` |
//! | Heading >= 3 | `\subsubsection{..}` |
//! | Paragraph | content + blank line |
//! | BulletList | `\begin{itemize}..\end{itemize}` |
//! | OrderedList | `\begin{enumerate}..\end{enumerate}` |
//! | ListItem | `\item ..` |
//! | Bold mark | `\textbf{..}` |
//! | Italic mark | `\textit{..}` |
//! | Underline | `\underline{..}` |
//! | HardBreak | `\\` |
//! | Unknown | children, unwrapped |

pub mod constructs;
pub mod escape;
pub mod inline;
pub mod serializer;

pub use escape::escape;
pub use inline::apply_marks;
pub use serializer::transpile;

use crate::content::ContentNode;
use crate::error::RenderError;
use crate::format::ContentFormat;

/// LaTeX output format
pub struct LatexFormat;

impl ContentFormat for LatexFormat {
    fn name(&self) -> &str {
        "latex"
    }

    fn description(&self) -> &str {
        "LaTeX markup output"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, node: &ContentNode) -> Result<String, RenderError> {
        Ok(serializer::transpile(node))
    }
}
