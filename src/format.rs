//! ContentFormat trait definition
//!
//! This module defines the core ContentFormat trait that every front end and
//! back end implements. Front ends (Tiptap JSON, HTML) parse source text into
//! a [`ContentNode`] tree; back ends (LaTeX) serialize a tree to markup.
//! A format may support either direction or both.

use crate::content::ContentNode;
use crate::error::RenderError;

/// Trait for content formats
///
/// Implementors provide conversion between string representation and the
/// content tree. Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl ContentFormat for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_parsing(&self) -> bool {
///         true
///     }
///
///     fn parse(&self, source: &str) -> Result<ContentNode, RenderError> {
///         // Parse source into a content tree
///         todo!()
///     }
/// }
/// ```
pub trait ContentFormat: Send + Sync {
    /// The name of this format (e.g., "tiptap", "html", "latex")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Whether this format supports parsing (source → content tree)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (content tree → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a content tree
    ///
    /// Default implementation returns NotSupported.
    /// Formats that support parsing should override this method.
    fn parse(&self, _source: &str) -> Result<ContentNode, RenderError> {
        Err(RenderError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a content tree into markup text
    ///
    /// Default implementation returns NotSupported.
    /// Formats that support serialization should override this method.
    fn serialize(&self, _node: &ContentNode) -> Result<String, RenderError> {
        Err(RenderError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
