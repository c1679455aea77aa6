//! Tiptap JSON format (editor wire format → content tree)
//!
//! The editing surface serializes documents as Tiptap JSON; deserialization
//! into the closed tagged union lives in [`crate::content`]. This format is
//! the thin registry front end over it.

use crate::content::ContentNode;
use crate::error::RenderError;
use crate::format::ContentFormat;

/// Tiptap JSON input format
pub struct TiptapFormat;

impl ContentFormat for TiptapFormat {
    fn name(&self) -> &str {
        "tiptap"
    }

    fn description(&self) -> &str {
        "Tiptap editor JSON document"
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<ContentNode, RenderError> {
        serde_json::from_str(source).map_err(|e| RenderError::InvalidContent(e.to_string()))
    }
}
