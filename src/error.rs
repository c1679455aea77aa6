//! Error types for rendering and format handling

use std::fmt;

/// Errors that can occur while parsing content, rendering LaTeX or
/// invoking the typesetting engine.
///
/// The transpile and compose paths themselves are total; errors only
/// arise at the edges (unknown format names, malformed content JSON,
/// file I/O, engine invocation).
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Format not found in the registry
    FormatNotFound(String),
    /// The format exists but does not support the requested direction
    NotSupported(String),
    /// Content input that could not be deserialized
    InvalidContent(String),
    /// File system error while writing or reading artifacts
    Io(String),
    /// The typesetting engine binary is not installed / not on PATH
    EngineMissing(String),
    /// The typesetting engine ran but failed; carries captured diagnostics
    EngineFailed(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            RenderError::NotSupported(msg) => write!(f, "Not supported: {msg}"),
            RenderError::InvalidContent(msg) => write!(f, "Invalid content: {msg}"),
            RenderError::Io(msg) => write!(f, "I/O error: {msg}"),
            RenderError::EngineMissing(msg) => write!(f, "Typesetting engine missing: {msg}"),
            RenderError::EngineFailed(log) => write!(f, "Typesetting engine failed:\n{log}"),
        }
    }
}

impl std::error::Error for RenderError {}
