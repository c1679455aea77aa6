//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name.

use crate::content::ContentNode;
use crate::error::RenderError;
use crate::format::ContentFormat;
use std::collections::HashMap;

/// Registry of content formats
///
/// Provides a centralized registry for all available formats.
/// Formats can be registered and retrieved by name.
///
/// # Examples
///
/// ```ignore
/// let mut registry = FormatRegistry::new();
/// registry.register(MyFormat);
///
/// let format = registry.get("my-format")?;
/// let tree = format.parse("source text")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn ContentFormat>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: ContentFormat + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn ContentFormat, RenderError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| RenderError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Parse source text using the specified format
    pub fn parse(&self, source: &str, format: &str) -> Result<ContentNode, RenderError> {
        let fmt = self.get(format)?;
        if !fmt.supports_parsing() {
            return Err(RenderError::NotSupported(format!(
                "Format '{}' does not support parsing",
                format
            )));
        }
        fmt.parse(source)
    }

    /// Serialize a content tree using the specified format
    pub fn serialize(&self, node: &ContentNode, format: &str) -> Result<String, RenderError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(RenderError::NotSupported(format!(
                "Format '{}' does not support serialization",
                format
            )));
        }
        fmt.serialize(node)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        // Register built-in formats
        registry.register(crate::formats::tiptap::TiptapFormat);
        registry.register(crate::formats::html::HtmlFormat);
        registry.register(crate::formats::latex::LatexFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
