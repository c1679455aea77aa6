//! Render orchestration
//!
//! Ties the pipeline together: parse/transpile each input block, compose the
//! template, and either return the composed LaTeX in memory or write it to
//! disk. The transpile and compose steps are pure; only the optional file
//! output performs I/O.

use crate::content::Section;
use crate::error::RenderError;
use crate::registry::FormatRegistry;
use crate::template::{self, RenderedSection, DEFAULT_SECTION_TITLES};
use std::fs;
use std::path::{Path, PathBuf};

/// Content input for a render: either typed section trees (the tree
/// pipeline) or a raw HTML string (the legacy markup pipeline, rendered as a
/// single section with the default sentinel title).
#[derive(Debug, Clone, PartialEq)]
pub enum RenderInput {
    Sections(Vec<Section>),
    Markup(String),
}

#[derive(Debug)]
pub struct RenderSpec<'a> {
    pub template: &'a str,
    pub input: RenderInput,
    pub output: Option<PathBuf>,
}

impl<'a> RenderSpec<'a> {
    pub fn new(template: &'a str, input: RenderInput) -> Self {
        Self {
            template,
            input,
            output: None,
        }
    }

    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderArtifact {
    InMemory(String),
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderResult {
    pub artifact: RenderArtifact,
}

/// Render a spec into composed LaTeX.
pub fn render(spec: RenderSpec<'_>) -> Result<RenderResult, RenderError> {
    let registry = FormatRegistry::with_defaults();

    let rendered = match &spec.input {
        RenderInput::Sections(sections) => sections
            .iter()
            .map(|section| {
                let latex = registry.serialize(&section.content, "latex")?;
                Ok(RenderedSection::new(section.title.clone(), latex))
            })
            .collect::<Result<Vec<_>, RenderError>>()?,
        RenderInput::Markup(raw) => {
            let tree = registry.parse(raw, "html")?;
            let latex = registry.serialize(&tree, "latex")?;
            vec![RenderedSection::new(DEFAULT_SECTION_TITLES[0], latex)]
        }
    };

    let composed = template::compose(spec.template, &rendered);
    write_or_return(composed, spec.output)
}

/// Interpret tree-pipeline JSON: a `{"sections": [...]}` request envelope, a
/// bare section array, or a single document tree (rendered as one section
/// with the default sentinel title).
pub fn sections_from_json(source: &str) -> Result<Vec<Section>, RenderError> {
    #[derive(serde::Deserialize)]
    struct Envelope {
        sections: Vec<Section>,
    }

    if let Ok(envelope) = serde_json::from_str::<Envelope>(source) {
        return Ok(envelope.sections);
    }
    if let Ok(sections) = serde_json::from_str::<Vec<Section>>(source) {
        return Ok(sections);
    }
    let tree = serde_json::from_str(source)
        .map_err(|e| RenderError::InvalidContent(e.to_string()))?;
    Ok(vec![Section {
        title: DEFAULT_SECTION_TITLES[0].to_string(),
        content: tree,
    }])
}

fn write_or_return(
    composed: String,
    output: Option<PathBuf>,
) -> Result<RenderResult, RenderError> {
    if let Some(path) = output {
        fs::write(&path, &composed).map_err(|e| RenderError::Io(e.to_string()))?;
        Ok(RenderResult {
            artifact: RenderArtifact::File(path),
        })
    } else {
        Ok(RenderResult {
            artifact: RenderArtifact::InMemory(composed),
        })
    }
}
