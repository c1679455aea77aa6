//! Rich-text to LaTeX transpilation and template composition
//!
//!     This crate turns rich-text content (Tiptap-style JSON trees or raw
//!     HTML) into LaTeX markup and splices the result into a reusable
//!     document template, ready for a typesetting engine.
//!
//! Architecture
//!
//!     - ContentFormat trait: uniform interface for all formats (parsing
//!       and/or serialization)
//!     - FormatRegistry: centralized discovery and selection of formats
//!     - Format implementations: tiptap and html parse source text into one
//!       shared content tree; latex serializes that tree
//!     - Template compositor: three-tier placeholder resolution (named
//!       marker, generic marker, end-of-document fallback)
//!
//!     The transpile and compose paths are pure, synchronous functions over
//!     immutable inputs: no process-wide state, no I/O, safely callable from
//!     concurrent requests. I/O only happens in publish (optional file
//!     output) and engine (pdflatex invocation).
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── content.rs              # Content tree model (closed tagged union)
//!     ├── format.rs               # ContentFormat trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── tiptap.rs           # Tiptap JSON front end
//!     │   ├── html                # HTML front end (html5ever → tree)
//!     │   └── latex               # LaTeX back end (escape, marks, constructs)
//!     ├── template.rs             # Placeholder composition
//!     ├── publish.rs              # Render orchestration, artifacts
//!     ├── engine.rs               # pdflatex boundary
//!     └── lib.rs
//!
//! Implementation Principles
//!
//!     Both front ends produce the same content tree, and a single construct
//!     table drives the LaTeX emission, so the tree and markup pipelines
//!     cannot drift apart. Bad input degrades instead of failing: unknown
//!     node kinds pass their children through, unknown marks are ignored,
//!     and every section is guaranteed a landing slot in the template.

pub mod content;
pub mod engine;
pub mod error;
pub mod format;
pub mod formats;
pub mod publish;
pub mod registry;
pub mod template;

pub use content::{ContentNode, Mark, Section};
pub use error::RenderError;
pub use format::ContentFormat;
pub use formats::html::transpile_markup;
pub use formats::latex::{apply_marks, escape, transpile};
pub use publish::{render, RenderArtifact, RenderInput, RenderResult, RenderSpec};
pub use registry::FormatRegistry;
pub use template::{compose, RenderedSection};
