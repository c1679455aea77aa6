//! Document assembly (composed LaTeX → PDF)
//!
//! Boundary to the external typesetting engine. Everything upstream of this
//! module is pure; this is where the system touches the file system and
//! spawns processes. Callers that only need the composed `.tex` text never
//! come through here.

use crate::error::RenderError;
use std::fs;
use std::process::Command;

/// Output of a successful engine run.
#[derive(Debug, Clone, PartialEq)]
pub struct TypesetOutput {
    /// Rendered PDF bytes
    pub pdf: Vec<u8>,
    /// Captured engine diagnostics (stdout + stderr of the last run)
    pub log: String,
}

/// Compile composed LaTeX to PDF with `pdflatex`.
///
/// The source is staged in a temporary directory and compiled twice; the
/// second run resolves cross-references. Failures carry the captured engine
/// output so the caller can report diagnostics to the user.
pub fn typeset(latex: &str) -> Result<TypesetOutput, RenderError> {
    let pdflatex = which::which("pdflatex")
        .map_err(|_| RenderError::EngineMissing("pdflatex not found on PATH".to_string()))?;

    let dir = tempfile::tempdir().map_err(|e| RenderError::Io(e.to_string()))?;
    let tex_path = dir.path().join("document.tex");
    fs::write(&tex_path, latex).map_err(|e| RenderError::Io(e.to_string()))?;

    let mut log = String::new();
    for _ in 0..2 {
        let output = Command::new(&pdflatex)
            .arg("-interaction=nonstopmode")
            .arg("-output-directory")
            .arg(dir.path())
            .arg(&tex_path)
            .output()
            .map_err(|e| RenderError::Io(e.to_string()))?;

        log = format!(
            "{}{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );

        if !output.status.success() {
            return Err(RenderError::EngineFailed(log));
        }
    }

    let pdf_path = dir.path().join("document.pdf");
    let pdf = fs::read(&pdf_path)
        .map_err(|_| RenderError::EngineFailed(format!("no PDF artifact produced\n{log}")))?;

    Ok(TypesetOutput { pdf, log })
}
