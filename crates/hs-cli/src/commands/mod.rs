//! CLI command implementations.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use hs_doc::DocFormat;

pub mod convert;
pub mod inspect;

/// Reads the document and produces the normalized line stream the parser
/// consumes. PDF text goes through condensed-line splitting; DOCX text
/// already carries one field per line.
pub(crate) fn load_lines(file: &Path, format: Option<DocFormat>) -> Result<Vec<String>> {
    let bytes = fs::read(file).with_context(|| format!("failed to read {}", file.display()))?;

    let (format, lines) = match format {
        Some(format) => (format, hs_doc::extract_lines_as(format, &bytes)?),
        None => hs_doc::extract_lines(&bytes)?,
    };
    tracing::debug!(%format, lines = lines.len(), file = %file.display(), "extracted document");

    Ok(match format {
        DocFormat::Pdf => hs_core::normalize_lines(&lines),
        DocFormat::Docx => lines,
    })
}
