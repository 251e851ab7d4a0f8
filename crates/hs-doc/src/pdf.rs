//! PDF text extraction backed by `pdf-extract`.
//!
//! The extractor returns the whole document as one string; splitting on
//! newlines recovers the line stream. PDF exports condense each result
//! onto a single line, which the core normalizer expands afterwards.

use crate::ExtractError;

pub(crate) fn extract_lines(bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect())
}
