//! Document-to-lines extraction.
//!
//! Turns an uploaded `.docx` or PDF result sheet into the ordered list of
//! trimmed, non-empty text lines the core pipeline consumes. The
//! container format is sniffed from magic bytes, so a misnamed upload
//! still extracts.

mod docx;
mod pdf;

use std::fmt;

use thiserror::Error;

/// Supported source containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocFormat {
    Docx,
    Pdf,
}

impl DocFormat {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Docx => "docx",
            Self::Pdf => "pdf",
        }
    }

    /// Sniffs the container format from magic bytes: DOCX files are ZIP
    /// archives, PDFs announce themselves.
    #[must_use]
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(b"PK\x03\x04") {
            Some(Self::Docx)
        } else if bytes.starts_with(b"%PDF") {
            Some(Self::Pdf)
        } else {
            None
        }
    }
}

impl fmt::Display for DocFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DocFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "docx" => Ok(Self::Docx),
            "pdf" => Ok(Self::Pdf),
            _ => Err(format!("invalid document format: {s}")),
        }
    }
}

/// Failures opening or reading a source document. All of these are fatal
/// to the request; there is no partial extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unrecognized document format (expected .docx or .pdf)")]
    UnknownFormat,
    #[error("invalid DOCX container: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("DOCX container has no word/document.xml part")]
    MissingDocumentXml,
    #[error("malformed document XML: {0}")]
    Xml(String),
    #[error("PDF text extraction failed: {0}")]
    Pdf(String),
    #[error("no extractable text in document")]
    EmptyDocument,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extracts the ordered line sequence, sniffing the container format.
pub fn extract_lines(bytes: &[u8]) -> Result<(DocFormat, Vec<String>), ExtractError> {
    let format = DocFormat::sniff(bytes).ok_or(ExtractError::UnknownFormat)?;
    let lines = extract_lines_as(format, bytes)?;
    Ok((format, lines))
}

/// Extracts with a known container format.
pub fn extract_lines_as(format: DocFormat, bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    let lines = match format {
        DocFormat::Docx => docx::extract_lines(bytes)?,
        DocFormat::Pdf => pdf::extract_lines(bytes)?,
    };

    if lines.is_empty() {
        return Err(ExtractError::EmptyDocument);
    }

    tracing::debug!(%format, lines = lines.len(), "extracted document text");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniffs_docx_magic() {
        assert_eq!(DocFormat::sniff(b"PK\x03\x04rest"), Some(DocFormat::Docx));
    }

    #[test]
    fn sniffs_pdf_magic() {
        assert_eq!(DocFormat::sniff(b"%PDF-1.7 rest"), Some(DocFormat::Pdf));
    }

    #[test]
    fn unknown_bytes_do_not_sniff() {
        assert_eq!(DocFormat::sniff(b"hello world"), None);
        assert_eq!(DocFormat::sniff(b""), None);
    }

    #[test]
    fn extract_lines_rejects_unknown_format() {
        let err = extract_lines(b"not a document").unwrap_err();
        assert!(matches!(err, ExtractError::UnknownFormat));
    }

    #[test]
    fn format_roundtrip() {
        for format in [DocFormat::Docx, DocFormat::Pdf] {
            let parsed: DocFormat = format.as_str().parse().unwrap();
            assert_eq!(parsed, format);
        }
        assert!("odt".parse::<DocFormat>().is_err());
    }

    #[test]
    fn garbage_pdf_bytes_fail() {
        let result = extract_lines_as(DocFormat::Pdf, b"%PDF-1.7 truncated nonsense");
        assert!(result.is_err());
    }
}
