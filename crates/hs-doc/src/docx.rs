//! DOCX text extraction.
//!
//! A `.docx` file is a ZIP archive; the document body lives in
//! `word/document.xml`. Each `<w:p>` paragraph becomes one line, its text
//! collected from the paragraph's `<w:t>` runs, so the per-field line
//! structure of the source sheet survives extraction.

use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::Event;
use zip::result::ZipError;

use crate::ExtractError;

pub(crate) fn extract_lines(bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;

    let mut xml = String::new();
    match archive.by_name("word/document.xml") {
        Ok(mut part) => {
            part.read_to_string(&mut xml)?;
        }
        Err(ZipError::FileNotFound) => return Err(ExtractError::MissingDocumentXml),
        Err(e) => return Err(e.into()),
    }

    parse_document_xml(&xml)
}

/// Walks the document XML, emitting one line per non-empty paragraph.
fn parse_document_xml(xml: &str) -> Result<Vec<String>, ExtractError> {
    // Runs keep their exact whitespace; a word can split across runs at a
    // space boundary, so only the assembled paragraph is trimmed.
    let mut reader = Reader::from_str(xml);

    let mut lines = Vec::new();
    let mut paragraph = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => paragraph.clear(),
                b"w:t" => in_text = true,
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:p" => {
                    let text = paragraph.trim();
                    if !text.is_empty() {
                        lines.push(text.to_string());
                    }
                    paragraph.clear();
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_text {
                    let text = e
                        .unescape()
                        .map_err(|e| ExtractError::Xml(e.to_string()))?;
                    paragraph.push_str(&text);
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(ExtractError::Xml(e.to_string())),
        }
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"<?xml version="1.0"?>
    <w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
        <w:body>
            <w:p><w:r><w:t>Jane Doe/John Smith (#12) [Studio A]</w:t></w:r></w:p>
            <w:p><w:r><w:t>1 [94.0]</w:t></w:r></w:p>
            <w:p><w:r><w:t>Heat </w:t></w:r><w:r><w:t>300</w:t></w:r></w:p>
            <w:p><w:r><w:t/></w:r></w:p>
            <w:p><w:r><w:t>Bronze Foxtrot</w:t></w:r></w:p>
        </w:body>
    </w:document>"#;

    #[test]
    fn one_line_per_paragraph() {
        let lines = parse_document_xml(DOCUMENT).unwrap();
        assert_eq!(
            lines,
            vec![
                "Jane Doe/John Smith (#12) [Studio A]",
                "1 [94.0]",
                "Heat 300",
                "Bronze Foxtrot",
            ]
        );
    }

    #[test]
    fn entities_are_unescaped() {
        let xml = r#"<w:document xmlns:w="ns"><w:body>
            <w:p><w:r><w:t>Smith &amp; Jones</w:t></w:r></w:p>
        </w:body></w:document>"#;
        let lines = parse_document_xml(xml).unwrap();
        assert_eq!(lines, vec!["Smith & Jones"]);
    }

    #[test]
    fn unclosed_paragraph_yields_no_lines() {
        let result = parse_document_xml("<w:document><w:body><w:p><w:t>oops");
        assert!(result.unwrap_or_default().is_empty());
    }

    #[test]
    fn not_a_zip_errors() {
        let result = extract_lines(b"definitely not a zip archive");
        assert!(matches!(result, Err(ExtractError::Zip(_))));
    }
}
