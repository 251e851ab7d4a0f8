//! Line normalization for PDF-extracted text.
//!
//! PDF extraction collapses each result onto one line: placement, optional
//! score, heat label and event description with no separators. DOCX
//! sources already carry one field per line. This pass rewrites the
//! condensed shape into the three-line form the parser consumes and leaves
//! everything else untouched.

use crate::patterns;

/// Splits condensed lines into place, heat label and event description.
///
/// Header lines and anything unrecognized pass through unmodified, so
/// running this over an already-expanded sequence returns it unchanged.
#[must_use]
pub fn normalize_lines(lines: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());

    for line in lines {
        if patterns::HEADER.is_match(line) {
            out.push(line.clone());
            continue;
        }

        if let Some(caps) = patterns::CONDENSED.captures(line) {
            tracing::debug!(%line, "splitting condensed line");
            out.push(caps[1].trim().to_string());
            out.push(caps[2].trim().to_string());
            out.push(caps[3].trim().to_string());
        } else {
            out.push(line.clone());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn splits_condensed_line_with_score() {
        let out = normalize_lines(&lines(&["1 [97.0]Heat 288L-B1 Bronze Foxtrot"]));
        assert_eq!(
            out,
            lines(&["1 [97.0]", "Heat 288", "L-B1 Bronze Foxtrot"])
        );
    }

    #[test]
    fn splits_condensed_line_without_score() {
        let out = normalize_lines(&lines(&["3Heat 102Silver Tango"]));
        assert_eq!(out, lines(&["3", "Heat 102", "Silver Tango"]));
    }

    #[test]
    fn splits_condensed_callback_and_solo() {
        let out = normalize_lines(&lines(&["*A [95.0]Solo 12Showcase Rumba"]));
        assert_eq!(out, lines(&["*A [95.0]", "Solo 12", "Showcase Rumba"]));
    }

    #[test]
    fn header_lines_pass_through() {
        let header = "Jane Doe/John Smith (#12) [Studio A]";
        let out = normalize_lines(&lines(&[header]));
        assert_eq!(out, lines(&[header]));
    }

    #[test]
    fn unrecognized_lines_pass_through() {
        let out = normalize_lines(&lines(&["Bronze Foxtrot", "Heat 300", "1 [93.0]"]));
        assert_eq!(out, lines(&["Bronze Foxtrot", "Heat 300", "1 [93.0]"]));
    }

    #[test]
    fn idempotent_on_expanded_sequence() {
        let input = lines(&[
            "Jane Doe/John Smith (#12) [Studio A]",
            "1 [97.0]Heat 288L-B1 Bronze Foxtrot",
            "2Heat 300Silver Waltz",
            "Some unrelated footer",
        ]);
        let once = normalize_lines(&input);
        let twice = normalize_lines(&once);
        assert_eq!(once, twice);
    }
}
