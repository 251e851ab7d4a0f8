//! Structured skip records.
//!
//! The parser never aborts on a malformed group; it records why a line or
//! candidate entry was dropped and keeps going. Callers and tests assert
//! on these records instead of scraping log output.

use std::fmt;

use serde::Serialize;

/// Why a line or candidate entry was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Seen while searching for a header; matched no known shape.
    UnrecognizedLine,
    /// Seen inside a group where a place token was expected.
    NotAPlaceLine,
    /// A place token was read but the candidate never completed.
    IncompleteEntry { missing: Vec<&'static str> },
    /// Professional heat, excluded from the report.
    ProHeatFiltered,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedLine => f.write_str("unrecognized line"),
            Self::NotAPlaceLine => f.write_str("expected a place token"),
            Self::IncompleteEntry { missing } => {
                write!(f, "incomplete entry (missing {})", missing.join(", "))
            }
            Self::ProHeatFiltered => f.write_str("pro heat filtered out"),
        }
    }
}

/// A single skip record tied to a 1-based input line number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    pub reason: SkipReason,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_line_and_reason() {
        let diag = Diagnostic {
            line: 7,
            reason: SkipReason::IncompleteEntry {
                missing: vec!["heat", "event"],
            },
        };
        assert_eq!(diag.to_string(), "line 7: incomplete entry (missing heat, event)");
    }
}
