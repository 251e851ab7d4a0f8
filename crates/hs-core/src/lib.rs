//! Core parsing and scoring for competition result sheets.
//!
//! The pipeline is pure computation over an in-memory line list:
//! - [`normalize_lines`] rewrites PDF-condensed lines into the per-field
//!   shape the parser consumes
//! - [`process`] reconstructs and scores entries from the line stream
//! - [`render_csv`] serializes the report in the canonical section order
//!
//! [`csv_report`] composes the last two for callers that only want the
//! final text.

mod diagnostics;
mod entry;
mod normalize;
mod parser;
pub mod patterns;
mod report;
pub mod scoring;

use thiserror::Error;

pub use diagnostics::{Diagnostic, SkipReason};
pub use entry::{CompetitionEntry, MainRow, ProcessResult};
pub use normalize::normalize_lines;
pub use parser::process;
pub use patterns::{LineKind, classify_line};
pub use report::{CSV_HEADER, couple_totals, render_csv, student_totals, teacher_totals};

/// Leading input lines carried in [`ReportError::NoEntries`] for
/// troubleshooting.
pub const SAMPLE_LINES: usize = 20;

/// Request-level failures of the parse-and-report pipeline.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Lines were extracted but no entry could be reconstructed. Usually a
    /// formatting problem in the source document; the sample lets an
    /// operator see what the parser saw.
    #[error("no competition entries found in {total_lines} lines of input")]
    NoEntries {
        total_lines: usize,
        sample: Vec<String>,
    },
}

impl ReportError {
    /// Builds the no-entries failure, capturing up to `sample_len` leading
    /// lines.
    #[must_use]
    pub fn no_entries(lines: &[String], sample_len: usize) -> Self {
        Self::NoEntries {
            total_lines: lines.len(),
            sample: lines.iter().take(sample_len).cloned().collect(),
        }
    }
}

/// Full pipeline over already-normalized lines: parse, score, aggregate,
/// serialize.
pub fn csv_report(lines: &[String]) -> Result<String, ReportError> {
    let result = process(lines);
    if result.main.is_empty() {
        return Err(ReportError::no_entries(lines, SAMPLE_LINES));
    }
    Ok(render_csv(&result))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn csv_report_over_valid_lines() {
        let csv = csv_report(&lines(&[
            "Jane Doe/John Smith (#12) [Studio A]",
            "1 [94.0]",
            "Heat 300",
            "Bronze Foxtrot",
        ]))
        .unwrap();

        assert!(csv.starts_with(CSV_HEADER));
        assert!(csv.contains("\"Jane Doe\",\"John Smith\",\"Heat 300 Bronze Foxtrot\",\"1\",\"94.0\",13"));
    }

    #[test]
    fn csv_report_fails_when_nothing_parses() {
        let input: Vec<String> = (0..30).map(|n| format!("boilerplate {n}")).collect();
        let err = csv_report(&input).unwrap_err();

        let ReportError::NoEntries {
            total_lines,
            sample,
        } = err;
        assert_eq!(total_lines, 30);
        assert_eq!(sample.len(), SAMPLE_LINES);
        assert_eq!(sample[0], "boilerplate 0");
    }

    #[test]
    fn amateur_couples_alone_still_count_as_no_entries() {
        // The main list drives the empty check, matching the upstream
        // contract that a report needs at least one main entry.
        let err = csv_report(&lines(&[
            "Jane Doe/John Smith (#12) [Studio A]",
            "1",
            "Heat 400",
            "AC-Open Smooth",
        ]))
        .unwrap_err();
        assert!(matches!(err, ReportError::NoEntries { total_lines: 4, .. }));
    }
}
