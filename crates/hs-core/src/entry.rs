//! Output records produced by one parse-and-score pass.

use serde::Serialize;

use crate::diagnostics::Diagnostic;

/// One scored competition result for a student/teacher pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompetitionEntry {
    pub student: String,
    pub teacher: String,
    /// Heat label plus event description, e.g. `Heat 300 Bronze Foxtrot`.
    pub event: String,
    /// Placement token as printed. Not always numeric; callback codes like
    /// `*A` appear here too.
    pub place: String,
    /// Proficiency score as printed, e.g. `94.0`. `None` when the sheet
    /// shows a bare placement.
    pub proficiency: Option<String>,
    pub points: i64,
}

/// A row of the report's main section.
///
/// Subtotals are emitted inline between entries whenever the student
/// changes, so the main section is a sequence of both row kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainRow {
    Entry(CompetitionEntry),
    /// Accumulated points of the preceding student, rendered as a
    /// `Total :` row.
    RunningTotal(i64),
}

impl MainRow {
    /// The scored entry, or `None` for a subtotal row.
    #[must_use]
    pub const fn as_entry(&self) -> Option<&CompetitionEntry> {
        match self {
            Self::Entry(entry) => Some(entry),
            Self::RunningTotal(_) => None,
        }
    }
}

/// Everything one pass over the line stream produces.
#[derive(Debug, Default)]
pub struct ProcessResult {
    /// Main competition rows: scored entries with interleaved subtotals.
    pub main: Vec<MainRow>,
    /// Entries routed to the amateur-couples section.
    pub amateur_couples: Vec<CompetitionEntry>,
    /// Skip records collected along the way.
    pub diagnostics: Vec<Diagnostic>,
}

impl ProcessResult {
    /// Scored entries in the main section, subtotal rows excluded.
    pub fn main_entries(&self) -> impl Iterator<Item = &CompetitionEntry> {
        self.main.iter().filter_map(MainRow::as_entry)
    }
}
