//! Entry reconstruction from the normalized line stream.
//!
//! A header line opens a student/teacher group; every candidate inside the
//! group is a place line, a heat label found by lookahead, and the event
//! description on the following line. Anything that does not fit is
//! skipped and recorded, never fatal.

use crate::diagnostics::{Diagnostic, SkipReason};
use crate::entry::{CompetitionEntry, MainRow, ProcessResult};
use crate::patterns;
use crate::scoring;

/// Cap on unrecognized-line records while searching for a header, so a
/// document full of boilerplate does not flood the diagnostics.
const MAX_SCAN_DIAGNOSTICS: usize = 10;

/// Event-description marker routing an entry to the amateur-couples
/// section.
const AMATEUR_COUPLES_MARKER: &str = "AC-";

/// Events carrying this phrase (any case) are professional heats and are
/// excluded from the report.
const PRO_HEAT_MARKER: &str = "pro heat";

/// Parses and scores the whole line sequence.
///
/// Pure computation: the input is a fully materialized, trimmed,
/// non-empty line list and the output owns all of its data.
#[must_use]
pub fn process(lines: &[String]) -> ProcessResult {
    Parser::new(lines).run()
}

struct Parser<'a> {
    lines: &'a [String],
    result: ProcessResult,
    /// Student whose points the running subtotal is accumulating.
    current_student: Option<String>,
    running_points: i64,
    scan_diagnostics: usize,
}

impl<'a> Parser<'a> {
    fn new(lines: &'a [String]) -> Self {
        Self {
            lines,
            result: ProcessResult::default(),
            current_student: None,
            running_points: 0,
            scan_diagnostics: 0,
        }
    }

    fn run(mut self) -> ProcessResult {
        let mut i = 0;
        while i < self.lines.len() {
            if let Some((student, teacher)) = patterns::split_header(&self.lines[i]) {
                tracing::debug!(line = i + 1, %student, %teacher, "entering group");
                i = self.consume_group(i + 1, &student, &teacher);
            } else {
                if self.scan_diagnostics < MAX_SCAN_DIAGNOSTICS {
                    self.scan_diagnostics += 1;
                    self.skip(i, SkipReason::UnrecognizedLine);
                }
                i += 1;
            }
        }
        self.result
    }

    /// Consumes every candidate entry in the group starting at `start`.
    /// Returns the index of the next unconsumed line (the next header, or
    /// end of input).
    fn consume_group(&mut self, start: usize, student: &str, teacher: &str) -> usize {
        let mut j = start;

        while j < self.lines.len() {
            if patterns::HEADER.is_match(&self.lines[j]) {
                break;
            }

            let Some(caps) = patterns::PLACE.captures(&self.lines[j]) else {
                self.skip(j, SkipReason::NotAPlaceLine);
                j += 1;
                continue;
            };
            let place_line = j;
            let place = caps[1].to_string();
            let proficiency = caps.get(2).map(|m| m.as_str().to_string());
            j += 1;

            // Lookahead for the heat label; intervening lines are skipped
            // silently, matching the sheets' habit of interleaving notes.
            let mut heat = None;
            while j < self.lines.len() {
                if let Some(h) = patterns::HEAT.captures(&self.lines[j]) {
                    heat = Some(format!("{} {}", &h[1], &h[2]));
                    j += 1;
                    break;
                }
                j += 1;
            }

            // Event description is the line after the heat label, unless
            // that line opens the next group.
            let mut event_description = None;
            if j < self.lines.len() && !patterns::HEADER.is_match(&self.lines[j]) {
                // Cells are double-quote wrapped in the CSV; embedded
                // quotes become apostrophes here.
                event_description = Some((self.lines[j].replace('"', "'"), j));
                j += 1;
            }

            // Completeness gate: a candidate missing any field is dropped.
            match (heat, event_description) {
                (Some(heat), Some((event, event_line)))
                    if !student.is_empty() && !teacher.is_empty() =>
                {
                    self.route(student, teacher, place, proficiency, &heat, &event, event_line);
                }
                (heat, event_description) => {
                    let mut missing = Vec::new();
                    if student.is_empty() {
                        missing.push("student");
                    }
                    if teacher.is_empty() {
                        missing.push("teacher");
                    }
                    if heat.is_none() {
                        missing.push("heat");
                    }
                    if event_description.is_none() {
                        missing.push("event");
                    }
                    self.skip(place_line, SkipReason::IncompleteEntry { missing });
                }
            }
        }

        j
    }

    /// Scores a complete candidate and routes it to exactly one of the
    /// main section, the amateur-couples section, or the discard pile.
    #[expect(
        clippy::too_many_arguments,
        reason = "one call site, spelling the candidate fields out"
    )]
    fn route(
        &mut self,
        student: &str,
        teacher: &str,
        place: String,
        proficiency: Option<String>,
        heat: &str,
        event_description: &str,
        event_line: usize,
    ) {
        let event = format!("{heat} {}", event_description.trim());
        let points = scoring::score(&event, &place, proficiency.as_deref());
        let entry = CompetitionEntry {
            student: student.to_string(),
            teacher: teacher.to_string(),
            event,
            place,
            proficiency,
            points,
        };

        if event_description.contains(AMATEUR_COUPLES_MARKER) {
            self.result.amateur_couples.push(entry);
            return;
        }

        if event_description.to_lowercase().contains(PRO_HEAT_MARKER) {
            self.skip(event_line, SkipReason::ProHeatFiltered);
            return;
        }

        if self.current_student.as_deref() == Some(student) {
            self.running_points += entry.points;
        } else {
            self.current_student = Some(student.to_string());
            // The subtotal row only appears once the list already holds
            // more than one row, deferring the first student's subtotal
            // until a second student shows up; see DESIGN.md.
            if self.result.main.len() > 1 {
                self.result
                    .main
                    .push(MainRow::RunningTotal(self.running_points));
            }
            self.running_points = entry.points;
        }
        self.result.main.push(MainRow::Entry(entry));
    }

    fn skip(&mut self, line_idx: usize, reason: SkipReason) {
        tracing::debug!(line = line_idx + 1, %reason, text = %self.lines[line_idx], "skipping");
        self.result.diagnostics.push(Diagnostic {
            line: line_idx + 1,
            reason,
        });
    }
}
