//! Report aggregation and CSV rendering.
//!
//! Totals are computed once over the final entry lists and serialized in
//! one canonical section order: main rows, student totals, teacher totals,
//! then the amateur-couples section when present.

use crate::entry::{CompetitionEntry, MainRow, ProcessResult};

/// Fixed column order of every report.
pub const CSV_HEADER: &str = "Student,Teacher,Event,Place,Proficiency,Points";

/// Adds `points` under `key`, preserving first-appearance order.
fn accumulate<K: PartialEq>(totals: &mut Vec<(K, i64)>, key: K, points: i64) {
    match totals.iter_mut().find(|(k, _)| *k == key) {
        Some((_, sum)) => *sum += points,
        None => totals.push((key, points)),
    }
}

/// Points per student over the main entries, subtotal rows excluded.
#[must_use]
pub fn student_totals(result: &ProcessResult) -> Vec<(String, i64)> {
    let mut totals = Vec::new();
    for entry in result.main_entries() {
        accumulate(&mut totals, entry.student.clone(), entry.points);
    }
    totals
}

/// Points per teacher over the main entries, subtotal rows excluded.
#[must_use]
pub fn teacher_totals(result: &ProcessResult) -> Vec<(String, i64)> {
    let mut totals = Vec::new();
    for entry in result.main_entries() {
        accumulate(&mut totals, entry.teacher.clone(), entry.points);
    }
    totals
}

/// Points per (student, teacher) couple over the amateur-couples entries.
#[must_use]
pub fn couple_totals(result: &ProcessResult) -> Vec<((String, String), i64)> {
    let mut totals = Vec::new();
    for entry in &result.amateur_couples {
        accumulate(
            &mut totals,
            (entry.student.clone(), entry.teacher.clone()),
            entry.points,
        );
    }
    totals
}

/// One CSV row. Text cells are double-quote wrapped (the parser already
/// replaced embedded quotes); the Points cell is written bare and left
/// empty for label and separator rows.
fn csv_row(
    student: &str,
    teacher: &str,
    event: &str,
    place: &str,
    proficiency: &str,
    points: Option<i64>,
) -> String {
    let points = points.map(|p| p.to_string()).unwrap_or_default();
    format!("\"{student}\",\"{teacher}\",\"{event}\",\"{place}\",\"{proficiency}\",{points}")
}

fn entry_row(entry: &CompetitionEntry) -> String {
    csv_row(
        &entry.student,
        &entry.teacher,
        &entry.event,
        &entry.place,
        entry.proficiency.as_deref().unwrap_or(""),
        Some(entry.points),
    )
}

fn label_row(label: &str) -> String {
    csv_row(label, "", "", "", "", None)
}

fn separator_row() -> String {
    csv_row("", "", "", "", "", None)
}

/// Serializes the full report.
#[must_use]
pub fn render_csv(result: &ProcessResult) -> String {
    let mut rows = vec![CSV_HEADER.to_string()];

    for row in &result.main {
        match row {
            MainRow::Entry(entry) => rows.push(entry_row(entry)),
            MainRow::RunningTotal(points) => {
                rows.push(csv_row("Total :", "", "", "", "", Some(*points)));
            }
        }
    }

    rows.push(separator_row());
    rows.push(label_row("STUDENT TOTALS:"));
    for (student, points) in student_totals(result) {
        rows.push(csv_row(&student, "", "", "", "", Some(points)));
    }

    rows.push(separator_row());
    rows.push(label_row("TEACHER TOTALS:"));
    for (teacher, points) in teacher_totals(result) {
        rows.push(csv_row("", &teacher, "", "", "", Some(points)));
    }

    if !result.amateur_couples.is_empty() {
        rows.push(separator_row());
        rows.push(label_row("AMATEUR COUPLES ENTRIES:"));
        for entry in &result.amateur_couples {
            rows.push(entry_row(entry));
        }

        rows.push(separator_row());
        rows.push(label_row("AMATEUR COUPLES TOTALS:"));
        for ((student, teacher), points) in couple_totals(result) {
            rows.push(csv_row(&student, &teacher, "", "", "", Some(points)));
        }
    }

    rows.join("\n")
}
