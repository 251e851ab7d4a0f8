//! Implementation of the `hs inspect` command.
//!
//! The troubleshooting view for documents that fail to convert: shows the
//! extracted lines with the shape each one matched, what the parser
//! reconstructed, and the collected diagnostics.

use std::path::Path;

use anyhow::Result;
use hs_core::{CompetitionEntry, Diagnostic, LineKind};
use hs_doc::DocFormat;
use serde::Serialize;

use crate::Config;

use super::load_lines;

/// Payload of `hs inspect --json`.
#[derive(Debug, Serialize)]
struct Inspection<'a> {
    total_lines: usize,
    lines: Vec<InspectedLine<'a>>,
    main_entries: Vec<CompetitionEntry>,
    amateur_couple_entries: Vec<CompetitionEntry>,
    diagnostics: &'a [Diagnostic],
}

#[derive(Debug, Serialize)]
struct InspectedLine<'a> {
    line: usize,
    kind: LineKind,
    text: &'a str,
}

pub fn run(
    file: &Path,
    limit: Option<usize>,
    json: bool,
    format: Option<DocFormat>,
    config: &Config,
) -> Result<()> {
    let lines = load_lines(file, format)?;
    let result = hs_core::process(&lines);

    let shown = match limit.unwrap_or(config.sample_lines) {
        0 => lines.len(),
        n => n,
    };
    let inspected: Vec<InspectedLine<'_>> = lines
        .iter()
        .take(shown)
        .enumerate()
        .map(|(idx, text)| InspectedLine {
            line: idx + 1,
            kind: hs_core::classify_line(text),
            text,
        })
        .collect();

    if json {
        let inspection = Inspection {
            total_lines: lines.len(),
            lines: inspected,
            main_entries: result.main_entries().cloned().collect(),
            amateur_couple_entries: result.amateur_couples.clone(),
            diagnostics: &result.diagnostics,
        };
        println!("{}", serde_json::to_string_pretty(&inspection)?);
        return Ok(());
    }

    println!("{} lines extracted, showing {}", lines.len(), inspected.len());
    for line in &inspected {
        println!("{:>4}  {:<10}  {}", line.line, line.kind.as_str(), line.text);
    }

    println!();
    println!(
        "{} main entries, {} amateur-couples entries",
        result.main_entries().count(),
        result.amateur_couples.len()
    );

    if !result.diagnostics.is_empty() {
        println!();
        println!("diagnostics:");
        for diagnostic in &result.diagnostics {
            println!("  {diagnostic}");
        }
    }

    Ok(())
}
