//! Implementation of the `hs convert` command.
//!
//! Reads the source document, extracts and normalizes its lines, runs the
//! parse-and-score pipeline and writes the CSV report to stdout or a file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use hs_doc::DocFormat;

use crate::Config;

use super::load_lines;

pub fn run(
    file: &Path,
    output: Option<&Path>,
    format: Option<DocFormat>,
    config: &Config,
) -> Result<()> {
    let lines = load_lines(file, format)?;

    let result = hs_core::process(&lines);
    for diagnostic in &result.diagnostics {
        tracing::debug!(%diagnostic, "parse diagnostic");
    }

    if result.main.is_empty() {
        let err = hs_core::ReportError::no_entries(&lines, config.sample_lines);
        let hs_core::ReportError::NoEntries { ref sample, .. } = err;
        // Echo what the parser saw so the operator can fix the source
        // document's formatting.
        eprintln!("first {} extracted lines:", sample.len());
        for (idx, line) in sample.iter().enumerate() {
            eprintln!("  line {}: \"{line}\"", idx + 1);
        }
        return Err(err.into());
    }

    let csv = hs_core::render_csv(&result);
    match output {
        Some(path) => {
            fs::write(path, &csv)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote CSV report");
        }
        None => println!("{csv}"),
    }

    Ok(())
}
