//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hs_doc::DocFormat;

/// Competition result sheet converter.
///
/// Reads a .docx or PDF scoring-system export and produces a CSV report
/// of points per student/teacher pair.
#[derive(Debug, Parser)]
#[command(name = "hs", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a result document to a CSV point report.
    Convert {
        /// The .docx or .pdf file to convert.
        file: PathBuf,

        /// Write the CSV here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Force the container format instead of sniffing it.
        #[arg(long)]
        format: Option<DocFormat>,
    },

    /// Show extracted lines, pattern matches and parse diagnostics.
    Inspect {
        /// The .docx or .pdf file to inspect.
        file: PathBuf,

        /// Show only the first N lines (0 shows all).
        #[arg(long)]
        limit: Option<usize>,

        /// Emit the inspection as JSON.
        #[arg(long)]
        json: bool,

        /// Force the container format instead of sniffing it.
        #[arg(long)]
        format: Option<DocFormat>,
    },
}
