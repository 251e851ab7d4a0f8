//! Shared line patterns.
//!
//! Result sheets carry no markup; the only structure is which of these
//! shapes a line matches. Every pattern used by the normalizer and the
//! parser is compiled exactly once here.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Header line opening a student/teacher group. Two printed variants:
/// `Name/Name (#123) [Location]` and `Name (#123)/Name [Location]`.
pub static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)/(.+?)\s*\(#\d+\)\s*\[.+?\]$|^(.+?)\s*\(#\d+\)/(.+?)\s*\[.+?\]$")
        .expect("header pattern compiles")
});

/// Place line: a placement or callback token with an optional bracketed
/// proficiency score. `1`, `1 [93.0]`, `*A`, `*A [95.0]`.
pub static PLACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\*?[A-Za-z0-9]+)(?:\s*\[(\d+\.?\d*)\])?$").expect("place pattern compiles")
});

/// Heat label line: `Heat 612` or `Solo 4`.
pub static HEAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(Heat|Solo)\s+(\d+)$").expect("heat pattern compiles"));

/// Condensed PDF line: place token, optional score, heat label and event
/// description run together without line breaks, e.g. `1 [97.0]Heat 288L-B1
/// Bronze Foxtrot`.
pub static CONDENSED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\*?[A-Za-z0-9]+\s*(?:\[\d+\.?\d*\])?)((?:Heat|Solo)\s+\d+)(.+)$")
        .expect("condensed pattern compiles")
});

/// First parenthesized group in an event name, holding the dance list of a
/// scholarship or championship event, e.g. `(W/T/F/Q)`.
pub static PAREN_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").expect("paren pattern compiles"));

/// Splits a header line into its trimmed (student, teacher) names, or
/// `None` if the line is not a header.
pub fn split_header(line: &str) -> Option<(String, String)> {
    let caps = HEADER.captures(line)?;
    let (student, teacher) = match (caps.get(1), caps.get(2)) {
        (Some(s), Some(t)) => (s, t),
        _ => (caps.get(3)?, caps.get(4)?),
    };
    Some((
        student.as_str().trim().to_string(),
        teacher.as_str().trim().to_string(),
    ))
}

/// The recognized shape of a single line, if any.
///
/// Surfaced by the inspect command so an operator can see which patterns
/// did or did not match a troublesome document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Header,
    Place,
    HeatLabel,
    Condensed,
    Other,
}

impl LineKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Place => "place",
            Self::HeatLabel => "heat_label",
            Self::Condensed => "condensed",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a line against the recognized shapes, most specific first.
#[must_use]
pub fn classify_line(line: &str) -> LineKind {
    if HEADER.is_match(line) {
        LineKind::Header
    } else if PLACE.is_match(line) {
        LineKind::Place
    } else if HEAT.is_match(line) {
        LineKind::HeatLabel
    } else if CONDENSED.is_match(line) {
        LineKind::Condensed
    } else {
        LineKind::Other
    }
}
