//! Schedule filtering.
//!
//! Filtering happens on the raw schedule lines, before any record parsing:
//! a line survives when it contains every requested pattern as a
//! substring. Language and target-area criteria arrive as display names
//! and are first resolved back to the codes that actually appear in the
//! schedule text.

use tracing::warn;

use crate::codes::{CodeBooks, CodeTable};

/// Preamble lines at the top of eibi.txt (title, validity, column legend).
pub const HEADER_LINES: usize = 17;

/// User-supplied filter criteria, all optional.
#[derive(Debug, Clone, Default)]
pub struct Query {
    /// Station name substring.
    pub name: Option<String>,
    /// Frequency in kHz.
    pub frequency: Option<String>,
    /// Broadcast time, `HHMM-HHMM`.
    pub time: Option<String>,
    /// ITU country code.
    pub country: Option<String>,
    /// Language display name (resolved to its code).
    pub language: Option<String>,
    /// Target-area display name (resolved to its code).
    pub target_area: Option<String>,
}

impl Query {
    /// Turn the criteria into substring patterns.
    ///
    /// Language and target-area names are resolved to codes by reverse
    /// lookup; a name with no matching code is used verbatim (and will
    /// typically match nothing), with a warning.
    pub fn patterns(&self, codes: &CodeBooks) -> Vec<String> {
        let mut patterns = Vec::new();

        for simple in [&self.name, &self.frequency, &self.time, &self.country] {
            if let Some(pattern) = simple {
                patterns.push(pattern.clone());
            }
        }

        if let Some(language) = &self.language {
            patterns.push(resolve_name(&codes.languages, language, "language"));
        }
        if let Some(area) = &self.target_area {
            patterns.push(resolve_name(&codes.target_areas, area, "target area"));
        }

        patterns
    }
}

/// Reverse-resolve a display name to its code, falling back to the name.
fn resolve_name(table: &CodeTable, name: &str, kind: &str) -> String {
    match table.find_key(name) {
        Some(code) => code.to_owned(),
        None => {
            warn!(name, kind, "no code found for name, matching it verbatim");
            name.to_owned()
        }
    }
}

/// True when `line` contains every pattern as a substring.
fn matches_all(line: &str, patterns: &[String]) -> bool {
    patterns.iter().all(|p| line.contains(p.as_str()))
}

/// Filter the schedule body against the patterns.
///
/// Skips the [`HEADER_LINES`] preamble, then keeps each line containing
/// every pattern. With no patterns, the whole body is returned.
pub fn filter_lines<'a>(lines: &'a [String], patterns: &[String]) -> Vec<&'a str> {
    lines
        .iter()
        .skip(HEADER_LINES)
        .map(String::as_str)
        .filter(|line| matches_all(line, patterns))
        .collect()
}
