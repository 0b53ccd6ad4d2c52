//! Bulk population of code tables from `"KEY Name"` text.
//!
//! Each line of an EiBi code file is the code, a single space, and the
//! display name (which may itself contain spaces). A line with no space is
//! malformed: it is skipped and recorded, never fatal to the rest of the
//! load.

use std::path::Path;

use tracing::warn;

use super::error::CodeError;
use super::table::CodeTable;

/// Outcome of a bulk load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines successfully inserted (updates of duplicate keys included).
    pub loaded: usize,
    /// Malformed lines that were skipped, verbatim.
    pub skipped: Vec<String>,
}

impl CodeTable {
    /// Load `"key value"` lines into the table.
    ///
    /// Splits each line on the first space: the part before is the key,
    /// everything after is the value. Later duplicate keys overwrite
    /// earlier ones. Malformed lines (no space) are skipped and returned
    /// in the report.
    pub fn load_lines<'a, I>(&mut self, lines: I) -> LoadReport
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut report = LoadReport::default();

        for line in lines {
            match line.split_once(' ') {
                Some((key, value)) => {
                    self.insert(key, value);
                    report.loaded += 1;
                }
                None => {
                    warn!(line, "skipping malformed code line");
                    report.skipped.push(line.to_owned());
                }
            }
        }

        report
    }

    /// Load a code file from disk.
    ///
    /// A missing or unreadable file returns an error and leaves the table
    /// exactly as it was.
    pub fn load_file(&mut self, path: &Path) -> Result<LoadReport, CodeError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CodeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(self.load_lines(contents.lines()))
    }
}
