//! On-disk copy of the EiBi schedule.
//!
//! The schedule file carries its own freshness: one of the preamble lines
//! reads like `"...; Valid: August 3 - October 25, 2025"`. The cache keeps
//! the raw downloaded body on disk and re-downloads once that end date has
//! passed (or when the file is missing entirely).

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{info, warn};

use super::client::EibiClient;
use super::error::EibiError;

/// Default path for the local schedule copy.
const DEFAULT_SCHEDULE_PATH: &str = "eibi_schedule.txt";

/// On-disk cache for the schedule text.
#[derive(Debug, Clone)]
pub struct ScheduleCache {
    path: PathBuf,
}

impl ScheduleCache {
    /// Create a cache backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The cache file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the cached schedule as lines.
    pub fn load(&self) -> Result<Vec<String>, EibiError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|source| EibiError::Io {
            path: self.path.clone(),
            source,
        })?;

        Ok(contents.lines().map(str::to_owned).collect())
    }

    /// Write a downloaded schedule body to disk.
    pub fn save(&self, body: &str) -> Result<(), EibiError> {
        std::fs::write(&self.path, body).map_err(|source| EibiError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Return an up-to-date schedule, downloading when needed.
    ///
    /// The cached copy is used as long as its validity end date has not
    /// passed. A missing, unparsable, or expired copy triggers a download;
    /// if the download fails but a stale copy exists, the stale copy is
    /// returned with a warning rather than failing the run.
    pub async fn ensure_fresh(
        &self,
        client: &EibiClient,
        today: NaiveDate,
    ) -> Result<Vec<String>, EibiError> {
        let cached = self.load().ok();

        if let Some(lines) = &cached {
            if is_current(lines, today) {
                return Ok(lines.clone());
            }
            info!(path = %self.path.display(), "cached schedule expired, downloading");
        } else {
            info!(path = %self.path.display(), "no cached schedule, downloading");
        }

        match client.fetch_schedule().await {
            Ok(body) => {
                self.save(&body)?;
                self.load()
            }
            Err(err) => match cached {
                Some(lines) => {
                    warn!(error = %err, "download failed, using stale schedule");
                    Ok(lines)
                }
                None => Err(err),
            },
        }
    }
}

impl Default for ScheduleCache {
    fn default() -> Self {
        Self::new(DEFAULT_SCHEDULE_PATH)
    }
}

/// Extract the validity end date from the schedule preamble.
///
/// Looks for the first line containing `"Valid"` and parses the
/// `"<Month> <day>, <year>"` text after its last `" - "` separator.
pub fn validity_end(lines: &[String]) -> Option<NaiveDate> {
    let line = lines.iter().find(|l| l.contains("Valid"))?;
    let (_, end_text) = line.rsplit_once(" - ")?;

    NaiveDate::parse_from_str(end_text.trim(), "%B %d, %Y").ok()
}

/// True when the schedule's validity period covers `today`.
///
/// A preamble without a parsable end date counts as stale.
pub fn is_current(lines: &[String], today: NaiveDate) -> bool {
    match validity_end(lines) {
        Some(end) => today <= end,
        None => false,
    }
}
