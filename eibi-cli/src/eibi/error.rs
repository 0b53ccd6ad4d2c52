//! Schedule source error types.

use std::path::PathBuf;

/// Errors from fetching or caching the EiBi schedule.
#[derive(Debug, thiserror::Error)]
pub enum EibiError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("schedule download failed with status {status}")]
    Status { status: u16 },

    /// Reading or writing the local schedule copy failed
    #[error("schedule file error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
