//! Code table error types.

use std::path::PathBuf;

/// Errors that can occur when populating a code table from disk.
///
/// A missing or unreadable code file is recoverable: the caller logs it
/// and carries on with the table as it was.
#[derive(Debug, thiserror::Error)]
pub enum CodeError {
    /// The code file could not be read
    #[error("failed to read code file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
