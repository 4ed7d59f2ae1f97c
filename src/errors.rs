//! Defines application-specific error types.
//!
//! This module provides the `ScanError` enum, which categorizes the failures
//! a scan can hit. Only two classes are fatal to a scan: an unusable root and
//! a report that cannot be written. Everything else (unreadable files,
//! malformed exclusion globs, budget exhaustion) is absorbed locally and
//! never interrupts traversal.

use thiserror::Error;

/// Errors surfaced by the scanning core.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The scan root does not exist, is not a directory, or cannot be read.
    /// Fatal: no partial report is written.
    #[error("scan root '{path}' is not readable: {source}")]
    RootUnavailable {
        /// The offending root path.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// A scan was requested while another one is active. Non-fatal rejection;
    /// the in-flight scan is unaffected and nothing is queued.
    #[error("a scan is already in progress")]
    ScanInProgress,

    /// The report could not be written to its destination. Fatal; the
    /// in-progress guard is still released.
    #[error("failed to write report to '{path}': {source}")]
    OutputWrite {
        /// The destination that failed.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// The report could not be serialized. Fatal.
    #[error("failed to serialize scan report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[cfg(feature = "watch")]
    /// The filesystem watcher could not be created or attached.
    #[error("file watcher error: {0}")]
    Watcher(#[from] notify::Error),
}

/// Helper to build a [`ScanError::RootUnavailable`] with path context.
pub fn root_error<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> ScanError {
    ScanError::RootUnavailable {
        path: path.as_ref().display().to_string(),
        source,
    }
}

/// Helper to build a [`ScanError::OutputWrite`] with path context.
pub fn output_error<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> ScanError {
    ScanError::OutputWrite {
        path: path.as_ref().display().to_string(),
        source,
    }
}
