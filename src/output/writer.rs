// src/output/writer.rs

//! Serializes the report to its configured destination.
//!
//! The artifact is pretty-printed JSON. File destinations with relative
//! paths resolve inside the scan root, so the default artifact lands next
//! to the code it describes.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;

use super::ScanReport;
use crate::config::{OutputTarget, ScanConfig};
use crate::errors::{output_error, ScanError};

/// Writes the report to the destination given by `config.output`.
///
/// # Errors
/// Returns [`ScanError::Serialize`] if the report cannot be encoded and
/// [`ScanError::OutputWrite`] if the destination cannot be written. Both are
/// fatal to the scan; the caller is responsible for releasing its guard.
pub fn write_report(report: &ScanReport, config: &ScanConfig) -> Result<(), ScanError> {
    let mut bytes = serde_json::to_vec_pretty(report)?;
    bytes.push(b'\n');

    match &config.output {
        OutputTarget::File(name) => {
            let path = resolve_artifact_path(name, config);
            fs::write(&path, &bytes).map_err(|e| output_error(e, &path))?;
            debug!("report written to '{}'", path.display());
        }
        OutputTarget::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(&bytes)
                .and_then(|_| stdout.flush())
                .map_err(|e| output_error(e, "<stdout>"))?;
        }
    }
    Ok(())
}

/// Resolves a file destination against the scan root when relative.
pub fn resolve_artifact_path(name: &Path, config: &ScanConfig) -> PathBuf {
    if name.is_absolute() {
        name.to_path_buf()
    } else {
        config.root.join(name)
    }
}
