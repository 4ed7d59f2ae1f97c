//! Scan orchestration: config resolution, session guard, walk, report.

use std::sync::Arc;

use log::{debug, info};

use crate::config::ConfigBuilder;
use crate::discovery;
use crate::errors::ScanError;
use crate::output::{self, ScanReport};
use crate::session::ScanSessionState;

/// Drives scans to completion, one at a time.
///
/// The scanner keeps the *unresolved* configuration and rebuilds a fresh
/// [`crate::config::ScanConfig`] snapshot per run, so sources like the root
/// `.gitignore` are re-read on every scan. The session state is shared with
/// the change debouncer to enforce the single-scan invariant.
pub struct Scanner {
    builder: ConfigBuilder,
    session: Arc<ScanSessionState>,
}

impl Scanner {
    /// Creates a scanner with a fresh, idle session.
    pub fn new(builder: ConfigBuilder) -> Self {
        Self {
            builder,
            session: Arc::new(ScanSessionState::new()),
        }
    }

    /// The shared session state (for debouncer wiring and introspection).
    pub fn session(&self) -> Arc<ScanSessionState> {
        Arc::clone(&self.session)
    }

    /// The configured (unresolved) scan root.
    pub fn root(&self) -> &std::path::Path {
        self.builder.root_path()
    }

    /// The configured report destination.
    pub fn output_target(&self) -> &crate::config::OutputTarget {
        self.builder.output_target()
    }

    /// Runs one scan to completion and writes the report.
    ///
    /// Fails fast with [`ScanError::ScanInProgress`] if a scan is already
    /// active; the request is rejected, never queued. The in-progress guard
    /// is released on every exit path.
    pub fn run(&self) -> Result<ScanReport, ScanError> {
        let _guard = self.session.try_begin().ok_or(ScanError::ScanInProgress)?;

        let config = self.builder.build()?;
        debug!(
            "scanning '{}' ({} exclusion rules)",
            config.root.display(),
            config.rules.len()
        );

        let report = discovery::walk(&config)?;
        output::write_report(&report, &config)?;

        info!(
            "scan complete: {} files{}",
            report.project_structure.summary.file_count,
            if report.truncated() {
                " (file-count budget reached)"
            } else {
                ""
            }
        );
        Ok(report)
    }
}
