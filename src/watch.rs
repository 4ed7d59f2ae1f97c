//! Watch mode: debounced re-scans on filesystem changes.
//!
//! The watcher is the collaborator that produces "file changed" signals;
//! everything after that goes through [`ChangeDebouncer`]. Events for the
//! report artifact itself and for VCS metadata are filtered out before they
//! reach the debouncer, otherwise writing the report would immediately
//! schedule the next scan.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use notify::{Event, EventKind, RecursiveMode, Watcher};

use crate::cancellation::CancellationToken;
use crate::debounce::ChangeDebouncer;
use crate::errors::ScanError;
use crate::scan::Scanner;

/// How often the loop polls the cancellation token.
const SHUTDOWN_POLL_MS: u64 = 200;

/// Runs an initial scan, then re-scans after each quiet period of changes
/// until the token is cancelled.
///
/// # Errors
/// Returns [`ScanError::Watcher`] if the filesystem watcher cannot be
/// created or attached. Failures of individual change-triggered scans are
/// logged and do not stop the loop.
pub fn watch_and_rescan(
    scanner: Arc<Scanner>,
    quiet_period: Duration,
    token: CancellationToken,
) -> Result<(), ScanError> {
    let root = scanner.root().to_path_buf();
    let artifact = artifact_filename(&scanner);

    // The first scan runs before watching starts, so a quiet project still
    // gets a report.
    match scanner.run() {
        Ok(report) => debug!(
            "initial scan: {} files",
            report.project_structure.summary.file_count
        ),
        Err(err) => warn!("initial scan failed: {err}"),
    }

    let debouncer = Arc::new(ChangeDebouncer::for_scanner(
        Arc::clone(&scanner),
        quiet_period,
    ));

    let event_debouncer = Arc::clone(&debouncer);
    let mut watcher = notify::recommended_watcher(move |result: notify::Result<Event>| {
        match result {
            Ok(event) => {
                if is_relevant(&event, artifact.as_deref()) {
                    event_debouncer.on_change();
                }
            }
            Err(err) => warn!("watch error: {err}"),
        }
    })?;
    watcher.watch(&root, RecursiveMode::Recursive)?;
    log::info!("watching '{}' for changes", root.display());

    while !token.is_cancelled() {
        std::thread::sleep(Duration::from_millis(SHUTDOWN_POLL_MS));
    }
    debouncer.shutdown();
    Ok(())
}

fn artifact_filename(scanner: &Scanner) -> Option<String> {
    use crate::config::OutputTarget;
    match scanner.output_target() {
        OutputTarget::File(name) => name
            .file_name()
            .map(|n| n.to_string_lossy().into_owned()),
        OutputTarget::Stdout => None,
    }
}

/// Keep create/modify/remove events that are not our own artifact or VCS
/// metadata churn.
fn is_relevant(event: &Event, artifact: Option<&str>) -> bool {
    if !matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) {
        return false;
    }
    event.paths.iter().any(|path| !is_noise(path, artifact))
}

fn is_noise(path: &Path, artifact: Option<&str>) -> bool {
    if let (Some(artifact), Some(name)) = (artifact, path.file_name()) {
        if name.to_string_lossy() == artifact {
            return true;
        }
    }
    path.components().any(|c| {
        let name = c.as_os_str().to_string_lossy();
        crate::constants::VCS_DIRS.contains(&name.as_ref())
    })
}
