//! Collapses bursts of file-change notifications into one delayed scan.
//!
//! Every `on_change` cancels the previously scheduled trigger and arms a
//! new one; the trigger fires only after a full quiet period with no
//! further changes. A trigger that fires while a scan is already running is
//! dropped by the orchestrator's fail-fast guard, never queued.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::{debug, warn};

use crate::errors::ScanError;
use crate::scan::Scanner;
use crate::session::{PendingTrigger, ScanSessionState};

/// Debounces change notifications into scan triggers.
pub struct ChangeDebouncer {
    session: Arc<ScanSessionState>,
    quiet_period: Duration,
    trigger: Arc<dyn Fn() + Send + Sync>,
}

impl ChangeDebouncer {
    /// Creates a debouncer that invokes `trigger` after each quiet period.
    ///
    /// The session must be the same one guarding the orchestrator, so that
    /// the pending-trigger slot and the in-progress flag stay coherent.
    pub fn new(
        session: Arc<ScanSessionState>,
        quiet_period: Duration,
        trigger: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            session,
            quiet_period,
            trigger: Arc::new(trigger),
        }
    }

    /// Creates a debouncer that re-runs the given scanner after each quiet
    /// period. Rejected triggers (scan already running) are logged and
    /// dropped, per the orchestrator's fail-fast guard.
    pub fn for_scanner(scanner: Arc<Scanner>, quiet_period: Duration) -> Self {
        let session = scanner.session();
        Self::new(session, quiet_period, move || match scanner.run() {
            Ok(_) => {}
            Err(ScanError::ScanInProgress) => {
                debug!("change-triggered scan dropped: a scan is already running");
            }
            Err(err) => warn!("change-triggered scan failed: {err}"),
        })
    }

    /// Called once per external file create/modify/delete notification.
    ///
    /// Cancels any pending trigger and schedules a new one after the quiet
    /// period.
    pub fn on_change(&self) {
        let cancelled = Arc::new(AtomicBool::new(false));
        self.session
            .replace_pending(PendingTrigger::new(cancelled.clone()));

        let quiet_period = self.quiet_period;
        let trigger = Arc::clone(&self.trigger);
        thread::spawn(move || {
            thread::sleep(quiet_period);
            if !cancelled.load(Ordering::SeqCst) {
                trigger();
            }
        });
    }

    /// Cancels the pending trigger, if any. Called on shutdown.
    pub fn shutdown(&self) {
        self.session.cancel_pending();
    }
}
