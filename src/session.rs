//! Process-wide scan session state.
//!
//! Two pieces of shared mutable state exist in the whole system: the
//! "scan in progress" flag and the single pending debounce trigger. Both
//! live here, behind plain test-and-set primitives. The state is an
//! explicit object owned by the orchestrator (and shared with the
//! debouncer), not an ambient global.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Shared session state: at most one active scan, at most one pending
/// debounce trigger.
#[derive(Debug, Default)]
pub struct ScanSessionState {
    scanning: AtomicBool,
    pending: Mutex<Option<PendingTrigger>>,
}

/// Handle to a scheduled debounce trigger. Dropping the handle does not
/// cancel the timer; cancellation is explicit via the shared flag.
#[derive(Debug)]
pub(crate) struct PendingTrigger {
    cancelled: Arc<AtomicBool>,
}

impl PendingTrigger {
    pub(crate) fn new(cancelled: Arc<AtomicBool>) -> Self {
        Self { cancelled }
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

impl ScanSessionState {
    /// Creates an idle session with no pending trigger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to claim the in-progress flag. Returns a guard on success;
    /// `None` means a scan is already active. The flag is released when the
    /// guard drops, on success and failure paths alike.
    pub fn try_begin(&self) -> Option<ScanGuard<'_>> {
        self.scanning
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| ScanGuard { session: self })
    }

    /// Whether a scan is currently active.
    pub fn is_scanning(&self) -> bool {
        self.scanning.load(Ordering::SeqCst)
    }

    /// Installs a new pending trigger, cancelling any previous one.
    pub(crate) fn replace_pending(&self, trigger: PendingTrigger) {
        let mut slot = self.pending.lock().unwrap();
        if let Some(previous) = slot.take() {
            previous.cancel();
        }
        *slot = Some(trigger);
    }

    /// Cancels the pending trigger, if any. Called on shutdown.
    pub(crate) fn cancel_pending(&self) {
        let mut slot = self.pending.lock().unwrap();
        if let Some(previous) = slot.take() {
            previous.cancel();
        }
    }
}

/// RAII guard for the in-progress flag.
#[derive(Debug)]
pub struct ScanGuard<'a> {
    session: &'a ScanSessionState,
}

impl Drop for ScanGuard<'_> {
    fn drop(&mut self) {
        self.session.scanning.store(false, Ordering::SeqCst);
    }
}
