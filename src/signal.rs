// src/signal.rs

//! Provides signal handling for a clean watch-loop shutdown.

use anyhow::{Context, Result};

use crate::cancellation::CancellationToken;

/// Sets up a handler for Ctrl+C (SIGINT).
///
/// The returned token is cancelled when the signal arrives; the watch loop
/// checks it between events and exits cleanly, cancelling any pending
/// debounce trigger on the way out.
///
/// # Errors
/// Returns an error if the signal handler cannot be set.
pub fn setup_signal_handler() -> Result<CancellationToken> {
    let token = CancellationToken::new();
    let handler_token = token.clone();

    ctrlc::set_handler(move || {
        log::info!("Ctrl+C received, shutting down watch mode.");
        handler_token.cancel();
    })
    .context("Failed to set Ctrl+C signal handler")?;

    Ok(token)
}

// Note: Testing signal handlers directly is complex and often skipped
// or handled via integration tests that send signals to the process.
