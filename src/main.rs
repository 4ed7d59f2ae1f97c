// src/main.rs

use anyhow::Result;
use clap::Parser;

use projscan::cli::Cli;
use projscan::config::ConfigBuilder;
use projscan::errors::ScanError;
use projscan::Scanner;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    log::debug!("Starting projscan v{}...", env!("CARGO_PKG_VERSION"));

    let args = Cli::parse();

    #[cfg(feature = "watch")]
    let watch_mode = args.watch;
    #[cfg(feature = "watch")]
    let quiet_period = std::time::Duration::from_millis(args.debounce);

    let builder = ConfigBuilder::try_from(args)?;
    let scanner = Scanner::new(builder);

    #[cfg(feature = "watch")]
    if watch_mode {
        let token = projscan::signal::setup_signal_handler()?;
        let result = projscan::watch::watch_and_rescan(
            std::sync::Arc::new(scanner),
            quiet_period,
            token,
        );
        if let Err(e) = result {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    if let Err(e) = scanner.run() {
        match e {
            ScanError::ScanInProgress => {
                // Cannot happen for a one-shot run, but keep the mapping
                // uniform with the watch-mode trigger path.
                eprintln!("projscan: {}", e);
                return Ok(());
            }
            _ => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
