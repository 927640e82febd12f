//! Tron Vanity - TRON vanity address hunter
//!
//! Generates keypairs until interrupted, keeps the ones whose address ends
//! in a pattern worth having, and prints a summary on Ctrl+C.
//!
//! Environment (set variables win over a `.env` in the working directory;
//! RUST_LOG is only read from the process environment):
//!   PUSH_URL             - push endpoint for matches (optional)
//!   VANITY_OUTPUT_DIR    - storage root (default: ./address)
//!   VANITY_WORKERS       - parallel generation loops (default: 1)
//!   PUSH_MAX_IN_FLIGHT   - concurrent pushes (default: 16)
//!   PUSH_TIMEOUT_SECS    - push timeout (default: 10)
//!   PROGRESS_INTERVAL_MS - status line refresh (default: 250)
//!   RUST_LOG             - log level (default: info)

use tron_vanity::utils::constants::{APP_NAME, APP_VERSION};
use tron_vanity::{
    spawn_progress_line, AppError, RunStatistics, ShutdownSignal, TronKeyGenerator, VanityConfig,
    VanityHunter,
};

use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    println!("\n{}", "=".repeat(60));
    println!("  {} v{} - TRON vanity address hunter", APP_NAME, APP_VERSION);
    println!("  Press Ctrl+C to stop and print the summary");
    println!("{}\n", "=".repeat(60));

    let config = VanityConfig::from_env()?;
    let stats = Arc::new(RunStatistics::new());
    let shutdown = ShutdownSignal::new();

    let hunter = VanityHunter::new(&config, TronKeyGenerator, stats.clone(), shutdown.clone())?;
    let progress = spawn_progress_line(stats.clone(), config.progress_interval);

    let mut hunt = tokio::spawn(async move { hunter.run().await });

    // Run until Ctrl+C or a fatal generator failure
    let outcome = tokio::select! {
        joined = &mut hunt => joined.map_err(AppError::from).and_then(|result| result),
        _ = tokio::signal::ctrl_c() => {
            println!();
            info!("🛑 Interrupt received, stopping workers...");
            shutdown.trigger();
            hunt.await.map_err(AppError::from).and_then(|result| result)
        }
    };

    progress.abort();
    println!("{}", stats.snapshot().report());

    if let Err(e) = outcome {
        error!("❌ Hunt aborted: {}", e);
        return Err(e.into());
    }

    Ok(())
}
