//! WinTile - tile matching desktop windows into an even grid
//!
//! Entry point: configure logging, parse the command line and run a single
//! tiling pass against the platform window system.

use clap::Parser;
use std::io;
use tracing::{debug, info};
use wintile::{
    cli::{WinTileCli, WinTileCliExecutor},
    logging::{init_logging, LogConfig},
    platform::system_window_system,
    Result, WinTileError,
};

fn main() -> Result<()> {
    let cli = WinTileCli::parse();

    let log_config = if cli.verbose {
        LogConfig::development()
    } else {
        LogConfig::from_env()
    };
    init_logging(&log_config).map_err(|e| {
        WinTileError::ConfigurationError(format!("Failed to initialize logging: {}", e))
    })?;

    info!("WinTile v{}", env!("CARGO_PKG_VERSION"));

    let system = system_window_system();
    let executor = WinTileCliExecutor::new(system.as_ref());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = executor.execute(&cli.to_config(), &mut stdin.lock(), &mut stdout.lock())?;

    debug!(
        planned = outcome.report.planned,
        moved = outcome.report.moved,
        failed = outcome.report.failed,
        "Run complete"
    );
    Ok(())
}
