//! WinTile - tile matching desktop windows into an even grid
//!
//! WinTile finds the top-level windows that carry a given class name and
//! title, lays them out on a grid sized to a chosen display, and resizes each
//! one while keeping its original aspect ratio.

pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod platform;
pub mod services;

pub use models::*;
pub use services::*;

/// Result type alias for WinTile operations
pub type Result<T> = anyhow::Result<T>;

/// Error types specific to WinTile operations
#[derive(thiserror::Error, Debug)]
pub enum WinTileError {
    #[error("Invalid display selection: {0}")]
    InvalidSelection(String),

    #[error("No displays detected")]
    NoDisplays,

    #[error("Window not found: {0}")]
    WindowNotFound(WindowHandle),

    #[error("Platform API error: {0}")]
    PlatformError(String),

    #[error("Window management is not supported on {0}")]
    UnsupportedPlatform(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
