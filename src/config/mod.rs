//! Run configuration for WinTile
//!
//! There is no configuration file; a run is fully described by the command
//! line, with defaults that reproduce the fixed Picture-in-Picture behaviour.

use crate::models::WindowFilter;
use crate::{Result, WinTileError};

/// Everything one tiling run needs to know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileConfig {
    /// Class/title pair a window must match exactly
    pub filter: WindowFilter,
    /// 1-based display index; `None` prompts when several displays exist
    pub display: Option<usize>,
    /// Compute and report the layout without moving anything
    pub dry_run: bool,
    /// Emit the plan as JSON instead of text lines
    pub json_output: bool,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            filter: WindowFilter::default(),
            display: None,
            dry_run: false,
            json_output: false,
        }
    }
}

impl TileConfig {
    /// Reject settings no window or display could satisfy
    pub fn validate(&self) -> Result<()> {
        if self.filter.class_name.is_empty() {
            return Err(
                WinTileError::ConfigurationError("window class must not be empty".into()).into(),
            );
        }

        if self.display == Some(0) {
            return Err(WinTileError::ConfigurationError(
                "display numbers start at 1".into(),
            )
            .into());
        }

        Ok(())
    }
}
