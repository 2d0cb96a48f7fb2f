//! Command-line interface for WinTile
//!
//! With no arguments the binary tiles Firefox Picture-in-Picture windows,
//! prompting for a display only when more than one is attached.

use crate::config::TileConfig;
use crate::models::{WindowFilter, DEFAULT_WINDOW_CLASS, DEFAULT_WINDOW_TITLE};
use crate::platform::WindowSystem;
use crate::services::{DisplaySelector, TilePlan, TileReport, TilingEngine, WindowFinder};
use crate::{trace_performance, Result};
use clap::Parser;
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// WinTile command-line interface
#[derive(Parser, Debug)]
#[command(name = "wintile")]
#[command(about = "Tile matching windows into an aspect-corrected grid")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct WinTileCli {
    /// Window class name to match exactly
    #[arg(long = "class", default_value = DEFAULT_WINDOW_CLASS)]
    pub class_name: String,

    /// Window title to match exactly
    #[arg(long, default_value = DEFAULT_WINDOW_TITLE)]
    pub title: String,

    /// Display number (1-based) to tile onto instead of prompting
    #[arg(short, long)]
    pub display: Option<usize>,

    /// Print the layout without moving any window
    #[arg(long)]
    pub dry_run: bool,

    /// Print the layout as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl WinTileCli {
    pub fn to_config(&self) -> TileConfig {
        TileConfig {
            filter: WindowFilter::new(self.class_name.clone(), self.title.clone()),
            display: self.display,
            dry_run: self.dry_run,
            json_output: self.json,
        }
    }
}

/// What a run computed and did
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub plan: TilePlan,
    pub report: TileReport,
}

/// Runs one tiling pass against a window system
pub struct WinTileCliExecutor<'a> {
    system: &'a dyn WindowSystem,
}

impl<'a> WinTileCliExecutor<'a> {
    pub fn new(system: &'a dyn WindowSystem) -> Self {
        Self { system }
    }

    /// Select a display, find the matching windows, lay them out and move
    /// them. The display prompt reads from `input`; the listing and the
    /// per-window report go to `output`.
    pub fn execute<R, W>(
        &self,
        config: &TileConfig,
        input: &mut R,
        output: &mut W,
    ) -> Result<RunOutcome>
    where
        R: BufRead,
        W: Write,
    {
        config.validate()?;

        let selector = DisplaySelector::from_system(self.system)?;
        let display = match config.display {
            Some(index) => selector.choose(index)?,
            None => selector.select_display(input, output)?,
        };

        let windows = WindowFinder::new(self.system).collect_windows(&config.filter)?;
        info!(
            "Found {} window(s) matching class '{}' and title '{}'",
            windows.len(),
            config.filter.class_name,
            config.filter.title
        );

        let engine = TilingEngine::new(self.system);
        let plan = trace_performance!("tile_plan", { engine.plan(&windows, &display) });

        if config.json_output {
            serde_json::to_writer_pretty(&mut *output, &plan)?;
            writeln!(output)?;
        } else {
            for command in &plan.commands {
                writeln!(output, "{}", command)?;
            }
        }
        output.flush()?;

        let report = if config.dry_run || plan.commands.is_empty() {
            TileReport {
                planned: plan.commands.len(),
                ..TileReport::default()
            }
        } else {
            trace_performance!("tile_apply", { engine.apply(&plan.commands) })
        };

        if report.failed > 0 {
            warn!(
                "{} of {} window(s) could not be moved",
                report.failed, report.planned
            );
        }

        Ok(RunOutcome { plan, report })
    }
}
