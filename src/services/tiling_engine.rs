use crate::models::{Display, Rect, TileableWindow, WindowHandle};
use crate::platform::WindowSystem;
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// Rows and columns of the grid plus the size of one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridDimensions {
    pub columns: usize,
    pub rows: usize,
    pub cell_width: i32,
    pub cell_height: i32,
}

impl GridDimensions {
    /// Smallest near-square grid holding `count` windows on `working_area`.
    ///
    /// `columns = ceil(sqrt(count))`, `rows = ceil(count / columns)`; cell
    /// sizes truncate, leaving any slack on the right and bottom edges.
    /// Returns `None` for zero windows.
    pub fn for_count(count: usize, working_area: Rect) -> Option<Self> {
        if count == 0 {
            return None;
        }

        let columns = ceil_sqrt(count);
        let rows = count.div_ceil(columns);

        Some(Self {
            columns,
            rows,
            cell_width: working_area.width / columns as i32,
            cell_height: working_area.height / rows as i32,
        })
    }

    pub fn capacity(&self) -> usize {
        self.rows * self.columns
    }
}

/// Integer `ceil(sqrt(n))`, immune to floating point error for large `n`
fn ceil_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt().ceil() as usize;
    while root * root < n {
        root += 1;
    }
    while root > 1 && (root - 1) * (root - 1) >= n {
        root -= 1;
    }
    root
}

/// Move/resize request for one window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileCommand {
    pub handle: WindowHandle,
    pub row: usize,
    pub column: usize,
    /// Geometry captured when the window was enumerated
    pub source: Rect,
    pub target: Rect,
}

impl TileCommand {
    /// The window as it was before tiling
    pub fn window(&self) -> TileableWindow {
        TileableWindow::new(self.handle, self.source.origin(), self.source.size())
    }
}

impl fmt::Display for TileCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Moving {} to ({}, {}). Resizing to ({}, {})",
            self.window(),
            self.target.x,
            self.target.y,
            self.target.width,
            self.target.height
        )
    }
}

/// Outcome of applying a set of tile commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TileReport {
    pub planned: usize,
    pub moved: usize,
    pub failed: usize,
}

/// Full layout for one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TilePlan {
    pub display: Display,
    pub grid: Option<GridDimensions>,
    pub commands: Vec<TileCommand>,
}

/// Computes and applies the aspect-corrected grid layout
pub struct TilingEngine<'a> {
    system: &'a dyn WindowSystem,
    repaint: bool,
}

impl<'a> TilingEngine<'a> {
    /// Engine that moves windows without repainting them mid-move
    pub fn new(system: &'a dyn WindowSystem) -> Self {
        Self {
            system,
            repaint: false,
        }
    }

    /// Lay `windows` out on `display` in row-major order
    pub fn plan(&self, windows: &[TileableWindow], display: &Display) -> TilePlan {
        TilePlan {
            display: display.clone(),
            grid: GridDimensions::for_count(windows.len(), display.working_area),
            commands: tile(windows, display),
        }
    }

    /// Issue every command in order. A failed move is logged and the
    /// remaining windows are still processed.
    pub fn apply(&self, commands: &[TileCommand]) -> TileReport {
        let mut report = TileReport {
            planned: commands.len(),
            ..TileReport::default()
        };

        for command in commands {
            match self
                .system
                .move_window(command.handle, command.target, self.repaint)
            {
                Ok(()) => {
                    debug!("Moved window {} to {}", command.handle, command.target);
                    report.moved += 1;
                }
                Err(err) => {
                    warn!("Failed to move window {}: {}", command.handle, err);
                    report.failed += 1;
                }
            }
        }

        report
    }
}

/// Compute one [`TileCommand`] per window.
///
/// Each window keeps its aspect ratio: the target width is derived from the
/// cell height and the target height from the cell width. The window is then
/// pushed towards the right edge of its cell by `cell_width - target_width`.
/// Windows without a positive width and height keep their cell but produce
/// no command.
pub fn tile(windows: &[TileableWindow], display: &Display) -> Vec<TileCommand> {
    let Some(grid) = GridDimensions::for_count(windows.len(), display.working_area) else {
        return Vec::new();
    };

    let offset_x = i64::from(display.bounds.x);
    let cell_width = i64::from(grid.cell_width);
    let cell_height = i64::from(grid.cell_height);

    let mut commands = Vec::with_capacity(windows.len());
    for (index, window) in windows.iter().enumerate() {
        let row = index / grid.columns;
        let column = index % grid.columns;

        let Some(aspect) = window.size.aspect_ratio() else {
            warn!("{} has no usable size, leaving it in place", window);
            continue;
        };

        let target_width = (cell_height as f64 * aspect).round_ties_even() as i64;
        let target_height = (cell_width as f64 / aspect).round_ties_even() as i64;
        let x = offset_x + column as i64 * target_width + (cell_width - target_width);
        let y = row as i64 * target_height;

        commands.push(TileCommand {
            handle: window.handle,
            row,
            column,
            source: window.frame(),
            target: Rect::new(
                saturate(x),
                saturate(y),
                saturate(target_width),
                saturate(target_height),
            ),
        });
    }

    commands
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
