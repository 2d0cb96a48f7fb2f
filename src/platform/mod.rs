//! Platform integration layer for WinTile
//!
//! Everything the tiler needs from the desktop goes through [`WindowSystem`].
//! Windows builds talk to Win32; every other target gets a provider that
//! reports the platform as unsupported. Tests drive the services through the
//! in-memory provider or a mock.

pub mod in_memory;
pub mod unsupported;
#[cfg(windows)]
pub mod win32;

pub use in_memory::*;
pub use unsupported::*;
#[cfg(windows)]
pub use win32::*;

use crate::models::{Display, RawRect, Rect, WindowHandle};
use crate::Result;

/// Abstraction over the desktop's window and display APIs
#[cfg_attr(test, mockall::automock)]
pub trait WindowSystem {
    /// Handles of every top-level window, in whatever order the system
    /// enumerates them
    fn top_level_windows(&self) -> Result<Vec<WindowHandle>>;

    /// Window class name, at most `WINDOW_TEXT_CAPACITY - 1` code units
    fn class_name(&self, handle: WindowHandle) -> Result<String>;

    /// Window title, at most `WINDOW_TEXT_CAPACITY - 1` code units
    fn title(&self, handle: WindowHandle) -> Result<String>;

    /// Bounding rectangle in screen coordinates
    fn window_rect(&self, handle: WindowHandle) -> Result<RawRect>;

    /// All attached displays
    fn displays(&self) -> Result<Vec<Display>>;

    /// Move and resize a window in one call
    fn move_window(&self, handle: WindowHandle, frame: Rect, repaint: bool) -> Result<()>;
}

/// Provider for the platform this binary was built for
pub fn system_window_system() -> Box<dyn WindowSystem> {
    #[cfg(windows)]
    {
        Box::new(Win32WindowSystem::new())
    }

    #[cfg(not(windows))]
    {
        Box::new(UnsupportedWindowSystem::new(std::env::consts::OS))
    }
}
