use crate::models::{Display, RawRect, Rect, WindowHandle};
use crate::platform::WindowSystem;
use crate::{Result, WinTileError};

/// Provider for targets without a window backend; every call fails
#[derive(Debug, Clone)]
pub struct UnsupportedWindowSystem {
    platform: String,
}

impl UnsupportedWindowSystem {
    pub fn new(platform: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
        }
    }

    fn unsupported<T>(&self) -> Result<T> {
        Err(WinTileError::UnsupportedPlatform(self.platform.clone()).into())
    }
}

impl WindowSystem for UnsupportedWindowSystem {
    fn top_level_windows(&self) -> Result<Vec<WindowHandle>> {
        self.unsupported()
    }

    fn class_name(&self, _handle: WindowHandle) -> Result<String> {
        self.unsupported()
    }

    fn title(&self, _handle: WindowHandle) -> Result<String> {
        self.unsupported()
    }

    fn window_rect(&self, _handle: WindowHandle) -> Result<RawRect> {
        self.unsupported()
    }

    fn displays(&self) -> Result<Vec<Display>> {
        self.unsupported()
    }

    fn move_window(&self, _handle: WindowHandle, _frame: Rect, _repaint: bool) -> Result<()> {
        self.unsupported()
    }
}
