use crate::models::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Window class used by Firefox for its Picture-in-Picture popouts
pub const DEFAULT_WINDOW_CLASS: &str = "MozillaDialogClass";

/// Title Firefox gives its Picture-in-Picture popouts
pub const DEFAULT_WINDOW_TITLE: &str = "Picture-in-Picture";

/// Capacity, in UTF-16 code units, of the buffers used to read window text.
/// One unit is reserved for the terminator.
pub const WINDOW_TEXT_CAPACITY: usize = 1024;

/// Opaque identifier the windowing system assigns to a top-level window.
///
/// The handle carries identity only; the system owns the window behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowHandle(pub u64);

impl WindowHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0)
    }
}

/// Exact class/title pair a window must carry to be tiled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowFilter {
    pub class_name: String,
    pub title: String,
}

impl WindowFilter {
    pub fn new(class_name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            title: title.into(),
        }
    }
}

impl Default for WindowFilter {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_CLASS, DEFAULT_WINDOW_TITLE)
    }
}

/// Cut `text` down to what fits in a window text buffer of
/// [`WINDOW_TEXT_CAPACITY`] code units.
pub fn truncate_window_text(text: &str) -> String {
    let limit = WINDOW_TEXT_CAPACITY - 1;
    let units: Vec<u16> = text.encode_utf16().take(limit).collect();
    String::from_utf16_lossy(&units)
}

/// Snapshot of a matching window taken at enumeration time.
///
/// The snapshot is not refreshed; if the real window moves before the tile
/// command is applied the stored geometry is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileableWindow {
    pub handle: WindowHandle,
    pub position: Point,
    pub size: Size,
}

impl TileableWindow {
    pub fn new(handle: WindowHandle, position: Point, size: Size) -> Self {
        Self {
            handle,
            position,
            size,
        }
    }

    pub fn frame(&self) -> Rect {
        Rect::from_parts(self.position, self.size)
    }
}

impl fmt::Display for TileableWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Window {}: {} : {}", self.handle, self.position, self.size)
    }
}
