use crate::models::{Display, RawRect, Rect, WindowHandle};
use crate::platform::WindowSystem;
use crate::{Result, WinTileError};
use std::cell::RefCell;
use std::collections::HashSet;

/// A window held by [`InMemoryWindowSystem`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryWindow {
    pub handle: WindowHandle,
    pub class_name: String,
    pub title: String,
    pub rect: RawRect,
}

impl InMemoryWindow {
    pub fn new(
        handle: u64,
        class_name: impl Into<String>,
        title: impl Into<String>,
        rect: RawRect,
    ) -> Self {
        Self {
            handle: WindowHandle::new(handle),
            class_name: class_name.into(),
            title: title.into(),
            rect,
        }
    }
}

/// Move request recorded by [`InMemoryWindowSystem`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedMove {
    pub handle: WindowHandle,
    pub frame: Rect,
    pub repaint: bool,
}

/// Desktop simulation used by tests and by callers that want to preview a
/// layout without touching real windows.
///
/// Windows are enumerated in insertion order. Individual handles can be
/// marked as failing to exercise the best-effort paths.
#[derive(Debug, Default)]
pub struct InMemoryWindowSystem {
    windows: RefCell<Vec<InMemoryWindow>>,
    displays: Vec<Display>,
    failing_queries: HashSet<WindowHandle>,
    failing_moves: HashSet<WindowHandle>,
    moves: RefCell<Vec<RecordedMove>>,
}

impl InMemoryWindowSystem {
    pub fn new_with(windows: Vec<InMemoryWindow>, displays: Vec<Display>) -> Self {
        Self {
            windows: RefCell::new(windows),
            displays,
            ..Self::default()
        }
    }

    /// Class, title and rect queries for `handle` fail
    pub fn with_failing_queries(mut self, handle: u64) -> Self {
        self.failing_queries.insert(WindowHandle::new(handle));
        self
    }

    /// Move requests for `handle` fail
    pub fn with_failing_moves(mut self, handle: u64) -> Self {
        self.failing_moves.insert(WindowHandle::new(handle));
        self
    }

    pub fn moves(&self) -> Vec<RecordedMove> {
        self.moves.borrow().clone()
    }

    pub fn window(&self, handle: WindowHandle) -> Option<InMemoryWindow> {
        self.windows
            .borrow()
            .iter()
            .find(|window| window.handle == handle)
            .cloned()
    }

    fn query<T>(&self, handle: WindowHandle, read: impl FnOnce(&InMemoryWindow) -> T) -> Result<T> {
        if self.failing_queries.contains(&handle) {
            return Err(
                WinTileError::PlatformError(format!("query failed for window {handle}")).into(),
            );
        }

        self.windows
            .borrow()
            .iter()
            .find(|window| window.handle == handle)
            .map(read)
            .ok_or_else(|| WinTileError::WindowNotFound(handle).into())
    }
}

impl WindowSystem for InMemoryWindowSystem {
    fn top_level_windows(&self) -> Result<Vec<WindowHandle>> {
        Ok(self.windows.borrow().iter().map(|window| window.handle).collect())
    }

    fn class_name(&self, handle: WindowHandle) -> Result<String> {
        self.query(handle, |window| window.class_name.clone())
    }

    fn title(&self, handle: WindowHandle) -> Result<String> {
        self.query(handle, |window| window.title.clone())
    }

    fn window_rect(&self, handle: WindowHandle) -> Result<RawRect> {
        self.query(handle, |window| window.rect)
    }

    fn displays(&self) -> Result<Vec<Display>> {
        Ok(self.displays.clone())
    }

    fn move_window(&self, handle: WindowHandle, frame: Rect, repaint: bool) -> Result<()> {
        if self.failing_moves.contains(&handle) {
            return Err(
                WinTileError::PlatformError(format!("move failed for window {handle}")).into(),
            );
        }

        let mut windows = self.windows.borrow_mut();
        let window = windows
            .iter_mut()
            .find(|window| window.handle == handle)
            .ok_or(WinTileError::WindowNotFound(handle))?;
        window.rect = RawRect::new(frame.x, frame.y, frame.right(), frame.bottom());

        self.moves.borrow_mut().push(RecordedMove {
            handle,
            frame,
            repaint,
        });
        Ok(())
    }
}
