use crate::models::{truncate_window_text, TileableWindow, WindowFilter, WindowHandle};
use crate::platform::WindowSystem;
use crate::Result;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Locates the top-level windows that should be tiled
pub struct WindowFinder<'a> {
    system: &'a dyn WindowSystem,
}

impl<'a> WindowFinder<'a> {
    pub fn new(system: &'a dyn WindowSystem) -> Self {
        Self { system }
    }

    /// Handles of every top-level window whose class and title equal the
    /// filter exactly.
    ///
    /// A window whose class or title cannot be read is skipped; only a
    /// failure of the enumeration itself is returned as an error.
    pub fn find_windows(&self, filter: &WindowFilter) -> Result<HashSet<WindowHandle>> {
        let handles = self.system.top_level_windows()?;
        let total = handles.len();

        let matches: HashSet<WindowHandle> = handles
            .into_iter()
            .filter(|&handle| self.matches(handle, filter))
            .collect();

        debug!(
            total,
            matched = matches.len(),
            class = %filter.class_name,
            title = %filter.title,
            "Enumerated top-level windows"
        );
        Ok(matches)
    }

    /// Snapshot the geometry of `handle`, or `None` when the system reports
    /// the all-zero rectangle or the query fails.
    pub fn resolve_geometry(&self, handle: WindowHandle) -> Option<TileableWindow> {
        let raw = match self.system.window_rect(handle) {
            Ok(raw) => raw,
            Err(err) => {
                debug!("Skipping window {}: {}", handle, err);
                return None;
            }
        };

        if raw.is_empty_marker() {
            trace!("Skipping window {} with empty bounds", handle);
            return None;
        }

        let frame = raw.to_rect();
        Some(TileableWindow::new(handle, frame.origin(), frame.size()))
    }

    /// Matching windows with usable geometry, ordered by handle so the grid
    /// assignment is the same for the same set of windows
    pub fn collect_windows(&self, filter: &WindowFilter) -> Result<Vec<TileableWindow>> {
        let mut windows: Vec<TileableWindow> = self
            .find_windows(filter)?
            .into_iter()
            .filter_map(|handle| self.resolve_geometry(handle))
            .collect();

        windows.sort_by_key(|window| window.handle);
        Ok(windows)
    }

    fn matches(&self, handle: WindowHandle, filter: &WindowFilter) -> bool {
        let class_name = match self.system.class_name(handle) {
            Ok(class_name) => class_name,
            Err(err) => {
                debug!("Could not read class of window {}: {}", handle, err);
                return false;
            }
        };

        // Titles are only read for windows of the right class.
        if truncate_window_text(&class_name) != filter.class_name {
            return false;
        }

        match self.system.title(handle) {
            Ok(title) => truncate_window_text(&title) == filter.title,
            Err(err) => {
                debug!("Could not read title of window {}: {}", handle, err);
                false
            }
        }
    }
}
