use crate::models::geometry::Rect;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A physical display as reported by the windowing system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Display {
    /// Device name, informational only
    pub name: String,
    /// Full screen rectangle in virtual-desktop coordinates
    pub bounds: Rect,
    /// Bounds minus taskbars and other reserved regions
    pub working_area: Rect,
    pub primary: bool,
}

impl Display {
    pub fn new(name: impl Into<String>, bounds: Rect, working_area: Rect, primary: bool) -> Self {
        Self {
            name: name.into(),
            bounds,
            working_area,
            primary,
        }
    }

    pub fn role(&self) -> &'static str {
        if self.primary {
            "Primary"
        } else {
            "Secondary"
        }
    }
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.role(), self.bounds)
    }
}
