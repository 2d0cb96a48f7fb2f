//! Data models for WinTile

pub mod display;
pub mod geometry;
pub mod window;

pub use display::*;
pub use geometry::*;
pub use window::*;
