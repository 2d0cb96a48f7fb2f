//! Core services for WinTile

pub mod display_selector;
pub mod tiling_engine;
pub mod window_finder;

pub use display_selector::*;
pub use tiling_engine::*;
pub use window_finder::*;
