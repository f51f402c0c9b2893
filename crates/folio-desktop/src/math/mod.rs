//! Core geometry types for the desktop layout
//!
//! Everything here is pixel-space and top-left anchored, matching the
//! coordinates a browser hands to pointer handlers.

mod vec2;
mod rect;
mod size;

pub use vec2::Vec2;
pub use rect::Rect;
pub use size::Size;
