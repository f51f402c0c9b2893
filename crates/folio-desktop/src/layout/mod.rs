//! Geometry and collision utilities
//!
//! Pure functions over the layout constants and the current viewport:
//! grid snapping, icon overlap tests, the nearest-free-slot ring search,
//! default window/icon placement and work-area clamping. No state.

mod grid;
mod placement;

pub use grid::{find_nearest_free_slot, is_over_target, rects_overlap, snap_to_grid};
pub use placement::{
    about_slot, centered_window_rect, clamp_window_rect, default_window_rect, game_slot,
    portfolio_slot, recycle_bin_slot,
};
