//! Default placement for windows and icons, and work-area clamping

use crate::catalog::AppEntry;
use crate::config::LayoutConfig;
use crate::math::{Rect, Size, Vec2};
use crate::viewport::Viewport;

/// Center a window of `size` in the work area (never above/left of the origin)
pub fn centered_window_rect(size: Size, viewport: &Viewport, layout: &LayoutConfig) -> Rect {
    Rect::new(
        ((viewport.width - size.width) / 2.0).max(0.0),
        ((viewport.height - size.height - layout.taskbar_height) / 2.0).max(0.0),
        size.width,
        size.height,
    )
}

/// First-open rectangle for an application's window
pub fn default_window_rect(app: &AppEntry, viewport: &Viewport, layout: &LayoutConfig) -> Rect {
    centered_window_rect(app.window_size(), viewport, layout)
}

/// Default slot for the `row`-th icon of portfolio column `column`
pub fn portfolio_slot(column: usize, row: usize, layout: &LayoutConfig) -> Vec2 {
    Vec2::new(
        layout.icon_margin + column as f32 * layout.column_width(),
        layout.icon_margin + row as f32 * layout.icon_size.height,
    )
}

/// Default slot for the about icon, centered horizontally and lifted above the taskbar
pub fn about_slot(viewport: &Viewport, layout: &LayoutConfig) -> Vec2 {
    Vec2::new(
        viewport.width / 2.0 - layout.icon_size.width / 2.0,
        viewport.height / 2.0 - layout.taskbar_height - layout.icon_size.height / 2.0,
    )
}

/// Default slot for the `index`-th game icon in the top-right column
pub fn game_slot(index: usize, viewport: &Viewport, layout: &LayoutConfig) -> Vec2 {
    Vec2::new(
        viewport.width - layout.icon_size.width - layout.icon_margin,
        layout.icon_margin + index as f32 * layout.icon_size.height,
    )
}

/// Fixed slot of the recycle bin in the bottom-right corner
pub fn recycle_bin_slot(viewport: &Viewport, layout: &LayoutConfig) -> Vec2 {
    Vec2::new(
        viewport.width - layout.icon_size.width - layout.icon_margin,
        viewport.height - layout.taskbar_height - layout.icon_size.height - layout.icon_margin,
    )
}

/// Clamp a window rectangle into `area`
///
/// Size is raised to `min_size` and lowered to the area (but never below the
/// minimum); the position is then pulled inside. An area smaller than the
/// minimum size pins the window to the area origin.
pub fn clamp_window_rect(rect: Rect, min_size: Size, area: &Rect) -> Rect {
    let size = rect
        .size()
        .max(min_size)
        .min(area.size().max(min_size));

    let max_origin = Vec2::new(area.right() - size.width, area.bottom() - size.height);
    let position = rect.position().clamp(area.position(), max_origin);

    Rect::from_pos_size(position, size)
}
