//! Viewport dimensions and the derived work area

use crate::config::LayoutConfig;
use crate::math::{Rect, Size, Vec2};

/// Browser viewport in CSS pixels
///
/// Read at interaction time; the host calls `DesktopEngine::resize` when the
/// window size changes and every later clamp uses the new dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Viewport width
    pub width: f32,
    /// Viewport height, taskbar included
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1920.0, 1080.0)
    }
}

impl Viewport {
    /// Create a viewport with the given size
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Area windows may occupy: the viewport minus the taskbar strip
    pub fn work_area(&self, layout: &LayoutConfig) -> Rect {
        Rect::new(
            0.0,
            0.0,
            self.width.max(0.0),
            (self.height - layout.taskbar_height).max(0.0),
        )
    }

    /// Largest top-left an icon may take and still fit in the work area
    pub fn max_icon_origin(&self, layout: &LayoutConfig) -> Vec2 {
        let area = self.work_area(layout);
        Vec2::new(
            area.width - layout.icon_size.width,
            area.height - layout.icon_size.height,
        )
    }

    /// Viewport as a size
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
