//! Window struct and state

use serde::Serialize;
use crate::math::Rect;

/// One application window
///
/// Windows exist for the whole session; closing only hides them, so the
/// rectangle survives until the next open.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    /// Application id
    pub id: String,
    /// Taskbar and title bar caption
    pub title: String,
    pub is_open: bool,
    pub is_minimized: bool,
    /// View-only override; `rect` keeps the restored geometry
    pub is_maximized: bool,
    /// Stacking order (higher = on top)
    pub z_index: u32,
    /// Stored geometry
    #[serde(rename = "position")]
    pub rect: Rect,
}

impl Window {
    /// Open and not minimized
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }

    /// Whether pointer drags and resizes may act on this window
    #[inline]
    pub fn accepts_pointer_drag(&self) -> bool {
        self.is_visible() && !self.is_maximized
    }

    /// Rectangle the window occupies on screen: the work area while maximized
    pub fn display_rect(&self, work_area: &Rect) -> Rect {
        if self.is_maximized {
            *work_area
        } else {
            self.rect
        }
    }
}
