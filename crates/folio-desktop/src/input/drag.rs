//! Interaction state for pointer sessions

use serde::Serialize;
use crate::math::{Rect, Vec2};
use crate::window::ResizeEdge;

/// What a press landed on
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum DragTarget {
    /// A window title bar
    Window(String),
    /// A desktop icon
    Icon(String),
}

impl DragTarget {
    /// Id of the window or icon
    pub fn id(&self) -> &str {
        match self {
            DragTarget::Window(id) | DragTarget::Icon(id) => id,
        }
    }
}

/// Current pointer session
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Interaction {
    /// No pointer session
    #[default]
    Idle,
    /// Pressed, not yet past the drag threshold
    PendingDrag {
        target: DragTarget,
        /// Pointer position at press
        start: Vec2,
        /// Pointer position minus target top-left at press
        offset: Vec2,
    },
    /// Moving a window or icon
    Dragging {
        target: DragTarget,
        offset: Vec2,
    },
    /// Resizing a window
    Resizing {
        window_id: String,
        edge: ResizeEdge,
        /// Window rectangle at press
        start_rect: Rect,
        /// Pointer position at press
        start_pointer: Vec2,
    },
}

impl Interaction {
    /// Check if no session is active
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }

    /// Check if a move is past the threshold
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Interaction::Dragging { .. })
    }

    /// Check if this is a window resize
    #[inline]
    pub fn is_resizing(&self) -> bool {
        matches!(self, Interaction::Resizing { .. })
    }

    /// Target of a pending or active move
    pub fn target(&self) -> Option<&DragTarget> {
        match self {
            Interaction::PendingDrag { target, .. } | Interaction::Dragging { target, .. } => {
                Some(target)
            }
            _ => None,
        }
    }
}
