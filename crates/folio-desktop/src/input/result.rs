//! Input result type

use serde::Serialize;
use crate::math::{Rect, Vec2};
use super::DragTarget;

/// Result of input handling
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputResult {
    /// Input was handled; re-read state
    Handled,
    /// Input was not handled (no session, unknown target, maximized window)
    Unhandled,
    /// Press and release within the drag threshold
    Click { target: DragTarget },
    /// A window moved or resized to `rect`
    WindowMoved { id: String, rect: Rect },
    /// The dragged icon is at `position`
    IconMoved { id: String, position: Vec2, over_bin: bool },
    /// The dragged icon was dropped and settled at `position`
    IconPlaced { id: String, position: Vec2 },
    /// The dragged icon went into the recycle bin
    Recycled { id: String },
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        !matches!(self, InputResult::Unhandled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_serialization() {
        let value = serde_json::to_value(InputResult::Click {
            target: DragTarget::Icon("about".to_string()),
        })
        .unwrap();
        assert_eq!(value["type"], "click");
        assert_eq!(value["target"]["kind"], "icon");

        let value = serde_json::to_value(InputResult::Unhandled).unwrap();
        assert_eq!(value["type"], "unhandled");
        assert!(!InputResult::Unhandled.is_handled());
    }
}
