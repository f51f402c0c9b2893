//! Resize handles

use serde::{Deserialize, Serialize};

/// Edge or corner a resize is grabbed by
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeEdge {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeEdge {
    /// Parse a handle name such as `"bottom-right"`
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "top" => Some(ResizeEdge::Top),
            "bottom" => Some(ResizeEdge::Bottom),
            "left" => Some(ResizeEdge::Left),
            "right" => Some(ResizeEdge::Right),
            "top-left" => Some(ResizeEdge::TopLeft),
            "top-right" => Some(ResizeEdge::TopRight),
            "bottom-left" => Some(ResizeEdge::BottomLeft),
            "bottom-right" => Some(ResizeEdge::BottomRight),
            _ => None,
        }
    }

    /// Moves the left edge (right edge stays anchored)
    #[inline]
    pub fn has_left(self) -> bool {
        matches!(self, ResizeEdge::Left | ResizeEdge::TopLeft | ResizeEdge::BottomLeft)
    }

    /// Moves the right edge
    #[inline]
    pub fn has_right(self) -> bool {
        matches!(self, ResizeEdge::Right | ResizeEdge::TopRight | ResizeEdge::BottomRight)
    }

    /// Moves the top edge (bottom edge stays anchored)
    #[inline]
    pub fn has_top(self) -> bool {
        matches!(self, ResizeEdge::Top | ResizeEdge::TopLeft | ResizeEdge::TopRight)
    }

    /// Moves the bottom edge
    #[inline]
    pub fn has_bottom(self) -> bool {
        matches!(self, ResizeEdge::Bottom | ResizeEdge::BottomLeft | ResizeEdge::BottomRight)
    }

    /// Check if this is a corner handle
    #[inline]
    pub fn is_corner(self) -> bool {
        (self.has_left() || self.has_right()) && (self.has_top() || self.has_bottom())
    }

    /// CSS cursor for this handle
    pub fn cursor(self) -> &'static str {
        match self {
            ResizeEdge::Top | ResizeEdge::Bottom => "ns-resize",
            ResizeEdge::Left | ResizeEdge::Right => "ew-resize",
            ResizeEdge::TopRight | ResizeEdge::BottomLeft => "nesw-resize",
            ResizeEdge::TopLeft | ResizeEdge::BottomRight => "nwse-resize",
        }
    }
}
