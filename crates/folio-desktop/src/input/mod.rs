//! Input routing module
//!
//! Pointer session state machine for window drags, icon drags and window
//! resizes, plus the resize geometry.

mod router;
mod drag;
mod result;

pub use router::InputRouter;
pub use drag::{DragTarget, Interaction};
pub use result::InputResult;

use crate::layout::clamp_window_rect;
use crate::math::{Rect, Size, Vec2};
use crate::window::ResizeEdge;

/// Calculate the window rectangle after dragging `edge` by `delta`
///
/// The edge opposite the handle stays anchored, the size never drops below
/// `min_size`, and the moving edges stop at the border of `area`.
pub fn calculate_resize(
    edge: ResizeEdge,
    start: Rect,
    delta: Vec2,
    min_size: Size,
    area: &Rect,
) -> Rect {
    let mut left = start.x;
    let mut top = start.y;
    let mut right = start.right();
    let mut bottom = start.bottom();

    if edge.has_right() {
        right = (start.right() + delta.x)
            .max(left + min_size.width)
            .min(area.right());
    }
    if edge.has_left() {
        left = (start.x + delta.x)
            .min(right - min_size.width)
            .max(area.x);
    }
    if edge.has_bottom() {
        bottom = (start.bottom() + delta.y)
            .max(top + min_size.height)
            .min(area.bottom());
    }
    if edge.has_top() {
        top = (start.y + delta.y)
            .min(bottom - min_size.height)
            .max(area.y);
    }

    clamp_window_rect(
        Rect::new(left, top, right - left, bottom - top),
        min_size,
        area,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect::new(0.0, 0.0, 1920.0, 1030.0);
    const MIN: Size = Size::new(300.0, 200.0);

    #[test]
    fn test_resize_bottom_right() {
        let rect = calculate_resize(
            ResizeEdge::BottomRight,
            Rect::new(100.0, 100.0, 400.0, 300.0),
            Vec2::new(50.0, 50.0),
            MIN,
            &AREA,
        );
        assert!((rect.x - 100.0).abs() < 0.001);
        assert!((rect.y - 100.0).abs() < 0.001);
        assert!((rect.width - 450.0).abs() < 0.001);
        assert!((rect.height - 350.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_left_anchors_right_edge() {
        let rect = calculate_resize(
            ResizeEdge::Left,
            Rect::new(100.0, 100.0, 400.0, 300.0),
            Vec2::new(-50.0, 0.0),
            MIN,
            &AREA,
        );
        assert!((rect.x - 50.0).abs() < 0.001);
        assert!((rect.width - 450.0).abs() < 0.001);
        assert!((rect.right() - 500.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_left_stops_at_min_width() {
        let rect = calculate_resize(
            ResizeEdge::Left,
            Rect::new(100.0, 100.0, 400.0, 300.0),
            Vec2::new(200.0, 0.0),
            MIN,
            &AREA,
        );
        assert!((rect.width - 300.0).abs() < 0.001);
        assert!((rect.x - 200.0).abs() < 0.001);
        assert!((rect.right() - 500.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_top_stops_at_work_area() {
        let rect = calculate_resize(
            ResizeEdge::TopLeft,
            Rect::new(20.0, 20.0, 400.0, 300.0),
            Vec2::new(-100.0, -100.0),
            MIN,
            &AREA,
        );
        assert!((rect.x - 0.0).abs() < 0.001);
        assert!((rect.y - 0.0).abs() < 0.001);
        assert!((rect.bottom() - 320.0).abs() < 0.001);
        assert!((rect.right() - 420.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_right_stops_at_viewport() {
        let rect = calculate_resize(
            ResizeEdge::Right,
            Rect::new(1500.0, 100.0, 400.0, 300.0),
            Vec2::new(500.0, 0.0),
            MIN,
            &AREA,
        );
        assert!((rect.right() - 1920.0).abs() < 0.001);
        assert!(rect.is_within(&AREA));
    }

    #[test]
    fn test_resize_bottom_enforces_min_height() {
        let rect = calculate_resize(
            ResizeEdge::Bottom,
            Rect::new(100.0, 100.0, 400.0, 300.0),
            Vec2::new(0.0, -500.0),
            MIN,
            &AREA,
        );
        assert!((rect.height - 200.0).abs() < 0.001);
        assert!((rect.y - 100.0).abs() < 0.001);
    }
}
