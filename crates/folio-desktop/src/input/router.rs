//! Input router state machine

use crate::math::{Rect, Vec2};
use crate::window::ResizeEdge;
use super::{DragTarget, Interaction};

/// Tracks the pointer session; the engine applies its effects
#[derive(Clone, Debug, Default)]
pub struct InputRouter {
    state: Interaction,
    /// Per-axis travel before a press becomes a drag
    threshold: f32,
}

impl InputRouter {
    /// Create an idle router
    pub fn new(threshold: f32) -> Self {
        Self {
            state: Interaction::Idle,
            threshold,
        }
    }

    /// Current session
    #[inline]
    pub fn state(&self) -> &Interaction {
        &self.state
    }

    /// Whether pointer moves and releases should be processed
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.state.is_idle()
    }

    /// Press on a draggable target
    pub fn press(&mut self, target: DragTarget, pointer: Vec2, offset: Vec2) {
        self.state = Interaction::PendingDrag {
            target,
            start: pointer,
            offset,
        };
    }

    /// Press on a resize handle
    pub fn start_resize(&mut self, window_id: &str, edge: ResizeEdge, start_rect: Rect, pointer: Vec2) {
        self.state = Interaction::Resizing {
            window_id: window_id.to_string(),
            edge,
            start_rect,
            start_pointer: pointer,
        };
    }

    /// Promote a pending press to a drag once `pointer` passes the threshold
    ///
    /// Returns the target when the promotion happens on this call.
    pub fn promote(&mut self, pointer: Vec2) -> Option<DragTarget> {
        let Interaction::PendingDrag { target, start, offset } = &self.state else {
            return None;
        };
        if !(pointer - *start).exceeds_threshold(self.threshold) {
            return None;
        }

        let (target, offset) = (target.clone(), *offset);
        self.state = Interaction::Dragging {
            target: target.clone(),
            offset,
        };
        Some(target)
    }

    /// End the session, returning what it was
    pub fn release(&mut self) -> Interaction {
        std::mem::take(&mut self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_then_small_move_stays_pending() {
        let mut router = InputRouter::new(5.0);
        assert!(!router.is_active());

        router.press(DragTarget::Icon("about".to_string()), Vec2::new(100.0, 100.0), Vec2::ZERO);
        assert!(router.is_active());
        assert!(router.promote(Vec2::new(105.0, 95.0)).is_none());
        assert!(matches!(router.state(), Interaction::PendingDrag { .. }));
    }

    #[test]
    fn test_promote_past_threshold() {
        let mut router = InputRouter::new(5.0);
        router.press(DragTarget::Window("ie".to_string()), Vec2::new(100.0, 100.0), Vec2::new(8.0, 4.0));

        let target = router.promote(Vec2::new(100.0, 106.0));
        assert_eq!(target, Some(DragTarget::Window("ie".to_string())));
        assert!(router.state().is_dragging());

        // Already dragging: no second promotion
        assert!(router.promote(Vec2::new(200.0, 200.0)).is_none());
    }

    #[test]
    fn test_release_returns_to_idle() {
        let mut router = InputRouter::new(5.0);
        router.start_resize(
            "about",
            ResizeEdge::BottomRight,
            Rect::new(0.0, 0.0, 900.0, 700.0),
            Vec2::new(900.0, 700.0),
        );
        assert!(router.state().is_resizing());

        let ended = router.release();
        assert!(ended.is_resizing());
        assert!(!router.is_active());
        assert!(router.release().is_idle());
    }
}
