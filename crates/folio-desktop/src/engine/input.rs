//! Input handling for pointer events and drag operations

use log::debug;

use crate::icons::IconEffect;
use crate::input::{calculate_resize, DragTarget, InputResult, Interaction};
use crate::math::Vec2;
use crate::persistence::{KeyValueStore, Timestamp};
use crate::window::ResizeEdge;
use super::{layout_ctx, DesktopEngine};

impl<S: KeyValueStore> DesktopEngine<S> {
    /// Press on a window's title bar
    pub fn pointer_down_title_bar(&mut self, id: &str, x: f32, y: f32) -> InputResult {
        let rect = match self.windows.get(id) {
            Some(window) if window.accepts_pointer_drag() => window.rect,
            _ => return InputResult::Unhandled,
        };

        let pointer = Vec2::new(x, y);
        self.input
            .press(DragTarget::Window(id.to_string()), pointer, pointer - rect.position());
        InputResult::Handled
    }

    /// Press on one of a window's resize handles
    pub fn pointer_down_resize(&mut self, id: &str, edge: ResizeEdge, x: f32, y: f32) -> InputResult {
        let rect = match self.windows.get(id) {
            Some(window) if window.accepts_pointer_drag() => window.rect,
            _ => return InputResult::Unhandled,
        };

        self.windows.focus(id);
        self.input.start_resize(id, edge, rect, Vec2::new(x, y));
        debug!("[input] resize {} from {:?}", id, edge);
        InputResult::Handled
    }

    /// Press on a desktop icon; selects it right away
    pub fn pointer_down_icon(&mut self, id: &str, x: f32, y: f32) -> InputResult {
        let ctx = layout_ctx(&self.config, &self.viewport);
        let Some(icon) = self.icons.icon(id, &ctx) else {
            return InputResult::Unhandled;
        };

        self.icons.select(id, &ctx);
        self.start_menu_open = false;

        let pointer = Vec2::new(x, y);
        self.input
            .press(DragTarget::Icon(id.to_string()), pointer, pointer - icon.position());
        InputResult::Handled
    }

    /// Handle pointer move
    pub fn pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        if !self.input.is_active() {
            return InputResult::Unhandled;
        }
        let pointer = Vec2::new(x, y);

        let press_start = match self.input.state() {
            Interaction::PendingDrag { start, .. } => Some(*start),
            _ => None,
        };
        if let (Some(start), Some(target)) = (press_start, self.input.promote(pointer)) {
            if !self.begin_drag(&target, start) {
                self.input.release();
                return InputResult::Unhandled;
            }
        }

        let area = self.work_area();
        let min_size = self.config.layout.min_window_size;

        match self.input.state().clone() {
            Interaction::Dragging { target: DragTarget::Window(id), offset } => {
                let Some(rect) = self.draggable_rect(&id) else {
                    self.input.release();
                    return InputResult::Unhandled;
                };
                let target = rect.with_position(pointer - offset);
                match self.windows.set_live_rect(&id, target, &area, min_size) {
                    Some(rect) => InputResult::WindowMoved { id, rect },
                    None => InputResult::Unhandled,
                }
            }
            Interaction::Dragging { target: DragTarget::Icon(id), .. } => {
                let ctx = layout_ctx(&self.config, &self.viewport);
                let Some(position) = self.icons.drag_move(pointer, &ctx) else {
                    return InputResult::Unhandled;
                };
                let over_bin = self.icons.drag().is_some_and(|d| d.over_bin);
                InputResult::IconMoved { id, position, over_bin }
            }
            Interaction::Resizing { window_id, edge, start_rect, start_pointer } => {
                if self.draggable_rect(&window_id).is_none() {
                    self.input.release();
                    return InputResult::Unhandled;
                }
                let target = calculate_resize(edge, start_rect, pointer - start_pointer, min_size, &area);
                match self.windows.set_live_rect(&window_id, target, &area, min_size) {
                    Some(rect) => InputResult::WindowMoved { id: window_id, rect },
                    None => InputResult::Unhandled,
                }
            }
            Interaction::PendingDrag { .. } => InputResult::Handled,
            Interaction::Idle => InputResult::Unhandled,
        }
    }

    /// Handle pointer up; always commits the session
    pub fn pointer_up(&mut self, now: Timestamp) -> InputResult {
        match self.input.release() {
            Interaction::Idle => InputResult::Unhandled,
            Interaction::PendingDrag { target, .. } => {
                match &target {
                    DragTarget::Window(id) => self.windows.focus(id),
                    DragTarget::Icon(id) => self.select_icon(id),
                }
                InputResult::Click { target }
            }
            Interaction::Dragging { target: DragTarget::Window(id), .. }
            | Interaction::Resizing { window_id: id, .. } => self.commit_window(id),
            Interaction::Dragging { target: DragTarget::Icon(id), .. } => {
                let ctx = layout_ctx(&self.config, &self.viewport);
                let effects = self.icons.drag_end(now, &ctx);
                self.run_icon_effects(&effects);

                if effects.contains(&IconEffect::PersistRecycled) {
                    return InputResult::Recycled { id };
                }
                let placed = effects
                    .contains(&IconEffect::PersistIconPositions)
                    .then(|| self.icons.overrides().get(&id).copied())
                    .flatten();
                match placed {
                    Some(position) => InputResult::IconPlaced { id, position },
                    None => InputResult::Handled,
                }
            }
        }
    }

    /// Set up the drag once a press crosses the threshold
    fn begin_drag(&mut self, target: &DragTarget, press_start: Vec2) -> bool {
        match target {
            DragTarget::Window(id) => {
                debug!("[input] window drag {}", id);
                self.windows.focus(id);
                true
            }
            DragTarget::Icon(id) => {
                let ctx = layout_ctx(&self.config, &self.viewport);
                self.icons.drag_start(id, press_start, &ctx)
            }
        }
    }

    fn draggable_rect(&self, id: &str) -> Option<crate::math::Rect> {
        self.windows
            .get(id)
            .filter(|w| w.accepts_pointer_drag())
            .map(|w| w.rect)
    }

    fn commit_window(&mut self, id: String) -> InputResult {
        let Some(rect) = self.windows.get(&id).map(|w| w.rect) else {
            return InputResult::Unhandled;
        };
        match self.reposition_window(&id, rect) {
            Some(rect) => InputResult::WindowMoved { id, rect },
            None => InputResult::Unhandled,
        }
    }
}
