//! Window lifecycle, taskbar and start menu

use log::debug;

use crate::math::Rect;
use crate::persistence::KeyValueStore;
use super::DesktopEngine;

impl<S: KeyValueStore> DesktopEngine<S> {
    /// Open a window (no-op for unknown ids)
    pub fn open_window(&mut self, id: &str) -> bool {
        self.windows.open(id, &self.viewport, &self.config.layout)
    }

    /// Close a window
    pub fn close_window(&mut self, id: &str) {
        self.windows.close(id);
    }

    /// Minimize a window
    pub fn minimize_window(&mut self, id: &str) {
        self.windows.minimize(id);
    }

    /// Restore a minimized window
    pub fn restore_window(&mut self, id: &str) {
        self.windows.restore(id);
    }

    /// Toggle maximize
    pub fn toggle_maximize_window(&mut self, id: &str) {
        self.windows.toggle_maximize(id);
    }

    /// Bring a window to the front
    pub fn focus_window(&mut self, id: &str) {
        self.windows.focus(id);
    }

    /// Commit a window rectangle and persist it
    ///
    /// The rectangle is clamped to the work area and minimum size first;
    /// the clamped value is what gets stored.
    pub fn reposition_window(&mut self, id: &str, rect: Rect) -> Option<Rect> {
        let area = self.work_area();
        let committed = self
            .windows
            .reposition(id, rect, &area, self.config.layout.min_window_size)?;
        self.persistence.save_window_position(id, committed);
        Some(committed)
    }

    /// Taskbar button: bring a minimized window back, then focus it
    pub fn taskbar_click(&mut self, id: &str) {
        let Some(window) = self.windows.get(id) else {
            return;
        };
        if window.is_minimized {
            self.windows.restore(id);
        }
        self.windows.focus(id);
    }

    // =========================================================================
    // Start menu
    // =========================================================================

    /// Whether the start menu is showing
    pub fn is_start_menu_open(&self) -> bool {
        self.start_menu_open
    }

    /// Toggle the start menu
    pub fn toggle_start_menu(&mut self) {
        self.start_menu_open = !self.start_menu_open;
    }

    /// Hide the start menu
    pub fn close_start_menu(&mut self) {
        self.start_menu_open = false;
    }

    /// Launch a program from the start menu, closing the menu
    pub fn launch_from_start_menu(&mut self, id: &str) -> bool {
        debug!("[start] launch {}", id);
        let opened = self.open_window(id);
        self.close_start_menu();
        opened
    }
}

#[cfg(test)]
mod tests {
    use crate::config::DesktopConfig;
    use crate::engine::DesktopEngine;
    use crate::math::Rect;
    use crate::persistence::{KeyValueStore, MemoryStore};

    fn engine() -> DesktopEngine<MemoryStore> {
        let mut engine = DesktopEngine::new(MemoryStore::new(), DesktopConfig::default());
        engine.init(1920.0, 1080.0, 0.0);
        engine
    }

    #[test]
    fn test_open_focuses_on_top() {
        let mut engine = engine();
        assert!(engine.open_window("about"));
        assert!(engine.open_window("street-photography"));

        let about = engine.windows.get("about").unwrap().z_index;
        let photo = engine.windows.get("street-photography").unwrap().z_index;
        assert!(photo > about);
        assert_eq!(engine.windows.focused().unwrap().id, "street-photography");
    }

    #[test]
    fn test_open_after_resize_centers_on_new_viewport() {
        let mut engine = engine();
        engine.resize(1280.0, 800.0);
        engine.open_window("about");

        let rect = engine.windows.get("about").unwrap().rect;
        assert!((rect.x - 190.0).abs() < 0.001);
        assert!((rect.y - 25.0).abs() < 0.001);
        assert!(rect.is_within(&engine.work_area()));
    }

    #[test]
    fn test_open_unknown_is_noop() {
        let mut engine = engine();
        assert!(!engine.open_window("nope"));
        assert!(engine.windows.taskbar_entries().is_empty());
    }

    #[test]
    fn test_reposition_persists_clamped_rect() {
        let mut engine = engine();
        engine.open_window("about");
        let rect = engine
            .reposition_window("about", Rect::new(-50.0, 900.0, 900.0, 700.0))
            .unwrap();

        assert!(rect.is_within(&engine.work_area()));
        let stored = engine.store().get("window-positions").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&stored).unwrap();
        assert_eq!(value["about"]["x"], 0.0);
        assert_eq!(value["about"]["y"], 330.0);
    }

    #[test]
    fn test_taskbar_click_restores_and_focuses() {
        let mut engine = engine();
        engine.open_window("about");
        engine.open_window("street-photography");
        engine.minimize_window("about");
        assert_eq!(engine.windows.focused().unwrap().id, "street-photography");

        engine.taskbar_click("about");
        let about = engine.windows.get("about").unwrap();
        assert!(!about.is_minimized);
        assert_eq!(engine.windows.focused().unwrap().id, "about");
    }

    #[test]
    fn test_launch_closes_start_menu() {
        let mut engine = engine();
        engine.toggle_start_menu();
        assert!(engine.is_start_menu_open());

        assert!(engine.launch_from_start_menu("about"));
        assert!(!engine.is_start_menu_open());
        assert!(engine.windows.get("about").unwrap().is_open);
    }
}
