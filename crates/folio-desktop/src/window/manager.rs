//! Window store for lifecycle, focus, and z-order

use std::collections::{HashMap, HashSet};

use log::debug;

use super::Window;
use crate::catalog::Catalog;
use crate::layout::{centered_window_rect, clamp_window_rect, default_window_rect};
use crate::math::{Rect, Size};
use crate::config::LayoutConfig;
use crate::viewport::Viewport;

/// Owns every window's state
///
/// Holds one window per catalog entry for the whole session. Operations on
/// unknown ids are no-ops. A window that was never saved or repositioned is
/// centered for the viewport current at the time it opens.
#[derive(Clone, Debug)]
pub struct WindowStore {
    /// All windows by id
    windows: HashMap<String, Window>,
    /// Ids in catalog order
    order: Vec<String>,
    /// Next z-index to hand out
    next_z: u32,
    /// Default size per id, for windows without a stored rectangle
    default_sizes: HashMap<String, Size>,
    /// Ids whose rectangle was loaded from storage or committed
    placed: HashSet<String>,
}

impl WindowStore {
    /// Create a closed window for every catalog entry
    ///
    /// Windows with a saved rectangle start there; the rest get their
    /// application's default rectangle for `viewport`.
    pub fn new(
        catalog: &Catalog,
        saved: &HashMap<String, Rect>,
        viewport: &Viewport,
        layout: &LayoutConfig,
    ) -> Self {
        let mut windows = HashMap::new();
        let mut order = Vec::new();
        let mut default_sizes = HashMap::new();
        let mut placed = HashSet::new();

        for app in catalog.iter() {
            let rect = match saved.get(&app.id) {
                Some(rect) => {
                    placed.insert(app.id.clone());
                    *rect
                }
                None => default_window_rect(app, viewport, layout),
            };
            default_sizes.insert(app.id.clone(), app.window_size());

            windows.insert(
                app.id.clone(),
                Window {
                    id: app.id.clone(),
                    title: app.title.clone(),
                    is_open: false,
                    is_minimized: false,
                    is_maximized: false,
                    z_index: layout.initial_z_index,
                    rect,
                },
            );
            order.push(app.id.clone());
        }

        Self {
            windows,
            order,
            next_z: layout.initial_z_index + 1,
            default_sizes,
            placed,
        }
    }

    /// Get a window by id
    pub fn get(&self, id: &str) -> Option<&Window> {
        self.windows.get(id)
    }

    /// All windows in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Window> {
        self.order.iter().filter_map(|id| self.windows.get(id))
    }

    /// Number of windows
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Whether the store has no windows
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Highest z-index handed out so far
    pub fn top_z(&self) -> u32 {
        self.next_z - 1
    }

    /// Open a window, or bring an already-open one back and to the front
    ///
    /// An unplaced window is centered in `viewport` as it is now. The stored
    /// rectangle is pulled into the work area so a layout saved on a larger
    /// screen still opens fully visible.
    pub fn open(&mut self, id: &str, viewport: &Viewport, layout: &LayoutConfig) -> bool {
        let Some(window) = self.windows.get_mut(id) else {
            debug!("[windows] open ignored for unknown id {}", id);
            return false;
        };

        if !window.is_open {
            window.is_open = true;
            if !self.placed.contains(id) {
                if let Some(size) = self.default_sizes.get(id) {
                    window.rect = centered_window_rect(*size, viewport, layout);
                }
            }
            let area = viewport.work_area(layout);
            window.rect = clamp_window_rect(window.rect, layout.min_window_size, &area);
            debug!("[windows] opened {}", id);
        }
        window.is_minimized = false;

        self.focus(id);
        true
    }

    /// Close a window, keeping its rectangle
    pub fn close(&mut self, id: &str) {
        if let Some(window) = self.windows.get_mut(id) {
            window.is_open = false;
            window.is_minimized = false;
            debug!("[windows] closed {}", id);
        }
    }

    /// Minimize an open window
    pub fn minimize(&mut self, id: &str) {
        if let Some(window) = self.windows.get_mut(id) {
            if window.is_open {
                window.is_minimized = true;
            }
        }
    }

    /// Restore a minimized window
    pub fn restore(&mut self, id: &str) {
        if let Some(window) = self.windows.get_mut(id) {
            window.is_minimized = false;
        }
    }

    /// Toggle the maximized view of an open window (stored rect untouched)
    pub fn toggle_maximize(&mut self, id: &str) {
        if let Some(window) = self.windows.get_mut(id) {
            if window.is_open {
                window.is_maximized = !window.is_maximized;
            }
        }
    }

    /// Bring an open window to the front
    pub fn focus(&mut self, id: &str) {
        if let Some(window) = self.windows.get_mut(id) {
            if !window.is_open {
                return;
            }
            window.z_index = self.next_z;
            self.next_z += 1;
        }
    }

    /// Replace a window's rectangle during a drag or resize, clamped to `area`
    pub fn set_live_rect(&mut self, id: &str, rect: Rect, area: &Rect, min_size: Size) -> Option<Rect> {
        let window = self.windows.get_mut(id)?;
        window.rect = clamp_window_rect(rect, min_size, area);
        Some(window.rect)
    }

    /// Commit a new rectangle; returns the clamped rectangle to persist
    pub fn reposition(&mut self, id: &str, rect: Rect, area: &Rect, min_size: Size) -> Option<Rect> {
        let committed = self.set_live_rect(id, rect, area, min_size)?;
        self.placed.insert(id.to_string());
        debug!(
            "[windows] {} at ({}, {}) {}x{}",
            id, committed.x, committed.y, committed.width, committed.height
        );
        Some(committed)
    }

    /// Open windows in catalog order, for the taskbar
    pub fn taskbar_entries(&self) -> Vec<&Window> {
        self.iter().filter(|w| w.is_open).collect()
    }

    /// Open windows sorted back to front
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.iter().filter(|w| w.is_open).collect();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    /// Topmost visible window
    pub fn focused(&self) -> Option<&Window> {
        self.iter()
            .filter(|w| w.is_visible())
            .max_by_key(|w| w.z_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect::new(0.0, 0.0, 1920.0, 1030.0);
    const MIN: Size = Size::new(300.0, 200.0);
    const VIEWPORT: Viewport = Viewport::new(1920.0, 1080.0);
    const LAYOUT: &LayoutConfig = &LayoutConfig::DEFAULT;

    fn store() -> WindowStore {
        WindowStore::new(
            &Catalog::default(),
            &HashMap::new(),
            &Viewport::new(1920.0, 1080.0),
            &LayoutConfig::DEFAULT,
        )
    }

    #[test]
    fn test_every_app_starts_closed() {
        let store = store();
        assert_eq!(store.len(), Catalog::default().apps.len());
        assert!(store.iter().all(|w| !w.is_open && w.z_index == 1000));
        assert!(store.focused().is_none());
    }

    #[test]
    fn test_saved_rect_wins_over_default() {
        let mut saved = HashMap::new();
        saved.insert("about".to_string(), Rect::new(100.0, 100.0, 900.0, 700.0));
        let store = WindowStore::new(
            &Catalog::default(),
            &saved,
            &Viewport::new(1920.0, 1080.0),
            &LayoutConfig::DEFAULT,
        );
        assert!((store.get("about").unwrap().rect.x - 100.0).abs() < 0.001);
        assert!((store.get("ie").unwrap().rect.x - 640.0).abs() < 0.001);
    }

    #[test]
    fn test_open_focuses() {
        let mut store = store();
        assert!(store.open("about", &VIEWPORT, LAYOUT));
        let about = store.get("about").unwrap();
        assert!(about.is_open);
        assert_eq!(about.z_index, 1001);
        assert_eq!(store.focused().unwrap().id, "about");

        assert!(!store.open("missing", &VIEWPORT, LAYOUT));
    }

    #[test]
    fn test_open_restores_minimized() {
        let mut store = store();
        store.open("ie", &VIEWPORT, LAYOUT);
        store.minimize("ie");
        assert!(store.get("ie").unwrap().is_minimized);
        assert!(store.focused().is_none());

        store.open("ie", &VIEWPORT, LAYOUT);
        assert!(!store.get("ie").unwrap().is_minimized);
    }

    #[test]
    fn test_focus_is_monotonic() {
        let mut store = store();
        store.open("about", &VIEWPORT, LAYOUT);
        let first = store.get("about").unwrap().z_index;
        store.open("ie", &VIEWPORT, LAYOUT);
        let ie = store.get("ie").unwrap().z_index;
        store.focus("about");
        let third = store.get("about").unwrap().z_index;

        assert!(third > ie && ie > first);
        let order: Vec<&str> = store.windows_by_z().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(order, vec!["ie", "about"]);
    }

    #[test]
    fn test_focus_closed_window_is_noop() {
        let mut store = store();
        store.focus("about");
        assert_eq!(store.get("about").unwrap().z_index, 1000);
        assert_eq!(store.top_z(), 1000);
    }

    #[test]
    fn test_close_keeps_rect() {
        let mut store = store();
        store.open("about", &VIEWPORT, LAYOUT);
        store.reposition("about", Rect::new(100.0, 100.0, 900.0, 700.0), &AREA, MIN);
        store.close("about");

        let about = store.get("about").unwrap();
        assert!(!about.is_open);
        assert!((about.rect.x - 100.0).abs() < 0.001);
        assert!(store.taskbar_entries().is_empty());
    }

    #[test]
    fn test_maximize_is_view_only() {
        let mut store = store();
        store.open("about", &VIEWPORT, LAYOUT);
        let before = store.get("about").unwrap().rect;

        store.toggle_maximize("about");
        let about = store.get("about").unwrap();
        assert!(about.is_maximized);
        assert_eq!(about.rect, before);

        store.toggle_maximize("about");
        assert!(!store.get("about").unwrap().is_maximized);
    }

    #[test]
    fn test_reposition_clamps() {
        let mut store = store();
        store.open("about", &VIEWPORT, LAYOUT);
        let rect = store
            .reposition("about", Rect::new(-50.0, 900.0, 100.0, 100.0), &AREA, MIN)
            .unwrap();
        assert!((rect.x - 0.0).abs() < 0.001);
        assert!((rect.width - 300.0).abs() < 0.001);
        assert!((rect.y - 830.0).abs() < 0.001);
        assert!(rect.is_within(&AREA));
    }

    #[test]
    fn test_taskbar_entries_in_catalog_order() {
        let mut store = store();
        store.open("snake", &VIEWPORT, LAYOUT);
        store.open("about", &VIEWPORT, LAYOUT);
        let ids: Vec<&str> = store.taskbar_entries().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["about", "snake"]);
    }

    #[test]
    fn test_unplaced_window_centers_on_current_viewport() {
        let mut store = store();
        let small = Viewport::new(1280.0, 800.0);
        store.open("about", &small, LAYOUT);

        let rect = store.get("about").unwrap().rect;
        assert!((rect.x - 190.0).abs() < 0.001);
        assert!((rect.y - 25.0).abs() < 0.001);
    }

    #[test]
    fn test_placed_window_keeps_rect_across_viewports() {
        let mut store = store();
        store.open("about", &VIEWPORT, LAYOUT);
        store.reposition("about", Rect::new(100.0, 80.0, 900.0, 700.0), &AREA, MIN);
        store.close("about");

        store.open("about", &Viewport::new(1280.0, 800.0), LAYOUT);
        let rect = store.get("about").unwrap().rect;
        assert!((rect.x - 100.0).abs() < 0.001);
        assert!((rect.y - 50.0).abs() < 0.001);
    }
}
