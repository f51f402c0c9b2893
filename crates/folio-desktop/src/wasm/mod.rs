//! WASM exports for the desktop engine
//!
//! This module provides wasm-bindgen exports for the DesktopEngine,
//! allowing the page to drive the desktop directly. Lists are handed over
//! as JSON strings; the clock is `Date.now()`.

mod logger;
mod storage;

pub use logger::{init_logging, ConsoleLogger};
pub use storage::LocalStorage;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::DesktopConfig;
use crate::engine::DesktopEngine;
use crate::input::InputResult;
use crate::persistence::Timestamp;
use crate::window::ResizeEdge;

fn now_ms() -> f64 {
    js_sys::Date::now()
}

fn to_json<T: Serialize + ?Sized>(value: &T, fallback: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| fallback.to_string())
}

fn result_json(result: &InputResult) -> String {
    to_json(result, r#"{"type":"unhandled"}"#)
}

/// Desktop controller for WASM - wraps DesktopEngine with JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    engine: DesktopEngine<LocalStorage>,
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a controller; `config_json` overrides any subset of the defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Self {
        let config = match config_json.as_deref().map(DesktopConfig::from_json) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                log::warn!("invalid desktop config, using defaults: {}", e);
                DesktopConfig::default()
            }
            None => DesktopConfig::default(),
        };

        Self {
            engine: DesktopEngine::new(LocalStorage::new(), config),
        }
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Initialize the desktop with screen dimensions
    #[wasm_bindgen]
    pub fn init(&mut self, width: f32, height: f32) {
        self.engine.init(width, height, now_ms());
    }

    /// Resize the desktop viewport
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.resize(width, height);
    }

    /// Advance timers; returns true when the page should re-read state
    #[wasm_bindgen]
    pub fn tick(&mut self) -> bool {
        self.engine.tick(now_ms())
    }

    // =========================================================================
    // Windows
    // =========================================================================

    #[wasm_bindgen]
    pub fn open_window(&mut self, id: &str) -> bool {
        self.engine.open_window(id)
    }

    #[wasm_bindgen]
    pub fn close_window(&mut self, id: &str) {
        self.engine.close_window(id);
    }

    #[wasm_bindgen]
    pub fn minimize_window(&mut self, id: &str) {
        self.engine.minimize_window(id);
    }

    #[wasm_bindgen]
    pub fn restore_window(&mut self, id: &str) {
        self.engine.restore_window(id);
    }

    #[wasm_bindgen]
    pub fn toggle_maximize_window(&mut self, id: &str) {
        self.engine.toggle_maximize_window(id);
    }

    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: &str) {
        self.engine.focus_window(id);
    }

    /// Taskbar button pressed
    #[wasm_bindgen]
    pub fn taskbar_click(&mut self, id: &str) {
        self.engine.taskbar_click(id);
    }

    /// Open windows back to front, with the on-screen rect of maximized ones
    #[wasm_bindgen]
    pub fn get_windows_json(&self) -> String {
        let area = self.engine.work_area();
        let windows: Vec<serde_json::Value> = self
            .engine
            .windows
            .windows_by_z()
            .into_iter()
            .map(|w| {
                serde_json::json!({
                    "id": w.id,
                    "title": w.title,
                    "isOpen": w.is_open,
                    "isMinimized": w.is_minimized,
                    "isMaximized": w.is_maximized,
                    "zIndex": w.z_index,
                    "position": w.rect,
                    "screenRect": w.display_rect(&area),
                })
            })
            .collect();
        to_json(&windows, "[]")
    }

    /// Open windows in taskbar order
    #[wasm_bindgen]
    pub fn get_taskbar_json(&self) -> String {
        let focused = self.engine.windows.focused().map(|w| w.id.as_str());
        let entries: Vec<serde_json::Value> = self
            .engine
            .windows
            .taskbar_entries()
            .into_iter()
            .map(|w| {
                serde_json::json!({
                    "id": w.id,
                    "title": w.title,
                    "isMinimized": w.is_minimized,
                    "isFocused": Some(w.id.as_str()) == focused,
                })
            })
            .collect();
        to_json(&entries, "[]")
    }

    // =========================================================================
    // Start menu
    // =========================================================================

    #[wasm_bindgen]
    pub fn toggle_start_menu(&mut self) {
        self.engine.toggle_start_menu();
    }

    #[wasm_bindgen]
    pub fn close_start_menu(&mut self) {
        self.engine.close_start_menu();
    }

    #[wasm_bindgen]
    pub fn is_start_menu_open(&self) -> bool {
        self.engine.is_start_menu_open()
    }

    #[wasm_bindgen]
    pub fn launch_from_start_menu(&mut self, id: &str) -> bool {
        self.engine.launch_from_start_menu(id)
    }

    // =========================================================================
    // Icons and recycle bin
    // =========================================================================

    #[wasm_bindgen]
    pub fn get_icons_json(&self) -> String {
        to_json(&self.engine.list_icons(), "[]")
    }

    /// Selected icon id and caption, or `null`
    #[wasm_bindgen]
    pub fn get_selection_json(&self) -> String {
        let selection = self.engine.icons.selected().map(|id| {
            serde_json::json!({
                "id": id,
                "caption": self.engine.selected_caption().unwrap_or(""),
            })
        });
        to_json(&selection, "null")
    }

    #[wasm_bindgen]
    pub fn get_recycled_json(&self) -> String {
        to_json(self.engine.icons.recycled(), "[]")
    }

    #[wasm_bindgen]
    pub fn select_icon(&mut self, id: &str) {
        self.engine.select_icon(id);
    }

    #[wasm_bindgen]
    pub fn clear_selection(&mut self) {
        self.engine.clear_selection();
    }

    #[wasm_bindgen]
    pub fn double_click(&mut self, id: &str) -> bool {
        self.engine.double_click(id)
    }

    #[wasm_bindgen]
    pub fn restore_program(&mut self, id: &str) {
        self.engine.restore_program(id);
    }

    #[wasm_bindgen]
    pub fn empty_recycle_bin(&mut self) {
        self.engine.empty_recycle_bin();
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    #[wasm_bindgen]
    pub fn pointer_down_title_bar(&mut self, id: &str, x: f32, y: f32) -> String {
        result_json(&self.engine.pointer_down_title_bar(id, x, y))
    }

    /// Press on a resize handle; `edge` is e.g. `"top-left"` or `"right"`
    #[wasm_bindgen]
    pub fn pointer_down_resize(&mut self, id: &str, edge: &str, x: f32, y: f32) -> String {
        let result = match ResizeEdge::parse(edge) {
            Some(edge) => self.engine.pointer_down_resize(id, edge, x, y),
            None => InputResult::Unhandled,
        };
        result_json(&result)
    }

    #[wasm_bindgen]
    pub fn pointer_down_icon(&mut self, id: &str, x: f32, y: f32) -> String {
        result_json(&self.engine.pointer_down_icon(id, x, y))
    }

    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> String {
        result_json(&self.engine.pointer_move(x, y))
    }

    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> String {
        result_json(&self.engine.pointer_up(Timestamp::now()))
    }

    /// Whether a pointer session is active (the page captures the pointer)
    #[wasm_bindgen]
    pub fn is_pointer_captured(&self) -> bool {
        self.engine.input.is_active()
    }

    // =========================================================================
    // Assistant
    // =========================================================================

    #[wasm_bindgen]
    pub fn get_assistant_json(&self) -> String {
        let assistant = &self.engine.assistant;
        let message = assistant.message();
        to_json(
            &serde_json::json!({
                "phase": assistant.phase(),
                "text": message.text(),
                "label": message.label(),
                "opacity": assistant.opacity(now_ms()),
                "nextTransitionMs": assistant.next_transition_ms(),
            }),
            r#"{"phase":"idle"}"#,
        )
    }

    #[wasm_bindgen]
    pub fn assistant_click_bubble(&mut self) {
        self.engine.assistant.click_bubble(now_ms());
    }

    #[wasm_bindgen]
    pub fn assistant_click(&mut self) {
        self.engine.assistant.click_assistant(now_ms());
    }

    #[wasm_bindgen]
    pub fn assistant_close(&mut self) {
        self.engine.assistant.close(now_ms());
    }

    #[wasm_bindgen]
    pub fn assistant_dismiss(&mut self) {
        self.engine.assistant.dismiss();
    }
}
