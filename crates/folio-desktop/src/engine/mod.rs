//! Desktop engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `input`: Pointer event handling and drag/resize sessions
//! - `windows`: Window lifecycle, taskbar and start menu
//! - `icons`: Icon selection, activation and the recycle bin

mod input;
mod windows;
mod icons;

use log::info;

use crate::assistant::Assistant;
use crate::config::DesktopConfig;
use crate::icons::{IconLayout, LayoutContext};
use crate::input::InputRouter;
use crate::math::Rect;
use crate::persistence::{KeyValueStore, Persistence};
use crate::viewport::Viewport;
use crate::window::WindowStore;

/// Desktop engine coordinating all desktop components
///
/// Owns every piece of desktop state; nothing lives in globals. Managing:
/// - Window store (lifecycle, focus, z-order)
/// - Icon layout (overrides, recycle bin, icon drags)
/// - Input router (pointer session state machine)
/// - Assistant bubble timer
/// - Persistence adapter over the host's key-value store
pub struct DesktopEngine<S: KeyValueStore> {
    /// Configuration the engine was built with
    pub config: DesktopConfig,
    /// Current viewport
    pub viewport: Viewport,
    /// Window store
    pub windows: WindowStore,
    /// Icon layout engine
    pub icons: IconLayout,
    /// Input router
    pub input: InputRouter,
    /// Assistant bubble
    pub assistant: Assistant,
    /// Storage mirror
    pub(crate) persistence: Persistence<S>,
    /// Start menu visibility
    pub(crate) start_menu_open: bool,
}

/// Borrow the layout inputs without borrowing the whole engine
pub(crate) fn layout_ctx<'a>(config: &'a DesktopConfig, viewport: &'a Viewport) -> LayoutContext<'a> {
    LayoutContext {
        catalog: &config.catalog,
        viewport,
        layout: &config.layout,
    }
}

impl<S: KeyValueStore> DesktopEngine<S> {
    /// Create an engine over `store`
    ///
    /// Nothing is read from the store until [`DesktopEngine::init`].
    pub fn new(store: S, config: DesktopConfig) -> Self {
        let viewport = Viewport::default();
        let windows = WindowStore::new(
            &config.catalog,
            &Default::default(),
            &viewport,
            &config.layout,
        );

        Self {
            viewport,
            windows,
            icons: IconLayout::default(),
            input: InputRouter::new(config.layout.drag_threshold),
            assistant: Assistant::new(0.0, config.assistant),
            persistence: Persistence::new(store, config.storage.clone()),
            start_menu_open: false,
            config,
        }
    }

    /// Initialize the desktop with screen dimensions
    ///
    /// Wipes the icon override entry so icons start at their default slots,
    /// loads saved window rectangles and the recycled list, and creates
    /// every window closed. Calling it again starts a fresh session.
    pub fn init(&mut self, width: f32, height: f32, now_ms: f64) {
        self.viewport = Viewport::new(width, height);

        self.persistence.clear_icon_positions();
        let saved = self.persistence.load_window_positions();
        let recycled = self.persistence.load_recycled_programs();

        info!(
            "desktop init {}x{}: {} saved window(s), {} recycled",
            width,
            height,
            saved.len(),
            recycled.len()
        );

        self.windows = WindowStore::new(&self.config.catalog, &saved, &self.viewport, &self.config.layout);
        self.icons = IconLayout::new(recycled);
        self.input = InputRouter::new(self.config.layout.drag_threshold);
        self.assistant = Assistant::new(now_ms, self.config.assistant);
        self.start_menu_open = false;
    }

    /// Resize the viewport; later clamps and default slots use the new size
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    /// Advance timers; returns true when something visible changed
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.assistant.tick(now_ms)
    }

    /// Area windows may occupy
    pub fn work_area(&self) -> Rect {
        self.viewport.work_area(&self.config.layout)
    }

    /// Layout inputs for the icon engine
    pub fn layout_context(&self) -> LayoutContext<'_> {
        layout_ctx(&self.config, &self.viewport)
    }

    /// Underlying key-value store
    pub fn store(&self) -> &S {
        self.persistence.store()
    }

    /// Mutable access to the key-value store
    pub fn store_mut(&mut self) -> &mut S {
        self.persistence.store_mut()
    }

    /// Consume the engine, returning the store (used to simulate a reload)
    pub fn into_store(self) -> S {
        self.persistence.into_store()
    }
}
