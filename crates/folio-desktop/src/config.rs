//! Desktop configuration
//!
//! Everything tunable lives here. Defaults reproduce the stock desktop; a host
//! can override any subset by passing JSON (missing fields keep defaults).

use serde::{Deserialize, Serialize};
use crate::catalog::Catalog;
use crate::error::ConfigError;
use crate::math::Size;

/// Layout constants for icons, windows and the taskbar
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Fixed icon bounding box used for collision and hit tests
    pub icon_size: Size,
    /// Grid unit icons snap to
    pub grid_size: f32,
    /// Height of the taskbar strip at the bottom of the viewport
    pub taskbar_height: f32,
    /// Pointer travel (per axis) before a press becomes a drag
    pub drag_threshold: f32,
    /// Gap between the viewport edge and the first icon row/column
    pub icon_margin: f32,
    /// Horizontal gap between icon columns
    pub column_spacing: f32,
    /// Smallest size a window can be resized to
    pub min_window_size: Size,
    /// z-index every window starts at; the first focus gets one above this
    pub initial_z_index: u32,
    /// Ring search gives up at this radius
    pub max_search_radius: f32,
    /// Angle between samples on one ring, in degrees
    pub search_angle_step: f32,
}

impl LayoutConfig {
    /// Stock layout
    pub const DEFAULT: LayoutConfig = LayoutConfig {
        icon_size: Size::new(80.0, 90.0),
        grid_size: 20.0,
        taskbar_height: 50.0,
        drag_threshold: 5.0,
        icon_margin: 16.0,
        column_spacing: 20.0,
        min_window_size: Size::new(300.0, 200.0),
        initial_z_index: 1000,
        max_search_radius: 400.0,
        search_angle_step: 45.0,
    };

    /// Horizontal distance between two icon columns
    #[inline]
    pub fn column_width(&self) -> f32 {
        self.icon_size.width + self.column_spacing
    }

    /// Whether the ring search can step outward
    #[inline]
    pub fn has_search_rings(&self) -> bool {
        self.grid_size > 0.0 && self.search_angle_step > 0.0
    }

    fn validate(&self) -> Result<(), ConfigError> {
        positive("layout.icon_size.width", self.icon_size.width.into())?;
        positive("layout.icon_size.height", self.icon_size.height.into())?;
        positive("layout.grid_size", self.grid_size.into())?;
        positive("layout.min_window_size.width", self.min_window_size.width.into())?;
        positive("layout.min_window_size.height", self.min_window_size.height.into())?;
        positive("layout.max_search_radius", self.max_search_radius.into())?;
        positive("layout.search_angle_step", self.search_angle_step.into())?;
        non_negative("layout.taskbar_height", self.taskbar_height.into())?;
        non_negative("layout.drag_threshold", self.drag_threshold.into())?;
        non_negative("layout.icon_margin", self.icon_margin.into())?;
        non_negative("layout.column_spacing", self.column_spacing.into())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Keys used in the local key-value store
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub window_positions: String,
    pub icon_positions: String,
    pub recycled_programs: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            window_positions: "window-positions".to_string(),
            icon_positions: "icon-positions".to_string(),
            recycled_programs: "recycled-programs".to_string(),
        }
    }
}

/// Assistant bubble timings, in milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantTimings {
    /// Delay from start to the welcome message
    pub welcome_delay_ms: f64,
    /// How long the welcome message stays up
    pub welcome_display_ms: f64,
    /// How long every other message stays up
    pub message_display_ms: f64,
    /// Fade-out duration
    pub fade_ms: f64,
    /// Time the bubble stays hidden after fading
    pub hidden_ms: f64,
    /// Idle time before the next message is shown
    pub auto_advance_ms: f64,
}

impl AssistantTimings {
    /// Stock timings
    pub const DEFAULT: AssistantTimings = AssistantTimings {
        welcome_delay_ms: 2_000.0,
        welcome_display_ms: 10_000.0,
        message_display_ms: 8_000.0,
        fade_ms: 400.0,
        hidden_ms: 10_000.0,
        auto_advance_ms: 20_000.0,
    };
}

impl AssistantTimings {
    fn validate(&self) -> Result<(), ConfigError> {
        non_negative("assistant.welcome_delay_ms", self.welcome_delay_ms)?;
        positive("assistant.welcome_display_ms", self.welcome_display_ms)?;
        positive("assistant.message_display_ms", self.message_display_ms)?;
        positive("assistant.fade_ms", self.fade_ms)?;
        positive("assistant.hidden_ms", self.hidden_ms)?;
        positive("assistant.auto_advance_ms", self.auto_advance_ms)
    }
}

impl Default for AssistantTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Full desktop configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    pub layout: LayoutConfig,
    pub storage: StorageKeys,
    pub catalog: Catalog,
    pub assistant: AssistantTimings,
}

impl DesktopConfig {
    /// Parse a (possibly partial) JSON configuration and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject sizes and durations the layout and timers cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout.validate()?;
        self.assistant.validate()
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}
