//! Desktop state engine for the portfolio site
//!
//! This crate owns everything the desktop shell needs to know about its own
//! layout:
//! - Window lifecycle (open, close, minimize, maximize, focus, z-order)
//! - Desktop icon layout with grid snapping and collision-free placement
//! - Recycle bin contents
//! - Pointer drag/resize sessions
//! - The assistant's speech bubble timer
//! - Persistence of window rectangles and the recycle bin to a key-value store
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Rect`, `Size`)
//! - [`layout`]: Grid snapping, collision search and default placement
//! - [`window`]: Window store
//! - [`icons`]: Icon layout reducer and recycle bin records
//! - [`input`]: Pointer session state machine and resize geometry
//! - [`persistence`]: Key-value store trait and the JSON adapter over it
//! - [`assistant`]: Speech bubble state machine
//!
//! [`DesktopEngine`] ties them together and is the only type a host needs.
//!
//! ## Example
//!
//! ```rust
//! use folio_desktop::{DesktopConfig, DesktopEngine, MemoryStore};
//!
//! let mut engine = DesktopEngine::new(MemoryStore::new(), DesktopConfig::default());
//! engine.init(1920.0, 1080.0, 0.0);
//!
//! engine.double_click("about");
//! let about = engine.windows.get("about").unwrap();
//! assert!(about.is_open);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: all state is plain Rust, testable without a browser
//! 2. **Injected Time**: every time-dependent call takes the current time
//! 3. **Best-effort Storage**: storage failures are logged, never surfaced

pub mod math;
pub mod layout;
pub mod window;
pub mod icons;
pub mod input;
pub mod persistence;
pub mod assistant;

mod catalog;
mod config;
mod engine;
mod error;
mod viewport;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{Rect, Size, Vec2};
pub use window::{ResizeEdge, Window, WindowStore};
pub use icons::{Icon, IconEffect, IconEvent, IconLayout, IconType, LayoutContext, RecycledKind, RecycledProgram};
pub use input::{DragTarget, InputResult, InputRouter, Interaction};
pub use persistence::{KeyValueStore, MemoryStore, Persistence, Timestamp};
pub use assistant::{Assistant, BubblePhase, Message};

pub use catalog::{AppEntry, AppKind, Catalog, PortfolioCategory, ABOUT_ID, RECYCLE_BIN_ID};
pub use config::{AssistantTimings, DesktopConfig, LayoutConfig, StorageKeys};
pub use engine::DesktopEngine;
pub use error::{ConfigError, PersistenceError, StorageError};
pub use viewport::Viewport;
