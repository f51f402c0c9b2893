//! Desktop icons
//!
//! Icon types, recycle bin records and the layout engine that combines
//! default slots, user overrides and the recycled set.

mod engine;
mod icon;
mod recycle;

pub use engine::{IconDrag, IconEffect, IconEvent, IconLayout, LayoutContext};
pub use icon::{Icon, IconType};
pub use recycle::{RecycledKind, RecycledProgram};
