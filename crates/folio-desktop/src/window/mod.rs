//! Window management module
//!
//! Provides window lifecycle, focus and z-order, and resize handles.

#[allow(clippy::module_inception)]
mod window;
mod region;
mod manager;

pub use window::Window;
pub use region::ResizeEdge;
pub use manager::WindowStore;
