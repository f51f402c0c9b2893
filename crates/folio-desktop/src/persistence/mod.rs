//! Persistence module
//!
//! Mirrors window positions, icon overrides and the recycled list into a
//! local key-value store as JSON. Reads parse or default; writes are best
//! effort. The adapter never owns desktop state.

mod adapter;
mod store;
mod timestamp;

pub use adapter::Persistence;
pub use store::{KeyValueStore, MemoryStore};
pub use timestamp::{Timestamp, TimestampError};
