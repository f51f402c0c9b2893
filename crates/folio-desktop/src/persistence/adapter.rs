//! Persistence adapter
//!
//! Typed load/save over a [`KeyValueStore`]. Every load parses or defaults,
//! every save is best effort: failures are logged at `warn` and dropped.

use std::collections::HashMap;

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::store::KeyValueStore;
use crate::config::StorageKeys;
use crate::error::PersistenceError;
use crate::icons::RecycledProgram;
use crate::math::{Rect, Vec2};

/// Mirrors desktop state into a key-value store
#[derive(Debug)]
pub struct Persistence<S: KeyValueStore> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> Persistence<S> {
    /// Create an adapter over `store` using `keys`
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    /// Borrow the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutably borrow the underlying store
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Consume the adapter, returning the store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Storage keys in use
    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    // =========================================================================
    // Window positions
    // =========================================================================

    /// Load persisted window rectangles (empty on absence or decode failure)
    pub fn load_window_positions(&self) -> HashMap<String, Rect> {
        self.read_json(&self.keys.window_positions)
            .unwrap_or_else(|e| {
                warn!("[persistence] {}", e);
                None
            })
            .unwrap_or_default()
    }

    /// Merge one window rectangle into the stored map
    pub fn save_window_position(&mut self, id: &str, rect: Rect) {
        let mut positions = self.load_window_positions();
        positions.insert(id.to_string(), rect);

        let key = self.keys.window_positions.clone();
        if let Err(e) = self.write_json(&key, &positions) {
            warn!("[persistence] {}", e);
        }
    }

    // =========================================================================
    // Icon positions
    // =========================================================================

    /// Load icon override positions (empty on absence or decode failure)
    pub fn load_icon_positions(&self) -> HashMap<String, Vec2> {
        self.read_json(&self.keys.icon_positions)
            .unwrap_or_else(|e| {
                warn!("[persistence] {}", e);
                None
            })
            .unwrap_or_default()
    }

    /// Replace the stored icon override map
    pub fn save_icon_positions(&mut self, positions: &HashMap<String, Vec2>) {
        let key = self.keys.icon_positions.clone();
        if let Err(e) = self.write_json(&key, positions) {
            warn!("[persistence] {}", e);
        }
    }

    /// Delete the icon override entry
    pub fn clear_icon_positions(&mut self) {
        if let Err(e) = self.store.remove(&self.keys.icon_positions) {
            warn!("[persistence] {}", PersistenceError::from(e));
        }
    }

    // =========================================================================
    // Recycled programs
    // =========================================================================

    /// Load the recycled list (empty on absence or decode failure)
    pub fn load_recycled_programs(&self) -> Vec<RecycledProgram> {
        self.read_json(&self.keys.recycled_programs)
            .unwrap_or_else(|e| {
                warn!("[persistence] {}", e);
                None
            })
            .unwrap_or_default()
    }

    /// Replace the stored recycled list
    pub fn save_recycled_programs(&mut self, programs: &[RecycledProgram]) {
        let key = self.keys.recycled_programs.clone();
        if let Err(e) = self.write_json(&key, &programs) {
            warn!("[persistence] {}", e);
        }
    }

    /// Store an empty recycled list
    pub fn clear_recycled_programs(&mut self) {
        self.save_recycled_programs(&[]);
    }

    // =========================================================================
    // JSON helpers
    // =========================================================================

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, PersistenceError> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| PersistenceError::Decode {
                key: key.to_string(),
                source,
            })
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(value).map_err(|source| PersistenceError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, &json)?;
        Ok(())
    }
}
