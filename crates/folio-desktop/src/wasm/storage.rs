//! `window.localStorage` backed key-value store

use wasm_bindgen::JsValue;

use crate::error::StorageError;
use crate::persistence::KeyValueStore;

/// Key-value store over the browser's localStorage
///
/// When storage is unavailable (private mode, sandboxed iframe) every call
/// fails with [`StorageError::Unavailable`] and the adapter falls back to
/// defaults.
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    /// Attach to `window.localStorage`, if there is one
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[storage] localStorage unavailable, state will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.storage.as_ref().ok_or(StorageError::Unavailable)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(js_message(&e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::WriteRejected {
                key: key.to_string(),
                reason: js_message(&e),
            })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Backend(js_message(&e)))
    }
}
