//! Key-value store abstraction
//!
//! The browser build backs this with `window.localStorage`; tests and native
//! hosts use [`MemoryStore`].

use std::collections::HashMap;
use crate::error::StorageError;

/// String key-value store with localStorage semantics
pub trait KeyValueStore {
    /// Read a value; `Ok(None)` when the key is absent
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a key; deleting an absent key is not an error
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store
///
/// Can be switched to reject writes, which is how tests exercise the
/// best-effort write path.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    reject_writes: bool,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later `set`/`remove` fail (or succeed again)
    pub fn set_reject_writes(&mut self, reject: bool) {
        self.reject_writes = reject;
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_writable(&self, key: &str) -> Result<(), StorageError> {
        if self.reject_writes {
            return Err(StorageError::WriteRejected {
                key: key.to_string(),
                reason: "store is read-only".to_string(),
            });
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_writable(key)?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.check_writable(key)?;
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(store.len(), 1);

        store.remove("k").unwrap();
        assert!(store.is_empty());
        store.remove("k").unwrap();
    }

    #[test]
    fn test_memory_store_rejects_writes() {
        let mut store = MemoryStore::new();
        store.set("k", "v").unwrap();
        store.set_reject_writes(true);

        assert!(matches!(store.set("k", "w"), Err(StorageError::WriteRejected { .. })));
        assert!(store.remove("k").is_err());
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
