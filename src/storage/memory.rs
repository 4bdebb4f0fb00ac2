//! In-process store backed by a hash map.

use std::collections::HashMap;

use tracing::{debug, instrument};

use super::{KeyValueStore, StorageError};

/// Store that keeps values in memory.
///
/// Useful for tests and for embedding a board without touching the disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Checks if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.values.contains_key(key))
    }

    #[instrument(skip(self))]
    fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        self.values
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::new(format!("No value stored under '{}'", key)))
    }

    #[instrument(skip(self, bytes), fields(len = bytes.len()))]
    fn put(&mut self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        debug!("Storing value in memory");
        self.values.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_then_get() {
        let mut store = MemoryStore::new();
        store.put("game", b"abc").unwrap();
        assert!(store.exists("game").unwrap());
        assert_eq!(store.get("game").unwrap(), b"abc");
    }

    #[test]
    fn test_put_overwrites() {
        let mut store = MemoryStore::new();
        store.put("game", b"old").unwrap();
        store.put("game", b"new").unwrap();
        assert_eq!(store.get("game").unwrap(), b"new");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_missing_fails() {
        let store = MemoryStore::new();
        assert!(!store.exists("game").unwrap());
        assert!(store.get("game").is_err());
    }
}
