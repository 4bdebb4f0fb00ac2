//! The byte-store contract boards are persisted through.

use super::StorageError;

/// A key-value store of raw bytes.
///
/// The board only needs these three operations, so any backend that can
/// answer them (a directory, a map, a database table) can hold saved games.
pub trait KeyValueStore {
    /// Checks whether a value is stored under `key`.
    fn exists(&self, key: &str) -> Result<bool, StorageError>;

    /// Reads the value stored under `key`.
    ///
    /// Fails if the key is absent.
    fn get(&self, key: &str) -> Result<Vec<u8>, StorageError>;

    /// Stores `bytes` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;
}

