//! Store that keeps one file per key inside a directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use super::{KeyValueStore, StorageError};

/// Directory-backed store.
///
/// Each key maps to a file directly under the root directory. Keys are
/// limited to ASCII letters, digits, `_`, `-` and `.` so they can never
/// name a path outside the root.
#[derive(Debug, Clone)]
pub struct DiskStore {
    root: PathBuf,
}

impl DiskStore {
    /// Creates a store rooted at `root`.
    ///
    /// The directory is created lazily on the first write.
    #[instrument(skip(root), fields(root = %root.as_ref().display()))]
    pub fn new(root: impl AsRef<Path>) -> Self {
        info!("Creating DiskStore");
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Returns the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `key` to its file path.
    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if !valid {
            return Err(StorageError::new(format!("Invalid storage key '{}'", key)));
        }
        Ok(self.root.join(key))
    }
}

impl KeyValueStore for DiskStore {
    #[instrument(skip(self))]
    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        let path = self.path_for(key)?;
        match fs::metadata(&path) {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::new(format!(
                "Failed to inspect '{}': {}",
                path.display(),
                e
            ))),
        }
    }

    #[instrument(skip(self))]
    fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.path_for(key)?;
        debug!(path = %path.display(), "Reading value");
        fs::read(&path).map_err(|e| {
            StorageError::new(format!("Failed to read '{}': {}", path.display(), e))
        })
    }

    #[instrument(skip(self, bytes), fields(len = bytes.len()))]
    fn put(&mut self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root)?;

        // Write beside the target and rename so readers never see a partial file.
        let tmp = self.root.join(format!(".{}.tmp", key));
        fs::write(&tmp, bytes).map_err(|e| {
            StorageError::new(format!("Failed to write '{}': {}", tmp.display(), e))
        })?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(StorageError::new(format!(
                "Failed to replace '{}': {}",
                path.display(),
                e
            )));
        }

        debug!(path = %path.display(), "Value written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_traversal_keys() {
        let store = DiskStore::new("unused");
        for key in ["", ".", "..", "../escape", "a/b", "a\\b"] {
            assert!(store.exists(key).is_err(), "key {:?} should be rejected", key);
        }
    }

    #[test]
    fn test_accepts_board_key() {
        let store = DiskStore::new("unused");
        let path = store.path_for("tic-tac-toe").unwrap();
        assert_eq!(path, Path::new("unused").join("tic-tac-toe"));
    }

    #[test]
    fn test_exists_missing_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = DiskStore::new(dir.path().join("storage"));
        assert!(!store.exists("tic-tac-toe").unwrap());
    }

    #[test]
    fn test_exists_reports_broken_root() {
        let dir = tempfile::TempDir::new().unwrap();
        let blocker = dir.path().join("notadir");
        fs::write(&blocker, b"plain file").unwrap();
        let store = DiskStore::new(blocker.join("storage"));
        assert!(store.exists("tic-tac-toe").is_err());
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let root = dir.path().join("storage");
        let mut store = DiskStore::new(&root);
        // A non-empty directory at the target path makes the rename fail.
        fs::create_dir_all(root.join("tic-tac-toe").join("occupied")).unwrap();

        assert!(store.put("tic-tac-toe", b"{}").is_err());
        assert!(!root.join(".tic-tac-toe.tmp").exists());
    }
}
