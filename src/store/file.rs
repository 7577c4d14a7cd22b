//! JSON-file backed store
//!
//! Persists the whole key-value map as one pretty-printed JSON object,
//! rewritten on every set. Writes are synchronous, matching the
//! `localStorage` model the records came from.

use super::{Store, StoreError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A `Store` persisted to a JSON file
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    map: BTreeMap<String, String>,
}

impl FileStore {
    /// Open a store file, creating an empty store if the file is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not a
    /// JSON object of strings.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let map = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, map })
    }

    /// Open the default profile store under the user data directory
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoDataDir`] if the platform has no data
    /// directory, or any error from [`FileStore::open`].
    pub fn open_default() -> Result<Self, StoreError> {
        Self::open(Self::default_path().ok_or(StoreError::NoDataDir)?)
    }

    /// Default profile location: `<data dir>/mapitals/profile.json`
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("mapitals").join("profile.json"))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.map)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.map.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.map.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");

        {
            let mut store = FileStore::open(&path).unwrap();
            store.set("mapitals-score", "42").unwrap();
            store.set("mapitals-best-streak", "7").unwrap();
        }

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("mapitals-score"), Some("42".to_string()));
        assert_eq!(store.get("mapitals-best-streak"), Some("7".to_string()));
    }

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("fresh.json")).unwrap();
        assert_eq!(store.get("anything"), None);
    }

    #[test]
    fn creates_parent_directories_on_first_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("profile.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("k", "v").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn corrupt_file_is_an_error_not_a_wipe() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            FileStore::open(&path),
            Err(StoreError::Corrupt(_))
        ));
        // Original content untouched
        assert_eq!(fs::read_to_string(&path).unwrap(), "{not json");
    }

    #[test]
    fn remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");

        {
            let mut store = FileStore::open(&path).unwrap();
            store.set("k", "v").unwrap();
            store.remove("k").unwrap();
        }

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("k"), None);
    }
}
