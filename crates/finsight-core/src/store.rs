//! JSON file persistence for small client-side collections.
//!
//! Each store is a single JSON array in one file. A missing file reads as an
//! empty collection; writes go to a sibling temp file and are renamed into
//! place so a crash never leaves a half-written store.

use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::StoreError;

/// File name of the alert book inside the data directory.
pub const ALERTS_FILE: &str = "alerts.json";
/// File name of the prediction ledger inside the data directory.
pub const PERFORMANCE_FILE: &str = "performance.json";

/// Typed JSON array stored at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonStore<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    /// Store named `file_name` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>, file_name: &str) -> Self {
        Self::new(dir.as_ref().join(file_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Vec<T>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(self.io_error(source)),
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&contents).map_err(|source| StoreError::Serialization {
            path: self.path.display().to_string(),
            source,
        })
    }

    pub fn save(&self, items: &[T]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }

        let payload =
            serde_json::to_string_pretty(items).map_err(|source| StoreError::Serialization {
                path: self.path.display().to_string(),
                source,
            })?;

        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, payload).map_err(|source| self.io_error(source))?;
        fs::rename(&staging, &self.path).map_err(|source| self.io_error(source))?;

        debug!(path = %self.path.display(), count = items.len(), "store saved");
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store: JsonStore<String> = JsonStore::in_dir(dir.path(), "absent.json");
        assert!(store.load().expect("load").is_empty());
    }

    #[test]
    fn saves_into_nested_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store: JsonStore<String> = JsonStore::new(dir.path().join("nested/items.json"));

        store
            .save(&[String::from("a"), String::from("b")])
            .expect("save");
        assert_eq!(store.load().expect("load"), vec!["a", "b"]);
        assert!(!dir.path().join("nested/items.json.tmp").exists());
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").expect("write");

        let store: JsonStore<String> = JsonStore::new(path);
        assert!(matches!(
            store.load(),
            Err(StoreError::Serialization { .. })
        ));
    }
}
