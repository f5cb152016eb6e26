//! Single-file JSON key-value backend.
//!
//! # Responsibility
//! - Persist the whole key-value map as one JSON object on disk.
//!
//! # Invariants
//! - Every write rewrites the full map; last write wins in call order.
//! - A missing file reads as an empty map.
//! - `set_all` lands all entries in one rewrite, keeping the archive and
//!   starred keys coherent on disk.

use super::{KeyValueStore, PersistResult};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed implementation of the key-value port.
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    /// Uses `path` as the backing file; the file is created on first write.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read_map(&self) -> PersistResult<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> PersistResult<()> {
        let encoded = serde_json::to_string(map)?;
        fs::write(&self.path, encoded)?;
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> PersistResult<Option<String>> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> PersistResult<()> {
        // A corrupt backing file starts over empty; the next write restores
        // a parseable map.
        let mut map = self.read_map().unwrap_or_default();
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn set_all(&mut self, entries: &[(&str, String)]) -> PersistResult<()> {
        let mut map = self.read_map().unwrap_or_default();
        for (key, value) in entries {
            map.insert((*key).to_string(), value.clone());
        }
        self.write_map(&map)
    }

    fn remove(&mut self, key: &str) -> PersistResult<()> {
        let mut map = self.read_map().unwrap_or_default();
        map.remove(key);
        self.write_map(&map)
    }
}
