//! Persistence port and JSON collection adapter.
//!
//! # Responsibility
//! - Define the key-value port the stores persist through.
//! - Own the fixed collection keys and their JSON array encoding.
//!
//! # Invariants
//! - Reads never fail the caller; missing or corrupt data loads as empty.
//! - The archive and starred keys are written together via `set_all`, so a
//!   reload never observes one collection fresh and the other stale.

use crate::model::post::Post;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod file;
mod memory;
mod sqlite;

pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;
pub use sqlite::{open_kv_db, open_kv_db_in_memory, SqliteKeyValueStore};

pub type PersistResult<T> = Result<T, PersistError>;

/// Persistence-layer error for key-value backends and JSON encoding.
#[derive(Debug)]
pub enum PersistError {
    Io(std::io::Error),
    Sqlite(rusqlite::Error),
    Serialize(serde_json::Error),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "storage i/o failed: {err}"),
            Self::Sqlite(err) => write!(f, "storage query failed: {err}"),
            Self::Serialize(err) => write!(f, "collection encoding failed: {err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Sqlite(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for PersistError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<rusqlite::Error> for PersistError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Durable key-value port the post collections persist through.
///
/// Values are JSON text; the storage medium behind the port is swappable
/// (in-memory, file, embedded database) without touching store logic.
pub trait KeyValueStore {
    /// Reads one key. Absent keys are `Ok(None)`.
    fn get(&self, key: &str) -> PersistResult<Option<String>>;
    /// Overwrites one key. Last write wins in call order.
    fn set(&mut self, key: &str, value: &str) -> PersistResult<()>;
    /// Writes several keys as one batch. Backends with transactional support
    /// must make the batch all-or-nothing; others apply writes in order.
    fn set_all(&mut self, entries: &[(&str, String)]) -> PersistResult<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
    /// Removes one key. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str) -> PersistResult<()>;
}

/// Named persisted collection and its fixed storage key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKey {
    /// The canonical post archive.
    Archive,
    /// The materialized starred view, kept for storage-format compatibility.
    Starred,
}

impl CollectionKey {
    /// Fixed key under which the collection is stored.
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Archive => "archivedPosts",
            Self::Starred => "starredPosts",
        }
    }
}

/// JSON collection adapter over a key-value backend.
///
/// No business logic lives here: the adapter only encodes, decodes and
/// places collections under their fixed keys.
pub struct PersistenceAdapter<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> PersistenceAdapter<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Serializes one collection and overwrites its key.
    pub fn save(&mut self, collection: CollectionKey, posts: &[Post]) -> PersistResult<()> {
        let encoded = serde_json::to_string(posts)?;
        self.backend.set(collection.storage_key(), &encoded)
    }

    /// Writes the archive and the materialized starred view as one batch.
    pub fn save_snapshot(&mut self, archive: &[Post], starred: &[Post]) -> PersistResult<()> {
        let entries = [
            (
                CollectionKey::Archive.storage_key(),
                serde_json::to_string(archive)?,
            ),
            (
                CollectionKey::Starred.storage_key(),
                serde_json::to_string(starred)?,
            ),
        ];
        self.backend.set_all(&entries)
    }

    /// Loads one collection.
    ///
    /// Absent keys and corrupt payloads load as an empty sequence; read
    /// problems are logged, never surfaced to the caller.
    pub fn load(&self, collection: CollectionKey) -> Vec<Post> {
        let raw = match self.backend.get(collection.storage_key()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(
                    "event=collection_load module=persist status=error key={} error={}",
                    collection.storage_key(),
                    err
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(posts) => posts,
            Err(err) => {
                warn!(
                    "event=collection_load module=persist status=corrupt key={} error={}",
                    collection.storage_key(),
                    err
                );
                Vec::new()
            }
        }
    }
}
