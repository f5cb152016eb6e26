//! SQLite-backed key-value storage.
//!
//! # Responsibility
//! - Open file or in-memory connections and apply the key-value schema.
//! - Provide a transactional batch write for snapshot coherence.
//!
//! # Invariants
//! - Returned connections have the schema applied before use.
//! - `set_all` commits every row or none.

use super::{KeyValueStore, PersistResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::Duration;

const KV_SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS kv_entries (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL,
    updated_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now') * 1000)
);";

const KV_UPSERT_SQL: &str = "INSERT INTO kv_entries (key, value) VALUES (?1, ?2)
 ON CONFLICT(key) DO UPDATE SET
    value = excluded.value,
    updated_at = (strftime('%s', 'now') * 1000);";

/// Opens a key-value database file and applies the schema.
pub fn open_kv_db(path: impl AsRef<Path>) -> PersistResult<Connection> {
    let conn = Connection::open(path)?;
    match bootstrap_connection(&conn) {
        Ok(()) => {
            info!("event=kv_open module=persist status=ok mode=file");
            Ok(conn)
        }
        Err(err) => {
            error!("event=kv_open module=persist status=error mode=file error={err}");
            Err(err)
        }
    }
}

/// Opens an in-memory key-value database, mainly for tests.
pub fn open_kv_db_in_memory() -> PersistResult<Connection> {
    let conn = Connection::open_in_memory()?;
    match bootstrap_connection(&conn) {
        Ok(()) => {
            info!("event=kv_open module=persist status=ok mode=memory");
            Ok(conn)
        }
        Err(err) => {
            error!("event=kv_open module=persist status=error mode=memory error={err}");
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &Connection) -> PersistResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    conn.execute_batch(KV_SCHEMA_SQL)?;
    Ok(())
}

/// SQLite implementation of the key-value port.
pub struct SqliteKeyValueStore<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteKeyValueStore<'conn> {
    /// Wraps a connection opened via [`open_kv_db`] or [`open_kv_db_in_memory`].
    pub fn new(conn: &'conn mut Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueStore for SqliteKeyValueStore<'_> {
    fn get(&self, key: &str) -> PersistResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv_entries WHERE key = ?1;", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> PersistResult<()> {
        self.conn.execute(KV_UPSERT_SQL, params![key, value])?;
        Ok(())
    }

    fn set_all(&mut self, entries: &[(&str, String)]) -> PersistResult<()> {
        let tx = self.conn.transaction()?;
        for (key, value) in entries {
            tx.execute(KV_UPSERT_SQL, params![key, value])?;
        }
        tx.commit()?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> PersistResult<()> {
        self.conn
            .execute("DELETE FROM kv_entries WHERE key = ?1;", [key])?;
        Ok(())
    }
}
