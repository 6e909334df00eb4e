//! SQLite-backed key-value store.
//!
//! # Invariants
//! - The connection must come from `db::open_db*` (migrations applied).
//! - Writes are single-statement upserts, so a value is never half-written.

use super::{KvError, KvResult, KvStore};
use rusqlite::{params, Connection, OptionalExtension};

/// Key-value store over the `kv` table.
pub struct SqliteKvStore {
    conn: Connection,
}

impl SqliteKvStore {
    /// Wraps a migrated connection.
    ///
    /// # Errors
    /// - `MissingTable` when the connection was not bootstrapped.
    pub fn try_new(conn: Connection) -> KvResult<Self> {
        if !table_exists(&conn, "kv")? {
            return Err(KvError::MissingTable("kv"));
        }
        Ok(Self { conn })
    }

    /// Gives the connection back, e.g. to reopen a store in tests.
    pub fn into_inner(self) -> Connection {
        self.conn
    }
}

impl KvStore for SqliteKvStore {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn put(&mut self, key: &str, value: &str) -> KvResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}

fn table_exists(conn: &Connection, table: &str) -> KvResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
