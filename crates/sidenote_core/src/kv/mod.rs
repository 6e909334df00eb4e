//! Key-value persistence contracts and implementations.
//!
//! # Responsibility
//! - Define the minimal string key-value contract the note store sits on.
//! - Keep SQLite details out of the note store.
//!
//! # Invariants
//! - `put` replaces the whole value stored under a key.
//! - `get` on an unknown key returns `Ok(None)`, never an error.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryKvStore;
pub use sqlite::SqliteKvStore;

pub type KvResult<T> = Result<T, KvError>;

/// Key-value access failure.
#[derive(Debug)]
pub enum KvError {
    Db(DbError),
    /// Connection is open but the `kv` table is not there.
    MissingTable(&'static str),
}

impl Display for KvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::MissingTable(table) => write!(f, "required table `{table}` is missing"),
        }
    }
}

impl Error for KvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::MissingTable(_) => None,
        }
    }
}

impl From<DbError> for KvError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for KvError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// String key-value storage used as the single unit of persistence.
pub trait KvStore {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> KvResult<Option<String>>;
    /// Writes `value` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, value: &str) -> KvResult<()>;
}
