//! Note persistence capability and its local implementation.
//!
//! # Responsibility
//! - Define the `NoteStore` seam (list/save/delete/get-by-id) that a remote
//!   backend can later implement without touching callers.
//! - Provide `LocalNoteStore`, which keeps the whole collection as one JSON
//!   value in a key-value store.
//!
//! # Invariants
//! - `list`, `save` and `delete` return the collection sorted by
//!   `updated_at DESC, id ASC`.
//! - A failed call leaves the persisted collection untouched.

use crate::kv::KvError;
use crate::model::note::{Note, NoteDraft, NoteId, NoteInvariantError, NoteValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

mod local;

pub use local::{LocalNoteStore, NOTES_KEY};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for note persistence.
#[derive(Debug)]
pub enum StoreError {
    /// Draft failed required-field or length validation.
    Validation(NoteValidationError),
    /// Underlying key-value storage failed.
    Kv(KvError),
    /// Stored collection cannot be parsed or repeats an id.
    Corrupt(String),
    /// A stored record breaks the note model invariants.
    InvalidRecord(NoteInvariantError),
    /// Collection could not be encoded for writing.
    Serialize(serde_json::Error),
    /// Save targeted an id that is not in the collection.
    NotFound(NoteId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Kv(err) => write!(f, "{err}"),
            Self::Corrupt(details) => write!(f, "stored note collection is corrupt: {details}"),
            Self::InvalidRecord(err) => write!(f, "stored note collection is corrupt: {err}"),
            Self::Serialize(err) => write!(f, "failed to encode note collection: {err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Kv(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::InvalidRecord(err) => Some(err),
            Self::Corrupt(_) | Self::NotFound(_) => None,
        }
    }
}

impl From<NoteValidationError> for StoreError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<NoteInvariantError> for StoreError {
    fn from(value: NoteInvariantError) -> Self {
        Self::InvalidRecord(value)
    }
}

impl From<KvError> for StoreError {
    fn from(value: KvError) -> Self {
        Self::Kv(value)
    }
}

/// Persistence capability for notes.
///
/// Operations are `async` so a networked implementation can replace the
/// local one; callers must not assume they complete synchronously.
#[allow(async_fn_in_trait)]
pub trait NoteStore {
    /// Returns every note, most recently updated first.
    async fn list(&self) -> StoreResult<Vec<Note>>;
    /// Inserts (no id) or replaces (known id) a note; returns the collection.
    async fn save(&mut self, draft: &NoteDraft) -> StoreResult<Vec<Note>>;
    /// Removes the note if present; returns the collection.
    async fn delete(&mut self, id: NoteId) -> StoreResult<Vec<Note>>;
    /// Looks one note up by id.
    async fn get_by_id(&self, id: NoteId) -> StoreResult<Option<Note>>;
}

/// Source of wall-clock time in epoch milliseconds.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// `Clock` backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Sorts notes for display: `updated_at DESC, id ASC`.
pub fn sort_for_display(notes: &mut [Note]) {
    notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(a.id.cmp(&b.id)));
}
