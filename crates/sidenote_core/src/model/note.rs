//! Note domain model.
//!
//! # Responsibility
//! - Define the persisted note record and its JSON field naming.
//! - Provide draft validation shared by the store and the detail view.
//!
//! # Invariants
//! - `id` is assigned once by the store and never reused.
//! - `created_at` never changes after the first save.
//! - `updated_at` is bumped on every save.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Maximum number of characters accepted in a note title.
pub const MAX_TITLE_CHARS: usize = 100;

/// Stable identifier for a persisted note.
pub type NoteId = Uuid;

/// Persisted note record.
///
/// Serialized with camelCase field names; the stored collection is a JSON
/// array of these records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Assigned by the store on first save.
    pub id: NoteId,
    /// Short title, required.
    pub title: String,
    /// Free text body, required.
    pub content: String,
    /// Unix epoch milliseconds of the first save.
    pub created_at: i64,
    /// Unix epoch milliseconds of the latest save.
    pub updated_at: i64,
}

impl Note {
    /// Returns an edit draft seeded from this note.
    pub fn to_draft(&self) -> NoteDraft {
        NoteDraft {
            id: Some(self.id),
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }

    /// Checks persisted-record invariants.
    ///
    /// `updated_at` must leave room for one more save, since every save
    /// stamps strictly above the latest stamp in the collection.
    pub fn check_invariants(&self) -> Result<(), NoteInvariantError> {
        if self.id.is_nil() {
            return Err(NoteInvariantError::NilId);
        }
        if self.created_at > self.updated_at {
            return Err(NoteInvariantError::CreatedAfterUpdated {
                id: self.id,
                created_at: self.created_at,
                updated_at: self.updated_at,
            });
        }
        if self.updated_at == i64::MAX {
            return Err(NoteInvariantError::UpdatedAtExhausted { id: self.id });
        }
        Ok(())
    }
}

/// Uncommitted note fields held by the detail view.
///
/// `id == None` means the draft has never been saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub id: Option<NoteId>,
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    /// Creates a blank draft for a new note.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Creates a new-note draft from field values.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Returns whether this draft targets an already persisted note.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Validates required fields and the title length cap.
    ///
    /// # Errors
    /// - `EmptyTitle` / `EmptyContent` when a field is blank after trimming.
    /// - `TitleTooLong` when the title exceeds `MAX_TITLE_CHARS` characters.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.title.trim().is_empty() {
            return Err(NoteValidationError::EmptyTitle);
        }
        let title_chars = self.title.chars().count();
        if title_chars > MAX_TITLE_CHARS {
            return Err(NoteValidationError::TitleTooLong {
                max: MAX_TITLE_CHARS,
                actual: title_chars,
            });
        }
        if self.content.trim().is_empty() {
            return Err(NoteValidationError::EmptyContent);
        }
        Ok(())
    }
}

/// Draft validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    EmptyTitle,
    TitleTooLong { max: usize, actual: usize },
    EmptyContent,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title is required"),
            Self::TitleTooLong { max, actual } => {
                write!(f, "title is {actual} characters long; at most {max} allowed")
            }
            Self::EmptyContent => write!(f, "content is required"),
        }
    }
}

impl Error for NoteValidationError {}

/// Persisted record that breaks the note model invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteInvariantError {
    NilId,
    CreatedAfterUpdated {
        id: NoteId,
        created_at: i64,
        updated_at: i64,
    },
    UpdatedAtExhausted { id: NoteId },
}

impl Display for NoteInvariantError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "note id is nil"),
            Self::CreatedAfterUpdated {
                id,
                created_at,
                updated_at,
            } => write!(
                f,
                "note {id} has createdAt {created_at} after updatedAt {updated_at}"
            ),
            Self::UpdatedAtExhausted { id } => {
                write!(f, "note {id} has an updatedAt that cannot be advanced")
            }
        }
    }
}

impl Error for NoteInvariantError {}
