//! Domain model for notes and editable drafts.
//!
//! # Responsibility
//! - Define the canonical persisted `Note` record.
//! - Define the `NoteDraft` shape edited by the detail view before saving.
//!
//! # Invariants
//! - A persisted note always carries a non-nil `NoteId`.
//! - `created_at <= updated_at` for every persisted note.
//! - Drafts are validated before they reach storage.

pub mod note;
