//! Core of the SideNote note-taking program.
//! This crate owns the note model, persistence, and the view/controller
//! state that front ends render.

pub mod controller;
pub mod db;
pub mod kv;
pub mod logging;
pub mod model;
pub mod search;
pub mod store;
pub mod view;

pub use controller::{ConfirmDelete, DeleteOutcome, DetailOutcome, NotesController};
pub use kv::{KvError, KvStore, MemoryKvStore, SqliteKvStore};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::note::{
    Note, NoteDraft, NoteId, NoteInvariantError, NoteValidationError, MAX_TITLE_CHARS,
};
pub use search::filter::{filter_notes, NoteFilter};
pub use store::{Clock, LocalNoteStore, NoteStore, StoreError, StoreResult, SystemClock};
pub use view::detail::{DetailError, DetailEvent, DetailMode, DetailView, DetailViewModel};
pub use view::list::{ListEvent, ListItem, ListView, ListViewModel};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
