//! Application root state: the note collection, selection, search text and
//! editing flag.
//!
//! # Responsibility
//! - Load the collection at startup and refresh it after every store mutation.
//! - Route list/detail view events to the create/select/save/delete flows.
//! - Compute the visible (search-filtered) subset.
//!
//! # Invariants
//! - The in-memory collection is only replaced with what a completed store
//!   call returned; a failed call leaves controller state untouched.
//! - Delete never reaches the store without an accepted confirmation.
//! - `selected`, when set, refers to a note in the collection, except while
//!   a create flow has cleared it.

use crate::model::note::{Note, NoteDraft, NoteId};
use crate::search::filter::filter_notes;
use crate::store::{NoteStore, StoreError, StoreResult};
use crate::view::detail::DetailEvent;
use crate::view::list::ListEvent;
use log::info;

/// Blocking confirmation asked before a destructive delete.
pub trait ConfirmDelete {
    /// Returns `true` when the user accepts deleting `note`.
    fn confirm_delete(&mut self, note: &Note) -> bool;
}

impl<F> ConfirmDelete for F
where
    F: FnMut(&Note) -> bool,
{
    fn confirm_delete(&mut self, note: &Note) -> bool {
        self(note)
    }
}

/// Result of a delete flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Confirmation accepted; the store was asked to delete.
    Deleted,
    /// Confirmation refused; nothing changed.
    Declined,
    /// Nothing to delete under that id.
    Missing,
}

/// What a routed detail event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOutcome {
    /// Edit requested; `false` when no note was selected.
    Editing(bool),
    Cancelled,
    Saved(NoteId),
    Delete(DeleteOutcome),
}

/// Controller owning the canonical note collection.
pub struct NotesController<S: NoteStore> {
    store: S,
    notes: Vec<Note>,
    selected: Option<NoteId>,
    search: String,
    editing: bool,
}

impl<S: NoteStore> NotesController<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            notes: Vec::new(),
            selected: None,
            search: String::new(),
            editing: false,
        }
    }

    /// Loads the full collection and selects the most recent note when
    /// nothing is selected yet.
    pub async fn load(&mut self) -> StoreResult<()> {
        self.notes = self.store.list().await?;
        if self.selected.is_none() {
            self.selected = self.notes.first().map(|note| note.id);
        }
        info!(
            "event=notes_load module=controller status=ok count={}",
            self.notes.len()
        );
        Ok(())
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn selected(&self) -> Option<NoteId> {
        self.selected
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Read access to the store, e.g. for `get_by_id` lookups.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The selected note, as handed to the detail view.
    pub fn active_note(&self) -> Option<&Note> {
        let id = self.selected?;
        self.notes.iter().find(|note| note.id == id)
    }

    /// Notes whose title or content contains the search text.
    pub fn visible_notes(&self) -> Vec<&Note> {
        filter_notes(&self.notes, &self.search)
    }

    /// Create flow: blank draft in the detail view.
    pub fn begin_create(&mut self) {
        self.editing = true;
        self.selected = None;
    }

    /// Select flow: show `id` read-only.
    pub fn select(&mut self, id: NoteId) {
        self.selected = Some(id);
        self.editing = false;
    }

    /// Edit flow for the selected note. Returns `false` when nothing is
    /// selected.
    pub fn begin_edit(&mut self) -> bool {
        if self.active_note().is_none() {
            return false;
        }
        self.editing = true;
        true
    }

    /// Leaves editing without a store call.
    pub fn cancel_edit(&mut self) {
        self.editing = false;
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Save flow. Returns the id now selected.
    pub async fn save(&mut self, draft: &NoteDraft) -> StoreResult<NoteId> {
        let notes = self.store.save(draft).await?;
        let saved_id = match draft.id {
            Some(id) => id,
            None => newest_insert(&notes).ok_or_else(|| {
                StoreError::Corrupt("save returned an empty collection".to_string())
            })?,
        };
        self.notes = notes;
        self.selected = Some(saved_id);
        self.editing = false;
        Ok(saved_id)
    }

    /// Delete flow, guarded by `confirm`.
    pub async fn delete(
        &mut self,
        id: NoteId,
        confirm: &mut impl ConfirmDelete,
    ) -> StoreResult<DeleteOutcome> {
        let Some(note) = self.notes.iter().find(|note| note.id == id) else {
            return Ok(DeleteOutcome::Missing);
        };
        if !confirm.confirm_delete(note) {
            info!("event=note_delete module=controller status=declined note_id={id}");
            return Ok(DeleteOutcome::Declined);
        }

        self.notes = self.store.delete(id).await?;
        self.selected = self.notes.first().map(|note| note.id);
        self.editing = false;
        Ok(DeleteOutcome::Deleted)
    }

    /// Applies a list view event.
    pub fn handle_list_event(&mut self, event: ListEvent) {
        match event {
            ListEvent::Select(id) => self.select(id),
            ListEvent::Create => self.begin_create(),
            ListEvent::Search(text) => self.set_search(text),
        }
    }

    /// Applies a detail view event.
    pub async fn handle_detail_event(
        &mut self,
        event: DetailEvent,
        confirm: &mut impl ConfirmDelete,
    ) -> StoreResult<DetailOutcome> {
        let outcome = match event {
            DetailEvent::Edit => DetailOutcome::Editing(self.begin_edit()),
            DetailEvent::Cancel => {
                self.cancel_edit();
                DetailOutcome::Cancelled
            }
            DetailEvent::Save(draft) => DetailOutcome::Saved(self.save(&draft).await?),
            DetailEvent::Delete(id) => DetailOutcome::Delete(self.delete(id, confirm).await?),
        };
        Ok(outcome)
    }
}

/// The most recently inserted note: highest `created_at`.
fn newest_insert(notes: &[Note]) -> Option<NoteId> {
    notes
        .iter()
        .max_by_key(|note| note.created_at)
        .map(|note| note.id)
}
