//! Sidebar list view model.
//!
//! # Responsibility
//! - Render an already-filtered note sequence with selection and search text.
//! - Emit selection, creation and search events.
//!
//! # Invariants
//! - Item order equals input order.
//! - An empty input always yields an empty-state message.

use super::display_title;
use super::format::list_date;
use crate::model::note::{Note, NoteId};

/// Event emitted by the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// An entry was activated.
    Select(NoteId),
    /// The create action was triggered.
    Create,
    /// Search text changed; carries the full new text.
    Search(String),
}

/// One rendered sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub id: NoteId,
    /// Title, or the untitled label when blank.
    pub title: String,
    /// Localized date of `updated_at`.
    pub date: String,
    pub selected: bool,
}

/// Rendered sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewModel {
    pub search: String,
    pub items: Vec<ListItem>,
    /// Set only when `items` is empty.
    pub empty_message: Option<String>,
}

impl ListViewModel {
    /// Activates the entry at `index` (0-based, in display order).
    pub fn select_at(&self, index: usize) -> Option<ListEvent> {
        self.items.get(index).map(|item| ListEvent::Select(item.id))
    }

    /// Returns the position of the selected entry, if visible.
    pub fn selected_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.selected)
    }
}

/// Stateless list view.
pub struct ListView;

impl ListView {
    /// Renders `notes` (already filtered by the controller).
    pub fn render(notes: &[&Note], selected: Option<NoteId>, search: &str) -> ListViewModel {
        let items: Vec<ListItem> = notes
            .iter()
            .map(|note| ListItem {
                id: note.id,
                title: display_title(&note.title),
                date: list_date(note.updated_at),
                selected: selected == Some(note.id),
            })
            .collect();

        let empty_message = items.is_empty().then(|| empty_message(search));
        ListViewModel {
            search: search.to_string(),
            items,
            empty_message,
        }
    }

    /// Create action.
    pub fn create() -> ListEvent {
        ListEvent::Create
    }

    /// Search keystroke; the full new text goes upward unchanged.
    pub fn search_input(text: impl Into<String>) -> ListEvent {
        ListEvent::Search(text.into())
    }
}

fn empty_message(search: &str) -> String {
    if search.is_empty() {
        "No notes yet".to_string()
    } else {
        format!("No notes match \"{search}\"")
    }
}
