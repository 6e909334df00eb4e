//! Detail pane state machine.
//!
//! # Responsibility
//! - Hold the local edit draft and the Empty/Viewing/Editing mode.
//! - Validate the draft before emitting a save.
//!
//! # Invariants
//! - The draft is resynchronized (uncommitted edits dropped) whenever the
//!   externally supplied note changes identity or `updated_at`.
//! - Field edits only apply in `Editing`.
//! - Delete is only offered for a persisted note while editing.
//!
//! # See also
//! - `controller::NotesController` for the props fed into `sync`.

use super::display_title;
use super::format::updated_label;
use crate::model::note::{Note, NoteDraft, NoteId, NoteValidationError};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

const EMPTY_PROMPT: &str = "Select a note or create a new one";

/// Display mode of the detail pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailMode {
    /// Nothing selected, nothing being created.
    Empty,
    /// A persisted note is shown read-only.
    Viewing,
    /// The local draft is being edited.
    Editing,
}

/// Event emitted by the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailEvent {
    Edit,
    Save(NoteDraft),
    Cancel,
    Delete(NoteId),
}

/// Submit rejected by the detail view itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailError {
    NotEditing,
    Invalid(NoteValidationError),
}

impl Display for DetailError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotEditing => write!(f, "no note is being edited"),
            Self::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DetailError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::NotEditing => None,
        }
    }
}

/// Rendered detail pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailViewModel {
    Empty {
        prompt: &'static str,
    },
    Viewing {
        title: String,
        content: String,
        updated: String,
    },
    Editing {
        title: String,
        content: String,
        is_new: bool,
        can_delete: bool,
    },
}

/// Detail pane with a locally owned draft.
#[derive(Debug, Clone)]
pub struct DetailView {
    mode: DetailMode,
    source: Option<Note>,
    draft: NoteDraft,
}

impl Default for DetailView {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailView {
    pub fn new() -> Self {
        Self {
            mode: DetailMode::Empty,
            source: None,
            draft: NoteDraft::blank(),
        }
    }

    pub fn mode(&self) -> DetailMode {
        self.mode
    }

    pub fn draft(&self) -> &NoteDraft {
        &self.draft
    }

    /// Applies props from the controller: the active note and editing flag.
    pub fn sync(&mut self, note: Option<&Note>, editing: bool) {
        let changed = match (&self.source, note) {
            (Some(prev), Some(next)) => prev.id != next.id || prev.updated_at != next.updated_at,
            (None, None) => false,
            _ => true,
        };
        let entering_edit = editing && self.mode != DetailMode::Editing;

        if changed || entering_edit {
            let dirty = self.draft != seed_draft(self.source.as_ref());
            if changed && dirty && self.mode == DetailMode::Editing {
                debug!("event=draft_resync module=view status=ok discarded_edits=true");
            }
            self.draft = seed_draft(note);
        }

        self.source = note.cloned();
        self.mode = if editing {
            DetailMode::Editing
        } else if self.source.is_some() {
            DetailMode::Viewing
        } else {
            DetailMode::Empty
        };
    }

    /// Edit action from `Viewing`; seeds the draft from the shown note.
    pub fn edit(&mut self) -> Option<DetailEvent> {
        if self.mode != DetailMode::Viewing {
            return None;
        }
        let source = self.source.as_ref()?;
        self.draft = source.to_draft();
        self.mode = DetailMode::Editing;
        Some(DetailEvent::Edit)
    }

    /// Replaces the draft title. Returns `false` outside `Editing`.
    pub fn set_title(&mut self, title: impl Into<String>) -> bool {
        if self.mode != DetailMode::Editing {
            return false;
        }
        self.draft.title = title.into();
        true
    }

    /// Replaces the draft content. Returns `false` outside `Editing`.
    pub fn set_content(&mut self, content: impl Into<String>) -> bool {
        if self.mode != DetailMode::Editing {
            return false;
        }
        self.draft.content = content.into();
        true
    }

    /// Validates the draft and emits it for saving.
    ///
    /// The view stays in `Editing`; the next `sync` after the controller has
    /// saved moves it to `Viewing`.
    pub fn submit(&self) -> Result<DetailEvent, DetailError> {
        if self.mode != DetailMode::Editing {
            return Err(DetailError::NotEditing);
        }
        self.draft.validate().map_err(DetailError::Invalid)?;
        Ok(DetailEvent::Save(self.draft.clone()))
    }

    /// Drops the draft and leaves `Editing` without touching the store.
    pub fn cancel(&mut self) -> Option<DetailEvent> {
        if self.mode != DetailMode::Editing {
            return None;
        }
        self.draft = seed_draft(self.source.as_ref());
        self.mode = if self.source.is_some() {
            DetailMode::Viewing
        } else {
            DetailMode::Empty
        };
        Some(DetailEvent::Cancel)
    }

    /// Delete action; only for a persisted note while editing.
    pub fn request_delete(&self) -> Option<DetailEvent> {
        if self.mode != DetailMode::Editing {
            return None;
        }
        self.draft.id.map(DetailEvent::Delete)
    }

    pub fn render(&self) -> DetailViewModel {
        match (self.mode, self.source.as_ref()) {
            (DetailMode::Editing, _) => DetailViewModel::Editing {
                title: self.draft.title.clone(),
                content: self.draft.content.clone(),
                is_new: !self.draft.is_persisted(),
                can_delete: self.draft.is_persisted(),
            },
            (DetailMode::Viewing, Some(note)) => DetailViewModel::Viewing {
                title: display_title(&note.title),
                content: note.content.clone(),
                updated: updated_label(note.updated_at),
            },
            _ => DetailViewModel::Empty {
                prompt: EMPTY_PROMPT,
            },
        }
    }
}

fn seed_draft(note: Option<&Note>) -> NoteDraft {
    note.map(Note::to_draft).unwrap_or_default()
}
