//! Local note store over a key-value backend.
//!
//! # Responsibility
//! - Keep the full note collection as one JSON array under `NOTES_KEY`.
//! - Assign ids and timestamps on save.
//!
//! # Invariants
//! - Every save stamps `updated_at` strictly above all stamps already in the
//!   collection, so the latest save is always listed first.
//! - A corrupt stored value is reported, never replaced with an empty list.

use super::{sort_for_display, Clock, NoteStore, StoreError, StoreResult, SystemClock};
use crate::kv::KvStore;
use crate::model::note::{Note, NoteDraft, NoteId};
use log::{error, info, warn};
use std::collections::HashSet;
use uuid::Uuid;

/// Key holding the serialized note collection.
pub const NOTES_KEY: &str = "sidenote.notes";

/// `NoteStore` that persists through a `KvStore`.
pub struct LocalNoteStore<K: KvStore, C: Clock = SystemClock> {
    kv: K,
    clock: C,
}

impl<K: KvStore> LocalNoteStore<K> {
    /// Creates a store stamping notes with the system clock.
    pub fn new(kv: K) -> Self {
        Self::with_clock(kv, SystemClock)
    }
}

impl<K: KvStore, C: Clock> LocalNoteStore<K, C> {
    /// Creates a store with a caller-provided clock.
    pub fn with_clock(kv: K, clock: C) -> Self {
        Self { kv, clock }
    }

    /// Returns the underlying key-value store.
    pub fn into_kv(self) -> K {
        self.kv
    }

    fn load(&self) -> StoreResult<Vec<Note>> {
        let Some(raw) = self.kv.get(NOTES_KEY)? else {
            return Ok(Vec::new());
        };

        let notes: Vec<Note> = serde_json::from_str(&raw).map_err(|err| {
            error!("event=notes_load module=store status=error error_code=invalid_json error={err}");
            StoreError::Corrupt(format!("invalid JSON: {err}"))
        })?;

        let mut seen = HashSet::with_capacity(notes.len());
        for note in &notes {
            note.check_invariants().map_err(|err| {
                error!("event=notes_load module=store status=error error_code=invalid_record error={err}");
                StoreError::from(err)
            })?;
            if !seen.insert(note.id) {
                error!(
                    "event=notes_load module=store status=error error_code=duplicate_id note_id={}",
                    note.id
                );
                return Err(StoreError::Corrupt(format!("duplicate note id {}", note.id)));
            }
        }

        Ok(notes)
    }

    fn persist(&mut self, notes: &[Note]) -> StoreResult<()> {
        let encoded = serde_json::to_string(notes).map_err(StoreError::Serialize)?;
        self.kv.put(NOTES_KEY, &encoded)?;
        Ok(())
    }

    // `load` rejects `updated_at == i64::MAX`, so `latest + 1` cannot overflow.
    fn next_stamp(&self, notes: &[Note]) -> i64 {
        let now = self.clock.now_millis();
        match notes.iter().map(|note| note.updated_at).max() {
            Some(latest) if latest >= now => latest + 1,
            _ => now,
        }
    }
}

impl<K: KvStore, C: Clock> NoteStore for LocalNoteStore<K, C> {
    async fn list(&self) -> StoreResult<Vec<Note>> {
        let mut notes = self.load()?;
        sort_for_display(&mut notes);
        Ok(notes)
    }

    async fn save(&mut self, draft: &NoteDraft) -> StoreResult<Vec<Note>> {
        draft.validate()?;
        let mut notes = self.load()?;
        let stamp = self.next_stamp(&notes);

        let (op, note_id) = match draft.id {
            Some(id) => {
                let Some(existing) = notes.iter_mut().find(|note| note.id == id) else {
                    warn!("event=note_save module=store status=error error_code=not_found note_id={id}");
                    return Err(StoreError::NotFound(id));
                };
                existing.title.clone_from(&draft.title);
                existing.content.clone_from(&draft.content);
                existing.updated_at = stamp;
                ("update", id)
            }
            None => {
                let id = fresh_id(&notes);
                notes.insert(
                    0,
                    Note {
                        id,
                        title: draft.title.clone(),
                        content: draft.content.clone(),
                        created_at: stamp,
                        updated_at: stamp,
                    },
                );
                ("create", id)
            }
        };

        self.persist(&notes)?;
        info!(
            "event=note_save module=store status=ok op={op} note_id={note_id} count={}",
            notes.len()
        );
        sort_for_display(&mut notes);
        Ok(notes)
    }

    async fn delete(&mut self, id: NoteId) -> StoreResult<Vec<Note>> {
        let mut notes = self.load()?;
        let before = notes.len();
        notes.retain(|note| note.id != id);
        let removed = before != notes.len();
        if removed {
            self.persist(&notes)?;
        }
        info!(
            "event=note_delete module=store status=ok note_id={id} removed={removed} count={}",
            notes.len()
        );
        sort_for_display(&mut notes);
        Ok(notes)
    }

    async fn get_by_id(&self, id: NoteId) -> StoreResult<Option<Note>> {
        Ok(self.load()?.into_iter().find(|note| note.id == id))
    }
}

fn fresh_id(notes: &[Note]) -> NoteId {
    loop {
        let candidate = Uuid::new_v4();
        if notes.iter().all(|note| note.id != candidate) {
            return candidate;
        }
    }
}
