//! Presentation models for the sidebar list and the detail pane.
//!
//! # Responsibility
//! - Turn controller state into renderer-agnostic view models.
//! - Translate user actions into `ListEvent` / `DetailEvent` values that the
//!   controller consumes.
//!
//! # Invariants
//! - Views never call the store; they only emit events upward.
//! - Filtering happens in the controller; the list view renders what it gets.

pub mod detail;
pub mod format;
pub mod list;

/// Label shown for notes whose title is blank.
pub const UNTITLED_LABEL: &str = "Untitled";

/// Title as shown to the user: trimmed, or the untitled label when blank.
pub fn display_title(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        UNTITLED_LABEL.to_string()
    } else {
        trimmed.to_string()
    }
}
