//! Case-insensitive substring filter over note title and content.
//!
//! # Invariants
//! - Query text is matched literally, whitespace included; regex
//!   metacharacters have no meaning.
//! - The empty query matches every note.
//! - Result order follows input order.

use crate::model::note::Note;
use regex::{Regex, RegexBuilder};

/// Compiled search query.
#[derive(Debug, Clone)]
pub struct NoteFilter {
    pattern: Option<Regex>,
}

impl NoteFilter {
    /// Compiles `query` into a literal, Unicode case-insensitive matcher.
    pub fn new(query: &str) -> Self {
        if query.is_empty() {
            return Self { pattern: None };
        }

        // Escaped literals only fail on the compiled size limit; treat that
        // as no filter.
        let pattern = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
            .ok();
        Self { pattern }
    }

    /// Returns whether the title or content of `note` contains the query.
    pub fn matches(&self, note: &Note) -> bool {
        match &self.pattern {
            Some(pattern) => pattern.is_match(&note.title) || pattern.is_match(&note.content),
            None => true,
        }
    }

    /// Returns matching notes, preserving input order.
    pub fn apply<'a>(&self, notes: &'a [Note]) -> Vec<&'a Note> {
        notes.iter().filter(|note| self.matches(note)).collect()
    }
}

/// Filters `notes` by `query`; see `NoteFilter`.
pub fn filter_notes<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    NoteFilter::new(query).apply(notes)
}
