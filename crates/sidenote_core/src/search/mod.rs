//! Search over the in-memory note collection.
//!
//! # Responsibility
//! - Provide the case-insensitive substring filter used by the sidebar.
//!
//! # Invariants
//! - Matching is plain substring matching, never tokenized or fuzzy.

pub mod filter;
