//! Structured text edits.
//!
//! Hosts own the document; the overlay engine only needs to know *what
//! changed* so it can re-project marker offsets. This module defines the
//! edit format hosts hand to [`crate::effect::Transaction`], expressed in
//! **character offsets** (Unicode scalar values).

/// A single text edit expressed in character offsets.
///
/// Semantics:
/// - `start` is a character offset in the document **at the time this edit
///   is applied**.
/// - The deleted range is defined by the length (in `char`s) of
///   `deleted_text`; the replacement is `inserted_text` at the same offset.
/// - Edits inside a transaction must be applied **in order** to transform
///   the "before" document into the "after" document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    /// Start character offset of the edit.
    pub start: usize,
    /// Exact deleted text (may be empty).
    pub deleted_text: String,
    /// Exact inserted text (may be empty).
    pub inserted_text: String,
}

impl TextEdit {
    /// An insertion of `text` at `start`.
    pub fn insert(start: usize, text: &str) -> Self {
        Self {
            start,
            deleted_text: String::new(),
            inserted_text: text.to_string(),
        }
    }

    /// A deletion of `text` at `start`.
    pub fn delete(start: usize, text: &str) -> Self {
        Self {
            start,
            deleted_text: text.to_string(),
            inserted_text: String::new(),
        }
    }

    /// A replacement of `deleted` by `inserted` at `start`.
    pub fn replace(start: usize, deleted: &str, inserted: &str) -> Self {
        Self {
            start,
            deleted_text: deleted.to_string(),
            inserted_text: inserted.to_string(),
        }
    }

    /// Length of `deleted_text` in characters.
    pub fn deleted_len(&self) -> usize {
        self.deleted_text.chars().count()
    }

    /// Length of `inserted_text` in characters.
    pub fn inserted_len(&self) -> usize {
        self.inserted_text.chars().count()
    }

    /// Exclusive end character offset of the deleted range in the pre-edit
    /// document.
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.deleted_len())
    }

    /// Returns `true` if this edit neither deletes nor inserts anything.
    pub fn is_empty(&self) -> bool {
        self.deleted_text.is_empty() && self.inserted_text.is_empty()
    }
}

/// The host's primary selection after a transaction, as a character-offset
/// range. A caret is an empty range (`from == to`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    /// Range start offset (inclusive).
    pub from: usize,
    /// Range end offset.
    pub to: usize,
}

impl SelectionRange {
    /// Create a selection range.
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// A caret (empty selection) at `pos`.
    pub fn caret(pos: usize) -> Self {
        Self { from: pos, to: pos }
    }

    /// Returns `true` for a caret.
    pub fn is_caret(&self) -> bool {
        self.from == self.to
    }
}
