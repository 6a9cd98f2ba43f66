//! Rope-backed document index.
//!
//! The overlay engine needs a small set of document queries: line text by
//! index, line start offsets, and character counts, plus incremental edits
//! that keep those queries cheap on large documents. A [`ropey::Rope`]
//! provides all of it in O(log N).
//!
//! All offsets at this layer are **character offsets** (Unicode scalar
//! values) and lines are 0-based; the 1-based checker addressing is
//! converted by [`crate::mapper`].

use crate::delta::TextEdit;
use ropey::Rope;

/// Index over one document's text.
#[derive(Debug, Clone)]
pub struct DocumentIndex {
    /// Rope that maintains line boundaries across edits.
    rope: Rope,
}

impl DocumentIndex {
    /// Create an index over an empty document.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build an index from text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Total character count.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Total line count.
    ///
    /// An empty document still counts one (empty) line, matching the rope's
    /// line model.
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    /// Whether the document contains no text.
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Text of the specified 0-based line, without its trailing newline.
    pub fn line_text(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }

        let mut text = self.rope.line(line_idx).to_string();

        // Rope lines keep their terminator.
        if text.ends_with('\n') {
            text.pop();
        }
        if text.ends_with('\r') {
            text.pop();
        }

        Some(text)
    }

    /// Absolute character offset of the first character of the specified line.
    pub fn line_start_char(&self, line_idx: usize) -> Option<usize> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        Some(self.rope.line_to_char(line_idx))
    }

    /// Insert text at a character offset (clamped to the document length).
    pub fn insert(&mut self, char_offset: usize, text: &str) {
        let char_offset = char_offset.min(self.rope.len_chars());
        self.rope.insert(char_offset, text);
    }

    /// Remove the character range `[from, to)` (clamped to the document length).
    pub fn remove(&mut self, from_char: usize, to_char: usize) {
        let from_char = from_char.min(self.rope.len_chars());
        let to_char = to_char.clamp(from_char, self.rope.len_chars());

        if from_char < to_char {
            self.rope.remove(from_char..to_char);
        }
    }

    /// Apply one structured edit: remove its deleted range, then insert its
    /// replacement text at the same offset.
    pub fn apply_edit(&mut self, edit: &TextEdit) {
        let deleted = edit.deleted_len();
        if deleted > 0 {
            self.remove(edit.start, edit.start + deleted);
        }
        if !edit.inserted_text.is_empty() {
            self.insert(edit.start, &edit.inserted_text);
        }
    }

    /// Complete document text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }
}

impl Default for DocumentIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let doc = DocumentIndex::new();
        assert_eq!(doc.len_chars(), 0);
        assert_eq!(doc.len_lines(), 1); // rope model: one empty line
        assert!(doc.is_empty());
        assert_eq!(doc.line_text(0), Some(String::new()));
    }

    #[test]
    fn test_line_text_strips_terminators() {
        let doc = DocumentIndex::from_text("first\nsecond\r\nthird");
        assert_eq!(doc.line_text(0), Some("first".to_string()));
        assert_eq!(doc.line_text(1), Some("second".to_string()));
        assert_eq!(doc.line_text(2), Some("third".to_string()));
        assert_eq!(doc.line_text(3), None);
    }

    #[test]
    fn test_line_start_char() {
        let doc = DocumentIndex::from_text("ab\ncd\nef");
        assert_eq!(doc.line_start_char(0), Some(0));
        assert_eq!(doc.line_start_char(1), Some(3));
        assert_eq!(doc.line_start_char(2), Some(6));
        assert_eq!(doc.line_start_char(3), None);
    }

    #[test]
    fn test_line_start_char_cjk() {
        let doc = DocumentIndex::from_text("你好\n世界");
        assert_eq!(doc.len_chars(), 5);
        assert_eq!(doc.line_start_char(1), Some(3));
        assert_eq!(doc.line_text(1), Some("世界".to_string()));
    }

    #[test]
    fn test_insert_remove() {
        let mut doc = DocumentIndex::from_text("Hello World");

        doc.insert(6, "Beautiful ");
        assert_eq!(doc.text(), "Hello Beautiful World");

        doc.remove(6, 16);
        assert_eq!(doc.text(), "Hello World");
    }

    #[test]
    fn test_remove_clamps_to_bounds() {
        let mut doc = DocumentIndex::from_text("abc");
        doc.remove(2, 100);
        assert_eq!(doc.text(), "ab");
        doc.remove(5, 9);
        assert_eq!(doc.text(), "ab");
    }

    #[test]
    fn test_apply_edit_replaces() {
        let mut doc = DocumentIndex::from_text("teh word");
        let edit = TextEdit {
            start: 0,
            deleted_text: "teh".to_string(),
            inserted_text: "the".to_string(),
        };
        doc.apply_edit(&edit);
        assert_eq!(doc.text(), "the word");
    }

    #[test]
    fn test_apply_edit_char_based() {
        // Offsets are characters, so multibyte text before the edit point
        // must not skew the position.
        let mut doc = DocumentIndex::from_text("café test");
        let edit = TextEdit {
            start: 5,
            deleted_text: "test".to_string(),
            inserted_text: "text".to_string(),
        };
        doc.apply_edit(&edit);
        assert_eq!(doc.text(), "café text");
    }
}
