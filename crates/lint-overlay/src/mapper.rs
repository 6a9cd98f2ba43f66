//! Byte-span to character-range position mapping.
//!
//! Checkers address text as `(1-based line, 1-based UTF-8 byte span within
//! that line)` against the snapshot they analyzed. Markers live in absolute
//! character offsets in the live document. This module converts between the
//! two, byte-accurately: an alert that no longer fits the document fails to
//! map (`None`) and is skipped by the caller, never panicking the batch.

use crate::alert::{Alert, ByteSpan};
use crate::document::DocumentIndex;

/// An absolute character-offset range produced by mapping.
///
/// `from` is the character index at which the span's start boundary was
/// hit, `to` the index at which its end boundary was hit. Point queries
/// treat both endpoints as inclusive (a cursor on a boundary still
/// resolves), which also covers a trailing multibyte character whose last
/// byte the walk lands on. `from == to` is a valid, zero-length result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharRange {
    /// Absolute character offset of the range start.
    pub from: usize,
    /// Absolute character offset of the range end boundary.
    pub to: usize,
}

impl CharRange {
    /// Create a new character range.
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

/// Map an alert's line/span addressing onto the current document.
///
/// Returns `None` when the alert does not fit the document: its line does
/// not exist, its span exceeds the line's byte length, or the boundaries
/// come out reversed. Zero-length results are valid and returned as-is.
pub fn map_alert(doc: &DocumentIndex, alert: &Alert) -> Option<CharRange> {
    // Checker lines are 1-based.
    if alert.line == 0 {
        return None;
    }
    let line_idx = alert.line - 1;

    let line_text = doc.line_text(line_idx)?;
    let local = map_span_in_line(&line_text, alert.span)?;
    let line_start = doc.line_start_char(line_idx)?;

    Some(CharRange::new(
        line_start + local.from,
        line_start + local.to,
    ))
}

/// Map a byte span onto a single line's text, yielding line-local character
/// offsets.
///
/// Walks the line's characters left to right, accumulating each one's UTF-8
/// byte length; the character index at which the running total equals
/// `span.start` becomes `from`, and likewise `span.end` becomes `to`. A
/// start boundary that is never hit collapses to `0`; an end boundary that
/// is never hit (it can land inside a multibyte character) falls back to
/// the line's character length.
pub fn map_span_in_line(line_text: &str, span: ByteSpan) -> Option<CharRange> {
    let line_bytes = line_text.len();
    if span.start > line_bytes || span.end > line_bytes {
        return None;
    }

    let mut from = None;
    let mut to = None;
    let mut bytes_seen = 0usize;

    for (idx, ch) in line_text.chars().enumerate() {
        bytes_seen += ch.len_utf8();
        if bytes_seen == span.start {
            from = Some(idx);
        }
        if bytes_seen == span.end {
            to = Some(idx);
        }
        if from.is_some() && to.is_some() {
            break;
        }
    }

    let from = from.unwrap_or(0);
    let to = to.unwrap_or_else(|| line_text.chars().count());

    if from > to {
        return None;
    }

    Some(CharRange::new(from, to))
}
