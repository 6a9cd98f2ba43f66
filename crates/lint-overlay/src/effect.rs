//! Overlay effects and transactions.
//!
//! All overlay mutation is expressed as data: a [`Transaction`] bundles the
//! document edits a host applied, the ordered [`Effect`]s to run, and the
//! resulting primary selection. [`crate::engine::apply`] consumes one
//! transaction per state transition, atomically.

use crate::alert::{Alert, AlertId};
use crate::delta::{SelectionRange, TextEdit};

/// One discrete overlay mutation.
///
/// The set is closed and the engine matches it exhaustively, so adding a
/// variant is a compile-time event for every consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Map and insert marks for a batch of alerts (one completed check).
    AddMarks(Vec<Alert>),
    /// Remove every marker and clear the registry.
    ClearAll,
    /// Remove every marker intersecting the half-open range `[from, to)`.
    ClearRange {
        /// Range start (absolute character offset).
        from: usize,
        /// Range end (exclusive).
        to: usize,
    },
    /// Move the selection emphasis to the alert with this id.
    Select(AlertId),
    /// Move the highlight emphasis to the alert with this id, or clear it
    /// with `None`.
    Highlight(Option<AlertId>),
}

/// One atomic unit of overlay work: zero or more document edits plus zero
/// or more effects, consumed in a single state transition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transaction {
    /// Ordered document edits the host applied (pre-edit coordinates).
    pub edits: Vec<TextEdit>,
    /// Ordered effects to process after markers are re-projected.
    pub effects: Vec<Effect>,
    /// The host's primary selection after the edits, if known.
    pub selection: Option<SelectionRange>,
}

impl Transaction {
    /// Create a transaction from all three parts.
    pub fn new(
        edits: Vec<TextEdit>,
        effects: Vec<Effect>,
        selection: Option<SelectionRange>,
    ) -> Self {
        Self {
            edits,
            effects,
            selection,
        }
    }

    /// An effects-only transaction (no document changes).
    pub fn effects(effects: Vec<Effect>) -> Self {
        Self {
            edits: Vec::new(),
            effects,
            selection: None,
        }
    }

    /// An edits-only transaction.
    pub fn edits(edits: Vec<TextEdit>) -> Self {
        Self {
            edits,
            effects: Vec::new(),
            selection: None,
        }
    }

    /// An edits transaction carrying the host's resulting selection.
    pub fn edits_with_selection(edits: Vec<TextEdit>, selection: SelectionRange) -> Self {
        Self {
            edits,
            effects: Vec::new(),
            selection: Some(selection),
        }
    }

    /// Returns `true` if the transaction can change nothing.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty() && self.edits.iter().all(TextEdit::is_empty)
    }
}
