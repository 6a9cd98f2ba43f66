//! Editing surface: the per-document state owner.
//!
//! [`EditorSurface`] ties one document's index, alert registry, and current
//! overlay together and funnels every mutation through
//! [`crate::engine::apply`]. It also owns the check-liveness generation:
//! checks run against snapshots, so results arriving after the surface was
//! reset must be dropped, not applied to text they no longer describe.
//!
//! # Example
//!
//! ```rust
//! use lint_overlay::{Alert, ByteSpan, EditorSurface, Severity};
//!
//! let mut surface = EditorSurface::new("teh word");
//!
//! let ticket = surface.begin_check();
//! let alert = Alert::with_message(
//!     "Vale.Spelling",
//!     Severity::Error,
//!     1,
//!     ByteSpan::new(1, 4),
//!     "Did you really mean 'teh'?",
//! );
//! assert!(surface.deliver_alerts(ticket, vec![alert]));
//!
//! let hit = surface.find_alert_at(1).unwrap();
//! assert_eq!(hit.check, "Vale.Spelling");
//! assert!(surface.find_alert_at(4).is_none());
//! ```

use std::sync::Arc;

use crate::alert::Alert;
use crate::document::DocumentIndex;
use crate::effect::{Effect, Transaction};
use crate::engine;
use crate::events::{AlertEvent, AlertEventCallback, OverlayChange, OverlayChangeCallback};
use crate::overlay::{Overlay, OverlayStats};
use crate::query::{self, AlertHit};
use crate::registry::AlertRegistry;

/// Capability to deliver one check's results.
///
/// Issued by [`EditorSurface::begin_check`]; becomes stale when the surface
/// is [`reset`](EditorSurface::reset), after which deliveries with it are
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckTicket {
    generation: u64,
}

/// Per-document owner of the overlay lifecycle.
pub struct EditorSurface {
    /// Document index the engine maps against.
    doc: DocumentIndex,
    /// Id-to-alert resolution, scoped to this surface.
    registry: AlertRegistry,
    /// Current overlay value; replaced wholesale on every transition.
    overlay: Arc<Overlay>,
    /// Check liveness generation; bumped by [`reset`](Self::reset).
    generation: u64,
    /// Overlay change subscribers.
    change_callbacks: Vec<OverlayChangeCallback>,
    /// Alert interaction subscribers.
    alert_callbacks: Vec<AlertEventCallback>,
}

impl EditorSurface {
    /// Create a surface over the given text with an empty overlay.
    pub fn new(text: &str) -> Self {
        Self {
            doc: DocumentIndex::from_text(text),
            registry: AlertRegistry::new(),
            overlay: Arc::new(Overlay::new()),
            generation: 0,
            change_callbacks: Vec::new(),
            alert_callbacks: Vec::new(),
        }
    }

    /// Create a surface over an empty document.
    pub fn empty() -> Self {
        Self::new("")
    }

    /// The document index.
    pub fn document(&self) -> &DocumentIndex {
        &self.doc
    }

    /// The alert registry.
    pub fn registry(&self) -> &AlertRegistry {
        &self.registry
    }

    /// The current overlay.
    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// A shared handle to the current overlay value.
    ///
    /// The value is immutable; a renderer holding this snapshot keeps
    /// reading consistent state while the surface moves on.
    pub fn overlay_snapshot(&self) -> Arc<Overlay> {
        Arc::clone(&self.overlay)
    }

    /// Current overlay version.
    pub fn version(&self) -> u64 {
        self.overlay.version()
    }

    /// Aggregate marker counts of the current overlay.
    pub fn stats(&self) -> OverlayStats {
        self.overlay.stats()
    }

    /// Complete document text.
    pub fn text(&self) -> String {
        self.doc.text()
    }

    /// Apply one transaction: document edits first, then the overlay
    /// transition. Subscribers are notified once, after the swap.
    ///
    /// An empty transaction is a no-op: no version bump, no notification.
    /// Returns the overlay version after the call.
    pub fn apply(&mut self, tx: Transaction) -> u64 {
        if tx.is_empty() {
            return self.overlay.version();
        }

        for edit in &tx.edits {
            self.doc.apply_edit(edit);
        }

        let next = engine::apply(&self.overlay, &self.doc, &mut self.registry, &tx);
        let change = OverlayChange {
            old_version: self.overlay.version(),
            new_version: next.version(),
        };
        self.overlay = Arc::new(next);

        self.notify_change(&change);
        change.new_version
    }

    /// The first alert whose mark contains `pos` (endpoints inclusive).
    ///
    /// `None` when no mark covers the position or `pos` lies outside the
    /// document.
    pub fn find_alert_at(&self, pos: usize) -> Option<&Alert> {
        if pos > self.doc.len_chars() {
            return None;
        }
        query::find_alert_at(&self.overlay, &self.registry, pos)
    }

    /// Like [`find_alert_at`](Self::find_alert_at), as an [`AlertHit`].
    pub fn hit_at(&self, pos: usize) -> Option<AlertHit> {
        if pos > self.doc.len_chars() {
            return None;
        }
        query::hit_at(&self.overlay, &self.registry, pos)
    }

    /// Start a check against the current document state.
    ///
    /// The returned ticket must accompany the eventual
    /// [`deliver_alerts`](Self::deliver_alerts) call.
    pub fn begin_check(&self) -> CheckTicket {
        CheckTicket {
            generation: self.generation,
        }
    }

    /// Deliver one completed check's alerts as a single atomic batch.
    ///
    /// If the ticket predates the last [`reset`](Self::reset), the batch is
    /// dropped and `false` is returned: the results describe text this
    /// surface no longer holds.
    pub fn deliver_alerts(&mut self, ticket: CheckTicket, alerts: Vec<Alert>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                ticket_generation = ticket.generation,
                current_generation = self.generation,
                count = alerts.len(),
                "dropping stale check delivery"
            );
            return false;
        }

        self.apply(Transaction::effects(vec![Effect::AddMarks(alerts)]));
        true
    }

    /// Tear the overlay down for reuse: clears all markers and the
    /// registry, and invalidates every outstanding [`CheckTicket`].
    pub fn reset(&mut self) {
        self.generation += 1;
        self.apply(Transaction::effects(vec![Effect::ClearAll]));
    }

    /// Subscribe to overlay replacements.
    pub fn subscribe_changes<F>(&mut self, callback: F)
    where
        F: FnMut(&OverlayChange) + Send + 'static,
    {
        self.change_callbacks.push(Box::new(callback));
    }

    /// Subscribe to alert interaction events.
    pub fn subscribe_alerts<F>(&mut self, callback: F)
    where
        F: FnMut(&AlertEvent) + Send + 'static,
    {
        self.alert_callbacks.push(Box::new(callback));
    }

    pub(crate) fn emit_alert_event(&mut self, event: &AlertEvent) {
        for callback in &mut self.alert_callbacks {
            callback(event);
        }
    }

    fn notify_change(&mut self, change: &OverlayChange) {
        for callback in &mut self.change_callbacks {
            callback(change);
        }
    }
}
