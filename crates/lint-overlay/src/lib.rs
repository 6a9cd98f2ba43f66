#![warn(missing_docs)]
//! `lint-overlay` - Headless lint-alert overlay engine
//!
//! # Overview
//!
//! `lint-overlay` keeps the findings of an external text checker (Vale and
//! friends) spatially correct over a live, editable document. It owns the
//! decoration lifecycle: converting each alert's `(line, byte span)`
//! addressing into character offsets, maintaining an ordered overlay of
//! markers across arbitrary edit sequences, and answering "which alert is
//! under this position" for click and hover. It does not render anything
//! and it does not lint anything; hosts paint markers from classification
//! data and run checkers out of process (see `lint-overlay-vale`).
//!
//! # Core Features
//!
//! - **Byte-accurate mapping**: checker byte spans to character offsets,
//!   tolerant of multibyte boundaries, `None` for alerts that no longer fit
//! - **Pure overlay transitions**: one reducer consumes a transaction
//!   (edits + effects + resulting selection) and produces a new overlay value
//! - **Fast point queries**: sorted markers with prefix maxima,
//!   O(log n + k) lookup
//! - **Per-surface state**: document index, registry, and overlay scoped to
//!   one [`EditorSurface`]; stale check results are dropped by ticket
//! - **Typed interaction**: click/hover/tooltip/scroll adapters emitting
//!   plain-data events, no ambient globals
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  EditorSurface (state owner, check tickets) │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Interaction (click/hover/tooltip/scroll)   │  ← Gestures
//! ├─────────────────────────────────────────────┤
//! │  Engine (transaction reducer) + Query       │  ← Transitions
//! ├─────────────────────────────────────────────┤
//! │  Overlay (sorted markers) + Registry        │  ← State
//! ├─────────────────────────────────────────────┤
//! │  Mapper (byte span → char range)            │  ← Coordinates
//! ├─────────────────────────────────────────────┤
//! │  DocumentIndex (Rope-based)                 │  ← Text Access
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use lint_overlay::{Alert, ByteSpan, EditorSurface, Severity, TextEdit, Transaction};
//!
//! let mut surface = EditorSurface::new("teh word");
//!
//! // One completed check delivers its alerts as an atomic batch.
//! let ticket = surface.begin_check();
//! let alert = Alert::with_message(
//!     "Vale.Spelling",
//!     Severity::Error,
//!     1,
//!     ByteSpan::new(1, 4),
//!     "Did you really mean 'teh'?",
//! );
//! surface.deliver_alerts(ticket, vec![alert]);
//!
//! // The mark answers point queries anywhere inside its range.
//! assert!(surface.find_alert_at(2).is_some());
//!
//! // Edits strictly after the mark leave its queryable range unchanged.
//! surface.apply(Transaction::edits(vec![TextEdit::insert(8, "s")]));
//! assert!(surface.find_alert_at(2).is_some());
//! ```
//!
//! # Module Description
//!
//! - [`alert`] - alert model, severities, deterministic ids
//! - [`document`] - Rope based document index
//! - [`delta`] - structured text edits and selection ranges
//! - [`mapper`] - byte-span to character-range conversion
//! - [`registry`] - per-surface id→alert resolution
//! - [`overlay`] - ordered marker collection, immutable per version
//! - [`effect`] - the closed effect set and transactions
//! - [`engine`] - the overlay state transition
//! - [`query`] - point and range queries
//! - [`events`] - typed overlay-change and interaction events
//! - [`surface`] - the per-document state owner
//! - [`interact`] - click, hover debounce, tooltip content, scroll-to-alert

pub mod alert;
pub mod delta;
pub mod document;
pub mod effect;
pub mod engine;
pub mod events;
pub mod interact;
pub mod mapper;
pub mod overlay;
pub mod query;
pub mod registry;
pub mod surface;

pub use alert::{Alert, AlertId, ByteSpan, Severity, SuggestedAction};
pub use delta::{SelectionRange, TextEdit};
pub use document::DocumentIndex;
pub use effect::{Effect, Transaction};
pub use events::{AlertEvent, AlertEventCallback, OverlayChange, OverlayChangeCallback};
pub use interact::{
    HoverDebouncer, HoverOptions, ScrollAlignment, ScrollRequest, TooltipContent, click,
    scroll_to_alert,
};
pub use mapper::{CharRange, map_alert, map_span_in_line};
pub use overlay::{Marker, MarkerKind, Overlay, OverlayStats};
pub use query::{AlertHit, alerts_in_range, find_alert_at, hit_at};
pub use registry::AlertRegistry;
pub use surface::{CheckTicket, EditorSurface};
