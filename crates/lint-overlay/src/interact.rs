//! Interaction adapters: click, hover debounce, tooltip content, and
//! scroll-to-alert.
//!
//! These translate host gestures into queries, events, and transactions.
//! They hold no document state of their own; everything flows through the
//! [`EditorSurface`].

use std::time::{Duration, Instant};

use unicode_segmentation::UnicodeSegmentation;

use crate::alert::{Alert, AlertId, Severity};
use crate::effect::{Effect, Transaction};
use crate::events::AlertEvent;
use crate::query::AlertHit;
use crate::surface::EditorSurface;

/// Maximum grapheme clusters of matched text shown in a tooltip.
const MATCH_SNIPPET_MAX_GRAPHEMES: usize = 40;

/// Handle a pointer press at a document position.
///
/// On a hit, emits [`AlertEvent::Click`] to the surface's subscribers and
/// returns the hit. Positions without a mark are silent: clicking plain
/// text is not an error.
pub fn click(surface: &mut EditorSurface, pos: usize) -> Option<AlertHit> {
    let hit = surface.hit_at(pos)?;
    surface.emit_alert_event(&AlertEvent::Click(hit.clone()));
    Some(hit)
}

/// Options controlling hover emission.
#[derive(Debug, Clone, Copy)]
pub struct HoverOptions {
    /// Quiet period between the pointer coming to rest and the hover event.
    pub delay: Duration,
}

impl Default for HoverOptions {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(300),
        }
    }
}

/// Debounced hover gesture tracker.
///
/// Pointer movement calls [`request`](Self::request) freely; only the last
/// requested position is looked up, and only after the configured delay
/// passes without further movement. Hosts drive it by calling
/// [`poll`](Self::poll) from their tick or idle loop.
#[derive(Debug)]
pub struct HoverDebouncer {
    options: HoverOptions,
    /// Position of the pending request, if one is armed.
    pending: Option<usize>,
    /// When the pending request fires.
    due: Option<Instant>,
}

impl HoverDebouncer {
    /// Create a debouncer with the given options.
    pub fn new(options: HoverOptions) -> Self {
        Self {
            options,
            pending: None,
            due: None,
        }
    }

    /// Record pointer rest at `pos` and re-arm the deadline. The last call
    /// before the quiet period elapses wins.
    pub fn request(&mut self, pos: usize, now: Instant) {
        self.pending = Some(pos);
        self.due = Some(now + self.options.delay);
    }

    /// Cancel any pending request (pointer left the text, surface reset).
    pub fn cancel(&mut self) {
        self.pending = None;
        self.due = None;
    }

    /// Whether a request is armed.
    pub fn is_armed(&self) -> bool {
        self.due.is_some()
    }

    /// Fire the pending request if its quiet period has elapsed.
    ///
    /// At most one hover fires per quiet period. On a hit, emits
    /// [`AlertEvent::Hover`] to the surface's subscribers and returns the
    /// hit; a miss simply disarms.
    pub fn poll(&mut self, now: Instant, surface: &mut EditorSurface) -> Option<AlertHit> {
        let due = self.due?;
        if now < due {
            return None;
        }
        self.due = None;
        let pos = self.pending.take()?;

        let hit = surface.hit_at(pos)?;
        surface.emit_alert_event(&AlertEvent::Hover(hit.clone()));
        Some(hit)
    }
}

impl Default for HoverDebouncer {
    fn default() -> Self {
        Self::new(HoverOptions::default())
    }
}

/// Plain-text tooltip content for one alert.
///
/// Every field is literal text taken from the alert. Hosts must insert
/// these as text nodes (or escape them for their markup language): nothing
/// here is pre-rendered markup, so checker-controlled strings can never
/// inject structure into a host widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipContent {
    /// Severity of the alert (hosts usually render it as a badge).
    pub severity: Severity,
    /// Rule identifier, e.g. `"Vale.Spelling"`.
    pub check: String,
    /// The finding message.
    pub message: String,
    /// Matched text, grapheme-safely truncated for display.
    pub matched_snippet: Option<String>,
    /// Documentation link for the rule, if any.
    pub link: Option<String>,
}

impl TooltipContent {
    /// Build tooltip content from an alert.
    pub fn from_alert(alert: &Alert) -> Self {
        Self {
            severity: alert.severity,
            check: alert.check.clone(),
            message: alert.message.clone(),
            matched_snippet: alert.matched_text.as_deref().map(truncate_graphemes),
            link: alert.link.clone(),
        }
    }
}

/// Truncate to at most [`MATCH_SNIPPET_MAX_GRAPHEMES`] grapheme clusters,
/// appending an ellipsis when anything was cut. Grapheme-aware so combined
/// characters and emoji never split mid-cluster.
fn truncate_graphemes(text: &str) -> String {
    match text.grapheme_indices(true).nth(MATCH_SNIPPET_MAX_GRAPHEMES) {
        Some((byte_idx, _)) => {
            let mut out = text[..byte_idx].to_string();
            out.push('…');
            out
        }
        None => text.to_string(),
    }
}

/// Where the viewport should place a scrolled-to range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollAlignment {
    /// Center the range start vertically.
    #[default]
    Center,
    /// Put the range start at the top of the viewport.
    Top,
    /// Scroll just far enough to bring the range into view.
    Nearest,
}

/// A viewport request produced by [`scroll_to_alert`].
///
/// The surface has no viewport of its own; the host executes this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    /// Range start to bring into view (character offset).
    pub from: usize,
    /// Range end boundary.
    pub to: usize,
    /// Requested placement.
    pub alignment: ScrollAlignment,
}

/// Select an alert and ask the host to scroll its range into view.
///
/// Applies a [`Effect::Select`] transaction so the selection emphasis
/// moves, then describes the viewport change from the freshly mapped
/// range. An unknown id changes nothing and returns `None`; an id that no
/// longer maps still clears the previous selection but requests no scroll.
pub fn scroll_to_alert(
    surface: &mut EditorSurface,
    id: &AlertId,
    alignment: ScrollAlignment,
) -> Option<ScrollRequest> {
    if !surface.registry().contains(id) {
        return None;
    }

    surface.apply(Transaction::effects(vec![Effect::Select(id.clone())]));

    // The engine remapped the alert against the current document; read the
    // result back off the selection marker it placed.
    let selection = surface.overlay().selection()?;
    Some(ScrollRequest {
        from: selection.from,
        to: selection.to,
        alignment,
    })
}
