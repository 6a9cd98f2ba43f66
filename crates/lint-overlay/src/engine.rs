//! Overlay engine: the single state transition.
//!
//! [`apply`] is a pure reducer over one [`Transaction`]: it re-projects the
//! previous overlay's markers through the document edits, processes the
//! effects in order, runs the conservative edit-driven invalidation, and
//! returns a new overlay value with a bumped version. The registry is kept
//! synchronized with the surviving marks throughout.
//!
//! Failure philosophy: per-item failures (an alert that no longer maps, an
//! unknown id) are logged and skipped; the transition itself never fails.

use crate::alert::Alert;
use crate::delta::{SelectionRange, TextEdit};
use crate::document::DocumentIndex;
use crate::effect::{Effect, Transaction};
use crate::mapper;
use crate::overlay::{Marker, MarkerKind, Overlay};
use crate::registry::AlertRegistry;

/// Apply one transaction to an overlay, producing its successor.
///
/// `doc` must already reflect `tx.edits` (the surface applies them before
/// calling in); marker re-projection works from the edit list itself, in
/// pre-edit coordinates.
pub fn apply(
    prev: &Overlay,
    doc: &DocumentIndex,
    registry: &mut AlertRegistry,
    tx: &Transaction,
) -> Overlay {
    let mut markers: Vec<Marker> = prev.markers().to_vec();

    // 1. Re-project surviving markers through the document edits; fully
    //    deleted ranges vanish and take their registry entries with them.
    if !tx.edits.is_empty() {
        markers = map_markers_through_edits(markers, &tx.edits, registry);
    }

    // 2. Effects, in order.
    for effect in &tx.effects {
        match effect {
            Effect::AddMarks(alerts) => add_marks(&mut markers, doc, registry, alerts),
            Effect::ClearAll => {
                markers.clear();
                registry.clear();
            }
            Effect::ClearRange { from, to } => clear_range(&mut markers, registry, *from, *to),
            Effect::Select(id) => {
                // The previous selection goes away no matter what happens next.
                markers.retain(|m| m.kind != MarkerKind::Selection);

                match registry.get(id) {
                    Some(alert) => match mapper::map_alert(doc, alert) {
                        Some(range) => {
                            markers.push(Marker::selection(range.from, range.to, id.clone()));
                        }
                        None => tracing::debug!(
                            id = %id,
                            "selected alert no longer maps, leaving selection empty"
                        ),
                    },
                    None => tracing::debug!(id = %id, "select requested for unknown alert id"),
                }
            }
            Effect::Highlight(target) => {
                markers.retain(|m| m.kind != MarkerKind::Highlight);

                if let Some(id) = target {
                    match registry.get(id) {
                        Some(alert) => match mapper::map_alert(doc, alert) {
                            Some(range) => {
                                markers.push(Marker::highlight(range.from, range.to, id.clone()));
                            }
                            None => tracing::debug!(
                                id = %id,
                                "highlighted alert no longer maps, leaving highlight empty"
                            ),
                        },
                        None => {
                            tracing::debug!(id = %id, "highlight requested for unknown alert id")
                        }
                    }
                }
            }
        }
    }

    // 3. Edit-driven invalidation: editing near or inside a flagged region
    //    drops its mark immediately rather than showing a stale flag.
    if !tx.edits.is_empty()
        && let Some(selection) = tx.selection
    {
        invalidate_marks_touching(&mut markers, registry, selection);
    }

    let next = Overlay::from_markers(markers, prev.version() + 1);
    debug_assert!(
        next.markers()
            .iter()
            .all(|m| m.from <= m.to && m.to <= doc.len_chars()),
        "markers stay ordered and within the document"
    );
    next
}

fn map_markers_through_edits(
    markers: Vec<Marker>,
    edits: &[TextEdit],
    registry: &mut AlertRegistry,
) -> Vec<Marker> {
    let mut surviving = Vec::with_capacity(markers.len());

    'markers: for mut marker in markers {
        for edit in edits {
            match map_range_through_edit(marker.from, marker.to, edit) {
                Some((from, to)) => {
                    marker.from = from;
                    marker.to = to;
                }
                None => {
                    if marker.kind.is_mark() {
                        registry.remove(&marker.alert_id);
                    }
                    continue 'markers;
                }
            }
        }
        surviving.push(marker);
    }

    surviving
}

/// Transform one marker range through one edit (deletion of the replaced
/// range, then insertion of the replacement at the same offset). `None`
/// means the entire range was deleted.
fn map_range_through_edit(from: usize, to: usize, edit: &TextEdit) -> Option<(usize, usize)> {
    let (mut from, mut to) = (from, to);

    let deleted = edit.deleted_len();
    if deleted > 0 {
        let del_start = edit.start;
        let del_end = edit.start + deleted;

        if to <= del_start {
            // Entirely before the deletion, unaffected.
        } else if from >= del_end {
            // Entirely after the deletion, move back.
            from -= deleted;
            to -= deleted;
        } else if from >= del_start && to <= del_end {
            // Swallowed by the deletion.
            return None;
        } else if from < del_start && to > del_end {
            // Spans the deletion, shrink.
            to -= deleted;
        } else if from < del_start {
            // Tail clipped off.
            to = del_start;
        } else {
            // Head clipped off.
            from = del_start;
            to -= deleted;
        }
    }

    let inserted = edit.inserted_len();
    if inserted > 0 {
        if from >= edit.start {
            from += inserted;
            to += inserted;
        } else if to > edit.start {
            // Spans the insertion point, extend.
            to += inserted;
        }
    }

    Some((from, to))
}

fn add_marks(
    markers: &mut Vec<Marker>,
    doc: &DocumentIndex,
    registry: &mut AlertRegistry,
    alerts: &[Alert],
) {
    for alert in alerts {
        let Some(range) = mapper::map_alert(doc, alert) else {
            tracing::warn!(
                check = %alert.check,
                line = alert.line,
                span_start = alert.span.start,
                span_end = alert.span.end,
                "alert does not map onto the document, skipping"
            );
            continue;
        };

        let id = alert.id();
        if registry.put(alert.clone()).is_some() {
            // Last write wins: the displaced alert's mark goes with it.
            markers.retain(|m| !(m.kind.is_mark() && m.alert_id == id));
        }
        markers.push(Marker::mark(range.from, range.to, id, alert.severity));
    }
}

fn clear_range(markers: &mut Vec<Marker>, registry: &mut AlertRegistry, from: usize, to: usize) {
    markers.retain(|marker| {
        if marker.intersects(from, to) {
            if marker.kind.is_mark() {
                registry.remove(&marker.alert_id);
            }
            false
        } else {
            true
        }
    });
}

fn invalidate_marks_touching(
    markers: &mut Vec<Marker>,
    registry: &mut AlertRegistry,
    selection: SelectionRange,
) {
    // Closed-interval touch test: a caret exactly on a mark boundary counts
    // as editing that mark.
    markers.retain(|marker| {
        let touches = marker.kind.is_mark()
            && selection.from <= marker.to
            && marker.from <= selection.to;
        if touches {
            registry.remove(&marker.alert_id);
        }
        !touches
    });
}
