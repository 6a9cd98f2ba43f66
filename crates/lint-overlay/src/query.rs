//! Point queries over an overlay.
//!
//! Marks record only their alert id; these helpers resolve hits against
//! the registry. Endpoints are inclusive — a cursor sitting on a marker
//! boundary still resolves — and when marks overlap, the first in `from`
//! order wins (no aggregation).

use crate::alert::{Alert, AlertId};
use crate::overlay::Overlay;
use crate::registry::AlertRegistry;

/// A resolved query hit; also the payload of outbound interaction events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertHit {
    /// Id of the hit alert.
    pub alert_id: AlertId,
    /// The queried position.
    pub position: usize,
    /// Marker range start.
    pub from: usize,
    /// Marker range end boundary.
    pub to: usize,
}

/// The first mark in `from` order containing `pos`, resolved to its alert.
///
/// `None` on an empty overlay, a position no mark covers, or a dangling id
/// (overlay/registry drift) — the last with a debug log, since it signals
/// a lifecycle bug rather than a user action.
pub fn find_alert_at<'a>(
    overlay: &Overlay,
    registry: &'a AlertRegistry,
    pos: usize,
) -> Option<&'a Alert> {
    let marker = overlay.mark_at(pos)?;
    let alert = registry.get(&marker.alert_id);
    if alert.is_none() {
        tracing::debug!(id = %marker.alert_id, "mark refers to an unregistered alert");
    }
    alert
}

/// Like [`find_alert_at`], but packaged as an [`AlertHit`].
pub fn hit_at(overlay: &Overlay, registry: &AlertRegistry, pos: usize) -> Option<AlertHit> {
    let marker = overlay.mark_at(pos)?;
    if !registry.contains(&marker.alert_id) {
        tracing::debug!(id = %marker.alert_id, "mark refers to an unregistered alert");
        return None;
    }

    Some(AlertHit {
        alert_id: marker.alert_id.clone(),
        position: pos,
        from: marker.from,
        to: marker.to,
    })
}

/// All alerts whose marks intersect the half-open range `[from, to)`, in
/// marker order.
pub fn alerts_in_range<'a>(
    overlay: &Overlay,
    registry: &'a AlertRegistry,
    from: usize,
    to: usize,
) -> Vec<&'a Alert> {
    overlay
        .markers_intersecting(from, to)
        .into_iter()
        .filter(|m| m.kind.is_mark())
        .filter_map(|m| registry.get(&m.alert_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::{Alert, ByteSpan, Severity};
    use crate::overlay::Marker;

    fn setup() -> (Overlay, AlertRegistry) {
        let alert = Alert::new("Vale.Spelling", Severity::Error, 1, ByteSpan::new(1, 4));
        let id = alert.id();

        let mut registry = AlertRegistry::new();
        registry.put(alert);

        let overlay = Overlay::from_markers(vec![Marker::mark(0, 3, id, Severity::Error)], 1);
        (overlay, registry)
    }

    #[test]
    fn test_find_alert_at_inclusive_endpoints() {
        let (overlay, registry) = setup();

        for pos in 0..=3 {
            let alert = find_alert_at(&overlay, &registry, pos);
            assert_eq!(alert.map(|a| a.check.as_str()), Some("Vale.Spelling"));
        }
        assert!(find_alert_at(&overlay, &registry, 4).is_none());
    }

    #[test]
    fn test_hit_carries_marker_range() {
        let (overlay, registry) = setup();

        let hit = hit_at(&overlay, &registry, 2).unwrap();
        assert_eq!(hit.position, 2);
        assert_eq!(hit.from, 0);
        assert_eq!(hit.to, 3);
        assert_eq!(hit.alert_id.as_str(), "1:1:4:Vale.Spelling");
    }

    #[test]
    fn test_dangling_id_degrades_to_none() {
        let (overlay, mut registry) = setup();
        registry.clear();

        assert!(find_alert_at(&overlay, &registry, 1).is_none());
        assert!(hit_at(&overlay, &registry, 1).is_none());
    }

    #[test]
    fn test_empty_overlay_returns_none() {
        let registry = AlertRegistry::new();
        let overlay = Overlay::new();
        assert!(find_alert_at(&overlay, &registry, 0).is_none());
    }

    #[test]
    fn test_alerts_in_range_zero_length_mark_at_range_start() {
        let point = Alert::new("Vale.Annotations", Severity::Warning, 1, ByteSpan::new(5, 5));
        let word = Alert::new("Vale.Spelling", Severity::Error, 1, ByteSpan::new(5, 8));
        let point_id = point.id();
        let word_id = word.id();

        let mut registry = AlertRegistry::new();
        registry.put(point);
        registry.put(word);

        let overlay = Overlay::from_markers(
            vec![
                Marker::mark(4, 4, point_id, Severity::Warning),
                Marker::mark(4, 7, word_id, Severity::Error),
            ],
            1,
        );

        let alerts = alerts_in_range(&overlay, &registry, 4, 7);
        assert_eq!(alerts.len(), 2);
        assert!(alerts.iter().any(|a| a.check == "Vale.Annotations"));
    }

    #[test]
    fn test_alerts_in_range_skips_singletons() {
        let (_, registry) = setup();
        let alert = registry.ids().next().unwrap().clone();

        let overlay = Overlay::from_markers(
            vec![
                Marker::mark(0, 3, alert.clone(), Severity::Error),
                Marker::selection(0, 3, alert),
            ],
            1,
        );

        assert_eq!(alerts_in_range(&overlay, &registry, 0, 10).len(), 1);
    }
}
