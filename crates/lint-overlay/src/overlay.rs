//! Alert overlay: the ordered marker collection for one document.
//!
//! Markers are kept in a vector sorted ascending by `from` with a prefix
//! maximum of `to`, so point and range lookups prune with binary search
//! instead of degrading to a full scan when a document carries many alerts.
//! Query complexity: O(log n + k).
//!
//! Overlay values are immutable per version: every state transition (see
//! [`crate::engine::apply`]) builds a new `Overlay` with a bumped version,
//! so a renderer can keep reading the snapshot it started painting from.

use crate::alert::{AlertId, Severity};

/// What a marker means to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// The standing decoration for one alert, classified by severity.
    Mark {
        /// Severity class of the underlying alert.
        severity: Severity,
    },
    /// The single "currently selected alert" emphasis.
    Selection,
    /// The single "currently highlighted alert" emphasis.
    Highlight,
}

impl MarkerKind {
    /// Stable class name renderers attach to markers of this kind.
    pub fn css_class(&self) -> &'static str {
        match self {
            MarkerKind::Mark { severity } => severity.css_class(),
            MarkerKind::Selection => "lint-selected",
            MarkerKind::Highlight => "lint-highlighted",
        }
    }

    /// Returns `true` for the per-alert standing decoration.
    pub fn is_mark(&self) -> bool {
        matches!(self, MarkerKind::Mark { .. })
    }
}

/// One decorated character range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    /// Absolute character offset of the range start.
    pub from: usize,
    /// Absolute character offset of the range end boundary.
    ///
    /// Range transforms treat `[from, to)` as half-open; point queries
    /// treat both endpoints as inclusive so a cursor sitting on a boundary
    /// still resolves to the marker.
    pub to: usize,
    /// Id of the alert this marker belongs to.
    pub alert_id: AlertId,
    /// Marker kind (per-alert mark, or one of the two singletons).
    pub kind: MarkerKind,
}

impl Marker {
    /// Create the standing mark for an alert.
    pub fn mark(from: usize, to: usize, alert_id: AlertId, severity: Severity) -> Self {
        Self {
            from,
            to,
            alert_id,
            kind: MarkerKind::Mark { severity },
        }
    }

    /// Create the selection emphasis for an alert.
    pub fn selection(from: usize, to: usize, alert_id: AlertId) -> Self {
        Self {
            from,
            to,
            alert_id,
            kind: MarkerKind::Selection,
        }
    }

    /// Create the highlight emphasis for an alert.
    pub fn highlight(from: usize, to: usize, alert_id: AlertId) -> Self {
        Self {
            from,
            to,
            alert_id,
            kind: MarkerKind::Highlight,
        }
    }

    /// Whether `pos` lies within this marker, endpoints inclusive.
    pub fn contains(&self, pos: usize) -> bool {
        self.from <= pos && pos <= self.to
    }

    /// Whether this marker intersects the half-open range `[from, to)`.
    ///
    /// Partial overlap counts. A zero-length marker intersects when its
    /// point lies inside the range; an empty range intersects nothing.
    pub fn intersects(&self, from: usize, to: usize) -> bool {
        if from >= to {
            return false;
        }
        if self.from == self.to {
            from <= self.from && self.from < to
        } else {
            self.from < to && from < self.to
        }
    }
}

/// Aggregate marker counts, for gutters and status lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayStats {
    /// Number of error marks.
    pub errors: usize,
    /// Number of warning marks.
    pub warnings: usize,
    /// Number of suggestion marks.
    pub suggestions: usize,
    /// Whether the selection emphasis is present.
    pub has_selection: bool,
    /// Whether the highlight emphasis is present.
    pub has_highlight: bool,
}

impl OverlayStats {
    /// Total number of marks across severities.
    pub fn total_marks(&self) -> usize {
        self.errors + self.warnings + self.suggestions
    }
}

/// Ordered marker collection for one document, immutable per version.
#[derive(Debug, Clone)]
pub struct Overlay {
    /// Markers sorted ascending by `from` (stable for equal starts).
    markers: Vec<Marker>,
    /// `prefix_max_to[i] = max(markers[0..=i].to)`, for query pruning.
    prefix_max_to: Vec<usize>,
    /// Version of this overlay value; bumped on every transition.
    version: u64,
}

impl Overlay {
    /// Create an empty overlay at version 0.
    pub fn new() -> Self {
        Self {
            markers: Vec::new(),
            prefix_max_to: Vec::new(),
            version: 0,
        }
    }

    /// Build an overlay from a marker set, sorting it and rebuilding the
    /// prefix maxima. Transitions in [`crate::engine`] construct overlays
    /// exclusively through this.
    pub(crate) fn from_markers(mut markers: Vec<Marker>, version: u64) -> Self {
        markers.sort_by_key(|m| m.from);

        let mut prefix_max_to = Vec::with_capacity(markers.len());
        let mut max_to = 0usize;
        for marker in &markers {
            max_to = max_to.max(marker.to);
            prefix_max_to.push(max_to);
        }

        debug_assert!(
            markers
                .iter()
                .filter(|m| m.kind == MarkerKind::Selection)
                .count()
                <= 1,
            "overlay holds at most one selection marker"
        );
        debug_assert!(
            markers
                .iter()
                .filter(|m| m.kind == MarkerKind::Highlight)
                .count()
                <= 1,
            "overlay holds at most one highlight marker"
        );

        Self {
            markers,
            prefix_max_to,
            version,
        }
    }

    /// Version of this overlay value.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of markers (marks plus singletons).
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Whether the overlay holds no markers.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// All markers, sorted ascending by `from`.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// First mark containing `pos` in ascending `from` order, endpoints
    /// inclusive. Selection/highlight markers never match.
    pub fn mark_at(&self, pos: usize) -> Option<&Marker> {
        self.mark_at_impl(pos).0
    }

    fn mark_at_impl(&self, pos: usize) -> (Option<&Marker>, usize) {
        if self.markers.is_empty() {
            return (None, 0);
        }

        // Binary search for the first marker with from > pos; everything
        // that can contain pos sorts before it.
        let search_key = pos.saturating_add(1);
        let idx = match self.markers.binary_search_by_key(&search_key, |m| m.from) {
            Ok(idx) => idx,
            Err(idx) => idx,
        };

        let mut best = None;
        let mut scanned = 0usize;

        // Scan backward, keeping the lowest-index hit so the first mark in
        // `from` order wins; the prefix maximum bounds the scan.
        for i in (0..idx).rev() {
            scanned = scanned.saturating_add(1);

            if self.prefix_max_to[i] < pos {
                break;
            }

            let marker = &self.markers[i];
            if marker.kind.is_mark() && marker.contains(pos) {
                best = Some(marker);
            }
        }

        (best, scanned)
    }

    #[cfg(test)]
    fn mark_at_scan_count(&self, pos: usize) -> usize {
        self.mark_at_impl(pos).1
    }

    /// All markers intersecting the half-open range `[from, to)`.
    pub fn markers_intersecting(&self, from: usize, to: usize) -> Vec<&Marker> {
        if self.markers.is_empty() || from >= to {
            return Vec::new();
        }

        // First marker with from >= to bounds the scan on the right.
        let scan_end = match self.markers.binary_search_by_key(&to, |m| m.from) {
            Ok(idx) | Err(idx) => idx,
        };

        if scan_end == 0 {
            return Vec::new();
        }

        // Locate from's insertion point, then widen left while earlier
        // markers can still reach `from`. `>=` keeps zero-length markers
        // sitting exactly at `from` in the scan; the trailing filter
        // re-checks intersection, so over-widening only costs time.
        let mut scan_start = match self.markers.binary_search_by_key(&from, |m| m.from) {
            Ok(idx) | Err(idx) => idx.min(scan_end),
        };

        while scan_start > 0 && self.prefix_max_to[scan_start - 1] >= from {
            scan_start -= 1;
        }

        self.markers[scan_start..scan_end]
            .iter()
            .filter(|m| m.intersects(from, to))
            .collect()
    }

    /// The selection emphasis, if one is present.
    pub fn selection(&self) -> Option<&Marker> {
        self.markers
            .iter()
            .find(|m| m.kind == MarkerKind::Selection)
    }

    /// The highlight emphasis, if one is present.
    pub fn highlight(&self) -> Option<&Marker> {
        self.markers
            .iter()
            .find(|m| m.kind == MarkerKind::Highlight)
    }

    /// Aggregate counts over the current markers.
    pub fn stats(&self) -> OverlayStats {
        let mut stats = OverlayStats::default();
        for marker in &self.markers {
            match marker.kind {
                MarkerKind::Mark { severity } => match severity {
                    Severity::Error => stats.errors += 1,
                    Severity::Warning => stats.warnings += 1,
                    Severity::Suggestion => stats.suggestions += 1,
                },
                MarkerKind::Selection => stats.has_selection = true,
                MarkerKind::Highlight => stats.has_highlight = true,
            }
        }
        stats
    }
}

impl Default for Overlay {
    fn default() -> Self {
        Self::new()
    }
}
