//! Alert registry: id to alert resolution for one editing surface.
//!
//! The overlay stores only ids; interaction paths (click, hover, tooltip,
//! scroll-to-alert) resolve them here. Each surface owns its own registry,
//! so two open documents never see each other's alerts.
//!
//! Invariant (maintained by [`crate::engine::apply`]): an id is present in
//! the registry exactly when a live mark for it exists in the overlay.

use std::collections::HashMap;

use crate::alert::{Alert, AlertId};

/// Id-keyed alert storage for one surface.
#[derive(Debug, Clone, Default)]
pub struct AlertRegistry {
    alerts: HashMap<AlertId, Alert>,
}

impl AlertRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            alerts: HashMap::new(),
        }
    }

    /// Store an alert under its computed id.
    ///
    /// Duplicate ids resolve last-write-wins; the displaced alert is
    /// returned so callers can observe the collision.
    pub fn put(&mut self, alert: Alert) -> Option<Alert> {
        self.alerts.insert(alert.id(), alert)
    }

    /// Look up an alert by id.
    pub fn get(&self, id: &AlertId) -> Option<&Alert> {
        self.alerts.get(id)
    }

    /// Remove an alert by id, returning it if present.
    pub fn remove(&mut self, id: &AlertId) -> Option<Alert> {
        self.alerts.remove(id)
    }

    /// Whether an alert with this id is registered.
    pub fn contains(&self, id: &AlertId) -> bool {
        self.alerts.contains_key(id)
    }

    /// Remove every alert.
    pub fn clear(&mut self) {
        self.alerts.clear();
    }

    /// Number of registered alerts.
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Iterate over the registered ids (unordered).
    pub fn ids(&self) -> impl Iterator<Item = &AlertId> {
        self.alerts.keys()
    }
}
