//! Typed interaction events.
//!
//! Hosts subscribe to two streams on the surface: overlay replacements
//! ([`OverlayChange`], for repainting) and user interaction with alert
//! marks ([`AlertEvent`], for panels and navigation). Both are delivered
//! synchronously through boxed callbacks.

use crate::query::AlertHit;

/// A user interaction with an alert's mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertEvent {
    /// The pointer was pressed on a mark.
    Click(AlertHit),
    /// The pointer rested on a mark for the configured hover delay.
    Hover(AlertHit),
}

impl AlertEvent {
    /// The hit payload, regardless of gesture.
    pub fn hit(&self) -> &AlertHit {
        match self {
            AlertEvent::Click(hit) | AlertEvent::Hover(hit) => hit,
        }
    }
}

/// Overlay replacement notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayChange {
    /// Overlay version before the transaction.
    pub old_version: u64,
    /// Overlay version after the transaction.
    pub new_version: u64,
}

/// Alert event callback type.
pub type AlertEventCallback = Box<dyn FnMut(&AlertEvent) + Send>;

/// Overlay change callback type.
pub type OverlayChangeCallback = Box<dyn FnMut(&OverlayChange) + Send>;
