#![warn(missing_docs)]
//! `lint-overlay-vale` - Vale checker integration for `lint-overlay`.
//!
//! This crate contains the Vale-specific plumbing: decoding the
//! `--output=JSON` wire shape into [`lint_overlay::Alert`] values and
//! running the checker as an external process over a document snapshot.
//! It never mutates an overlay itself; hosts take a
//! [`CheckTicket`](lint_overlay::CheckTicket) before running a check and
//! deliver the parsed alerts under it, so results for stale text are
//! dropped by the surface.

pub mod runner;
pub mod wire;

pub use runner::{CheckError, CheckRunner};
pub use wire::{parse_alert, parse_alerts, parse_check_output};
