//! Incremental mirroring for uebackup.
//!
//! This module handles:
//! - Change detection (size + second-resolution mtime)
//! - Top-down traversal with directory pruning
//! - File copies with timestamp preservation
//! - Run statistics and decision events

pub mod detect;
pub mod events;
pub mod stats;
pub mod walker;

pub use detect::{CopyPolicy, should_copy};
pub use events::{ConsoleSink, EventSink, MirrorEvent};
pub use stats::{MirrorReport, RunStats, format_bytes};
pub use walker::mirror;
