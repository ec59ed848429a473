//! Per-entry decision events emitted during a run.

use crate::rules::Rule;
use std::fmt;
use std::path::Path;

/// One traversal decision, in traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorEvent {
	/// A pruned directory (path ends with `/`) or an excluded file.
	Excluded { rel_path: String },

	/// Dry run: the file would have been copied.
	WouldCopy { rel_path: String, bytes: u64 },

	Copied { rel_path: String, bytes: u64 },

	/// Unchanged since the last run.
	Skipped { rel_path: String },

	Failed { rel_path: String, reason: String },
}

impl MirrorEvent {
	pub fn rel_path(&self) -> &str {
		match self {
			MirrorEvent::Excluded { rel_path }
			| MirrorEvent::WouldCopy { rel_path, .. }
			| MirrorEvent::Copied { rel_path, .. }
			| MirrorEvent::Skipped { rel_path }
			| MirrorEvent::Failed { rel_path, .. } => rel_path,
		}
	}

	/// Category tag shown in front of the path.
	pub fn tag(&self) -> &'static str {
		match self {
			MirrorEvent::Excluded { .. } => "EXCLUDE",
			MirrorEvent::WouldCopy { .. } => "WOULD COPY",
			MirrorEvent::Copied { .. } => "COPIED",
			MirrorEvent::Skipped { .. } => "SKIP",
			MirrorEvent::Failed { .. } => "FAILED",
		}
	}
}

impl fmt::Display for MirrorEvent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}] {}", self.tag(), self.rel_path())?;
		if let MirrorEvent::Failed { reason, .. } = self {
			write!(f, " ({reason})")?;
		}
		Ok(())
	}
}

/// Receiver for run narration.
pub trait EventSink {
	/// Called once before traversal with the resolved roots and effective rules.
	fn begin(&mut self, _source: &Path, _destination: &Path, _rules: &[Rule]) {}

	fn on_event(&mut self, event: MirrorEvent);
}

/// Discards everything.
impl EventSink for () {
	fn on_event(&mut self, _event: MirrorEvent) {}
}

/// Collects events in order.
impl EventSink for Vec<MirrorEvent> {
	fn on_event(&mut self, event: MirrorEvent) {
		self.push(event);
	}
}

/// Prints the config block and every event to stdout when verbose.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
	pub verbose: bool,
}

impl EventSink for ConsoleSink {
	fn begin(&mut self, source: &Path, destination: &Path, rules: &[Rule]) {
		if !self.verbose {
			return;
		}

		println!("=== Backup Config ===");
		println!("Source: {}", source.display());
		println!("Target: {}", destination.display());
		println!("Excludes:");
		for rule in rules {
			println!("  - {}", rule);
		}
		println!("=====================");
		println!();
	}

	fn on_event(&mut self, event: MirrorEvent) {
		if self.verbose {
			println!("{}", event);
		}
	}
}
