//! Run counters and the end-of-run summary.

use crate::mirror::detect::CopyPolicy;
use std::fmt;
use std::path::PathBuf;

/// Aggregate counters for one mirror run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
	/// Eligible files encountered (survived exclusion).
	pub scanned: u64,
	/// Files copied, or that would be copied in a dry run. Includes failed attempts.
	pub copied: u64,
	/// Eligible files left alone because they are unchanged.
	pub skipped: u64,
	/// Pruned directories plus excluded files.
	pub excluded: u64,
	/// Total size of `copied` files.
	pub bytes_copied: u64,
	/// Copy attempts that failed (permissions, locks, vanished files).
	pub failed: u64,
}

impl RunStats {
	pub fn add_scanned(&mut self) {
		self.scanned += 1;
	}

	pub fn add_copied(&mut self, bytes: u64) {
		self.copied += 1;
		self.bytes_copied += bytes;
	}

	pub fn add_skipped(&mut self) {
		self.skipped += 1;
	}

	pub fn add_excluded(&mut self) {
		self.excluded += 1;
	}

	pub fn add_failed(&mut self) {
		self.failed += 1;
	}
}

/// Final outcome of a run: counters plus what was mirrored where.
#[derive(Debug, Clone)]
pub struct MirrorReport {
	pub stats: RunStats,
	/// Canonical source root.
	pub source: PathBuf,
	/// Destination root (`<target>/<source name>`).
	pub destination: PathBuf,
	pub policy: CopyPolicy,
	pub dry_run: bool,
}

impl fmt::Display for MirrorReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "=== Backup Summary ===")?;
		writeln!(f, "Mode:     {}", self.policy.as_str())?;
		writeln!(f, "Source:   {}", self.source.display())?;
		writeln!(f, "Target:   {}", self.destination.display())?;
		writeln!(f, "Scanned:  {}", self.stats.scanned)?;
		writeln!(f, "Copied:   {}", self.stats.copied)?;
		writeln!(f, "Skipped:  {}", self.stats.skipped)?;
		writeln!(f, "Excluded: {}", self.stats.excluded)?;
		writeln!(f, "Failed:   {}", self.stats.failed)?;
		write!(f, "Size:     {}", format_bytes(self.stats.bytes_copied))?;
		if self.dry_run {
			write!(f, "\n[DRY RUN] No files were copied.")?;
		}
		Ok(())
	}
}

/// Render a byte count with 1024-based units and two decimals.
pub fn format_bytes(num_bytes: u64) -> String {
	const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

	let mut value = num_bytes as f64;
	for unit in UNITS {
		if value < 1024.0 {
			return format!("{value:.2} {unit}");
		}
		value /= 1024.0;
	}

	format!("{value:.2} PB")
}
