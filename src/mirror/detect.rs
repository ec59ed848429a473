use filetime::FileTime;
use std::fs;
use std::path::Path;

/// Whether a run copies only changed files or every eligible file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyPolicy {
	/// Copy files whose destination is missing or differs in size or mtime.
	#[default]
	Incremental,

	/// Copy every eligible file.
	Full,
}

impl CopyPolicy {
	pub fn from_force(force_copy: bool) -> Self {
		if force_copy {
			CopyPolicy::Full
		} else {
			CopyPolicy::Incremental
		}
	}

	/// Label used in the run summary.
	pub fn as_str(&self) -> &'static str {
		match self {
			CopyPolicy::Incremental => "INCREMENTAL",
			CopyPolicy::Full => "FULL",
		}
	}

	/// Decide whether `src` must be copied over `dst` under this policy.
	pub fn needs_copy(&self, src: &Path, dst: &Path) -> bool {
		match self {
			CopyPolicy::Full => true,
			CopyPolicy::Incremental => should_copy(src, dst),
		}
	}
}

/// Size and modification-time heuristic for incremental copies.
///
/// A file is copied when the destination is missing, the sizes differ, or the
/// modification times differ once truncated to whole seconds. Content is never
/// hashed: equal size and equal second-resolution mtime mean "unchanged".
///
/// If either side cannot be stat'd (typically because it vanished after the
/// listing) the file is reported as needing a copy.
pub fn should_copy(src: &Path, dst: &Path) -> bool {
	if !dst.exists() {
		return true;
	}

	let (src_meta, dst_meta) = match (fs::metadata(src), fs::metadata(dst)) {
		(Ok(s), Ok(d)) => (s, d),
		_ => return true,
	};

	if src_meta.len() != dst_meta.len() {
		return true;
	}

	mtime_seconds(&src_meta) != mtime_seconds(&dst_meta)
}

/// Modification time with the sub-second part dropped.
fn mtime_seconds(meta: &fs::Metadata) -> i64 {
	truncate_seconds(FileTime::from_last_modification_time(meta))
}

/// Whole seconds rounded toward zero.
///
/// `unix_seconds` floors (its nanosecond part is always positive), which only
/// differs from truncation before 1970.
fn truncate_seconds(time: FileTime) -> i64 {
	let secs = time.unix_seconds();
	if secs < 0 && time.nanoseconds() > 0 {
		secs + 1
	} else {
		secs
	}
}
