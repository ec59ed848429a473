//! Source tree traversal and copy orchestration.

use crate::config::RunConfig;
use crate::error::{BackupError, Result};
use crate::mirror::detect::CopyPolicy;
use crate::mirror::events::{EventSink, MirrorEvent};
use crate::mirror::stats::{MirrorReport, RunStats};
use crate::rules::{Rule, find_matching_rule, load_ignore_file, normalize_rel, parse_ignore_str};
use filetime::{FileTime, set_file_times};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A directory entry queued for processing.
#[derive(Debug)]
struct WalkEntry {
	/// Path under the source tree.
	path: PathBuf,
	/// Path relative to the source root, in host form.
	rel_native: PathBuf,
	/// Normalized relative path used for matching and events.
	rel: String,
}

struct MirrorWalker<'a, S: EventSink + ?Sized> {
	dest_root: &'a Path,
	rules: &'a [Rule],
	policy: CopyPolicy,
	dry_run: bool,
	stats: RunStats,
	sink: &'a mut S,
}

/// Mirror `config.source` into `config.target/<source name>`.
///
/// This function:
/// 1. Resolves both roots and fails fast if the source is missing.
/// 2. Appends the project's `.backupignore` rules to `config.rules`.
/// 3. Creates the destination root (not in dry-run mode).
/// 4. Walks the tree top-down, pruning excluded directories before they are
///    listed, and copies or skips each eligible file.
///
/// Per-file failures are counted in the returned report, never propagated.
/// Errors are returned only for setup problems, before anything is copied.
pub fn mirror<S>(config: &RunConfig, sink: &mut S) -> Result<MirrorReport>
where
	S: EventSink + ?Sized,
{
	let source = resolve_source(&config.source)?;
	let target = resolve_target(&config.target)?;

	let name = source
		.file_name()
		.ok_or_else(|| BackupError::SourceHasNoName {
			path: source.clone(),
		})?;
	let destination = target.join(name);

	if destination.starts_with(&source) {
		return Err(BackupError::DestinationInsideSource {
			source_root: source,
			destination,
		});
	}

	let mut rules = config.rules.clone();
	if let Some(content) = load_ignore_file(&source)? {
		rules.extend(parse_ignore_str(&content));
	}

	if !config.dry_run {
		fs::create_dir_all(&destination).map_err(|source| BackupError::CreateDestination {
			path: destination.clone(),
			source,
		})?;
	}

	tracing::debug!(
		source = %source.display(),
		destination = %destination.display(),
		rules = rules.len(),
		"starting mirror"
	);
	sink.begin(&source, &destination, &rules);

	let policy = CopyPolicy::from_force(config.force_copy);
	let mut walker = MirrorWalker {
		dest_root: &destination,
		rules: &rules,
		policy,
		dry_run: config.dry_run,
		stats: RunStats::default(),
		sink,
	};

	let root = WalkEntry {
		path: source.clone(),
		rel_native: PathBuf::new(),
		rel: String::new(),
	};
	walker.walk_dir(&root);

	Ok(MirrorReport {
		stats: walker.stats,
		source,
		destination,
		policy,
		dry_run: config.dry_run,
	})
}

fn resolve_source(path: &Path) -> Result<PathBuf> {
	let resolved = dunce::canonicalize(path).map_err(|source| {
		if source.kind() == io::ErrorKind::NotFound {
			BackupError::SourceNotFound {
				path: path.to_path_buf(),
			}
		} else {
			BackupError::ResolvePath {
				path: path.to_path_buf(),
				source,
			}
		}
	})?;

	if !resolved.is_dir() {
		return Err(BackupError::SourceNotDirectory { path: resolved });
	}

	Ok(resolved)
}

/// The target may not exist yet: canonicalize its deepest existing ancestor
/// and re-append the missing components.
fn resolve_target(path: &Path) -> Result<PathBuf> {
	let to_error = |source| BackupError::ResolvePath {
		path: path.to_path_buf(),
		source,
	};

	let absolute = std::path::absolute(path).map_err(to_error)?;
	let mut existing = absolute.as_path();
	let mut missing = Vec::new();
	while !existing.exists() {
		match (existing.parent(), existing.file_name()) {
			(Some(parent), Some(name)) => {
				missing.push(name);
				existing = parent;
			}
			_ => break,
		}
	}

	let mut resolved = dunce::canonicalize(existing).map_err(to_error)?;
	for name in missing.into_iter().rev() {
		resolved.push(name);
	}

	Ok(resolved)
}

impl<S: EventSink + ?Sized> MirrorWalker<'_, S> {
	fn walk_dir(&mut self, dir: &WalkEntry) {
		let Some((subdirs, files)) = list_dir(dir) else {
			return;
		};

		// Decide pruning for the whole level first, then descend only into what is left
		let rules = self.rules;
		let (pruned, retained): (Vec<_>, Vec<_>) = subdirs
			.into_iter()
			.partition(|d| find_matching_rule(&format!("{}/", d.rel), rules).is_some());

		for d in pruned {
			tracing::debug!(path = %d.rel, "pruned directory");
			self.stats.add_excluded();
			self.sink.on_event(MirrorEvent::Excluded {
				rel_path: format!("{}/", d.rel),
			});
		}

		if !self.dry_run {
			let dst_dir = self.dest_root.join(&dir.rel_native);
			if let Err(e) = fs::create_dir_all(&dst_dir) {
				tracing::warn!(path = %dst_dir.display(), error = %e, "failed to create directory");
			}
		}

		for file in files {
			self.handle_file(file);
		}

		for d in retained {
			self.walk_dir(&d);
		}
	}

	fn handle_file(&mut self, file: WalkEntry) {
		if let Some(rule) = find_matching_rule(&file.rel, self.rules) {
			tracing::debug!(path = %file.rel, rule = %rule, "excluded file");
			self.stats.add_excluded();
			self.sink.on_event(MirrorEvent::Excluded { rel_path: file.rel });
			return;
		}

		self.stats.add_scanned();
		let dst = self.dest_root.join(&file.rel_native);

		if !self.policy.needs_copy(&file.path, &dst) {
			self.stats.add_skipped();
			self.sink.on_event(MirrorEvent::Skipped { rel_path: file.rel });
			return;
		}

		let bytes = match fs::metadata(&file.path) {
			Ok(meta) => meta.len(),
			Err(e) => {
				self.record_failure(file.rel, &e);
				return;
			}
		};
		self.stats.add_copied(bytes);

		if self.dry_run {
			self.sink.on_event(MirrorEvent::WouldCopy {
				rel_path: file.rel,
				bytes,
			});
			return;
		}

		match copy_file_with_metadata(&file.path, &dst) {
			Ok(()) => self.sink.on_event(MirrorEvent::Copied {
				rel_path: file.rel,
				bytes,
			}),
			Err(e) => self.record_failure(file.rel, &e),
		}
	}

	fn record_failure(&mut self, rel_path: String, error: &io::Error) {
		let reason = if error.kind() == io::ErrorKind::PermissionDenied {
			"permission denied".to_string()
		} else {
			error.to_string()
		};

		tracing::warn!(path = %rel_path, error = %error, "copy failed");
		self.stats.add_failed();
		self.sink.on_event(MirrorEvent::Failed { rel_path, reason });
	}
}

/// List one directory level, split into subdirectories and files, sorted by name.
///
/// Symlinked directories are not followed. Special files are skipped.
/// Returns `None` if the directory cannot be read.
fn list_dir(dir: &WalkEntry) -> Option<(Vec<WalkEntry>, Vec<WalkEntry>)> {
	let entries = match fs::read_dir(&dir.path) {
		Ok(iter) => iter,
		Err(e) => {
			tracing::warn!(path = %dir.path.display(), error = %e, "failed to read directory");
			return None;
		}
	};

	let mut subdirs = Vec::new();
	let mut files = Vec::new();

	for entry in entries {
		let entry = match entry {
			Ok(v) => v,
			Err(e) => {
				tracing::warn!(path = %dir.path.display(), error = %e, "failed to read directory entry");
				continue;
			}
		};

		let file_type = match entry.file_type() {
			Ok(v) => v,
			Err(e) => {
				tracing::warn!(path = %entry.path().display(), error = %e, "failed to inspect entry");
				continue;
			}
		};

		let name = entry.file_name();
		let path = entry.path();
		let walk_entry = WalkEntry {
			rel: join_rel(&dir.rel, &name.to_string_lossy()),
			rel_native: dir.rel_native.join(&name),
			path,
		};

		if file_type.is_dir() {
			subdirs.push(walk_entry);
		} else if file_type.is_symlink() && walk_entry.path.is_dir() {
			tracing::debug!(path = %walk_entry.rel, "not following symlinked directory");
		} else if file_type.is_file() || file_type.is_symlink() {
			files.push(walk_entry);
		} else {
			tracing::warn!(path = %walk_entry.rel, "special file skipped");
		}
	}

	subdirs.sort_by(|a, b| a.rel.cmp(&b.rel));
	files.sort_by(|a, b| a.rel.cmp(&b.rel));

	Some((subdirs, files))
}

fn join_rel(rel_dir: &str, name: &str) -> String {
	let name = normalize_rel(name);
	if rel_dir.is_empty() {
		name
	} else {
		format!("{rel_dir}/{name}")
	}
}

/// Copy content, permissions and access/modification times.
fn copy_file_with_metadata(src: &Path, dst: &Path) -> io::Result<()> {
	if let Some(parent) = dst.parent() {
		fs::create_dir_all(parent)?;
	}
	fs::copy(src, dst)?;

	let meta = fs::metadata(src)?;
	let atime = FileTime::from_last_access_time(&meta);
	let mtime = FileTime::from_last_modification_time(&meta);
	set_file_times(dst, atime, mtime)
}
