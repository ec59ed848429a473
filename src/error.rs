use std::path::PathBuf;

/// Library-level structured errors for uebackup.
///
/// These are the fatal, run-aborting errors. Per-file copy failures are never
/// surfaced here; they are counted in the run statistics instead.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum BackupError {
	#[error("Source path does not exist: {path}")]
	SourceNotFound { path: PathBuf },

	#[error("Source path is not a directory: {path}")]
	SourceNotDirectory { path: PathBuf },

	#[error("Source path has no folder name to mirror under: {path}")]
	SourceHasNoName { path: PathBuf },

	#[error("Failed to resolve path: {path}")]
	ResolvePath {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Destination {destination} lies inside source {source_root}")]
	DestinationInsideSource {
		source_root: PathBuf,
		destination: PathBuf,
	},

	#[error("Failed to create destination directory: {path}")]
	CreateDestination {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read ignore file: {path}")]
	IgnoreFileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using BackupError.
pub type Result<T> = std::result::Result<T, BackupError>;
