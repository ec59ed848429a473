use crate::config::types::UserConfig;
use crate::error::{BackupError, Result};
use std::path::Path;

/// Parse a user config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<UserConfig> {
	let content = std::fs::read_to_string(path).map_err(|source| BackupError::ConfigReadError {
		path: path.to_path_buf(),
		source,
	})?;

	parse_config_str(&content, path)
}

/// Parse a user config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<UserConfig> {
	toml::from_str(content).map_err(|source| BackupError::ConfigParseError {
		path: path.to_path_buf(),
		source,
	})
}
