use crate::config::parser::parse_config_file;
use crate::config::types::UserConfig;
use crate::error::{BackupError, Result};
use std::path::{Path, PathBuf};

/// File name of the per-user config in the home directory.
pub const USER_CONFIG_FILE_NAME: &str = ".uebackup.toml";

/// Environment variable that, if truthy, skips the user config lookup.
pub const DISABLE_USER_CONFIG_ENV: &str = "UEBACKUP_NO_USER_CONFIG";

/// Load the user config.
///
/// With an explicit path the file must exist. Otherwise `~/.uebackup.toml` is
/// used when present, unless disabled through `UEBACKUP_NO_USER_CONFIG`.
/// Returns the config together with the file it came from, if any.
pub fn load_user_config(explicit: Option<&Path>) -> Result<(UserConfig, Option<PathBuf>)> {
	if let Some(path) = explicit {
		let config = parse_config_file(path)?;
		return Ok((config, Some(path.to_path_buf())));
	}

	if is_env_truthy(DISABLE_USER_CONFIG_ENV) {
		tracing::debug!("user config lookup disabled by {DISABLE_USER_CONFIG_ENV}");
		return Ok((UserConfig::default(), None));
	}

	let path = user_config_path()?;
	if path.exists() {
		let config = parse_config_file(&path)?;
		Ok((config, Some(path)))
	} else {
		Ok((UserConfig::default(), None))
	}
}

/// Get the path to the user's config file.
pub fn user_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(BackupError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(USER_CONFIG_FILE_NAME))
}

/// Check if an environment variable is set to a truthy value.
fn is_env_truthy(var_name: &str) -> bool {
	match std::env::var(var_name) {
		Ok(value) => {
			let lower = value.to_lowercase();
			!value.is_empty() && lower != "0" && lower != "false" && lower != "no"
		}
		Err(_) => false,
	}
}
