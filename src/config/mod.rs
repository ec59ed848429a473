//! Configuration loading for uebackup.
//!
//! This module handles:
//! - The immutable per-run configuration
//! - TOML user config parsing
//! - User config discovery in the home directory

pub mod parser;
pub mod types;
pub mod user;

pub use parser::{parse_config_file, parse_config_str};
pub use types::{RunConfig, UserConfig};
pub use user::{DISABLE_USER_CONFIG_ENV, USER_CONFIG_FILE_NAME, load_user_config, user_config_path};
