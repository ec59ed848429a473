use crate::rules::{Rule, RuleOptions};
use serde::Deserialize;
use std::path::PathBuf;

/// Per-user defaults from `~/.uebackup.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct UserConfig {
	/// Always keep `Saved/` in backups.
	#[serde(default)]
	pub include_saved: bool,

	/// Always keep `Build/` in backups.
	#[serde(default)]
	pub include_build: bool,

	/// Always drop `Engine/` from backups.
	#[serde(default)]
	pub exclude_engine: bool,

	/// Extra rules appended after the built-in defaults.
	#[serde(default)]
	pub excludes: Vec<String>,
}

impl UserConfig {
	/// Combine these defaults with command-line toggles. Either side can enable a toggle.
	pub fn rule_options(&self, cli: RuleOptions) -> RuleOptions {
		RuleOptions {
			include_saved: cli.include_saved || self.include_saved,
			include_build: cli.include_build || self.include_build,
			exclude_engine: cli.exclude_engine || self.exclude_engine,
		}
	}
}

/// Everything one mirror run needs. Built once, never mutated during the walk.
#[derive(Debug, Clone)]
pub struct RunConfig {
	/// Project folder to back up.
	pub source: PathBuf,

	/// Folder that receives `<source name>/`.
	pub target: PathBuf,

	/// Rules from defaults, flags and user config. The project ignore file is
	/// appended by the walker once the source root is resolved.
	pub rules: Vec<Rule>,

	/// Report decisions without touching the filesystem.
	pub dry_run: bool,

	/// Emit a line for every decision.
	pub verbose: bool,

	/// Copy every eligible file, ignoring change detection.
	pub force_copy: bool,
}

impl RunConfig {
	/// A config with the built-in default rules and every flag off.
	pub fn new(source: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
		RunConfig {
			source: source.into(),
			target: target.into(),
			rules: crate::rules::default_rules(&RuleOptions::default()),
			dry_run: false,
			verbose: false,
			force_copy: false,
		}
	}
}
