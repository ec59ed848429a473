use crate::error::{BackupError, Result};
use crate::rules::matcher::Rule;
use std::path::Path;

/// File name of the optional per-project ignore file at the source root.
pub const IGNORE_FILE_NAME: &str = ".backupignore";

/// Built-in exclusions: artifacts the editor and toolchain regenerate on demand.
pub const DEFAULT_EXCLUDES: &[&str] = &[
	"Binaries/",
	"DerivedDataCache/",
	"Intermediate/",
	".vs/",
	".idea/",
	".vscode/",
	"*.VC.db",
	"*.VC.opendb",
];

/// Local working data (logs, autosaves). Excluded unless requested.
pub const SAVED_DIR_RULE: &str = "Saved/";

/// Packaged build output. Excluded unless requested.
pub const BUILD_DIR_RULE: &str = "Build/";

/// Engine checkout sitting under the source folder. Only excluded on request.
pub const ENGINE_DIR_RULE: &str = "Engine/";

/// Toggles that add or suppress the optional directory rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleOptions {
	/// Keep `Saved/` in the mirror.
	pub include_saved: bool,

	/// Keep `Build/` in the mirror.
	pub include_build: bool,

	/// Drop `Engine/` from the mirror.
	pub exclude_engine: bool,
}

/// The built-in defaults plus the rules selected by `options`.
pub fn default_rules(options: &RuleOptions) -> Vec<Rule> {
	let mut raw: Vec<&str> = DEFAULT_EXCLUDES.to_vec();

	if !options.include_saved {
		raw.push(SAVED_DIR_RULE);
	}
	if !options.include_build {
		raw.push(BUILD_DIR_RULE);
	}
	if options.exclude_engine {
		raw.push(ENGINE_DIR_RULE);
	}

	raw.into_iter().filter_map(Rule::parse).collect()
}

/// Merge every rule source into one ordered list.
///
/// Order is: built-in defaults, option-driven rules, `extra` rules, then the
/// project ignore file contents. Duplicates are kept; matching is a plain OR.
pub fn build_rules(options: &RuleOptions, extra: &[String], project_file: Option<&str>) -> Vec<Rule> {
	let mut rules = default_rules(options);
	rules.extend(extra.iter().filter_map(|raw| Rule::parse(raw)));

	if let Some(content) = project_file {
		rules.extend(parse_ignore_str(content));
	}

	rules
}

/// Parse ignore file text: one rule per line, `#` comments and blank lines skipped.
pub fn parse_ignore_str(content: &str) -> Vec<Rule> {
	content
		.lines()
		.map(str::trim)
		.filter(|line| !line.starts_with('#'))
		.filter_map(Rule::parse)
		.collect()
}

/// Read `.backupignore` from the project root.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_ignore_file(project_root: &Path) -> Result<Option<String>> {
	let path = project_root.join(IGNORE_FILE_NAME);

	match std::fs::read_to_string(&path) {
		Ok(content) => Ok(Some(content)),
		Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
		Err(source) => Err(BackupError::IgnoreFileRead { path, source }),
	}
}
