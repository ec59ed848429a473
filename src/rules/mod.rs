//! Exclusion rules for uebackup.
//!
//! This module handles:
//! - Shell-style glob matching
//! - Directory-prefix and glob rule matching against relative paths
//! - Merging built-in, user and per-project rule sources

pub mod glob;
pub mod matcher;
pub mod sources;

pub use glob::glob_match;
pub use matcher::{Rule, RuleKind, find_matching_rule, matches, normalize_rel};
pub use sources::{
	BUILD_DIR_RULE, DEFAULT_EXCLUDES, ENGINE_DIR_RULE, IGNORE_FILE_NAME, RuleOptions,
	SAVED_DIR_RULE, build_rules, default_rules, load_ignore_file, parse_ignore_str,
};
