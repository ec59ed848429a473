use crate::rules::glob::glob_match;
use std::fmt;

/// How a rule is compared against a relative path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
	/// Trailing `/`: matches the directory itself and everything beneath it.
	Directory,

	/// Anything else: shell-style glob against the full relative path.
	Glob,
}

/// A single exclusion rule, already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
	/// Normalized pattern text (forward slashes, trimmed).
	pattern: String,

	/// Kind inferred from the trailing character.
	kind: RuleKind,
}

impl Rule {
	/// Parse raw rule text.
	///
	/// Backslashes become forward slashes and surrounding whitespace is trimmed.
	/// Returns `None` when nothing is left.
	pub fn parse(raw: &str) -> Option<Self> {
		let pattern = normalize_rel(raw.trim());
		if pattern.is_empty() {
			return None;
		}

		let kind = if pattern.ends_with('/') {
			RuleKind::Directory
		} else {
			RuleKind::Glob
		};

		Some(Rule { pattern, kind })
	}

	/// The normalized pattern text.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	pub fn kind(&self) -> RuleKind {
		self.kind
	}

	/// Check if this rule matches a normalized relative path.
	pub fn matches(&self, rel_path: &str) -> bool {
		match self.kind {
			RuleKind::Directory => {
				let dir = &self.pattern[..self.pattern.len() - 1];
				rel_path == dir || rel_path.starts_with(&self.pattern)
			}
			RuleKind::Glob => glob_match(&self.pattern, rel_path),
		}
	}
}

impl fmt::Display for Rule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.pattern)
	}
}

/// Normalize a relative path (or rule) to forward-slash form.
///
/// `Content\Maps\Main.umap` becomes `Content/Maps/Main.umap` so rule matching
/// behaves the same on every host.
pub fn normalize_rel(rel: &str) -> String {
	rel.replace('\\', "/")
}

/// Find the first rule that matches a normalized relative path.
pub fn find_matching_rule<'a>(rel_path: &str, rules: &'a [Rule]) -> Option<&'a Rule> {
	rules.iter().find(|rule| rule.matches(rel_path))
}

/// Check if any rule excludes a normalized relative path.
pub fn matches(rel_path: &str, rules: &[Rule]) -> bool {
	find_matching_rule(rel_path, rules).is_some()
}
