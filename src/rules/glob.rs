//! Shell-style glob matching for exclusion rules.
//!
//! Supported syntax:
//! - `*` matches zero or more characters, including `/`
//! - `?` matches exactly one character
//! - `[abc]` matches any character in the set
//! - `[a-z]` matches any character in the range
//! - `[!abc]` matches any character NOT in the set
//!
//! There is no `**`, no brace expansion and no escape character. A `[` without a
//! closing `]` is matched literally. Matching is case-sensitive on every platform.

/// Match a string against a glob pattern.
///
/// Returns true if the pattern matches the entire input string.
///
/// # Examples
/// ```
/// use uebackup_cli::rules::glob_match;
///
/// assert!(glob_match("*.uasset", "Content/Maps/Main.uasset"));
/// assert!(glob_match("Config/?efault*.ini", "Config/DefaultGame.ini"));
/// assert!(!glob_match("*.tmp", "notes.txt"));
/// ```
pub fn glob_match(pattern: &str, input: &str) -> bool {
	let pat: Vec<char> = pattern.chars().collect();
	let text: Vec<char> = input.chars().collect();

	let mut pi = 0;
	let mut ti = 0;
	// Resume point for the most recent `*`: (pattern index after it, text index it covers up to)
	let mut star: Option<(usize, usize)> = None;

	while ti < text.len() {
		if pi < pat.len() {
			if pat[pi] == '*' {
				pi += 1;
				star = Some((pi, ti));
				continue;
			}
			if let Some(width) = match_token(&pat[pi..], text[ti]) {
				pi += width;
				ti += 1;
				continue;
			}
		}

		// Mismatch: let the last star swallow one more character
		match star {
			Some((star_pi, star_ti)) => {
				pi = star_pi;
				ti = star_ti + 1;
				star = Some((star_pi, ti));
			}
			None => return false,
		}
	}

	// Trailing stars match the empty remainder
	while pi < pat.len() && pat[pi] == '*' {
		pi += 1;
	}

	pi == pat.len()
}

/// Match a single non-star pattern token against one character.
///
/// Returns the number of pattern characters the token spans when it matches.
fn match_token(pattern: &[char], c: char) -> Option<usize> {
	match pattern[0] {
		'?' => Some(1),
		'[' => match parse_char_class(pattern, c) {
			Some((true, width)) => Some(width),
			Some((false, _)) => None,
			// Unterminated class: `[` is an ordinary character
			None => (c == '[').then_some(1),
		},
		p => (p == c).then_some(1),
	}
}

/// Parse a `[...]` class at the start of `pattern` and test `c` against it.
///
/// Returns `(matched, width)` or `None` if the class is never closed.
fn parse_char_class(pattern: &[char], c: char) -> Option<(bool, usize)> {
	let mut i = 1;
	let negated = pattern.get(i) == Some(&'!');
	if negated {
		i += 1;
	}

	let start = i;
	// A `]` right after the opening bracket is a member, not the terminator
	if pattern.get(i) == Some(&']') {
		i += 1;
	}
	while i < pattern.len() && pattern[i] != ']' {
		i += 1;
	}
	if i >= pattern.len() {
		return None;
	}

	let members = &pattern[start..i];
	let mut found = false;
	let mut j = 0;
	while j < members.len() {
		if j + 2 < members.len() && members[j + 1] == '-' {
			if members[j] <= c && c <= members[j + 2] {
				found = true;
			}
			j += 3;
		} else {
			if members[j] == c {
				found = true;
			}
			j += 1;
		}
	}

	Some((found != negated, i + 1))
}
