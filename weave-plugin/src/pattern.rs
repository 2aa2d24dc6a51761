//! File path patterns for generator dispatch.

use glob::{MatchOptions, Pattern};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Returns true if `path` matches `pattern`.
///
/// `*` and `*.proto` match every path. Other patterns are shell globs in
/// which `*` does not cross a `/`. A malformed pattern matches any path
/// containing it, minus one trailing `*`.
pub fn matches_pattern(path: &str, pattern: &str) -> bool {
    if pattern == "*" || pattern == "*.proto" {
        return true;
    }

    match Pattern::new(pattern) {
        Ok(glob) => glob.matches_with(path, MATCH_OPTIONS),
        Err(_) => path.contains(pattern.strip_suffix('*').unwrap_or(pattern)),
    }
}
