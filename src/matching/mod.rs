//! Exclusion-rule evaluation over forward-slash relative paths.
//!
//! A rule matches a path through one of four alternatives, tried in order
//! with short-circuiting: exact equality, directory form (trailing `/`),
//! glob (any of `*`, `?`, `[`, `{`), or plain substring. The rule *set* is
//! unordered: `matches` asks whether any rule matches, so the result is
//! independent of rule order.
//!
//! Glob evaluation is two-tier: the full evaluator runs first, and any rule
//! whose pattern fails to compile degrades to a narrow fallback matcher for
//! that rule only. A malformed pattern never aborts a scan.

use crate::constants::{MARKER_FILENAME, VCS_DIRS};

mod fallback;
mod glob_match;

pub(crate) use fallback::fallback_match;
use glob_match::matches_glob;

/// Where an exclusion rule came from.
///
/// Provenance is informational (it shows up in logs); matching treats all
/// sources identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSource {
    /// The configured exclusion list.
    Explicit,
    /// The legacy single-pattern list kept for backward compatibility.
    Legacy,
    /// The host-environment exclude map.
    Environment,
    /// A line parsed from the root `.gitignore`.
    Gitignore,
    /// Injected by the core itself (project-type hints, artifact name).
    BuiltIn,
}

/// An immutable exclusion pattern plus its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionRule {
    /// The raw pattern string.
    pub pattern: String,
    /// Which configuration source supplied the pattern.
    pub source: RuleSource,
}

impl ExclusionRule {
    /// Creates a rule from a pattern string and its source.
    pub fn new(pattern: impl Into<String>, source: RuleSource) -> Self {
        Self {
            pattern: pattern.into(),
            source,
        }
    }
}

/// Returns `true` if any rule in the set matches the given relative path.
///
/// `path` must be relative to the scan root and use forward slashes on every
/// platform. The rule set is evaluated as an unordered union.
pub fn matches(path: &str, rules: &[ExclusionRule]) -> bool {
    rules.iter().any(|rule| rule_matches(path, &rule.pattern))
}

/// Built-in exclusions checked before any configured rule.
///
/// Always active regardless of configuration: VCS metadata directories,
/// hidden dot-directories, and files named exactly [`MARKER_FILENAME`].
/// Hidden *files* (`.gitignore`, `.env`) stay eligible.
pub fn is_builtin_excluded(path: &str, is_dir: bool) -> bool {
    let mut segments = path.split('/').peekable();
    while let Some(segment) = segments.next() {
        if segment.is_empty() {
            continue;
        }
        let is_last = segments.peek().is_none();
        if VCS_DIRS.contains(&segment) {
            return true;
        }
        if is_last && !is_dir {
            return segment == MARKER_FILENAME;
        }
        // Any directory segment starting with '.' prunes the subtree.
        if segment.starts_with('.') && segment.len() > 1 {
            return true;
        }
    }
    false
}

fn rule_matches(path: &str, pattern: &str) -> bool {
    if pattern.is_empty() {
        return false;
    }
    // 1. Exact full-path equality.
    if path == pattern {
        return true;
    }
    // 2. Directory form: "name/" matches the directory itself and anything
    //    beneath it, at any depth.
    if let Some(name) = pattern.strip_suffix('/') {
        return path == name
            || path.starts_with(&format!("{name}/"))
            || path.contains(&format!("/{name}/"));
    }
    // 3. Glob form.
    if pattern.contains(['*', '?', '[', '{']) {
        return matches_glob(path, pattern);
    }
    // 4. Plain substring form.
    path.contains(&format!("/{pattern}")) || path.starts_with(&format!("{pattern}/"))
}
