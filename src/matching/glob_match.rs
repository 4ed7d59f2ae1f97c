// src/matching/glob_match.rs

//! Full glob evaluation for exclusion rules.
//!
//! The `glob` crate supplies `*`, `**`, `?`, and character classes, but has
//! no brace-group support, so `{a,b}` groups are expanded into plain
//! alternatives before compilation. Patterns that still fail to compile are
//! handed to the fallback matcher for that rule only.

use glob::{MatchOptions, Pattern};
use log::debug;

use super::fallback_match;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    // Keep `*` within one path segment; `**` still crosses segments.
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Evaluates a glob-style pattern against a relative path.
pub(super) fn matches_glob(path: &str, pattern: &str) -> bool {
    expand_braces(pattern)
        .iter()
        .any(|alt| matches_alternative(path, alt))
}

fn matches_alternative(path: &str, pattern: &str) -> bool {
    match Pattern::new(pattern) {
        Ok(compiled) => {
            if compiled.matches_with(path, MATCH_OPTIONS) {
                return true;
            }
            // A leading "**/" must also cover zero segments, so that
            // "**/*.min.js" matches a file at the root.
            pattern
                .strip_prefix("**/")
                .and_then(|rest| Pattern::new(rest).ok())
                .is_some_and(|p| p.matches_with(path, MATCH_OPTIONS))
        }
        Err(err) => {
            debug!("glob pattern '{pattern}' failed to compile ({err}), using fallback matcher");
            fallback_match(path, pattern)
        }
    }
}

/// Expands `{a,b,c}` groups into separate patterns, recursively.
///
/// An unbalanced brace leaves the pattern untouched; the glob compiler then
/// decides whether it is still valid.
pub(super) fn expand_braces(pattern: &str) -> Vec<String> {
    let Some(open) = pattern.find('{') else {
        return vec![pattern.to_string()];
    };

    let mut depth = 0usize;
    let mut close = None;
    for (offset, c) in pattern[open..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(open + offset);
                    break;
                }
            }
            _ => {}
        }
    }
    let Some(close) = close else {
        return vec![pattern.to_string()];
    };

    let head = &pattern[..open];
    let body = &pattern[open + 1..close];
    let tail = &pattern[close + 1..];

    let mut alternatives = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in body.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth -= 1,
            ',' if depth == 0 => {
                alternatives.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    alternatives.push(&body[start..]);

    let mut expanded = Vec::new();
    for alt in alternatives {
        expanded.extend(expand_braces(&format!("{head}{alt}{tail}")));
    }
    expanded
}
