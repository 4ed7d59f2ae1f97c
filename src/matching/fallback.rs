// src/matching/fallback.rs

//! Degraded wildcard matching used when full glob evaluation is unavailable.
//!
//! This is the documented weaker contract for rules whose glob pattern fails
//! to compile: a leading `*` means "path ends with the remainder", a trailing
//! `*` means "path starts with the stem, or contains it at a path-segment
//! boundary". Wildcards in any other position are not honored here.

/// Narrow wildcard matcher for a single degraded rule.
pub(crate) fn fallback_match(path: &str, pattern: &str) -> bool {
    if let Some(suffix) = pattern.strip_prefix('*') {
        return !suffix.is_empty() && path.ends_with(suffix);
    }
    if let Some(stem) = pattern.strip_suffix('*') {
        return !stem.is_empty()
            && (path.starts_with(stem) || path.contains(&format!("/{stem}")));
    }
    false
}
