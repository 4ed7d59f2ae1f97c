// src/discovery/probe.rs

//! Project-type detection via marker files at the scan root.
//!
//! The presence of an ecosystem's build manifest implies a conventional
//! output directory that should be excluded even when the user never
//! configured it. Detection is a plain existence check; manifests are not
//! parsed.

use std::path::Path;

use log::debug;

use crate::matching::{ExclusionRule, RuleSource};

/// Marker filename at the root → always-on exclusion for this walk.
const PROJECT_HINTS: &[(&str, &str)] = &[
    ("go.mod", "vendor/"),
    ("pom.xml", "target/"),
    ("build.gradle", "build/"),
    ("build.gradle.kts", "build/"),
    ("package.json", "node_modules/"),
    ("Cargo.toml", "target/"),
];

/// Probes the root for known project markers and returns the injected
/// rules, deduplicated by pattern.
pub(crate) fn project_hint_rules(root: &Path) -> Vec<ExclusionRule> {
    let mut rules: Vec<ExclusionRule> = Vec::new();
    for (marker, pattern) in PROJECT_HINTS {
        if root.join(marker).is_file() {
            debug!("project marker '{marker}' found, excluding '{pattern}'");
            if !rules.iter().any(|r| r.pattern == *pattern) {
                rules.push(ExclusionRule::new(*pattern, RuleSource::BuiltIn));
            }
        }
    }
    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_no_markers_no_rules() {
        let dir = tempdir().unwrap();
        assert!(project_hint_rules(dir.path()).is_empty());
    }

    #[test]
    fn test_go_marker_injects_vendor() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("go.mod"), "module example.com/app\n").unwrap();
        let rules = project_hint_rules(dir.path());
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].pattern, "vendor/");
        assert_eq!(rules[0].source, RuleSource::BuiltIn);
    }

    #[test]
    fn test_java_markers_inject_build_outputs() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("pom.xml"), "<project/>").unwrap();
        fs::write(dir.path().join("build.gradle"), "").unwrap();
        let patterns: Vec<String> = project_hint_rules(dir.path())
            .into_iter()
            .map(|r| r.pattern)
            .collect();
        assert_eq!(patterns, vec!["target/", "build/"]);
    }

    #[test]
    fn test_duplicate_patterns_collapse() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("pom.xml"), "<project/>").unwrap();
        fs::write(dir.path().join("Cargo.toml"), "[package]").unwrap();
        let patterns: Vec<String> = project_hint_rules(dir.path())
            .into_iter()
            .map(|r| r.pattern)
            .collect();
        assert_eq!(patterns, vec!["target/"]);
    }

    #[test]
    fn test_marker_must_be_a_file() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("go.mod")).unwrap();
        assert!(project_hint_rules(dir.path()).is_empty());
    }
}
