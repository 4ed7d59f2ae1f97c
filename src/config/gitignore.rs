// src/config/gitignore.rs

//! Flat `.gitignore` ingestion.
//!
//! Lines are trimmed and taken as plain exclusion patterns; blank lines and
//! `#` comments are discarded. Negation (`!`), anchoring, and nested
//! `.gitignore` files are deliberately not supported — each surviving line
//! is matched with the same substring/glob semantics as any other rule.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use crate::matching::{ExclusionRule, RuleSource};

/// Reads exclusion rules from `<root>/.gitignore`, if present.
///
/// A missing or unreadable file contributes no rules; it is never an error.
pub(crate) fn load_rules(root: &Path) -> Vec<ExclusionRule> {
    let path = root.join(".gitignore");
    match fs::read_to_string(&path) {
        Ok(content) => parse_lines(&content),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            debug!("could not read '{}': {}", path.display(), err);
            Vec::new()
        }
    }
}

pub(crate) fn parse_lines(content: &str) -> Vec<ExclusionRule> {
    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            if let Some(negated) = line.strip_prefix('!') {
                // Negation is unsupported; a literal "!x" rule could never
                // match a real path, so drop the line instead.
                debug!("ignoring unsupported gitignore negation '!{negated}'");
                return None;
            }
            Some(ExclusionRule::new(line, RuleSource::Gitignore))
        })
        .collect()
}
