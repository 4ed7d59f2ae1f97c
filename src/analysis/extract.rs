// src/analysis/extract.rs

//! Line-pattern extraction of dependency statements and top-level
//! structural declarations.
//!
//! Extraction is a best-effort heuristic: each line is trimmed and tested
//! against a fixed per-language prefix regex. No parsing, no AST; malformed
//! or minified sources simply yield fewer (or stranger) lines. Languages
//! without a pattern table yield empty results, which is not an error.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use super::Language;
use crate::constants::STRUCTURE_CAP;

struct ExtractionRules {
    dependency: Regex,
    structure: Regex,
}

macro_rules! rules {
    ($dep:expr, $structure:expr) => {
        Lazy::new(|| ExtractionRules {
            dependency: Regex::new($dep).unwrap(),
            structure: Regex::new($structure).unwrap(),
        })
    };
}

static PYTHON: Lazy<ExtractionRules> = rules!(
    r"^(?:import|from)\s+\S",
    r"^(?:class|def|async\s+def)\s+\w"
);

static JAVASCRIPT: Lazy<ExtractionRules> = rules!(
    r"^(?:import\s|import\(|(?:const|let|var)\s+.+=\s*require\s*\(|require\s*\()",
    r"^(?:class|function|export)\b|^(?:const|let|var)\s+\w+\s*=.*=>"
);

static TYPESCRIPT: Lazy<ExtractionRules> = rules!(
    r"^(?:import\s|import\(|(?:const|let|var)\s+.+=\s*require\s*\(|require\s*\()",
    r"^(?:class|function|export|interface|type)\b|^(?:const|let|var)\s+\w+\s*=.*=>"
);

static GO: Lazy<ExtractionRules> = rules!(
    r"^import\b",
    r"^(?:func|type|var|const|package)\b"
);

static JAVA: Lazy<ExtractionRules> = rules!(
    r"^import\s+\S",
    r"^(?:public|private|protected)\s"
);

static RUST: Lazy<ExtractionRules> = rules!(
    r"^(?:use\s+\S|extern\s+crate\s)",
    r"^(?:pub(?:\([^)]*\))?\s+)?(?:async\s+)?(?:unsafe\s+)?(?:fn|struct|enum|trait|impl|mod)\b"
);

static RUBY: Lazy<ExtractionRules> = rules!(
    r"^require(?:_relative)?\s",
    r"^(?:class|module|def)\s"
);

static PHP: Lazy<ExtractionRules> = rules!(
    r"^(?:use\s|require(?:_once)?[\s(]|include(?:_once)?[\s(])",
    r"^(?:(?:abstract\s+|final\s+)?class|interface|trait|function)\s"
);

fn rules_for(language: Language) -> Option<&'static ExtractionRules> {
    match language {
        Language::Python => Some(&PYTHON),
        Language::JavaScript => Some(&JAVASCRIPT),
        Language::TypeScript => Some(&TYPESCRIPT),
        Language::Go => Some(&GO),
        Language::Java => Some(&JAVA),
        Language::Rust => Some(&RUST),
        Language::Ruby => Some(&RUBY),
        Language::Php => Some(&PHP),
        _ => None,
    }
}

/// Extracts dependency lines, deduplicated, in first-seen order.
pub fn extract_dependencies(content: &str, language: Language) -> Vec<String> {
    let Some(rules) = rules_for(language) else {
        return Vec::new();
    };
    let mut seen = HashSet::new();
    let mut dependencies = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if rules.dependency.is_match(line) && seen.insert(line.to_string()) {
            dependencies.push(line.to_string());
        }
    }
    dependencies
}

/// Extracts top-level declaration lines in source order, capped at
/// [`STRUCTURE_CAP`]. Duplicates are kept.
pub fn extract_structure(content: &str, language: Language) -> Vec<String> {
    let Some(rules) = rules_for(language) else {
        return Vec::new();
    };
    let mut structure = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if rules.structure.is_match(line) {
            structure.push(line.to_string());
            if structure.len() == STRUCTURE_CAP {
                break;
            }
        }
    }
    structure
}
