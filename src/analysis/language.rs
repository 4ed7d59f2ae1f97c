// src/analysis/language.rs

//! Maps file extensions to semantic language tags.

use serde::{Serialize, Serializer};
use std::fmt;
use std::path::Path;

/// Semantic language tag for a scanned file.
///
/// `classify` is total: any extension not in the table yields `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    TypeScript,
    Python,
    Java,
    Ruby,
    Php,
    Go,
    Rust,
    Cpp,
    Html,
    Css,
    Json,
    Markdown,
    Shell,
    Unknown,
}

impl Language {
    /// Classifies a bare extension (without dot), case-insensitively.
    pub fn classify(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            "js" | "jsx" | "mjs" | "cjs" => Language::JavaScript,
            "ts" | "tsx" => Language::TypeScript,
            "py" => Language::Python,
            "java" => Language::Java,
            "rb" => Language::Ruby,
            "php" => Language::Php,
            "go" => Language::Go,
            "rs" => Language::Rust,
            "c" | "h" | "cpp" | "hpp" | "cc" | "hh" | "cxx" => Language::Cpp,
            "html" | "htm" => Language::Html,
            "css" | "scss" | "less" => Language::Css,
            "json" => Language::Json,
            "md" | "markdown" => Language::Markdown,
            "sh" | "bash" | "zsh" => Language::Shell,
            _ => Language::Unknown,
        }
    }

    /// Classifies a path by its extension; extensionless paths are `Unknown`.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::classify)
            .unwrap_or(Language::Unknown)
    }

    /// The tag as it appears in the report.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::Ruby => "Ruby",
            Language::Php => "PHP",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::Cpp => "C/C++",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Json => "JSON",
            Language::Markdown => "Markdown",
            Language::Shell => "Shell",
            Language::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
