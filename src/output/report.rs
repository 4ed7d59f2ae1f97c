// src/output/report.rs

//! The serialized shape of a scan: per-file records, an optional terminal
//! budget warning, and a summary block.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analysis::Language;

/// Root of the report artifact.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub project_structure: ProjectStructure,
}

/// File list plus summary.
#[derive(Debug, Serialize)]
pub struct ProjectStructure {
    pub files: Vec<FileEntry>,
    pub summary: ScanSummary,
}

/// One entry in the file list: a scanned file, or the single terminal
/// warning appended when the file-count budget is exhausted.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum FileEntry {
    Record(FileRecord),
    Warning(BudgetWarning),
}

/// Extracted metadata for one accepted file. Immutable once appended.
#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    /// Path relative to the scan root, forward-slash separated.
    pub path: String,
    /// Detected language tag, or "Unknown".
    #[serde(rename = "type")]
    pub language: Language,
    /// File size in bytes.
    pub size: u64,
    /// Dependency lines, deduplicated, in first-seen order.
    pub dependencies: Vec<String>,
    /// Top-level declaration lines, source order, capped at 10.
    pub structure: Vec<String>,
}

/// Terminal marker emitted in place of further records.
#[derive(Debug, Serialize)]
pub struct BudgetWarning {
    pub warning: String,
}

impl BudgetWarning {
    /// The marker for an exhausted file-count budget.
    pub fn file_count(limit: usize) -> Self {
        Self {
            warning: format!("File limit of {limit} reached; remaining files were not scanned"),
        }
    }
}

/// Summary block for one completed scan.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummary {
    /// Number of file records emitted.
    pub file_count: usize,
    /// Completion time, ISO-8601 UTC.
    pub scanned_at: DateTime<Utc>,
    /// The effective exclusion patterns used for this run.
    pub excluded_patterns: Vec<String>,
}

impl ScanReport {
    /// Assembles a report, stamping the completion time.
    pub fn new(files: Vec<FileEntry>, file_count: usize, excluded_patterns: Vec<String>) -> Self {
        Self {
            project_structure: ProjectStructure {
                files,
                summary: ScanSummary {
                    file_count,
                    scanned_at: Utc::now(),
                    excluded_patterns,
                },
            },
        }
    }

    /// Iterates over the emitted file records, skipping any warning entry.
    pub fn records(&self) -> impl Iterator<Item = &FileRecord> {
        self.project_structure.files.iter().filter_map(|e| match e {
            FileEntry::Record(record) => Some(record),
            FileEntry::Warning(_) => None,
        })
    }

    /// Whether the walk stopped early on the file-count budget.
    pub fn truncated(&self) -> bool {
        self.project_structure
            .files
            .iter()
            .any(|e| matches!(e, FileEntry::Warning(_)))
    }
}
