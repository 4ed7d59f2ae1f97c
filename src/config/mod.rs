//! Defines the resolved `ScanConfig` snapshot and its builder.
//!
//! A `ScanConfig` is created once per scan invocation by merging every
//! exclusion source (explicit list, legacy list, host-environment excludes,
//! `.gitignore` lines) and is never mutated mid-scan. The builder is the
//! configuration surface consumed from the CLI or from library callers.

use std::path::PathBuf;

use crate::matching::ExclusionRule;

pub use builder::ConfigBuilder;
mod builder;
pub(crate) mod gitignore;

/// Where the serialized report is written.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OutputTarget {
    /// Write to the given file; relative paths resolve inside the scan root.
    File(PathBuf),
    /// Write to standard output.
    Stdout,
}

/// Resolved, immutable configuration for a single scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Canonicalized scan root.
    pub root: PathBuf,
    /// Files larger than this many bytes are silently skipped.
    pub max_file_size: u64,
    /// The scan stops with a terminal warning once this many files are accepted.
    pub max_file_count: usize,
    /// Report destination.
    pub output: OutputTarget,
    /// Merged exclusion rules from every configured source.
    pub rules: Vec<ExclusionRule>,
}
