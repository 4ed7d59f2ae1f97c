// src/config/builder.rs

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use byte_unit::Byte;
use std::str::FromStr;

use super::{gitignore, OutputTarget, ScanConfig};
use crate::cli::Cli;
use crate::constants::{
    DEFAULT_EXCLUDES, DEFAULT_MAX_FILE_COUNT, DEFAULT_MAX_FILE_SIZE, DEFAULT_OUTPUT_FILE,
    ENV_EXCLUDE_VAR,
};
use crate::errors::{root_error, ScanError};
use crate::matching::{ExclusionRule, RuleSource};

/// Builder for [`ScanConfig`].
///
/// Holds the unresolved configuration surface; `build` validates the root
/// and merges the exclusion sources into a fresh snapshot. An orchestrator
/// keeps the builder around and rebuilds per scan, so edits to `.gitignore`
/// between scans are picked up.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    root: PathBuf,
    max_file_size: u64,
    max_file_count: usize,
    output: OutputTarget,
    exclude: Vec<String>,
    legacy_exclude: Vec<String>,
    environment_excludes: Vec<(String, bool)>,
    use_environment_excludes: bool,
    use_gitignore: bool,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_file_count: DEFAULT_MAX_FILE_COUNT,
            output: OutputTarget::File(PathBuf::from(DEFAULT_OUTPUT_FILE)),
            exclude: DEFAULT_EXCLUDES.iter().map(|p| p.to_string()).collect(),
            legacy_exclude: Vec::new(),
            environment_excludes: Vec::new(),
            use_environment_excludes: true,
            use_gitignore: true,
        }
    }
}

impl ConfigBuilder {
    /// Creates a builder with default budgets, default excludes, and the
    /// current directory as root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory to scan.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Sets the maximum file size in bytes.
    pub fn max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Sets the maximum number of accepted files.
    pub fn max_file_count(mut self, count: usize) -> Self {
        self.max_file_count = count;
        self
    }

    /// Sets the report destination.
    pub fn output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }

    /// Replaces the explicit exclusion list (and with it the defaults).
    pub fn exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude = patterns;
        self
    }

    /// Sets the legacy exclusion list, merged in addition to `exclude`.
    pub fn legacy_exclude(mut self, patterns: Vec<String>) -> Self {
        self.legacy_exclude = patterns;
        self
    }

    /// Supplies the host-environment exclude map. Only entries whose flag is
    /// `true` are honored.
    pub fn environment_excludes(
        mut self,
        entries: impl IntoIterator<Item = (String, bool)>,
    ) -> Self {
        self.environment_excludes = entries.into_iter().collect();
        self
    }

    /// Controls whether the host-environment exclude map is honored.
    pub fn use_environment_excludes(mut self, enabled: bool) -> Self {
        self.use_environment_excludes = enabled;
        self
    }

    /// Controls whether exclusion lines are read from the root `.gitignore`.
    pub fn use_gitignore(mut self, enabled: bool) -> Self {
        self.use_gitignore = enabled;
        self
    }

    /// Validates the root and resolves the effective configuration.
    ///
    /// # Errors
    /// Returns [`ScanError::RootUnavailable`] if the root does not exist, is
    /// not a directory, or cannot be listed. No other source can fail: a
    /// missing or unreadable `.gitignore` simply contributes no rules.
    pub fn build(&self) -> Result<ScanConfig, ScanError> {
        let root = self
            .root
            .canonicalize()
            .map_err(|e| root_error(e, &self.root))?;
        if !root.is_dir() {
            return Err(root_error(io::Error::other("not a directory"), &self.root));
        }
        // Listing must work; an opaque directory would fail every walk anyway.
        fs::read_dir(&root).map_err(|e| root_error(e, &self.root))?;

        let mut rules = Vec::new();
        for pattern in &self.exclude {
            rules.push(ExclusionRule::new(pattern, RuleSource::Explicit));
        }
        for pattern in &self.legacy_exclude {
            rules.push(ExclusionRule::new(pattern, RuleSource::Legacy));
        }
        if self.use_environment_excludes {
            for (pattern, enabled) in &self.environment_excludes {
                if *enabled {
                    rules.push(ExclusionRule::new(pattern, RuleSource::Environment));
                }
            }
        }
        if self.use_gitignore {
            rules.extend(gitignore::load_rules(&root));
        }

        Ok(ScanConfig {
            root,
            max_file_size: self.max_file_size,
            max_file_count: self.max_file_count,
            output: self.output.clone(),
            rules,
        })
    }
}

/// Parses an optional human-readable size string ("1M", "512k") into bytes.
fn parse_max_size(max_size_str: Option<String>) -> Result<Option<u64>> {
    max_size_str
        .map(|s| {
            Byte::from_str(&s)
                .map(|b| b.as_u128().min(u64::MAX as u128) as u64)
                .with_context(|| format!("Invalid size format: '{}'", s))
        })
        .transpose()
}

impl TryFrom<Cli> for ConfigBuilder {
    type Error = anyhow::Error;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let mut builder = ConfigBuilder::new().root(&cli.root);

        if let Some(bytes) = parse_max_size(cli.max_size)? {
            builder = builder.max_file_size(bytes);
        }
        if let Some(count) = cli.max_files {
            builder = builder.max_file_count(count);
        }
        builder = if cli.stdout {
            builder.output(OutputTarget::Stdout)
        } else {
            builder.output(OutputTarget::File(PathBuf::from(cli.output)))
        };
        if let Some(patterns) = cli.ignore_patterns {
            builder = builder.exclude(patterns);
        }
        if let Some(patterns) = cli.legacy_ignore {
            builder = builder.legacy_exclude(patterns);
        }
        builder = builder
            .use_gitignore(!cli.no_gitignore)
            .use_environment_excludes(!cli.no_env_excludes);

        if let Ok(raw) = env::var(ENV_EXCLUDE_VAR) {
            let entries: Vec<(String, bool)> = raw
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(|p| (p.to_string(), true))
                .collect();
            builder = builder.environment_excludes(entries);
        }

        Ok(builder)
    }
}

impl ConfigBuilder {
    /// Read-only view of the configured root, before canonicalization.
    pub fn root_path(&self) -> &Path {
        &self.root
    }

    /// Read-only view of the configured output target.
    pub fn output_target(&self) -> &OutputTarget {
        &self.output
    }
}
