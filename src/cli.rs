// src/cli.rs

use clap::Parser;

use crate::constants::DEFAULT_OUTPUT_FILE;

/// Scans a project tree and writes a structured JSON summary of its contents.
///
/// projscan walks a project directory, detects each file's language from its
/// extension, and pulls out import/dependency statements and top-level
/// declarations with lightweight line heuristics. The result is a single
/// JSON artifact describing the project's structure, suitable for tooling
/// that wants a cheap map of a codebase without building it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Root directory of the project to scan.
    #[arg(default_value = ".")]
    pub root: String,

    // --- Output Options ---
    /// Write the report to this file. Relative paths resolve inside the scan root.
    #[arg(short = 'o', long, value_name = "FILE", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: String,

    /// Print the report to stdout instead of writing a file.
    #[arg(long, action = clap::ArgAction::SetTrue, conflicts_with = "output")]
    pub stdout: bool,

    // --- Budget Options ---
    /// Maximum file size to scan (e.g., "1M", "512k"). Larger files are skipped silently.
    #[arg(short = 'm', long, value_name = "BYTES")]
    pub max_size: Option<String>,

    /// Maximum number of files to include before the scan stops with a warning entry.
    #[arg(long, value_name = "COUNT")]
    pub max_files: Option<usize>,

    // --- Exclusion Options ---
    /// Exclusion patterns (glob, directory form "name/", or substring; repeatable).
    /// Replaces the built-in default exclusions.
    #[arg(short = 'i', long = "ignore", value_name = "PATTERN", num_args = 1..)]
    pub ignore_patterns: Option<Vec<String>>,

    /// Additional exclusion patterns merged after --ignore. Kept for
    /// compatibility with older configurations.
    #[arg(long = "legacy-ignore", value_name = "PATTERN", num_args = 1.., hide = true)]
    pub legacy_ignore: Option<Vec<String>>,

    /// Do not read exclusion patterns from the root .gitignore.
    #[arg(short = 't', long, action = clap::ArgAction::SetTrue)]
    pub no_gitignore: bool,

    /// Ignore the PROJSCAN_EXCLUDE environment exclude list.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_env_excludes: bool,

    // --- Watch Mode ---
    #[cfg(feature = "watch")]
    /// Keep running and re-scan after each burst of filesystem changes.
    #[arg(short = 'w', long, action = clap::ArgAction::SetTrue)]
    pub watch: bool,

    #[cfg(feature = "watch")]
    /// Quiet period in milliseconds between a change burst and the re-scan.
    #[arg(long, value_name = "MS", default_value_t = crate::constants::DEFAULT_QUIET_PERIOD_MS)]
    pub debounce: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["projscan"]);
        assert_eq!(cli.root, ".");
        assert_eq!(cli.output, DEFAULT_OUTPUT_FILE);
        assert!(!cli.stdout);
        assert!(cli.max_size.is_none());
        assert!(cli.ignore_patterns.is_none());
    }

    #[test]
    fn test_repeatable_ignore_patterns() {
        let cli = Cli::parse_from(["projscan", ".", "-i", "vendor/", "*.gen.go"]);
        assert_eq!(
            cli.ignore_patterns,
            Some(vec!["vendor/".to_string(), "*.gen.go".to_string()])
        );
    }

    #[test]
    fn test_stdout_conflicts_with_output_file() {
        let result = Cli::try_parse_from(["projscan", ".", "--stdout", "-o", "x.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_stdout_alone_is_fine() {
        let cli = Cli::parse_from(["projscan", ".", "--stdout"]);
        assert!(cli.stdout);
    }
}
