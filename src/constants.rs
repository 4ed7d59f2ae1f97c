// src/constants.rs

/// Default maximum size in bytes for a file to be scanned.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_000_000;

/// Default maximum number of files accepted before the scan stops early.
pub const DEFAULT_MAX_FILE_COUNT: usize = 500;

/// Default name of the report artifact, written inside the scan root.
pub const DEFAULT_OUTPUT_FILE: &str = "project-structure.json";

/// Quiet period between a burst of change events and the triggered re-scan.
pub const DEFAULT_QUIET_PERIOD_MS: u64 = 2_000;

/// Maximum number of structure declarations retained per file.
pub const STRUCTURE_CAP: usize = 10;

/// Marker filename that is always excluded from scan results.
pub const MARKER_FILENAME: &str = ".projscan";

/// Version-control metadata directories, pruned regardless of configuration.
pub const VCS_DIRS: &[&str] = &[".git", ".hg", ".svn"];

/// Exclusion patterns applied when no explicit list is configured.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    "node_modules/",
    "dist/",
    "build/",
    "coverage/",
    "__pycache__/",
    "*.min.js",
    "*.min.css",
    "*.map",
];

/// Environment variable holding host-supplied exclude patterns (comma-separated).
pub const ENV_EXCLUDE_VAR: &str = "PROJSCAN_EXCLUDE";
