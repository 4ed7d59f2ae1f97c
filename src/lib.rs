//! `projscan` is a library and command-line tool that scans a project
//! directory tree and produces a structured JSON summary of its contents:
//! per-file metadata, detected programming language, extracted
//! import/dependency statements, and extracted top-level declarations.
//!
//! It is designed as a cheap, best-effort map of a codebase — no build, no
//! AST, no symbol resolution — driven by line-pattern heuristics per
//! language and a deterministic, exclusion-aware directory walk.
//!
//! As a library it exposes the pieces separately:
//! 1.  **Configure**: merge exclusion sources into a [`config::ScanConfig`].
//! 2.  **Scan**: walk, classify, and extract via [`Scanner::run`].
//! 3.  **React**: debounce change notifications into re-scans with
//!     [`ChangeDebouncer`].
//!
//! # Example: Library Usage
//!
//! ```
//! use projscan::{ConfigBuilder, Scanner};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // 1. Set up a project directory with a source file.
//! let dir = tempdir().unwrap();
//! fs::write(
//!     dir.path().join("app.py"),
//!     "import os\n\ndef main():\n    pass\n",
//! )
//! .unwrap();
//!
//! // 2. Configure and run one scan.
//! let scanner = Scanner::new(ConfigBuilder::new().root(dir.path()));
//! let report = scanner.run().unwrap();
//!
//! // 3. The report holds one record per accepted file, in walk order.
//! assert_eq!(report.project_structure.summary.file_count, 1);
//! let record = report.records().next().unwrap();
//! assert_eq!(record.path, "app.py");
//! assert_eq!(record.dependencies, vec!["import os".to_string()]);
//!
//! // The artifact was written into the scan root.
//! assert!(dir.path().join("project-structure.json").is_file());
//! ```

// Make modules public if they contain public types used in the API
pub mod analysis;
pub mod cancellation;
pub mod cli;
pub mod config;
pub mod constants;
pub mod debounce;
pub mod discovery;
pub mod errors;
pub mod matching;
pub mod output;
pub mod scan;
pub mod session;
#[cfg(feature = "watch")]
pub mod signal;
#[cfg(feature = "watch")]
pub mod watch;

// Re-export key public types for easier use as a library
pub use analysis::Language;
pub use cancellation::CancellationToken;
pub use config::{ConfigBuilder, OutputTarget, ScanConfig};
pub use debounce::ChangeDebouncer;
pub use errors::ScanError;
pub use output::{FileRecord, ScanReport};
pub use scan::Scanner;
pub use session::ScanSessionState;
