//! Deterministic directory traversal with prune-at-directory exclusion.
//!
//! Discovery is two-phased, mirroring a discover→process pipeline: a
//! sequential, lexicographically sorted walk first decides which files are
//! accepted (exclusions, size budget, count budget), then the accepted set
//! is read, classified, and extracted in parallel with an order-preserving
//! collect. The report's file order is therefore always the traversal
//! order, regardless of how many threads did the reading.

use std::fs;
use std::path::{Path, PathBuf};

use content_inspector::ContentType;
use log::{debug, trace, warn};
use rayon::prelude::*;
use walkdir::{DirEntry, WalkDir};

mod probe;

pub(crate) use probe::project_hint_rules;

use crate::analysis::{extract_dependencies, extract_structure, Language};
use crate::config::{OutputTarget, ScanConfig};
use crate::errors::ScanError;
use crate::matching::{self, ExclusionRule, RuleSource};
use crate::output::{BudgetWarning, FileEntry, FileRecord, ScanReport};

/// A file accepted during the walk, awaiting content analysis.
struct Candidate {
    absolute: PathBuf,
    relative: String,
    size: u64,
}

/// Walks the configured root and assembles the scan report.
///
/// Matched entries are pruned during traversal: an excluded directory's
/// subtree is never listed. Files beyond the size budget are skipped
/// silently; once the count budget is exhausted a single terminal warning
/// replaces all further records and the walk stops, siblings included.
pub fn walk(config: &ScanConfig) -> Result<ScanReport, ScanError> {
    let rules = effective_rules(config);

    let mut candidates: Vec<Candidate> = Vec::new();
    let mut accepted = 0usize;
    let mut truncated = false;

    let walker = WalkDir::new(&config.root)
        .follow_links(false)
        .sort_by_file_name();
    let mut entries = walker
        .into_iter()
        .filter_entry(|entry| keep_entry(entry, &config.root, &rules));

    loop {
        let entry = match entries.next() {
            None => break,
            Some(Ok(entry)) => entry,
            Some(Err(err)) => {
                warn!("skipping unreadable entry: {err}");
                continue;
            }
        };
        if entry.depth() == 0 || !entry.file_type().is_file() {
            continue;
        }
        let Some(relative) = relative_slash_path(entry.path(), &config.root) else {
            warn!("entry outside root, skipping: {}", entry.path().display());
            continue;
        };
        let size = match entry.metadata() {
            Ok(metadata) => metadata.len(),
            Err(err) => {
                warn!("skipping '{relative}' (metadata error: {err})");
                continue;
            }
        };
        if size > config.max_file_size {
            debug!("skipping '{relative}' ({size} bytes exceeds size budget)");
            continue;
        }

        accepted += 1;
        if accepted > config.max_file_count {
            debug!(
                "file-count budget of {} exhausted at '{relative}', stopping walk",
                config.max_file_count
            );
            truncated = true;
            break;
        }
        candidates.push(Candidate {
            absolute: entry.into_path(),
            relative,
            size,
        });
    }

    // Parallel read + analysis; collect preserves candidate order.
    let records: Vec<FileRecord> = candidates
        .into_par_iter()
        .map(analyze_candidate)
        .collect::<Vec<Option<FileRecord>>>()
        .into_iter()
        .flatten()
        .collect();

    let file_count = records.len();
    let mut files: Vec<FileEntry> = records.into_iter().map(FileEntry::Record).collect();
    if truncated {
        files.push(FileEntry::Warning(BudgetWarning::file_count(
            config.max_file_count,
        )));
    }

    let excluded_patterns = rules.iter().map(|r| r.pattern.clone()).collect();
    Ok(ScanReport::new(files, file_count, excluded_patterns))
}

/// The rule set for this walk: project-hint injections and the artifact's
/// own filename ahead of the configured rules.
fn effective_rules(config: &ScanConfig) -> Vec<ExclusionRule> {
    let mut rules = project_hint_rules(&config.root);
    if let OutputTarget::File(name) = &config.output {
        if let Some(artifact) = name.file_name().and_then(|n| n.to_str()) {
            // The previous run's report must never be scanned as input.
            rules.push(ExclusionRule::new(artifact, RuleSource::BuiltIn));
        }
    }
    rules.extend(config.rules.iter().cloned());
    rules
}

fn keep_entry(entry: &DirEntry, root: &Path, rules: &[ExclusionRule]) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    let Some(relative) = relative_slash_path(entry.path(), root) else {
        return true;
    };
    let is_dir = entry.file_type().is_dir();
    if matching::is_builtin_excluded(&relative, is_dir) {
        trace!("pruning '{relative}' (built-in exclusion)");
        return false;
    }
    // Directories are additionally probed with a trailing slash so that
    // directory-form and substring rules prune at the directory itself
    // instead of per-child.
    let excluded = matching::matches(&relative, rules)
        || (is_dir && matching::matches(&format!("{relative}/"), rules));
    if excluded {
        trace!("pruning '{relative}' (matched exclusion rule)");
    }
    !excluded
}

/// Root-relative path with forward slashes, independent of the host
/// separator convention.
fn relative_slash_path(path: &Path, root: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let mut out = String::new();
    for component in relative.components() {
        if !out.is_empty() {
            out.push('/');
        }
        out.push_str(&component.as_os_str().to_string_lossy());
    }
    (!out.is_empty()).then_some(out)
}

/// Reads and analyzes one accepted file. Any read or decode failure is a
/// per-file error: logged, the file is omitted, the scan continues.
fn analyze_candidate(candidate: Candidate) -> Option<FileRecord> {
    let bytes = match fs::read(&candidate.absolute) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("skipping '{}' (read error: {})", candidate.relative, err);
            return None;
        }
    };
    let head = &bytes[..bytes.len().min(1024)];
    match content_inspector::inspect(head) {
        ContentType::UTF_8 | ContentType::UTF_8_BOM => {}
        _ => {
            warn!("skipping '{}' (binary content)", candidate.relative);
            return None;
        }
    }
    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(err) => {
            warn!("skipping '{}' (not valid UTF-8: {})", candidate.relative, err);
            return None;
        }
    };

    let language = Language::from_path(&candidate.absolute);
    let dependencies = extract_dependencies(&content, language);
    let structure = extract_structure(&content, language);

    Some(FileRecord {
        path: candidate.relative,
        language,
        size: candidate.size,
        dependencies,
        structure,
    })
}
