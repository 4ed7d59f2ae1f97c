// tests/common.rs

use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn projscan_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("projscan"))
}

// Reads and parses the default report artifact from a scan root.
#[allow(dead_code)]
pub fn read_report(root: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(root.join("project-structure.json"))
        .expect("report artifact should exist");
    serde_json::from_str(&content).expect("report artifact should be valid JSON")
}

// Returns the record paths from a parsed report, skipping any warning entry.
#[allow(dead_code)]
pub fn record_paths(report: &serde_json::Value) -> Vec<String> {
    report["projectStructure"]["files"]
        .as_array()
        .expect("files should be an array")
        .iter()
        .filter_map(|entry| entry["path"].as_str().map(str::to_string))
        .collect()
}
