// tests/project_hints.rs

mod common;

use assert_cmd::prelude::*;
use common::{projscan_cmd, read_report, record_paths};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_go_module_marker_injects_vendor_exclusion() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("go.mod"), "module example.com/app\n")?;
    fs::create_dir_all(temp.path().join("vendor/dep"))?;
    fs::write(temp.path().join("vendor/dep/dep.go"), "package dep\n")?;
    fs::write(temp.path().join("main.go"), "package main\n")?;

    // "vendor/" was never configured; the go.mod marker injects it.
    projscan_cmd()
        .args(["-i", "unrelated-pattern"])
        .current_dir(temp.path())
        .assert()
        .success();

    let report = read_report(temp.path());
    assert_eq!(record_paths(&report), vec!["go.mod", "main.go"]);

    let patterns: Vec<&str> = report["projectStructure"]["summary"]["excludedPatterns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p.as_str().unwrap())
        .collect();
    assert!(patterns.contains(&"vendor/"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_maven_marker_injects_target_exclusion() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("pom.xml"), "<project/>")?;
    fs::create_dir_all(temp.path().join("target/classes"))?;
    fs::write(temp.path().join("target/classes/App.class"), "x")?;
    fs::write(temp.path().join("App.java"), "public class App {}\n")?;

    projscan_cmd()
        .args(["-i", "unrelated-pattern"])
        .current_dir(temp.path())
        .assert()
        .success();

    let report = read_report(temp.path());
    assert_eq!(record_paths(&report), vec!["App.java", "pom.xml"]);

    temp.close()?;
    Ok(())
}

#[test]
fn test_no_marker_no_injection() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::create_dir(temp.path().join("vendor"))?;
    fs::write(temp.path().join("vendor/dep.go"), "package dep\n")?;

    projscan_cmd()
        .args(["-i", "unrelated-pattern"])
        .current_dir(temp.path())
        .assert()
        .success();

    let report = read_report(temp.path());
    // Without a go.mod marker, vendor/ is scanned like any directory.
    assert_eq!(record_paths(&report), vec!["vendor/dep.go"]);

    temp.close()?;
    Ok(())
}
