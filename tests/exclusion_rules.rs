// tests/exclusion_rules.rs

mod common;

use assert_cmd::prelude::*;
use common::{projscan_cmd, read_report, record_paths};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_directory_form_rule_prunes_subtree() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::create_dir_all(temp.path().join("node_modules/pkg"))?;
    fs::write(temp.path().join("node_modules/pkg/index.js"), "x")?;
    fs::create_dir(temp.path().join("my_node_modules"))?;
    fs::write(temp.path().join("my_node_modules/x.js"), "x")?;
    fs::write(temp.path().join("app.js"), "x")?;

    projscan_cmd().current_dir(temp.path()).assert().success();

    let report = read_report(temp.path());
    // "node_modules/" is a default exclusion; a name that merely contains
    // "node_modules" is not excluded.
    assert_eq!(
        record_paths(&report),
        vec!["app.js", "my_node_modules/x.js"]
    );

    temp.close()?;
    Ok(())
}

#[test]
fn test_glob_rule_from_cli() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::create_dir_all(temp.path().join("a/b"))?;
    fs::write(temp.path().join("a/b/c.min.js"), "x")?;
    fs::write(temp.path().join("c.min.js"), "x")?;
    fs::write(temp.path().join("c.min.js.bak"), "x")?;

    projscan_cmd()
        .args(["-i", "**/*.min.js"])
        .current_dir(temp.path())
        .assert()
        .success();

    let report = read_report(temp.path());
    assert_eq!(record_paths(&report), vec!["c.min.js.bak"]);

    temp.close()?;
    Ok(())
}

#[test]
fn test_brace_glob_rule() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::create_dir_all(temp.path().join("build"))?;
    fs::create_dir_all(temp.path().join("a/dist/b"))?;
    fs::write(temp.path().join("build/x.txt"), "x")?;
    fs::write(temp.path().join("a/dist/b/c.txt"), "x")?;
    fs::write(temp.path().join("a/keep.txt"), "x")?;

    projscan_cmd()
        .args(["-i", "**/{build,dist}/**"])
        .current_dir(temp.path())
        .assert()
        .success();

    let report = read_report(temp.path());
    assert_eq!(record_paths(&report), vec!["a/keep.txt"]);

    temp.close()?;
    Ok(())
}

#[test]
fn test_gitignore_lines_are_honored_flat() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join(".gitignore"), "# generated\n\nlogs/\n*.tmp\n")?;
    fs::create_dir(temp.path().join("logs"))?;
    fs::write(temp.path().join("logs/app.log"), "x")?;
    fs::write(temp.path().join("scratch.tmp"), "x")?;
    fs::write(temp.path().join("keep.txt"), "x")?;

    projscan_cmd().current_dir(temp.path()).assert().success();

    let report = read_report(temp.path());
    assert_eq!(record_paths(&report), vec![".gitignore", "keep.txt"]);

    let patterns: Vec<&str> = report["projectStructure"]["summary"]["excludedPatterns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p.as_str().unwrap())
        .collect();
    assert!(patterns.contains(&"logs/"));
    assert!(patterns.contains(&"*.tmp"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_no_gitignore_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join(".gitignore"), "*.tmp\n")?;
    fs::write(temp.path().join("scratch.tmp"), "x")?;

    projscan_cmd()
        .arg("--no-gitignore")
        .current_dir(temp.path())
        .assert()
        .success();

    let report = read_report(temp.path());
    assert_eq!(record_paths(&report), vec![".gitignore", "scratch.tmp"]);

    temp.close()?;
    Ok(())
}

#[test]
fn test_environment_excludes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::create_dir(temp.path().join("generated"))?;
    fs::write(temp.path().join("generated/out.txt"), "x")?;
    fs::write(temp.path().join("keep.txt"), "x")?;

    projscan_cmd()
        .env("PROJSCAN_EXCLUDE", "generated/")
        .current_dir(temp.path())
        .assert()
        .success();
    let report = read_report(temp.path());
    assert_eq!(record_paths(&report), vec!["keep.txt"]);

    projscan_cmd()
        .env("PROJSCAN_EXCLUDE", "generated/")
        .arg("--no-env-excludes")
        .current_dir(temp.path())
        .assert()
        .success();
    let report = read_report(temp.path());
    assert_eq!(record_paths(&report), vec!["generated/out.txt", "keep.txt"]);

    temp.close()?;
    Ok(())
}

#[test]
fn test_legacy_ignore_merges_with_explicit() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("old.dat"), "x")?;
    fs::write(temp.path().join("new.dat"), "x")?;
    fs::write(temp.path().join("keep.txt"), "x")?;

    projscan_cmd()
        .args(["-i", "new.dat", "--legacy-ignore", "old.dat"])
        .current_dir(temp.path())
        .assert()
        .success();

    let report = read_report(temp.path());
    assert_eq!(record_paths(&report), vec!["keep.txt"]);

    temp.close()?;
    Ok(())
}

#[test]
fn test_vcs_metadata_always_excluded() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::create_dir_all(temp.path().join(".git/refs"))?;
    fs::write(temp.path().join(".git/HEAD"), "ref: refs/heads/main")?;
    fs::write(temp.path().join("main.c"), "int main() {}")?;

    // Even with every configurable source disabled, VCS metadata stays out.
    projscan_cmd()
        .args(["--no-gitignore", "-i", "does-not-match-anything"])
        .current_dir(temp.path())
        .assert()
        .success();

    let report = read_report(temp.path());
    assert_eq!(record_paths(&report), vec!["main.c"]);

    temp.close()?;
    Ok(())
}
