//! CLI Integration Tests
//!
//! Runs the `uitslagen` binary with assert_cmd against .xlsx files on disk.

#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

mod common;

use assert_cmd::Command;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_workbook(dir: &TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, bytes).unwrap();
    path
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("uitslagen").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("uitslagen"))
        .stdout(predicate::str::contains("COMMANDS"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("uitslagen").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("uitslagen"));
}

#[test]
fn test_server_help() {
    let mut cmd = Command::cargo_bin("uitslagen-server").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("/api/v1/convert"));
}

// ═══════════════════════════════════════════════════════════════════════════
// CONVERT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_convert_writes_report() {
    let dir = TempDir::new().unwrap();
    let input = write_workbook(&dir, "uitslagen.xlsx", &two_sheet_workbook());
    let output = dir.path().join("rapport.txt");

    let mut cmd = Command::cargo_bin("uitslagen").unwrap();
    cmd.arg("convert")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Conversion Complete"))
        .stdout(predicate::str::contains("Matches: 2"));

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.starts_with("<body>\n<subhead_lead>2E KLASSE A</subhead_lead>"));
    assert_eq!(report.matches("<subhead_lead>").count(), 1);
    assert!(report.ends_with("</body>"));
}

#[test]
fn test_convert_default_output_name() {
    let dir = TempDir::new().unwrap();
    let input = write_workbook(&dir, "uitslagen.xlsx", &two_sheet_workbook());

    let mut cmd = Command::cargo_bin("uitslagen").unwrap();
    cmd.current_dir(dir.path())
        .arg("convert")
        .arg(&input)
        .assert()
        .success();

    assert!(dir.path().join("uitslagen_output.txt").exists());
}

#[test]
fn test_convert_verbose_lists_divisions() {
    let dir = TempDir::new().unwrap();
    let input = write_workbook(&dir, "uitslagen.xlsx", &two_sheet_workbook());
    let output = dir.path().join("out.txt");

    let mut cmd = Command::cargo_bin("uitslagen").unwrap();
    cmd.args(["convert", "--verbose"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("2E KLASSE A"))
        .stdout(predicate::str::contains("Found 2 sheets, 3 rows"));
}

#[test]
fn test_convert_rejects_non_xlsx() {
    let dir = TempDir::new().unwrap();
    let input = write_workbook(&dir, "uitslagen.csv", b"a,b,c\n");

    let mut cmd = Command::cargo_bin("uitslagen").unwrap();
    cmd.arg("convert")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file type"))
        .stderr(predicate::str::contains("only .xlsx files are accepted"))
        .stderr(predicate::str::contains("UnsupportedFile").not());
}

#[test]
fn test_convert_empty_workbook_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = write_workbook(&dir, "leeg.xlsx", &xlsx(&[("Blad1", vec![])]));
    let output = dir.path().join("out.txt");

    let mut cmd = Command::cargo_bin("uitslagen").unwrap();
    cmd.arg("convert")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No data found in the Excel file"))
        .stderr(predicate::str::contains("NoData").not());

    assert!(!output.exists());
}

#[test]
fn test_convert_with_config_file() {
    let dir = TempDir::new().unwrap();
    let bytes = xlsx(&[(
        "Blad1",
        vec![
            vec![Text("Thuis"), Text("Uit"), Text("TG"), Text("UG")],
            vec![Text("A"), Text("B"), Number(5.0), Number(1.0)],
        ],
    )]);
    let input = write_workbook(&dir, "compact.xlsx", &bytes);
    let config = dir.path().join("kolommen.yaml");
    fs::write(
        &config,
        "columns:\n  home: 0\n  away: 1\n  home_goals: 2\n  away_goals: 3\n",
    )
    .unwrap();
    let output = dir.path().join("out.txt");

    let mut cmd = Command::cargo_bin("uitslagen").unwrap();
    cmd.arg("convert")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("<subhead>A - B 5-1 (0-0)</subhead>"));
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_inspect_reports_detection() {
    let dir = TempDir::new().unwrap();
    let input = write_workbook(&dir, "uitslagen.xlsx", &two_sheet_workbook());

    let mut cmd = Command::cargo_bin("uitslagen").unwrap();
    cmd.arg("inspect")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Zaterdag, Zondag"))
        .stdout(predicate::str::contains("Rows:   3"))
        .stdout(predicate::str::contains("header 'Doelpuntenmakers'"));
}
