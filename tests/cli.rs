//! End-to-end tests for the `taskpaper` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn taskpaper() -> Command {
    Command::cargo_bin("taskpaper").expect("binary should build")
}

fn outline_file(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents).expect("write temp file");
    file
}

#[test]
fn test_treeviz_is_default_format() {
    let file = outline_file(b"Groceries:\n\t- Milk\n\t- Eggs\n");
    taskpaper()
        .arg(file.path())
        .assert()
        .success()
        .stdout("└─ project: Groceries\n  ├─ task: Milk\n  └─ task: Eggs\n");
}

#[test]
fn test_reads_stdin() {
    taskpaper()
        .args(["--format", "sexp"])
        .write_stdin("- Buy milk @home\n")
        .assert()
        .success()
        .stdout("(task \"Buy milk @home\" (tag \"home\"))\n");
}

#[test]
fn test_flat_config() {
    taskpaper()
        .args(["-c", "flat", "-f", "sexp", "-"])
        .write_stdin("A:\n\tB:\n")
        .assert()
        .success()
        .stdout("(project \"A\")\n(project \"B\")\n");
}

#[test]
fn test_json_format() {
    taskpaper()
        .args(["--format", "json"])
        .write_stdin("Work:\n- Email @due(today)\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"arg\": \"today\""));
}

#[test]
fn test_decode_error_prints_partial_and_fails() {
    let file = outline_file(b"Work:\n\t- Email\n\xff\n\t- Lost\n");
    taskpaper()
        .arg(file.path())
        .assert()
        .failure()
        .stdout("└─ project: Work\n  └─ task: Email\n")
        .stderr(predicate::str::contains("line 3 is not valid UTF-8"));
}

#[test]
fn test_unknown_config() {
    taskpaper()
        .args(["--config", "sideways"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration 'sideways'"));
}

#[test]
fn test_unknown_format() {
    taskpaper()
        .args(["--format", "xml"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Format 'xml' not found"));
}

#[test]
fn test_missing_file() {
    taskpaper()
        .arg("/definitely/not/here.taskpaper")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading file"));
}

#[test]
fn test_list_configs_and_formats() {
    taskpaper()
        .arg("--list-configs")
        .assert()
        .success()
        .stdout(predicate::str::contains("nested-width"));
    taskpaper()
        .arg("--list-formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("sexp"));
}
