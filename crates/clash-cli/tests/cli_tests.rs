//! Integration tests for the `clashes` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the detect,
//! summary, and check subcommands through the actual binary, including stdin
//! input, file I/O, and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn clashes() -> Command {
    Command::cargo_bin("clashes").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// detect
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn detect_text_lists_each_clash() {
    clashes()
        .args(["detect", "-i", &fixture("slots.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Room clash in R101 on Monday: CS101 Algorithms (08:00 - 09:00) vs MA201 Calculus (08:30 - 09:30)",
        ))
        .stdout(predicate::str::contains(
            "Teacher clash in Dr. Adeyemi on Monday: CS101 Algorithms (08:00 - 09:00) vs CS102 Programming (08:45 - 10:00)",
        ));
}

#[test]
fn detect_reads_stdin() {
    let input = r#"[
        {"id": 1, "room_id": 5, "day_of_week": 0, "start_time": "08:00", "end_time": "09:00"},
        {"id": 2, "room_id": 5, "day_of_week": 0, "start_time": "08:30", "end_time": "09:30"}
    ]"#;

    clashes()
        .arg("detect")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Room clash in Unknown Room on Monday"));
}

#[test]
fn detect_json_output() {
    let output = clashes()
        .args(["detect", "--format", "json", "-i", &fixture("slots.json")])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let list = value.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["type"], "room");
    assert_eq!(list[0]["room_name"], "R101");
    assert_eq!(list[1]["type"], "teacher");
    assert_eq!(list[1]["teacher_id"], 7);
}

#[test]
fn detect_only_teacher() {
    clashes()
        .args(["detect", "--only", "teacher", "-i", &fixture("slots.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Teacher clash"))
        .stdout(predicate::str::contains("Room clash").not());
}

#[test]
fn detect_clean_timetable() {
    clashes()
        .args(["detect", "-i", &fixture("clean.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains("No clashes found."));
}

#[test]
fn detect_timetables_across_envelope() {
    clashes()
        .args(["detect", "--timetables", "-i", &fixture("timetables.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Room clash in Hall A on Tuesday: CS230 Databases (10:00 - 12:00) vs MA110 Linear Algebra (11:00 - 12:30)",
        ));
}

#[test]
fn detect_writes_output_file() {
    let output_path = std::env::temp_dir().join("clashes-test-detect-output.txt");
    let _ = std::fs::remove_file(&output_path);

    clashes()
        .args(["detect", "-i", &fixture("slots.json"), "-o"])
        .arg(&output_path)
        .assert()
        .success();

    let content = std::fs::read_to_string(&output_path).expect("output file must exist");
    assert_eq!(content.lines().count(), 2);

    let _ = std::fs::remove_file(&output_path);
}

#[test]
fn detect_invalid_json_fails() {
    clashes()
        .arg("detect")
        .write_stdin("{ not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse slots JSON"));
}

#[test]
fn detect_missing_file_fails() {
    clashes()
        .args(["detect", "-i", "/nonexistent/slots.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// summary
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn summary_text() {
    clashes()
        .args(["summary", "-i", &fixture("slots.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Slots:          4"))
        .stdout(predicate::str::contains("Clashes:        2"))
        .stdout(predicate::str::contains("Affected slots: 3"))
        .stdout(predicate::str::contains("Monday"));
}

#[test]
fn summary_json() {
    let output = clashes()
        .args(["summary", "--format", "json", "-i", &fixture("slots.json")])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total"], 2);
    assert_eq!(value["room"], 1);
    assert_eq!(value["teacher"], 1);
    assert_eq!(value["by_day"]["Monday"], 2);
}

#[test]
fn summary_text_labels_unnamed_days() {
    let input = r#"[
        {"id": 1, "room_id": 5, "day_of_week": 9, "start_time": "08:00", "end_time": "09:00"},
        {"id": 2, "room_id": 5, "day_of_week": 9, "start_time": "08:30", "end_time": "09:30"}
    ]"#;

    clashes()
        .arg("summary")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("  day 9         1"));
}

// ─────────────────────────────────────────────────────────────────────────────
// check
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_slot_with_clashes_exits_nonzero() {
    clashes()
        .args(["check", "--id", "1", "-i", &fixture("slots.json")])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Room clash"))
        .stdout(predicate::str::contains("Teacher clash"));
}

#[test]
fn check_clean_slot_succeeds() {
    clashes()
        .args(["check", "--id", "4", "-i", &fixture("slots.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Slot 4 has no clashes."));
}

#[test]
fn no_subcommand_shows_usage() {
    clashes()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
