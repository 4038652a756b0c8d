#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn roster_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("roster"));
    cmd.arg("--data-dir")
        .arg(temp.path().join("data"))
        .env("ROSTER_CONFIG_DIR", temp.path().join("config"))
        .env_remove("ROSTER_DATA_DIR")
        .env_remove("ROSTER_LOG_LEVEL")
        .env_remove("ROSTER_AVERAGE_PRECISION")
        .env_remove("RUST_LOG");
    cmd
}

fn stored_ids(data_dir: &Path, key: &str) -> Vec<i64> {
    let text = fs::read_to_string(data_dir.join(format!("{}.json", key))).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect()
}

#[test]
fn students_are_listed_with_class_average() {
    let temp = TempDir::new().unwrap();

    roster_cmd(&temp)
        .args(["student", "add", "An", "7", "8", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student added"));
    roster_cmd(&temp)
        .args(["student", "add", "Bo", "4", "4", "4"])
        .assert()
        .success();

    roster_cmd(&temp)
        .args(["student", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("An"))
        .stdout(predicate::str::contains("Bo"))
        .stdout(predicate::str::contains("Class average: 6.00"));
}

#[test]
fn out_of_range_grade_is_rejected_with_exit_code_2() {
    let temp = TempDir::new().unwrap();

    roster_cmd(&temp)
        .args(["student", "add", "An", "0", "8", "9"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Rejected"));

    assert!(!temp.path().join("data").join("students.json").exists());
}

#[test]
fn non_numeric_grade_is_rejected() {
    let temp = TempDir::new().unwrap();

    roster_cmd(&temp)
        .args(["student", "add", "An", "seven", "8", "9"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Rejected"));
}

#[test]
fn todo_toggle_moves_item_to_done() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");

    roster_cmd(&temp)
        .args(["todo", "add", "buy", "milk"])
        .assert()
        .success();
    roster_cmd(&temp)
        .args(["todo", "add", "water plants"])
        .assert()
        .success();

    let ids = stored_ids(&data, "todos");
    assert_eq!(ids.len(), 2);

    roster_cmd(&temp)
        .args(["todo", "toggle", &ids[0].to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("completed"));

    let output = roster_cmd(&temp).args(["todo", "list"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let done_header = stdout.find("Done").unwrap();
    assert!(stdout.find("water plants").unwrap() < done_header);
    assert!(stdout.find("buy milk").unwrap() > done_header);
}

#[test]
fn json_output_carries_affected_records() {
    let temp = TempDir::new().unwrap();

    let output = roster_cmd(&temp)
        .args(["--json", "todo", "add", "read"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["changed"], true);
    assert_eq!(value["affected_todos"][0]["text"], "read");
    assert_eq!(value["affected_todos"][0]["completed"], false);
}

#[test]
fn unknown_id_is_a_quiet_no_op() {
    let temp = TempDir::new().unwrap();

    roster_cmd(&temp)
        .args(["todo", "delete", "12345"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No to-do with id 12345"));
}

#[test]
fn naked_command_lists_both_collections() {
    let temp = TempDir::new().unwrap();

    roster_cmd(&temp)
        .args(["student", "add", "An", "10", "10", "10"])
        .assert()
        .success();
    roster_cmd(&temp).args(["todo", "add", "plan"]).assert().success();

    roster_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("Class average: 10.00"));
}

#[test]
fn reset_clears_stored_state() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");

    roster_cmd(&temp)
        .args(["student", "add", "An", "5", "5", "5"])
        .assert()
        .success();
    roster_cmd(&temp).args(["todo", "add", "plan"]).assert().success();

    roster_cmd(&temp)
        .args(["reset", "--todos"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared todos"));
    assert!(!data.join("todos.json").exists());
    assert!(data.join("students.json").exists());

    roster_cmd(&temp).arg("reset").assert().success();
    assert!(!data.join("students.json").exists());

    roster_cmd(&temp)
        .args(["student", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Class average: 0.00"));
}

#[test]
fn corrupt_file_is_ignored_and_replaced() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("todos.json"), "not json").unwrap();

    roster_cmd(&temp)
        .args(["todo", "add", "fresh"])
        .assert()
        .success();

    assert_eq!(stored_ids(&data, "todos").len(), 1);
}

#[test]
fn precision_comes_from_data_dir_config() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("roster.toml"), "average_precision = 1\n").unwrap();

    roster_cmd(&temp)
        .args(["student", "add", "An", "7", "8", "8"])
        .assert()
        .success();
    roster_cmd(&temp)
        .args(["student", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Class average: 7.7"));

    roster_cmd(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("average_precision = 1"));
}
