use assert_cmd::Command;
use predicates::prelude::*;

fn piglatin() -> Command {
    Command::cargo_bin("piglatin").unwrap()
}

#[test]
fn converts_positional_text() {
    piglatin()
        .arg("hello")
        .assert()
        .success()
        .stdout("ellohay\n");
}

#[test]
fn preserves_punctuation_and_capitalization() {
    piglatin()
        .arg("HeL'lo.-Ah'oj.")
        .assert()
        .success()
        .stdout("ElLoh'ay.-Ahojw'ay.\n");
}

#[test]
fn prints_usage_without_arguments() {
    piglatin()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: piglatin"));
}

#[test]
fn converts_file_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");
    std::fs::write(&path, "ahoj hello").unwrap();

    piglatin()
        .arg("--file")
        .arg(&path)
        .assert()
        .success()
        .stdout("ahojway ellohay\n");
}

#[test]
fn fails_on_missing_file() {
    piglatin()
        .arg("--file")
        .arg("no-such-file.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn emits_json_output() {
    piglatin()
        .arg("hello")
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"output\": \"ellohay\""))
        .stdout(predicate::str::contains("\"words\": 1"));
}

#[test]
fn rejects_unknown_format() {
    piglatin()
        .arg("hello")
        .args(["--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}
