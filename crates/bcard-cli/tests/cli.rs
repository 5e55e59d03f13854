//! End-to-end tests for the bcard binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn write_sample_card(dir: &tempfile::TempDir, name: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(
        &path,
        "(주)테크놀로지\n홍길동 과장\n010-1234-5678\nhong@tech.co.kr\n",
    )
    .unwrap();
    path
}

#[test]
fn test_process_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample_card(&dir, "card.txt");

    Command::cargo_bin("bcard")
        .unwrap()
        .arg("process")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("hong@tech.co.kr"))
        .stdout(predicate::str::contains("홍길동"))
        .stdout(predicate::str::contains("010-1234-5678"));
}

#[test]
fn test_process_text_output_marks_missing_fields() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample_card(&dir, "card.txt");

    Command::cargo_bin("bcard")
        .unwrap()
        .args(["process", "--format", "text"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("not extracted"));
}

#[test]
fn test_process_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample_card(&dir, "card.txt");
    let output = dir.path().join("card.json");

    Command::cargo_bin("bcard")
        .unwrap()
        .arg("process")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["company_name"], "(주)테크놀로지");
    assert_eq!(json["mobile"], "010-1234-5678");
    assert_eq!(json["ocr_confidence"], 80.0);
}

#[test]
fn test_process_missing_file_fails() {
    Command::cargo_bin("bcard")
        .unwrap()
        .args(["process", "no-such-file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_batch_with_summary() {
    let dir = tempfile::tempdir().unwrap();
    write_sample_card(&dir, "a.txt");
    write_sample_card(&dir, "b.txt");
    let out_dir = dir.path().join("out");

    Command::cargo_bin("bcard")
        .unwrap()
        .arg("batch")
        .arg(dir.path().join("*.txt").display().to_string())
        .arg("--output-dir")
        .arg(&out_dir)
        .arg("--summary")
        .assert()
        .success();

    assert!(out_dir.join("a.json").exists());
    assert!(out_dir.join("b.json").exists());

    let summary = std::fs::read_to_string(out_dir.join("summary.csv")).unwrap();
    assert!(summary.contains("hong@tech.co.kr"));
}

#[test]
fn test_config_path_prints_location() {
    Command::cargo_bin("bcard")
        .unwrap()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"));
}
