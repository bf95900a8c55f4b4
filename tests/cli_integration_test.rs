//! Integration tests for the `subjectline` binary.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Run from an isolated directory holding an empty config, so no stray
/// `.subjectline.toml` from an ancestor directory is picked up.
fn subjectline(temp_dir: &TempDir) -> Command {
    fs::write(temp_dir.path().join(".subjectline.toml"), "").unwrap();
    let mut cmd = Command::cargo_bin("subjectline").unwrap();
    cmd.current_dir(temp_dir.path()).env_remove("SUBJECTLINE_SEED");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("Output is not valid JSON")
}

#[test]
fn test_analyze_single_subject_json() {
    let temp_dir = TempDir::new().unwrap();
    let output = subjectline(&temp_dir)
        .args(["analyze", "Quick question about your project", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["overallScore"], 90);
    assert_eq!(json["data"]["spamScore"], 0);
    assert_eq!(json["data"]["wordCount"], 5);
}

#[test]
fn test_analyze_empty_subject_reports_error_envelope() {
    let temp_dir = TempDir::new().unwrap();
    let output = subjectline(&temp_dir)
        .args(["analyze", "", "--format", "json"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["error"]["message"], "Subject line must be a non-empty string");
    assert_eq!(json["error"]["status"], 400);
}

#[test]
fn test_analyze_file_batch_with_summary() {
    let temp_dir = TempDir::new().unwrap();
    let subjects = temp_dir.path().join("subjects.txt");
    fs::write(
        &subjects,
        "Free cash for the winner\n\nQuick question about your project\n",
    )
    .unwrap();
    let report = temp_dir.path().join("report.json");

    subjectline(&temp_dir)
        .args(["analyze", "--file"])
        .arg(&subjects)
        .args(["--format", "json", "--seed", "3", "--output"])
        .arg(&report)
        .assert()
        .success();

    let json: Value = serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["results"].as_array().unwrap().len(), 2);
    assert_eq!(json["data"]["summary"]["analyzed"], 2);
    assert_eq!(json["data"]["summary"]["failed"], 0);
    assert_eq!(json["data"]["summary"]["topSpamTriggers"][0]["word"], "cash");
}

#[test]
fn test_analyze_reads_stdin() {
    let temp_dir = TempDir::new().unwrap();
    let output = subjectline(&temp_dir)
        .args(["analyze", "--file", "-", "--format", "json"])
        .write_stdin("guaranteed cash prize\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["data"]["spamScore"], 50);
    assert_eq!(json["data"]["overallScore"], 75);
}

#[test]
fn test_check_fails_spammy_subject() {
    let temp_dir = TempDir::new().unwrap();
    let output = subjectline(&temp_dir)
        .args([
            "check",
            "FREE Exclusive Offer: LIMITED TIME ONLY!!!",
            "--min-score",
            "60",
            "--format",
            "json",
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed the quality gate"), "stderr: {stderr}");
}

#[test]
fn test_check_passes_clean_subject() {
    let temp_dir = TempDir::new().unwrap();
    subjectline(&temp_dir)
        .args([
            "check",
            "Quick question about your project",
            "--max-spam",
            "10",
            "--format",
            "json",
        ])
        .assert()
        .success();
}

#[test]
fn test_triggers_listing_json() {
    let temp_dir = TempDir::new().unwrap();
    let output = subjectline(&temp_dir)
        .args(["triggers", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    let triggers = json["data"].as_array().unwrap();
    assert_eq!(triggers.len(), 16);
    assert_eq!(triggers[0]["word"], "free");
    assert_eq!(triggers[0]["impact"], "high");
}

#[test]
fn test_power_words_listing_json() {
    let temp_dir = TempDir::new().unwrap();
    let output = subjectline(&temp_dir)
        .args(["power-words", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["data"].as_array().unwrap().len(), 15);
    assert_eq!(json["data"][0]["category"], "exclusivity");
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".subjectline.toml");

    // The helper leaves an empty config behind
    subjectline(&temp_dir).arg("init").assert().failure();
    assert_eq!(fs::read_to_string(&config_path).unwrap(), "");

    subjectline(&temp_dir).args(["init", "--force"]).assert().success();
    let written = fs::read_to_string(&config_path).unwrap();
    assert!(written.contains("[scoring]"));
}

#[test]
fn test_invalid_config_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("broken.toml");
    fs::write(&config_path, "[scoring\nbase_score = ").unwrap();

    subjectline(&temp_dir)
        .args(["analyze", "Hello there friend", "--config"])
        .arg(&config_path)
        .assert()
        .failure();
}

#[test]
fn test_file_and_argument_subjects_score_identically() {
    let temp_dir = TempDir::new().unwrap();
    let subjects = temp_dir.path().join("subjects.txt");
    fs::write(&subjects, "  Quick question about your project\r\n").unwrap();

    let from_file = subjectline(&temp_dir)
        .args(["analyze", "--format", "json", "--file"])
        .arg(&subjects)
        .output()
        .unwrap();
    let from_arg = subjectline(&temp_dir)
        .args(["analyze", "--format", "json", "  Quick question about your project"])
        .output()
        .unwrap();

    let file_json = stdout_json(&from_file);
    let arg_json = stdout_json(&from_arg);
    assert_eq!(file_json["data"]["length"], 35);
    assert_eq!(file_json["data"]["length"], arg_json["data"]["length"]);
    assert_eq!(file_json["data"]["overallScore"], arg_json["data"]["overallScore"]);
    assert_eq!(file_json["data"]["subjectLine"], arg_json["data"]["subjectLine"]);
}
