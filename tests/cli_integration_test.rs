//! End-to-end tests for the mario-pricing binary.

use assert_cmd::prelude::*;
use indoc::indoc;
use serde_json::Value;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

const ORGS: &str = indoc! {r#"
    {
      "procedure_name": "Brain MRI",
      "orgs": [
        {"org_name": "A Clinic", "org_id": "a-1", "min_price": "$100", "city": "Austin", "state": "TX"},
        {"org_name": "A Clinic", "org_id": "a-2", "min_price": "$150"},
        {"org_name": "B Imaging", "org_id": "b-1", "min_price": 200, "in_network": true}
      ]
    }
"#};

fn mario_pricing() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mario-pricing"))
}

fn write_orgs(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("orgs.json");
    fs::write(&path, ORGS).unwrap();
    path
}

#[test]
fn test_compare_json_output() {
    let temp = TempDir::new().unwrap();
    let input = write_orgs(&temp);
    let output_path = temp.path().join("comparison.json");

    mario_pricing()
        .current_dir(temp.path())
        .args(["compare", "--format", "json", "--output"])
        .arg(&output_path)
        .arg(&input)
        .assert()
        .success();

    let report: Value = serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(report["procedure_name"], "Brain MRI");
    assert_eq!(report["average_price"], 150.0);

    let cards = report["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0]["group"]["org_id"], "a-1");
    assert_eq!(cards[0]["group"]["count_provider"], 2);
    assert_eq!(cards[0]["group"]["price_range"]["max"], 150.0);
    assert_eq!(cards[0]["score"]["score"], 87);
    assert_eq!(cards[0]["marios_pick"], true);
    assert_eq!(cards[1]["score"]["tier"], "poor");
}

#[test]
fn test_compare_markdown_to_stdout() {
    let temp = TempDir::new().unwrap();
    let input = write_orgs(&temp);

    let output = mario_pricing()
        .current_dir(temp.path())
        .args(["compare", "--format", "markdown"])
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("# Brain MRI"));
    assert!(stdout.contains("Austin, TX"));
}

#[test]
fn test_compare_missing_file_fails() {
    let temp = TempDir::new().unwrap();

    mario_pricing()
        .current_dir(temp.path())
        .args(["compare", "does-not-exist.json"])
        .assert()
        .failure();
}

#[cfg(target_os = "linux")]
#[test]
fn test_compare_fails_when_output_cannot_be_written() {
    let temp = TempDir::new().unwrap();
    let input = write_orgs(&temp);

    mario_pricing()
        .current_dir(temp.path())
        .args(["compare", "-f", "json", "-o", "/dev/full"])
        .arg(&input)
        .assert()
        .failure();
}

#[test]
fn test_terminal_report_file_is_plain_text() {
    let temp = TempDir::new().unwrap();
    let input = write_orgs(&temp);
    let output_path = temp.path().join("report.txt");

    mario_pricing()
        .current_dir(temp.path())
        .args(["compare", "-f", "terminal", "-o"])
        .arg(&output_path)
        .arg(&input)
        .assert()
        .success();

    let report = fs::read_to_string(&output_path).unwrap();
    assert!(report.contains("B Imaging"));
    assert!(!report.contains('\u{1b}'));
}

#[test]
fn test_score_json() {
    let temp = TempDir::new().unwrap();

    let output = mario_pricing()
        .current_dir(temp.path())
        .args(["score", "--price", "100", "--average", "150", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["score"], 87);
    assert_eq!(value["tier"], "excellent");
}

#[test]
fn test_score_respects_config_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    fs::write(&config, "[scoring]\nneutral_score = 60\n").unwrap();

    let output = mario_pricing()
        .current_dir(temp.path())
        .args(["score", "--price", "100", "--average", "0", "--format", "json", "--config"])
        .arg(&config)
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["score"], 60);
    assert_eq!(value["tier"], "fair");
}

#[test]
fn test_init_writes_config_once() {
    let temp = TempDir::new().unwrap();

    mario_pricing()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .success();
    assert!(temp.path().join(".mario.toml").exists());

    mario_pricing()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .failure();

    mario_pricing()
        .current_dir(temp.path())
        .args(["init", "--force"])
        .assert()
        .success();
}
