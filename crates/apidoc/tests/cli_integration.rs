//! Integration tests that run the apidoc binary

use std::path::{Path, PathBuf};
use std::process::Command;

fn apidoc_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_apidoc"))
}

fn fixtures_dir() -> &'static Path {
    Path::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../apidoc-core/tests/fixtures"
    ))
}

fn reflection_fixture() -> PathBuf {
    fixtures_dir().join("reflection.json")
}

#[test]
fn test_build_command_text_report() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    let output = apidoc_bin()
        .current_dir(temp.path())
        .arg("build")
        .arg(reflection_fixture())
        .output()
        .expect("Failed to run apidoc");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "Command should succeed: {}", stderr);

    assert!(stdout.contains("app\\db\\Model"), "Should list classes: {}", stdout);
    assert!(
        stdout.contains("subclasses: app\\db\\Model"),
        "Should show resolved subclasses: {}",
        stdout
    );
    assert!(
        stderr.contains("No docblock for element 'app\\db\\UndocumentedModel'"),
        "Should report missing docblock: {}",
        stderr
    );
}

#[test]
fn test_build_command_json_report() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    let output = apidoc_bin()
        .current_dir(temp.path())
        .arg("-f")
        .arg("json")
        .arg("build")
        .arg(reflection_fixture())
        .output()
        .expect("Failed to run apidoc");

    assert!(output.status.success(), "Command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"classes\""), "Should output JSON: {}", stdout);
    assert!(stdout.contains("\"EVENT_BEFORE_VALIDATE\""));
    assert!(stdout.contains("\"warnings\""));
}

#[test]
fn test_strict_mode_fails_on_warnings() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    let output = apidoc_bin()
        .current_dir(temp.path())
        .arg("--strict")
        .arg("build")
        .arg(reflection_fixture())
        .output()
        .expect("Failed to run apidoc");

    assert!(!output.status.success(), "Strict mode should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("recorded in strict mode"),
        "Should explain the failure: {}",
        stderr
    );
}

#[test]
fn test_config_file_sets_defaults() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    let config_dir = temp.path().join(".config/apidoc");
    std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");
    std::fs::write(config_dir.join("config.yaml"), "format: json\n")
        .expect("Failed to write config");

    let output = apidoc_bin()
        .current_dir(temp.path())
        .arg("build")
        .arg(reflection_fixture())
        .output()
        .expect("Failed to run apidoc");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"classes\""), "Config should select JSON: {}", stdout);
}

#[test]
fn test_missing_snapshot_fails() {
    let output = apidoc_bin()
        .arg("build")
        .arg("/definitely/not/here.json")
        .output()
        .expect("Failed to run apidoc");

    assert!(!output.status.success(), "Command should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to read reflection snapshot"),
        "Should explain the failure: {}",
        stderr
    );
}

#[test]
fn test_summary_command() {
    let output = apidoc_bin()
        .arg("summary")
        .arg("He is tired, e.g. very tired. He slept.")
        .output()
        .expect("Failed to run apidoc");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "He is tired, e.g. very tired.");
}
