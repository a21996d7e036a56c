//! End-to-end tests for `emojipack config` command.

use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_config_show_defaults() {
    let config_temp = TempDir::new().unwrap();

    let output = emojipack_cmd(&config_temp)
        .args(["config", "show"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Keyword prefix"), "stdout: {stdout}");
    assert!(stdout.contains("\";\""), "stdout: {stdout}");
}

#[test]
fn test_config_set_then_show() {
    let config_temp = TempDir::new().unwrap();

    let output = emojipack_cmd(&config_temp)
        .args(["config", "set", "--prefix", "::", "--suffix", ";"])
        .output()
        .expect("Failed to execute command");
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let output = emojipack_cmd(&config_temp)
        .args(["config", "show", "--json"])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let config: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(config["keywords"]["prefix"], "::");
    assert_eq!(config["keywords"]["suffix"], ";");
}

#[test]
fn test_config_set_prefix_used_by_build() {
    let config_temp = TempDir::new().unwrap();
    let (dataset_path, dataset_temp) = create_temp_dataset(&sample_dataset_json());
    let out_path = dataset_temp.path().join("pack.alfredsnippets");

    let output = emojipack_cmd(&config_temp)
        .args(["config", "set", "--prefix", "%%"])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let output = emojipack_cmd(&config_temp)
        .args([
            "build",
            "--input",
            dataset_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let output = emojipack_cmd(&config_temp)
        .args(["inspect", "--pack", out_path.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let report: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(report["keyword_prefix"], "%%");
}

#[test]
fn test_config_set_nothing_is_error() {
    let config_temp = TempDir::new().unwrap();

    let output = emojipack_cmd(&config_temp)
        .args(["config", "set"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Nothing to set"), "stderr: {stderr}");
}
