//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// A two-record dataset: GRINNING FACE and THUMBS UP SIGN, two shortcodes
/// each, matching the iamcal/emoji-data entry shape.
pub fn sample_dataset_json() -> String {
    r#"[
        {
            "unified": "1F600",
            "name": "GRINNING FACE",
            "category": "Smileys & Emotion",
            "subcategory": "face-smiling",
            "short_names": ["grinning", "grinning_face"],
            "sheet_x": 32,
            "has_img_apple": true
        },
        {
            "unified": "1F44D",
            "name": "THUMBS UP SIGN",
            "category": "People & Body",
            "subcategory": "hand-fingers-closed",
            "short_names": ["thumbsup", "+1"],
            "sheet_x": 14,
            "has_img_apple": true
        }
    ]"#
    .to_string()
}

/// A dataset where two records share a shortcode and a name, which makes
/// their archive filenames collide.
pub fn colliding_dataset_json() -> String {
    r#"[
        {
            "unified": "1F600",
            "name": "GRINNING FACE",
            "category": "Smileys & Emotion",
            "subcategory": "face-smiling",
            "short_names": ["grinning"]
        },
        {
            "unified": "1F601",
            "name": "GRINNING FACE",
            "category": "Smileys & Emotion",
            "subcategory": "face-smiling",
            "short_names": ["grinning"]
        }
    ]"#
    .to_string()
}

/// Writes dataset JSON into a temp dir. The `TempDir` must be kept alive
/// for the duration of the test.
pub fn create_temp_dataset(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("emoji.json");
    fs::write(&path, content).expect("Failed to write dataset file");
    (path, temp_dir)
}

/// Builds a `Command` for the emojipack binary with its config directory
/// redirected into a temp dir, so tests never see the user's real config.
pub fn emojipack_cmd(config_temp: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_emojipack"));
    cmd.env("XDG_CONFIG_HOME", config_temp.path());
    cmd.env("HOME", config_temp.path());
    cmd
}
