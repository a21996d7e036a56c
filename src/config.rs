//! Configuration management for the application.
//!
//! This module handles loading and saving persisted defaults in TOML
//! format with platform-specific directory resolution. CLI flags always
//! override persisted values, which in turn override built-in defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{DEFAULT_KEYWORD_PREFIX, DEFAULT_KEYWORD_SUFFIX};

/// Keyword prefix/suffix defaults used when the CLI flags are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordConfig {
    /// Default keyword prefix written into the pack manifest
    pub prefix: String,
    /// Default keyword suffix written into the pack manifest
    pub suffix: String,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_KEYWORD_PREFIX.to_string(),
            suffix: DEFAULT_KEYWORD_SUFFIX.to_string(),
        }
    }
}

/// Output location defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Directory compiled packs are written into when `--output` is relative
    /// or omitted. Defaults to the current working directory when unset.
    pub dir: Option<PathBuf>,
}

/// Persisted application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Keyword defaults
    #[serde(default)]
    pub keywords: KeywordConfig,
    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Creates a configuration with built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/emojipack/`
    /// - macOS: `~/Library/Application Support/emojipack/`
    /// - Windows: `%APPDATA%\emojipack\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("emojipack");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to move config file into place: {}",
            config_path.display()
        ))?;

        Ok(())
    }
}
