//! Dataset loading: raw emoji JSON into validated [`EmojiRecord`]s.
//!
//! The dataset is the iamcal/emoji-data `emoji.json` shape: a JSON array of
//! objects. Field analysis shows `unified`, `name`, `category`,
//! `subcategory`, and `short_names` are always present in well-formed data;
//! an entry missing any of them (or with an empty value) is malformed and
//! is skipped with a warning so one bad entry never aborts the batch.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::models::EmojiRecord;

/// Result of parsing a dataset: validated records plus skip warnings.
#[derive(Debug, Clone, Default)]
pub struct DatasetReport {
    /// Records that passed validation, in dataset order
    pub records: Vec<EmojiRecord>,
    /// One message per skipped malformed entry
    pub warnings: Vec<String>,
}

impl DatasetReport {
    /// Number of entries skipped as malformed.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.warnings.len()
    }
}

/// Reads and parses a dataset file.
pub fn load_dataset(path: &Path) -> Result<DatasetReport> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset file: {}", path.display()))?;
    parse_dataset(&content)
}

/// Parses dataset JSON text into validated records.
///
/// # Errors
///
/// Returns an error if the text is not a JSON array; individual malformed
/// entries are skipped with a warning instead.
pub fn parse_dataset(content: &str) -> Result<DatasetReport> {
    let values: Vec<Value> =
        serde_json::from_str(content).context("Dataset is not a JSON array of emoji entries")?;

    let mut report = DatasetReport::default();
    for (index, value) in values.iter().enumerate() {
        match record_from_value(value) {
            Ok(record) => report.records.push(record),
            Err(reason) => {
                let label = value
                    .get("name")
                    .and_then(Value::as_str)
                    .map_or_else(|| format!("entry #{index}"), ToString::to_string);
                report
                    .warnings
                    .push(format!("Skipped malformed record {label}: {reason}"));
            }
        }
    }

    Ok(report)
}

/// Validates one dataset entry. Returns a human-readable reason on failure.
fn record_from_value(value: &Value) -> Result<EmojiRecord, String> {
    let unified = required_str(value, "unified")?;
    let name = required_str(value, "name")?;
    let category = required_str(value, "category")?;
    let subcategory = required_str(value, "subcategory")?;

    let short_names: Vec<String> = value
        .get("short_names")
        .and_then(Value::as_array)
        .ok_or_else(|| "missing field 'short_names'".to_string())?
        .iter()
        .filter_map(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect();
    if short_names.is_empty() {
        return Err("'short_names' has no usable entries".to_string());
    }

    Ok(EmojiRecord::new(
        unified,
        name,
        category,
        subcategory,
        short_names,
    ))
}

fn required_str(value: &Value, field: &str) -> Result<String, String> {
    match value.get(field).and_then(Value::as_str) {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        Some(_) => Err(format!("field '{field}' is empty")),
        None => Err(format!("missing field '{field}'")),
    }
}
