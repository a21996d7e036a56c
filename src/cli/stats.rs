//! Stats command: analyze field coverage of an emoji dataset.
//!
//! Reports which fields are always present and which are optional across
//! the dataset, with the value types seen for each. Useful when deciding
//! whether a dataset revision still satisfies the compiler's assumptions.

use clap::Args;
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::PathBuf;

use crate::cli::common::{CliError, CliResult};

/// Analyze field coverage of an emoji dataset file
#[derive(Debug, Clone, Args)]
pub struct StatsArgs {
    /// Path to the emoji dataset JSON file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Coverage of one dataset field.
#[derive(Debug, Clone, Serialize)]
struct FieldStats {
    /// Entries the field appears in
    count: usize,
    /// Share of entries the field appears in, 0-100
    percentage: f64,
    /// Value type names seen for the field
    types: Vec<String>,
}

/// JSON-serializable analysis report.
#[derive(Debug, Serialize)]
struct StatsReport {
    total_entries: usize,
    always_present: BTreeMap<String, FieldStats>,
    sometimes_present: BTreeMap<String, FieldStats>,
}

impl StatsArgs {
    /// Execute the stats command
    pub fn execute(&self) -> CliResult<()> {
        let content = fs::read_to_string(&self.input)
            .map_err(|e| CliError::io(format!("Failed to read dataset: {e}")))?;
        let entries: Vec<Value> = serde_json::from_str(&content)
            .map_err(|e| CliError::validation(format!("Dataset is not a JSON array: {e}")))?;

        let report = analyze(&entries);

        if self.json {
            let output = serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{output}");
        } else {
            print_report(&report);
        }

        Ok(())
    }
}

/// Counts field presence and value types across all entries.
#[allow(clippy::cast_precision_loss)]
fn analyze(entries: &[Value]) -> StatsReport {
    let total = entries.len();
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut types: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for entry in entries {
        let Some(object) = entry.as_object() else {
            continue;
        };
        for (key, value) in object {
            *counts.entry(key.clone()).or_default() += 1;
            types
                .entry(key.clone())
                .or_default()
                .insert(type_name(value));
        }
    }

    let mut always_present = BTreeMap::new();
    let mut sometimes_present = BTreeMap::new();
    for (key, count) in counts {
        let stats = FieldStats {
            count,
            percentage: if total == 0 {
                0.0
            } else {
                (count as f64 / total as f64) * 100.0
            },
            types: types.remove(&key).unwrap_or_default().into_iter().collect(),
        };
        if count == total {
            always_present.insert(key, stats);
        } else {
            sometimes_present.insert(key, stats);
        }
    }

    StatsReport {
        total_entries: total,
        always_present,
        sometimes_present,
    }
}

/// Human-readable name of a JSON value's type, with list element types.
fn type_name(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "bool".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Array(items) => match items.first() {
            Some(first) => format!("list[{}]", type_name(first)),
            None => "list[empty]".to_string(),
        },
        Value::Object(_) => "object".to_string(),
    }
}

fn print_report(report: &StatsReport) {
    println!("Analyzed {} entries", report.total_entries);
    println!();
    println!("Always present fields:");
    print_section(&report.always_present);
    println!();
    println!("Sometimes present fields:");
    print_section(&report.sometimes_present);
}

fn print_section(fields: &BTreeMap<String, FieldStats>) {
    if fields.is_empty() {
        println!("  (none)");
        return;
    }
    for (key, stats) in fields {
        println!(
            "  {key:<15} | {:>5} ({:5.1}%) | {}",
            stats.count,
            stats.percentage,
            stats.types.join(", ")
        );
    }
}
