//! Inspect command: examine an existing snippet pack archive.

use clap::Args;
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use zip::ZipArchive;

use crate::cli::common::{CliError, CliResult};
use crate::constants::MANIFEST_FILENAME;
use crate::packager;

/// Inspect a compiled snippet pack archive
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to the pack archive
    #[arg(short, long, value_name = "FILE")]
    pub pack: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON-serializable inspection report
#[derive(Debug, Serialize)]
struct InspectReport {
    keyword_prefix: String,
    keyword_suffix: String,
    snippet_count: usize,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let file = File::open(&self.pack)
            .map_err(|e| CliError::io(format!("Failed to open pack: {e}")))?;
        let mut archive = ZipArchive::new(file)
            .map_err(|e| CliError::validation(format!("Not a valid pack archive: {e}")))?;

        let mut manifest_content = String::new();
        archive
            .by_name(MANIFEST_FILENAME)
            .map_err(|_| {
                CliError::validation(format!("Pack has no {MANIFEST_FILENAME} manifest"))
            })?
            .read_to_string(&mut manifest_content)
            .map_err(|e| CliError::io(format!("Failed to read manifest: {e}")))?;

        let manifest = packager::parse_info_plist(&manifest_content)
            .map_err(|e| CliError::validation(format!("Malformed manifest: {e}")))?;

        let snippet_count = (0..archive.len())
            .filter_map(|i| archive.by_index(i).ok().map(|f| f.name().to_string()))
            .filter(|name| name.ends_with(".json"))
            .count();

        if self.json {
            let report = InspectReport {
                keyword_prefix: manifest.keyword_prefix,
                keyword_suffix: manifest.keyword_suffix,
                snippet_count,
            };
            let output = serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{output}");
        } else {
            println!("Pack: {}", self.pack.display());
            println!("  Keyword prefix: {:?}", manifest.keyword_prefix);
            println!("  Keyword suffix: {:?}", manifest.keyword_suffix);
            println!("  Snippets:       {snippet_count}");
        }

        Ok(())
    }
}
