//! Build command: compile a dataset into a snippet pack archive.

use clap::Args;
use std::path::PathBuf;

use crate::cli::common::{CliError, CliResult};
use crate::compiler::{self, CompileError, CompileOptions};
use crate::config::Config;
use crate::constants::DEFAULT_PACK_FILENAME;
use crate::models::PackManifest;
use crate::packager;
use crate::parser;

/// Compile an emoji dataset into an installable snippet pack
#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    /// Path to the emoji dataset JSON file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Keyword prefix stored in the pack manifest (defaults to config, then ";")
    #[arg(short, long, value_name = "STRING")]
    pub prefix: Option<String>,

    /// Keyword suffix stored in the pack manifest (defaults to config, then empty)
    #[arg(short, long, value_name = "STRING")]
    pub suffix: Option<String>,

    /// Output path for the pack archive
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Maximum number of emoji records to process (for testing/partial builds)
    #[arg(short, long, value_name = "N")]
    pub max_records: Option<usize>,

    /// Suppress per-record warnings, print only the final summary
    #[arg(short, long)]
    pub quiet: bool,
}

impl BuildArgs {
    /// Execute the build command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().map_err(|e| CliError::config(e.to_string()))?;

        // Load and validate the dataset; malformed entries are skipped
        let dataset = parser::load_dataset(&self.input)
            .map_err(|e| CliError::io(format!("Failed to load dataset: {e}")))?;

        let manifest = PackManifest::new(
            self.prefix
                .clone()
                .unwrap_or_else(|| config.keywords.prefix.clone()),
            self.suffix
                .clone()
                .unwrap_or_else(|| config.keywords.suffix.clone()),
        );

        let options = CompileOptions {
            max_records: self.max_records,
        };
        let (pack, summary) = compiler::compile(&dataset.records, manifest, &options);

        let output_path = self.resolve_output_path(&config);
        packager::write_archive(&pack, &output_path).map_err(|e| {
            // Duplicate filenames are a dataset defect, not an I/O failure
            if e.downcast_ref::<CompileError>().is_some() {
                CliError::validation(e.to_string())
            } else {
                CliError::io(e.to_string())
            }
        })?;

        if !self.quiet {
            for warning in &dataset.warnings {
                eprintln!("Warning: {warning}");
            }
            for warning in &summary.warnings {
                eprintln!("Warning: skipped '{}': {}", warning.record, warning.message);
            }
        }

        println!(
            "\u{2713} Created {} with {} snippets ({} records processed, {} skipped)",
            output_path.display(),
            summary.snippets,
            summary.processed,
            summary.skipped + dataset.skipped(),
        );

        Ok(())
    }

    /// Gets the output archive path (user-specified, or the default pack
    /// name in the configured output directory).
    fn resolve_output_path(&self, config: &Config) -> PathBuf {
        if let Some(ref path) = self.output {
            return path.clone();
        }

        match &config.output.dir {
            Some(dir) => dir.join(DEFAULT_PACK_FILENAME),
            None => PathBuf::from(DEFAULT_PACK_FILENAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with_output(output: Option<PathBuf>) -> BuildArgs {
        BuildArgs {
            input: PathBuf::from("emoji.json"),
            prefix: None,
            suffix: None,
            output,
            max_records: None,
            quiet: false,
        }
    }

    #[test]
    fn test_resolve_output_path_custom() {
        let custom = PathBuf::from("/tmp/My Pack.alfredsnippets");
        let args = args_with_output(Some(custom.clone()));
        assert_eq!(args.resolve_output_path(&Config::new()), custom);
    }

    #[test]
    fn test_resolve_output_path_default() {
        let args = args_with_output(None);
        assert_eq!(
            args.resolve_output_path(&Config::new()),
            PathBuf::from("Emoji Pack.alfredsnippets")
        );
    }

    #[test]
    fn test_resolve_output_path_config_dir() {
        let mut config = Config::new();
        config.output.dir = Some(PathBuf::from("/packs"));
        let args = args_with_output(None);
        assert_eq!(
            args.resolve_output_path(&config),
            PathBuf::from("/packs/Emoji Pack.alfredsnippets")
        );
    }
}
