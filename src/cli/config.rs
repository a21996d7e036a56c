//! Configuration management CLI commands.

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;

/// Configuration management commands
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, Clone, Subcommand)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Debug, Clone, Args)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Debug, Clone, Args)]
pub struct ConfigSetArgs {
    /// Default keyword prefix for new packs
    #[arg(long, value_name = "STRING")]
    prefix: Option<String>,

    /// Default keyword suffix for new packs
    #[arg(long, value_name = "STRING")]
    suffix: Option<String>,

    /// Default output directory for compiled packs
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    fn execute(&self) -> CliResult<()> {
        let config = Config::load().map_err(|e| CliError::config(e.to_string()))?;

        if self.json {
            let output = serde_json::to_string_pretty(&config)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{output}");
        } else {
            println!("Keyword prefix: {:?}", config.keywords.prefix);
            println!("Keyword suffix: {:?}", config.keywords.suffix);
            match &config.output.dir {
                Some(dir) => println!("Output dir:     {}", dir.display()),
                None => println!("Output dir:     (current directory)"),
            }
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    fn execute(&self) -> CliResult<()> {
        if self.prefix.is_none() && self.suffix.is_none() && self.output_dir.is_none() {
            return Err(CliError::validation(
                "Nothing to set. Use --prefix, --suffix, or --output-dir",
            ));
        }

        let mut config = Config::load().map_err(|e| CliError::config(e.to_string()))?;

        if let Some(prefix) = &self.prefix {
            config.keywords.prefix.clone_from(prefix);
        }
        if let Some(suffix) = &self.suffix {
            config.keywords.suffix.clone_from(suffix);
        }
        if let Some(dir) = &self.output_dir {
            config.output.dir = Some(dir.clone());
        }

        config
            .save()
            .map_err(|e| CliError::config(e.to_string()))?;
        println!("\u{2713} Configuration updated");

        Ok(())
    }
}
