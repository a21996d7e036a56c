//! Emojipack - Emoji snippet pack compiler
//!
//! This application compiles a raw emoji metadata dataset into an
//! installable snippet pack: a zip archive of keyword-expansion snippets
//! consumable by a desktop snippet-expansion application.

// Module declarations
mod cli;
mod compiler;
mod config;
mod constants;
mod models;
mod packager;
mod parser;

use clap::{Parser, Subcommand};

use cli::{BuildArgs, CliResult, ConfigArgs, ExitCode, InspectArgs, StatsArgs};
use constants::APP_NAME;

/// Emojipack - Compile emoji metadata into installable snippet packs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile an emoji dataset into a snippet pack archive
    Build(BuildArgs),
    /// Inspect an existing snippet pack archive
    Inspect(InspectArgs),
    /// Analyze field coverage of an emoji dataset
    Stats(StatsArgs),
    /// Show or change persisted defaults
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let result: CliResult<()> = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Inspect(args) => args.execute(),
        Commands::Stats(args) => args.execute(),
        Commands::Config(args) => args.execute(),
    };

    // Single top-level error boundary: one message, one exit code per kind
    let code = match result {
        Ok(()) => ExitCode::Success,
        Err(err) => {
            eprintln!("{APP_NAME} error: {err}");
            err.exit_code()
        }
    };
    std::process::exit(code as i32);
}
