//! CLI command handlers for emojipack.
//!
//! This module provides headless, scriptable access to the snippet pack
//! compiler for automation, testing, and CI/CD integration.

pub mod build;
pub mod common;
pub mod config;
pub mod inspect;
pub mod stats;

// Re-export types used by main.rs and tests
pub use build::BuildArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use inspect::InspectArgs;
pub use stats::StatsArgs;
