//! Shared CLI error handling and exit codes.

use std::fmt;

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Process exit codes, one per error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command completed successfully
    Success = 0,
    /// Input or compiled output failed validation
    ValidationError = 1,
    /// Filesystem or archive I/O failed
    IoError = 2,
    /// Configuration could not be loaded or saved
    ConfigError = 3,
}

/// An error surfaced to the CLI user.
///
/// Every compiler-raised error kind maps to exactly one exit code; the
/// top-level boundary in `main` prints a single message and exits with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Invalid input data or a fatal compilation error
    Validation(String),
    /// I/O failure, surfaced untranslated
    Io(String),
    /// Configuration failure
    Config(String),
}

impl CliError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Validation(_) => ExitCode::ValidationError,
            Self::Io(_) => ExitCode::IoError,
            Self::Config(_) => ExitCode::ConfigError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) | Self::Io(msg) | Self::Config(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {}
