//! CLI-specific error types and mappings.
//!
//! Only fatal conditions live here. Per-pair failures are part of the
//! manifest and turn into exit status 1 without an error value.

use biodl_core::{CoreError, PathError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument error not caught by the parser (e.g. malformed identifier).
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Output directory cannot be created or written.
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error (base URL, timeout).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidIdentifier { .. } => Self::Arguments(err.to_string()),
            CoreError::Configuration(msg) => Self::Config(msg),
            CoreError::Path(path_err) => path_err.into(),
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Io(err.to_string())
    }
}
