//! Fatal errors raised before a batch starts.
//!
//! Per-request failures are not errors at this level; they are recorded as
//! [`DownloadError`](crate::download::DownloadError) entries in the manifest.

use thiserror::Error;

use crate::paths::PathError;

/// Errors that abort a run before any network activity.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An identifier token could not be accepted.
    #[error("Invalid identifier '{identifier}': {reason}")]
    InvalidIdentifier {
        /// The offending token.
        identifier: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Configuration value could not be used.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Output directory problem.
    #[error(transparent)]
    Path(#[from] PathError),
}

impl From<url::ParseError> for CoreError {
    fn from(err: url::ParseError) -> Self {
        Self::Configuration(format!("invalid URL: {err}"))
    }
}
