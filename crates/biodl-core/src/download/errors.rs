//! Per-request failure reasons.
//!
//! These errors are designed to be serializable and not depend on external
//! error types like `std::io::Error` or `reqwest::Error`. For I/O errors, we
//! capture the kind and message as strings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Format, Service};

/// Why a single (identifier, format) pair failed.
///
/// Every variant is recoverable at the batch level: the orchestrator records
/// it in the manifest and moves on to the next pair.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum DownloadError {
    /// The service does not offer the requested format.
    #[error("{service} does not provide the '{format}' format")]
    UnsupportedFormat {
        /// Service that was asked.
        service: Service,
        /// Format that was requested.
        format: Format,
    },

    /// The identifier does not have the shape the service expects.
    #[error("Invalid identifier '{identifier}': {message}")]
    InvalidIdentifier {
        /// The identifier as supplied.
        identifier: String,
        /// What was wrong with it.
        message: String,
    },

    /// Connection, DNS, timeout or body transfer failure.
    #[error("Network error: {message}")]
    Network {
        /// Detailed error message.
        message: String,
    },

    /// The remote service does not know the identifier (HTTP 4xx).
    #[error("Not found (HTTP {status}): {url}")]
    NotFound {
        /// URL that was requested.
        url: String,
        /// HTTP status returned.
        status: u16,
    },

    /// Remote 5xx, unexpected status, or a malformed/empty response.
    #[error("Server error: {message}")]
    Server {
        /// URL that was requested.
        url: String,
        /// HTTP status if the failure came with one.
        #[serde(skip_serializing_if = "Option::is_none")]
        status: Option<u16>,
        /// Detailed error message.
        message: String,
    },

    /// Local write failure.
    #[error("I/O error ({kind}): {message}")]
    Io {
        /// The kind of I/O error (e.g., "`PermissionDenied`").
        kind: String,
        /// Detailed error message.
        message: String,
    },
}

impl DownloadError {
    /// Create an unsupported format error.
    pub const fn unsupported_format(service: Service, format: Format) -> Self {
        Self::UnsupportedFormat { service, format }
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier(identifier: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            identifier: identifier.into(),
            message: message.into(),
        }
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a not found error.
    pub fn not_found(url: impl Into<String>, status: u16) -> Self {
        Self::NotFound {
            url: url.into(),
            status,
        }
    }

    /// Create a server error without a status code.
    pub fn server(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Server {
            url: url.into(),
            status: None,
            message: message.into(),
        }
    }

    /// Create a server error with HTTP status code.
    pub fn server_with_status(url: impl Into<String>, status: u16) -> Self {
        Self::Server {
            url: url.into(),
            status: Some(status),
            message: format!("HTTP {status}"),
        }
    }

    /// Create an I/O error from kind and message strings.
    pub fn io(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error from a `std::io::Error`.
    #[must_use]
    pub fn from_io_error(err: &std::io::Error) -> Self {
        let kind = err.kind();
        Self::Io {
            kind: format!("{kind:?}"),
            message: err.to_string(),
        }
    }

    /// Short category label used in reports.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat { .. } => "unsupported-format",
            Self::InvalidIdentifier { .. } => "invalid-identifier",
            Self::Network { .. } => "network-error",
            Self::NotFound { .. } => "not-found",
            Self::Server { .. } => "server-error",
            Self::Io { .. } => "io-error",
        }
    }

    /// Convert to a user-friendly message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::UnsupportedFormat { service, format } => {
                let offered: Vec<_> = service.formats().iter().map(|f| f.as_str()).collect();
                format!(
                    "'{format}' is not available from {service} (available: {})",
                    offered.join(", ")
                )
            }
            Self::InvalidIdentifier {
                identifier,
                message,
            } => format!("'{identifier}' is not a valid identifier: {message}"),
            Self::Network { message } => format!("Network error: {message}"),
            Self::NotFound { status, .. } => {
                format!("Not found on the remote service (HTTP {status})")
            }
            Self::Server {
                status: Some(code),
                message,
                ..
            } => format!("Remote service error (HTTP {code}): {message}"),
            Self::Server { message, .. } => format!("Remote service error: {message}"),
            Self::Io { message, .. } => format!("File operation failed: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = DownloadError::from_io_error(&io_err);

        match err {
            DownloadError::Io { kind, message } => {
                assert_eq!(kind, "PermissionDenied");
                assert!(message.contains("read-only"));
            }
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_serialization() {
        let err = DownloadError::not_found("https://example.org/XXXXX.fasta", 404);
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"reason\":\"not_found\""));
        assert!(json.contains("404"));

        let parsed: DownloadError = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, err);
    }

    #[test]
    fn test_server_error_omits_missing_status() {
        let err = DownloadError::server("https://example.org", "empty body");
        let json = serde_json::to_string(&err).unwrap();
        assert!(!json.contains("status"));
    }

    #[test]
    fn test_unsupported_format_lists_alternatives() {
        let err = DownloadError::unsupported_format(Service::Uniprot, Format::Mmcif);
        let msg = err.user_message();
        assert!(msg.contains("mmcif"));
        assert!(msg.contains("fasta, gff, txt"));
    }

    #[test]
    fn test_categories_are_distinct() {
        let errors = [
            DownloadError::unsupported_format(Service::Pdb, Format::Gff),
            DownloadError::invalid_identifier("x", "bad"),
            DownloadError::network("timeout"),
            DownloadError::not_found("u", 404),
            DownloadError::server_with_status("u", 503),
            DownloadError::io("Other", "disk full"),
        ];
        let mut categories: Vec<_> = errors.iter().map(DownloadError::category).collect();
        categories.sort_unstable();
        categories.dedup();
        assert_eq!(categories.len(), errors.len());
    }
}
