//! Download request and outcome types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::errors::DownloadError;
use crate::domain::{Format, Identifier, Service};

/// One (service, identifier, format) unit of work with its shared options.
///
/// Built by the orchestrator per pair and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    /// Service the pair is fetched from.
    pub service: Service,
    /// Accession to fetch.
    pub identifier: Identifier,
    /// Requested representation.
    pub format: Format,
    /// Directory the file lands in.
    pub output_dir: PathBuf,
    /// Replace an existing file instead of skipping it.
    pub override_existing: bool,
}

impl DownloadRequest {
    /// Create a request with `override_existing` off.
    pub fn new(
        service: Service,
        identifier: Identifier,
        format: Format,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            service,
            identifier,
            format,
            output_dir: output_dir.into(),
            override_existing: false,
        }
    }

    /// Set whether existing files are replaced.
    #[must_use]
    pub const fn with_override(mut self, override_existing: bool) -> Self {
        self.override_existing = override_existing;
        self
    }

    /// Full destination path for a resolved filename.
    pub fn destination(&self, filename: &str) -> PathBuf {
        self.output_dir.join(filename)
    }
}

/// What happened to a single request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DownloadOutcome {
    /// The payload was written to `path`.
    Written {
        /// Destination file.
        path: PathBuf,
        /// Bytes written after decoding.
        bytes: u64,
    },
    /// The destination already existed and override was off.
    Skipped {
        /// Existing destination file, left untouched.
        path: PathBuf,
    },
    /// The request failed; nothing was reported as written.
    Failed {
        /// Reason for the failure.
        error: DownloadError,
    },
}

impl DownloadOutcome {
    /// Wrap a failure.
    pub const fn failed(error: DownloadError) -> Self {
        Self::Failed { error }
    }

    /// `true` for `Written` and `Skipped`.
    pub const fn is_success(&self) -> bool {
        !self.is_failure()
    }

    /// `true` for `Failed`.
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Short label used in reports.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Written { .. } => "written",
            Self::Skipped { .. } => "skipped",
            Self::Failed { .. } => "failed",
        }
    }
}

impl From<DownloadError> for DownloadOutcome {
    fn from(error: DownloadError) -> Self {
        Self::failed(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_is_output_dir_plus_filename() {
        let request = DownloadRequest::new(
            Service::Pdb,
            Identifier::new("2pah").unwrap(),
            Format::Pdb,
            "/data/structures",
        );

        assert_eq!(
            request.destination("2pah.pdb"),
            PathBuf::from("/data/structures/2pah.pdb")
        );
        assert!(!request.override_existing);
        assert!(request.with_override(true).override_existing);
    }

    #[test]
    fn outcome_classification() {
        let written = DownloadOutcome::Written {
            path: PathBuf::from("a.pdb"),
            bytes: 10,
        };
        let skipped = DownloadOutcome::Skipped {
            path: PathBuf::from("a.pdb"),
        };
        let failed = DownloadOutcome::from(DownloadError::network("reset"));

        assert!(written.is_success());
        assert!(skipped.is_success());
        assert!(failed.is_failure());
        assert_eq!(failed.label(), "failed");
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let skipped = DownloadOutcome::Skipped {
            path: PathBuf::from("P00439.fasta"),
        };
        let json = serde_json::to_value(&skipped).unwrap();
        assert_eq!(json["status"], "skipped");
        assert_eq!(json["path"], "P00439.fasta");
    }
}
