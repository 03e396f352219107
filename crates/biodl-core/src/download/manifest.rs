//! The ordered per-pair report produced by a batch run.

use serde::{Deserialize, Serialize};

use super::request::DownloadOutcome;
use crate::domain::{Format, Identifier, Service};

/// Outcome of one (identifier, format) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub service: Service,
    pub identifier: Identifier,
    pub format: Format,
    pub outcome: DownloadOutcome,
}

/// Counts by outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestSummary {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl ManifestSummary {
    /// Total number of pairs.
    pub const fn total(&self) -> usize {
        self.written + self.skipped + self.failed
    }
}

/// Ordered list of outcomes, one per pair, in generation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Create an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty manifest with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append an entry.
    pub fn push(&mut self, entry: ManifestEntry) {
        self.entries.push(entry);
    }

    /// Entries in generation order.
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no pair was processed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `true` when every pair was written or skipped.
    pub fn is_success(&self) -> bool {
        self.entries.iter().all(|e| e.outcome.is_success())
    }

    /// Counts by outcome.
    pub fn summary(&self) -> ManifestSummary {
        let mut summary = ManifestSummary::default();
        for entry in &self.entries {
            match entry.outcome {
                DownloadOutcome::Written { .. } => summary.written += 1,
                DownloadOutcome::Skipped { .. } => summary.skipped += 1,
                DownloadOutcome::Failed { .. } => summary.failed += 1,
            }
        }
        summary
    }

    /// Serialize entries and summary as pretty JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&serde_json::json!({
            "entries": self.entries,
            "summary": self.summary(),
        }))
    }
}
