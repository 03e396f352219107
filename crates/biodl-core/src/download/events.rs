//! Progress events emitted while a batch runs.

use serde::{Deserialize, Serialize};

use super::manifest::ManifestEntry;
use crate::domain::{Format, Identifier, Service};

/// Event emitted by the orchestrator for each pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DownloadEvent {
    /// A batch is about to start.
    BatchStarted {
        service: Service,
        /// Number of (identifier, format) pairs in the batch.
        pairs: usize,
    },

    /// A pair was resolved and its URL is about to be fetched.
    Fetching {
        identifier: Identifier,
        format: Format,
        url: String,
    },

    /// A pair reached its final outcome.
    Completed {
        /// Zero-based position in the manifest.
        position: usize,
        entry: ManifestEntry,
    },
}
