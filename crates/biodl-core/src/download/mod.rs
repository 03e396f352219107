//! Download domain types, events, and errors.
//!
//! This module contains pure data types for the download pipeline.
//! No I/O, networking, or runtime dependencies allowed.
//!
//! # Structure
//!
//! - `request` - The per-pair unit of work and its outcome
//! - `manifest` - Ordered outcome list returned by a batch run
//! - `events` - Progress events (`DownloadEvent`)
//! - `errors` - Per-request failure reasons

pub mod errors;
pub mod events;
pub mod manifest;
pub mod request;

// Re-export commonly used types
pub use errors::DownloadError;
pub use events::DownloadEvent;
pub use manifest::{Manifest, ManifestEntry, ManifestSummary};
pub use request::{DownloadOutcome, DownloadRequest};
