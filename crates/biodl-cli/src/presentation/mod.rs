//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: the manifest comes in, text goes out.

pub mod emitter;
pub mod tables;

use biodl_core::Manifest;

pub use emitter::ConsoleEmitter;
pub use tables::{manifest_table, truncate_string};

/// Render the manifest as pretty JSON.
pub fn manifest_json(manifest: &Manifest) -> serde_json::Result<String> {
    manifest.to_json_pretty()
}
