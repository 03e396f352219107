#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

// Re-export core types for convenience
pub use biodl_core::download::{
    DownloadError, DownloadEvent, DownloadOutcome, DownloadRequest, Manifest, ManifestEntry,
    ManifestSummary,
};
pub use biodl_core::ports::{DownloadEventEmitterPort, Fetcher, NoopDownloadEmitter};

pub mod assembly;
pub mod decode;
mod orchestrator;
pub mod writer;

pub use orchestrator::Downloader;
