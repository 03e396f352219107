#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod download;
pub mod error;
pub mod paths;
pub mod ports;
pub mod resolver;

// Re-export commonly used types for convenience
pub use config::{
    DEFAULT_CATH_MAX_SEQUENCES, DEFAULT_TIMEOUT, DownloadConfig, Endpoint, Endpoints,
    HttpSettings, PfamAlignment, ResolverOptions,
};
pub use domain::{Format, Identifier, Service};
pub use download::{
    DownloadError, DownloadEvent, DownloadOutcome, DownloadRequest, Manifest, ManifestEntry,
    ManifestSummary,
};
pub use error::CoreError;
pub use paths::{PathError, ensure_directory};
pub use ports::{DownloadEventEmitterPort, Fetcher, NoopDownloadEmitter};
pub use resolver::{
    AssemblyLookup, DEFAULT_ASSEMBLY_ID, PayloadEncoding, Resolve, ServiceResolver, Target,
};
