//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the download pipeline expects from
//! infrastructure. They use only domain types; the HTTP implementation lives
//! in `biodl-http`.

pub mod download_event_emitter;
pub mod fetcher;

pub use download_event_emitter::{DownloadEventEmitterPort, NoopDownloadEmitter};
pub use fetcher::Fetcher;
