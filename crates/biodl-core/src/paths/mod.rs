//! Output directory handling.
//!
//! The output directory is prepared once, before a batch starts; failure here
//! is fatal for the run rather than a per-request outcome.

mod ensure;
mod error;

pub use ensure::ensure_directory;
pub use error::PathError;
