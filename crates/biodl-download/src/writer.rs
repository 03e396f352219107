//! Skip-or-replace file writes.
//!
//! A destination is either left untouched (skip) or replaced in one rename;
//! readers never observe a partially written file.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use biodl_core::{DownloadError, DownloadOutcome};
use tempfile::NamedTempFile;

/// Write `bytes` to `path`.
///
/// With `override_existing` off an existing destination yields
/// [`DownloadOutcome::Skipped`] and is not touched, including one that
/// appears while the payload is being written. Otherwise the payload goes to
/// a temporary file beside the destination which is then renamed over it.
/// I/O failures become [`DownloadError::Io`]; the temporary file is removed.
pub fn write(path: &Path, bytes: &[u8], override_existing: bool) -> DownloadOutcome {
    if !override_existing && path.exists() {
        tracing::debug!(path = %path.display(), "destination exists, skipping");
        return DownloadOutcome::Skipped {
            path: path.to_path_buf(),
        };
    }

    match write_atomic(path, bytes, override_existing) {
        Ok(()) => {
            tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote file");
            DownloadOutcome::Written {
                path: path.to_path_buf(),
                bytes: bytes.len() as u64,
            }
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            tracing::debug!(path = %path.display(), "destination appeared, skipping");
            DownloadOutcome::Skipped {
                path: path.to_path_buf(),
            }
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "write failed");
            DownloadOutcome::failed(DownloadError::from_io_error(&e))
        }
    }
}

/// Fails with [`io::ErrorKind::AlreadyExists`] when `replace` is off and the
/// destination exists at rename time.
fn write_atomic(path: &Path, bytes: &[u8], replace: bool) -> io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    if replace {
        tmp.persist(path).map_err(|e| e.error)?;
    } else {
        tmp.persist_noclobber(path).map_err(|e| e.error)?;
    }
    Ok(())
}
