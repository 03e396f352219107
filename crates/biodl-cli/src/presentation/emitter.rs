//! Console progress reporting.

use std::io::Write;

use biodl_core::{DownloadEvent, DownloadEventEmitterPort, DownloadOutcome};

/// Prints one line per completed pair to stderr when enabled.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleEmitter {
    enabled: bool,
}

impl ConsoleEmitter {
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

/// Progress line for an event, if it warrants one.
pub fn progress_line(event: &DownloadEvent) -> Option<String> {
    match event {
        DownloadEvent::BatchStarted { service, pairs } => {
            Some(format!("{service}: {pairs} file(s) requested"))
        }
        DownloadEvent::Fetching { .. } => None,
        DownloadEvent::Completed { position, entry } => {
            let status = match &entry.outcome {
                DownloadOutcome::Written { path, .. } => format!("written {}", path.display()),
                DownloadOutcome::Skipped { path } => format!("skipped {}", path.display()),
                DownloadOutcome::Failed { error } => format!("failed ({})", error.category()),
            };
            Some(format!(
                "[{}] {} {}: {status}",
                position + 1,
                entry.identifier,
                entry.format
            ))
        }
    }
}

impl DownloadEventEmitterPort for ConsoleEmitter {
    fn emit(&self, event: DownloadEvent) {
        if !self.enabled {
            return;
        }
        if let Some(line) = progress_line(&event) {
            let _ = writeln!(std::io::stderr().lock(), "{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use biodl_core::{DownloadError, Format, Identifier, ManifestEntry, Service};

    use super::*;

    fn completed(position: usize, outcome: DownloadOutcome) -> DownloadEvent {
        DownloadEvent::Completed {
            position,
            entry: ManifestEntry {
                service: Service::Uniprot,
                identifier: Identifier::new("P00439").unwrap(),
                format: Format::Fasta,
                outcome,
            },
        }
    }

    #[test]
    fn completed_lines() {
        let written = completed(
            0,
            DownloadOutcome::Written {
                path: PathBuf::from("P00439.fasta"),
                bytes: 10,
            },
        );
        assert_eq!(
            progress_line(&written).unwrap(),
            "[1] P00439 fasta: written P00439.fasta"
        );

        let failed = completed(
            3,
            DownloadOutcome::failed(DownloadError::network("connection reset")),
        );
        assert_eq!(
            progress_line(&failed).unwrap(),
            "[4] P00439 fasta: failed (network-error)"
        );
    }

    #[test]
    fn fetching_is_silent() {
        let event = DownloadEvent::Fetching {
            identifier: Identifier::new("P00439").unwrap(),
            format: Format::Fasta,
            url: "http://x".into(),
        };
        assert!(progress_line(&event).is_none());
    }
}
