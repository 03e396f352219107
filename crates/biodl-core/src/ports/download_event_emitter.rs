//! Download event emitter port.
//!
//! The orchestrator reports progress through this port so that the CLI can
//! render it without the pipeline knowing about terminals.

use crate::download::DownloadEvent;

/// Port for emitting download events.
///
/// Emission must not block or fail; implementations that cannot deliver an
/// event drop it.
pub trait DownloadEventEmitterPort: Send + Sync {
    /// Emit a download event.
    fn emit(&self, event: DownloadEvent);
}

/// A no-op download event emitter for tests and quiet runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDownloadEmitter;

impl NoopDownloadEmitter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DownloadEventEmitterPort for NoopDownloadEmitter {
    fn emit(&self, _event: DownloadEvent) {}
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::domain::Service;

    #[test]
    fn noop_emitter_is_object_safe() {
        let emitter: Arc<dyn DownloadEventEmitterPort> = Arc::new(NoopDownloadEmitter::new());
        emitter.emit(DownloadEvent::BatchStarted {
            service: Service::Pdb,
            pairs: 0,
        });
    }

    #[test]
    fn capturing_emitter_receives_events_in_order() {
        #[derive(Default)]
        struct Capture(Mutex<Vec<DownloadEvent>>);

        impl DownloadEventEmitterPort for Capture {
            fn emit(&self, event: DownloadEvent) {
                self.0.lock().unwrap().push(event);
            }
        }

        let capture = Capture::default();
        for pairs in [1, 2] {
            capture.emit(DownloadEvent::BatchStarted {
                service: Service::Uniprot,
                pairs,
            });
        }

        let seen = capture.0.into_inner().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(
            seen[1],
            DownloadEvent::BatchStarted {
                service: Service::Uniprot,
                pairs: 2
            }
        );
    }
}
