//! The per-pair download pipeline.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use biodl_core::{
    AssemblyLookup, DEFAULT_ASSEMBLY_ID, DownloadConfig, DownloadError, DownloadEvent,
    DownloadEventEmitterPort, DownloadOutcome, DownloadRequest, Fetcher, Format, Identifier,
    Manifest, ManifestEntry, NoopDownloadEmitter, Resolve, Service, ServiceResolver,
};
use url::Url;

use crate::{assembly, decode, writer};

/// Runs batches of (identifier, format) pairs against one fetcher.
///
/// Pairs are processed strictly one after another. Every pair produces
/// exactly one manifest entry, in generation order: identifiers as supplied,
/// formats in [`Format`] order.
pub struct Downloader<F> {
    fetcher: F,
    config: DownloadConfig,
    emitter: Arc<dyn DownloadEventEmitterPort>,
}

impl<F: Fetcher> Downloader<F> {
    /// Create a downloader that emits no events.
    pub fn new(fetcher: F, config: DownloadConfig) -> Self {
        Self {
            fetcher,
            config,
            emitter: Arc::new(NoopDownloadEmitter::new()),
        }
    }

    /// Report progress to `emitter`.
    #[must_use]
    pub fn with_emitter(mut self, emitter: Arc<dyn DownloadEventEmitterPort>) -> Self {
        self.emitter = emitter;
        self
    }

    /// Download every (identifier, format) pair into `output_dir`.
    ///
    /// Never fails as a whole; per-pair failures are recorded in the
    /// returned manifest.
    pub fn run(
        &self,
        identifiers: &[Identifier],
        service: Service,
        formats: &BTreeSet<Format>,
        output_dir: &Path,
        override_existing: bool,
    ) -> Manifest {
        let resolver = ServiceResolver::for_service(service, &self.config);
        let pairs = identifiers.len() * formats.len();

        tracing::info!(%service, pairs, output = %output_dir.display(), "starting batch");
        self.emitter
            .emit(DownloadEvent::BatchStarted { service, pairs });

        let mut manifest = Manifest::with_capacity(pairs);
        for identifier in identifiers {
            for &format in formats {
                let request = DownloadRequest::new(service, identifier.clone(), format, output_dir)
                    .with_override(override_existing);

                let outcome = self.download(&resolver, &request);
                let entry = ManifestEntry {
                    service,
                    identifier: request.identifier,
                    format,
                    outcome,
                };

                self.emitter.emit(DownloadEvent::Completed {
                    position: manifest.len(),
                    entry: entry.clone(),
                });
                manifest.push(entry);
            }
        }

        let summary = manifest.summary();
        tracing::info!(
            written = summary.written,
            skipped = summary.skipped,
            failed = summary.failed,
            "batch finished"
        );
        manifest
    }

    fn download(&self, resolver: &ServiceResolver, request: &DownloadRequest) -> DownloadOutcome {
        self.try_download(resolver, request)
            .unwrap_or_else(|error| {
                tracing::debug!(
                    identifier = %request.identifier,
                    format = %request.format,
                    reason = error.category(),
                    "{error}"
                );
                DownloadOutcome::failed(error)
            })
    }

    fn try_download(
        &self,
        resolver: &ServiceResolver,
        request: &DownloadRequest,
    ) -> Result<DownloadOutcome, DownloadError> {
        let target = resolver.resolve(&request.identifier, request.format)?;
        let destination = request.destination(&target.filename);

        // Skip before any network traffic.
        if !request.override_existing && destination.exists() {
            tracing::debug!(path = %destination.display(), "already present, skipping");
            return Ok(DownloadOutcome::Skipped { path: destination });
        }

        let url = match &target.assembly {
            Some(lookup) => self.preferred_assembly_url(lookup),
            None => target.url,
        };

        self.emitter.emit(DownloadEvent::Fetching {
            identifier: request.identifier.clone(),
            format: request.format,
            url: url.to_string(),
        });

        let body = self.fetcher.fetch(&url)?;
        let payload = decode::decode(body, target.encoding).map_err(|e| {
            DownloadError::server(url.as_str(), format!("could not decompress payload: {e}"))
        })?;

        Ok(writer::write(
            &destination,
            &payload,
            request.override_existing,
        ))
    }

    /// Assembly URL for the entry's preferred assembly, or assembly 1 when
    /// the summary cannot be fetched or read.
    fn preferred_assembly_url(&self, lookup: &AssemblyLookup) -> Url {
        let assembly_id = self
            .fetcher
            .fetch(&lookup.summary_url)
            .map_err(|e| e.to_string())
            .and_then(|body| {
                assembly::preferred_assembly(&body, &lookup.pdb_id)
                    .map_err(|e| e.to_string())
            })
            .unwrap_or_else(|reason| {
                tracing::warn!(
                    pdb_id = %lookup.pdb_id,
                    %reason,
                    "could not determine preferred assembly, using assembly {DEFAULT_ASSEMBLY_ID}"
                );
                DEFAULT_ASSEMBLY_ID.to_string()
            });

        tracing::debug!(pdb_id = %lookup.pdb_id, %assembly_id, "selected assembly");
        lookup.url_for(&assembly_id)
    }
}

#[cfg(test)]
pub mod testing {
    use std::collections::HashMap;
    use std::io::Write;
    use std::sync::Mutex;

    use flate2::Compression;
    use flate2::write::GzEncoder;

    use super::*;

    /// A fake fetcher serving canned bodies keyed by URL path.
    ///
    /// Unknown paths answer with a 404.
    #[derive(Default)]
    pub struct FakeFetcher {
        responses: HashMap<String, Result<Vec<u8>, DownloadError>>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeFetcher {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_body(mut self, path: &str, body: impl Into<Vec<u8>>) -> Self {
            self.responses.insert(path.to_string(), Ok(body.into()));
            self
        }

        pub fn with_error(mut self, path: &str, error: DownloadError) -> Self {
            self.responses.insert(path.to_string(), Err(error));
            self
        }

        /// Paths requested so far, in order.
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Fetcher for FakeFetcher {
        fn fetch(&self, url: &Url) -> Result<Vec<u8>, DownloadError> {
            let path = url.path().to_string();
            self.calls.lock().unwrap().push(path.clone());
            self.responses
                .get(&path)
                .cloned()
                .unwrap_or_else(|| Err(DownloadError::not_found(url.as_str(), 404)))
        }
    }

    /// Collects every emitted event.
    #[derive(Default)]
    pub struct CapturingEmitter(pub Mutex<Vec<DownloadEvent>>);

    impl DownloadEventEmitterPort for CapturingEmitter {
        fn emit(&self, event: DownloadEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    pub fn gzip(bytes: &[u8]) -> Vec<u8> {
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(bytes).unwrap();
        enc.finish().unwrap()
    }

    /// Config routing every service under `http://fake.test/<service>`.
    pub fn fake_config() -> DownloadConfig {
        let base = Url::parse("http://fake.test/").unwrap();
        DownloadConfig {
            endpoints: biodl_core::Endpoints::all_under(&base),
            ..DownloadConfig::default()
        }
    }
}
