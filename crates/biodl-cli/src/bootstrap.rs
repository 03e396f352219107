//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI: the configuration is assembled from defaults, environment
//! and flags, the reqwest fetcher is built, and the downloader is composed
//! with the console emitter.

use std::sync::Arc;
use std::time::Duration;

use biodl_core::{DownloadConfig, Endpoint, Endpoints, HttpSettings};
use biodl_download::Downloader;
use biodl_http::ReqwestFetcher;

use crate::error::CliError;
use crate::logging::LogConfig;
use crate::parser::{Cli, EndpointArgs};
use crate::presentation::ConsoleEmitter;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Endpoints, HTTP settings and resolver options for the run.
    pub download: DownloadConfig,
    /// Print per-pair progress lines to stderr.
    pub progress: bool,
}

impl CliConfig {
    /// Build the run configuration from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        Ok(Self {
            download: DownloadConfig {
                endpoints: endpoints(&cli.endpoints)?,
                http: http_settings(&cli.endpoints)?,
                resolver: cli.command.resolver_options(),
            },
            progress: LogConfig::from_verbosity(cli.verbose).is_verbose() && !cli.json,
        })
    }
}

fn endpoints(args: &EndpointArgs) -> Result<Endpoints, CliError> {
    let overrides = [
        (Endpoint::Pdbe, &args.pdbe_url),
        (Endpoint::PdbeApi, &args.pdbe_api_url),
        (Endpoint::Uniprot, &args.uniprot_url),
        (Endpoint::Sifts, &args.sifts_url),
        (Endpoint::Cath, &args.cath_url),
        (Endpoint::Pfam, &args.pfam_url),
    ];

    let mut endpoints = Endpoints::default();
    for (endpoint, value) in overrides {
        if let Some(base) = value {
            tracing::debug!(var = endpoint.env_var(), %base, "base URL override");
            endpoints = endpoints.with_base(endpoint, base)?;
        }
    }
    Ok(endpoints)
}

fn http_settings(args: &EndpointArgs) -> Result<HttpSettings, CliError> {
    let settings = HttpSettings::default();
    let Some(raw) = args.timeout_secs.as_deref() else {
        return Ok(settings);
    };

    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(settings.with_timeout(Duration::from_secs(secs))),
        _ => Err(CliError::Config(format!(
            "BIODL_TIMEOUT_SECS must be a positive number of seconds, got '{raw}'"
        ))),
    }
}

/// Fully composed context for the download handler.
pub struct CliContext {
    /// Downloader backed by the production HTTP fetcher.
    pub downloader: Downloader<ReqwestFetcher>,
}

/// Compose the CLI context from configuration.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let fetcher = ReqwestFetcher::new(&config.download.http)?;
    let downloader = Downloader::new(fetcher, config.download)
        .with_emitter(Arc::new(ConsoleEmitter::new(config.progress)));

    Ok(CliContext { downloader })
}
