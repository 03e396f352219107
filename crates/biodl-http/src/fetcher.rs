//! `reqwest`-backed implementation of the [`Fetcher`] port.

use biodl_core::{CoreError, DownloadError, Fetcher, HttpSettings};
use url::Url;

use crate::status::{classify_status, ensure_body};

/// Production fetcher using a blocking reqwest client.
///
/// One client is built per run and reused for every request so connections
/// to the same host are pooled.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::blocking::Client,
}

impl ReqwestFetcher {
    /// Build a fetcher from HTTP settings.
    ///
    /// Fails only if the TLS backend cannot be initialised.
    pub fn new(settings: &HttpSettings) -> Result<Self, CoreError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(|e| CoreError::Configuration(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

impl Fetcher for ReqwestFetcher {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, DownloadError> {
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(url.as_str())
            .send()
            .map_err(|e| transport_error(url, &e))?;

        let status = response.status().as_u16();
        tracing::debug!(%url, status, "response");
        classify_status(url.as_str(), status)?;

        let body = response.bytes().map_err(|e| transport_error(url, &e))?;
        ensure_body(url.as_str(), body.to_vec())
    }
}

fn transport_error(url: &Url, err: &reqwest::Error) -> DownloadError {
    if err.is_timeout() {
        DownloadError::network(format!("request to {url} timed out"))
    } else if err.is_connect() {
        DownloadError::network(format!("could not connect to {url}"))
    } else {
        DownloadError::network(format!("request to {url} failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn builds_with_default_settings() {
        assert!(ReqwestFetcher::new(&HttpSettings::default()).is_ok());
    }

    #[test]
    fn refused_connection_is_a_network_error() {
        let timeout = Duration::from_secs(5);
        let settings = HttpSettings::default().with_timeout(timeout);
        let fetcher = ReqwestFetcher::new(&settings).unwrap();

        // Port 1 is reserved and nothing listens on it.
        let url = Url::parse("http://127.0.0.1:1/2pah.pdb").unwrap();
        let err = fetcher.fetch(&url).unwrap_err();
        assert!(matches!(err, DownloadError::Network { .. }), "{err:?}");
    }
}
