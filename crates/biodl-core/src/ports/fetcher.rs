//! Byte fetcher port.

use url::Url;

use crate::download::DownloadError;

/// Retrieves the full body of a URL.
///
/// Implementations classify failures into the download error taxonomy:
///
/// - 4xx responses become [`DownloadError::NotFound`]
/// - 5xx, unexpected statuses and empty bodies become [`DownloadError::Server`]
/// - transport failures and timeouts become [`DownloadError::Network`]
///
/// A fetcher performs no retries and no caching.
pub trait Fetcher: Send + Sync {
    /// Fetch `url`, returning the body bytes on a 2xx response.
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, DownloadError>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, DownloadError> {
        (**self).fetch(url)
    }
}

impl<F: Fetcher + ?Sized> Fetcher for Box<F> {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, DownloadError> {
        (**self).fetch(url)
    }
}
