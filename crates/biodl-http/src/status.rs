//! Response classification.
//!
//! Pure functions so the mapping can be tested without a server.

use biodl_core::DownloadError;

/// Map a final (post-redirect) status code to success or a download error.
///
/// Only statuses that mean the entry does not exist become `NotFound`; other
/// client errors (auth, rate limiting) are reported with their status.
pub fn classify_status(url: &str, status: u16) -> Result<(), DownloadError> {
    match status {
        200..=299 => Ok(()),
        400 | 404 | 410 => Err(DownloadError::not_found(url, status)),
        _ => Err(DownloadError::server_with_status(url, status)),
    }
}

/// Reject a successful response that carried nothing.
pub fn ensure_body(url: &str, body: Vec<u8>) -> Result<Vec<u8>, DownloadError> {
    if body.is_empty() {
        Err(DownloadError::server(url, "empty response body"))
    } else {
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.org/x";

    #[test]
    fn success_range() {
        assert!(classify_status(URL, 200).is_ok());
        assert!(classify_status(URL, 204).is_ok());
    }

    #[test]
    fn unknown_entries_are_not_found() {
        for status in [400, 404, 410] {
            assert_eq!(
                classify_status(URL, status),
                Err(DownloadError::not_found(URL, status))
            );
        }
    }

    #[test]
    fn everything_else_is_a_server_error() {
        for status in [401, 403, 429, 500, 502, 503, 304, 100] {
            let err = classify_status(URL, status).unwrap_err();
            assert!(
                matches!(err, DownloadError::Server { status: Some(s), .. } if s == status),
                "{status} -> {err:?}"
            );
        }
    }

    #[test]
    fn empty_body_is_rejected() {
        assert!(matches!(
            ensure_body(URL, Vec::new()),
            Err(DownloadError::Server { status: None, .. })
        ));
        assert_eq!(ensure_body(URL, b"data".to_vec()).unwrap(), b"data");
    }
}
