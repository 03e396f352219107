#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod fetcher;
mod status;

pub use fetcher::ReqwestFetcher;

// Used by the integration tests only
#[cfg(test)]
use tokio as _;
#[cfg(test)]
use wiremock as _;
