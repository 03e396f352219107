#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the integration tests only
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tokio as _;
#[cfg(test)]
use wiremock as _;

// Used by the binary only
use anyhow as _;
use dotenvy as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use logging::LogConfig;
pub use parser::Cli;
