//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser};

use crate::commands::Commands;

/// Download structure, sequence and family files from PDBe, UniProt, Pfam,
/// CATH and SIFTS
#[derive(Debug, Parser)]
#[command(name = "biodownloader")]
#[command(version)]
pub struct Cli {
    /// Directory the files are written to (created if missing)
    #[arg(long, global = true, default_value = ".", value_name = "DIR")]
    pub output: PathBuf,

    /// Replace files that already exist instead of skipping them
    #[arg(long = "override", global = true)]
    pub override_existing: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print the manifest as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(flatten)]
    pub endpoints: EndpointArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Service base URL and HTTP overrides, normally set through the environment.
///
/// Values are validated during bootstrap so that a bad value is reported as
/// a configuration error rather than a usage error.
#[derive(Debug, Clone, Default, Args)]
pub struct EndpointArgs {
    /// PDBe file server base URL
    #[arg(long, global = true, env = "BIODL_PDBE_URL", hide = true)]
    pub pdbe_url: Option<String>,

    /// PDBe REST API base URL
    #[arg(long, global = true, env = "BIODL_PDBE_API_URL", hide = true)]
    pub pdbe_api_url: Option<String>,

    /// UniProtKB REST base URL
    #[arg(long, global = true, env = "BIODL_UNIPROT_URL", hide = true)]
    pub uniprot_url: Option<String>,

    /// SIFTS XML base URL
    #[arg(long, global = true, env = "BIODL_SIFTS_URL", hide = true)]
    pub sifts_url: Option<String>,

    /// CATH base URL
    #[arg(long, global = true, env = "BIODL_CATH_URL", hide = true)]
    pub cath_url: Option<String>,

    /// InterPro API base URL used for Pfam
    #[arg(long, global = true, env = "BIODL_PFAM_URL", hide = true)]
    pub pfam_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, env = "BIODL_TIMEOUT_SECS", hide = true)]
    pub timeout_secs: Option<String>,
}
