//! The download command shared by every service subcommand.

use std::collections::BTreeSet;
use std::path::PathBuf;

use biodl_core::{Format, Identifier, Manifest, Service, ensure_directory};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::parser::Cli;

/// Everything one batch needs from the command line.
#[derive(Debug, Clone)]
pub struct BatchArgs {
    pub service: Service,
    pub identifiers: Vec<String>,
    pub formats: BTreeSet<Format>,
    pub output: PathBuf,
    pub override_existing: bool,
}

impl BatchArgs {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            service: cli.command.service(),
            identifiers: cli.command.identifiers().to_vec(),
            formats: cli.command.formats(),
            output: cli.output.clone(),
            override_existing: cli.override_existing,
        }
    }
}

/// Parse identifier tokens, rejecting the whole run on the first bad one.
pub fn parse_identifiers(raw: &[String]) -> Result<Vec<Identifier>, CliError> {
    if raw.is_empty() {
        return Err(CliError::Arguments(
            "at least one identifier is required".into(),
        ));
    }
    raw.iter()
        .map(|token| Identifier::new(token).map_err(CliError::from))
        .collect()
}

/// Validate input, prepare the output directory and run the batch.
///
/// Fatal problems abort before any network activity. Per-pair failures are
/// returned inside the manifest.
pub fn execute(ctx: &CliContext, args: &BatchArgs) -> Result<Manifest, CliError> {
    let identifiers = parse_identifiers(&args.identifiers)?;
    if args.formats.is_empty() {
        return Err(CliError::Arguments(
            "at least one format flag is required".into(),
        ));
    }

    ensure_directory(&args.output)?;

    Ok(ctx.downloader.run(
        &identifiers,
        args.service,
        &args.formats,
        &args.output,
        args.override_existing,
    ))
}
