//! CLI entry point - the composition root.
//!
//! Parses arguments, wires the downloader through bootstrap, runs the batch
//! and turns the manifest into an exit status.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use biodl_cli::handlers::download::{self, BatchArgs};
use biodl_cli::{Cli, CliConfig, CliError, LogConfig, bootstrap, logging, presentation};
use clap::Parser;

fn run(cli: &Cli) -> anyhow::Result<u8> {
    let config = CliConfig::from_cli(cli)?;
    let ctx = bootstrap(config)?;

    let manifest = download::execute(&ctx, &BatchArgs::from_cli(cli))?;

    let report = if cli.json {
        presentation::manifest_json(&manifest)
            .context("failed to serialize manifest")?
    } else {
        presentation::manifest_table(&manifest)
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", report.trim_end())
        .context("failed to write report")?;

    Ok(u8::from(!manifest.is_success()))
}

fn main() -> ExitCode {
    // Load environment variables before parsing so clap sees them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(&LogConfig::from_verbosity(cli.verbose));

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = err
                .downcast_ref::<CliError>()
                .map_or(1, CliError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
