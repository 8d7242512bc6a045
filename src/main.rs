//! pltscan — dataset manifest builder.
//!
//! Thin binary entry point. All logic lives in the `pltscan-core`
//! and `pltscan-cli` crates.

use clap::Parser;
use pltscan_cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .init();

    tracing::debug!("pltscan starting");

    let summary = pltscan_cli::run(&cli)?;
    println!("{}", summary.describe());

    Ok(())
}
