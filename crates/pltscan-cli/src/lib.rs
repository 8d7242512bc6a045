//! Command-line frontend for pltscan.
//!
//! Parses arguments, merges them over the optional config file and the
//! built-in defaults, and hands an explicit [`ScanConfig`] to the core driver.
pub mod args;
pub mod config_file;

pub use args::{Cli, LayoutArg};
pub use config_file::FileConfig;

use anyhow::{Context, Result};
use pltscan_core::classify::ClassificationAnchor;
use pltscan_core::{run_scan, ScanConfig, ScanSummary};
use tracing::debug;

/// Build the run configuration. Precedence: command line, config file, defaults.
pub fn resolve_config(cli: &Cli) -> Result<ScanConfig> {
    let file = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };

    let root_dir = cli
        .root_dir
        .clone()
        .or(file.root_dir)
        .context("no root directory given: pass ROOT or set `root_dir` in the config file")?;
    let anchor_name = cli
        .anchor_name
        .clone()
        .or(file.anchor_name)
        .unwrap_or_else(|| ClassificationAnchor::DEFAULT.to_owned());
    let output_path = cli
        .output_path
        .clone()
        .or(file.output_path)
        .unwrap_or_else(|| root_dir.join(format!("{anchor_name}.csv")));

    let mut config = ScanConfig::new(root_dir, output_path);
    config.anchor_name = anchor_name;
    if let Some(ext) = cli.target_extension.clone().or(file.target_extension) {
        config.target_extension = ext;
    }
    if let Some(layout) = cli.layout.map(Into::into).or(file.layout) {
        config.layout = layout;
    }
    Ok(config)
}

/// Resolve the configuration and run one scan.
pub fn run(cli: &Cli) -> Result<ScanSummary> {
    let config = resolve_config(cli)?;
    debug!("Resolved configuration: {config:?}");
    run_scan(&config).with_context(|| format!("scan of {} failed", config.root_dir.display()))
}
