use clap::ArgAction;
use clap::Parser;
use pltscan_core::model::Layout;
use std::path::PathBuf;
use tracing::Level;

/// Report layout selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LayoutArg {
    /// Six columns classified relative to the anchor directory (default)
    #[value(name = "anchored")]
    Anchored,
    /// Four columns taken from the parent and grandparent directories
    #[value(name = "parent-dirs")]
    ParentDirs,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Anchored => Layout::Anchored,
            LayoutArg::ParentDirs => Layout::ParentDirs,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "pltscan",
    version,
    about = "Inventory plot files under a classification dataset tree into a CSV manifest"
)]
pub struct Cli {
    /// Directory to scan recursively.
    #[arg(value_name = "ROOT")]
    pub root_dir: Option<PathBuf>,

    /// Report destination. Defaults to `<ROOT>/<ANCHOR>.csv`.
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// File extension to inventory, matched case-insensitively.
    #[arg(long = "extension", short = 'e', value_name = "EXT")]
    pub target_extension: Option<String>,

    /// Directory name marking the root of the category hierarchy.
    #[arg(long = "anchor", short = 'a', value_name = "NAME")]
    pub anchor_name: Option<String>,

    /// Column layout of the report.
    #[arg(long, value_enum)]
    pub layout: Option<LayoutArg>,

    /// TOML file providing defaults for any option not given on the command line.
    #[arg(long = "config", short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors.
    #[arg(long, short = 'q', default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::WARN;
        }
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_options() {
        let cli = Cli::try_parse_from([
            "pltscan",
            "/data/cls_data",
            "-o",
            "/tmp/out.csv",
            "--extension",
            ".PLT",
            "--anchor",
            "dataset",
            "--layout",
            "parent-dirs",
        ])
        .unwrap();
        assert_eq!(cli.root_dir, Some(PathBuf::from("/data/cls_data")));
        assert_eq!(cli.output_path, Some(PathBuf::from("/tmp/out.csv")));
        assert_eq!(cli.target_extension.as_deref(), Some(".PLT"));
        assert_eq!(cli.anchor_name.as_deref(), Some("dataset"));
        assert_eq!(cli.layout, Some(LayoutArg::ParentDirs));
    }

    #[test]
    fn log_level_from_flags() {
        let parse = |args: &[&str]| Cli::try_parse_from(args).unwrap().log_level();
        assert_eq!(parse(&["pltscan"]), Level::INFO);
        assert_eq!(parse(&["pltscan", "-v"]), Level::DEBUG);
        assert_eq!(parse(&["pltscan", "-vv"]), Level::TRACE);
        assert_eq!(parse(&["pltscan", "-q"]), Level::WARN);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["pltscan", "-q", "-v"]).is_err());
    }

    #[test]
    fn layout_arg_maps_to_layout() {
        assert_eq!(Layout::from(LayoutArg::Anchored), Layout::Anchored);
        assert_eq!(Layout::from(LayoutArg::ParentDirs), Layout::ParentDirs);
    }
}
