//! Optional TOML config file.
//!
//! Every key is optional; anything given on the command line wins. Relative
//! paths are resolved against the directory holding the config file.
//!
//! ```toml
//! root_dir = "/home/op/T1/cls_data"
//! output_path = "manifests/cls_data.csv"
//! target_extension = "plt"
//! anchor_name = "cls_data"
//! layout = "anchored"
//! ```

use anyhow::{Context, Result};
use pltscan_core::model::Layout;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub root_dir: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub target_extension: Option<String>,
    pub anchor_name: Option<String>,
    pub layout: Option<Layout>,
}

impl FileConfig {
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        let mut config = Self::parse(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.root_dir = config.root_dir.map(|p| base.join(p));
            config.output_path = config.output_path.map(|p| base.join(p));
        }
        Ok(config)
    }
}
