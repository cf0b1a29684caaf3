use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::algorithm::Strategy;
use crate::loader::DEFAULT_ARC_DELAY;
use crate::{Error, Result};

/// Configuration for the console front end
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Network description to load
    pub network_path: PathBuf,
    /// Delay added to every arc cost when loading
    pub arc_delay: u32,
    /// Solver used for queries
    pub strategy: Strategy,
    /// Print reports as JSON instead of text
    pub json_output: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            network_path: PathBuf::from("Metro.txt"),
            arc_delay: DEFAULT_ARC_DELAY,
            strategy: Strategy::default(),
            json_output: false,
        }
    }
}

impl RunConfig {
    /// Parses a JSON configuration; missing fields take their defaults
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| Error::Config(e.to_string()))
    }

    /// Reads a JSON configuration file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let input = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&input)
    }
}
