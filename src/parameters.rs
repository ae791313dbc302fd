use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DirnError;

/// A complete batch experiment, loadable from a JSON file: which network and
/// disease to use, how long each run is, how many runs, and the base seed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scenario {
    /// Path to the adjacency-list file.
    pub network: PathBuf,
    /// Path to the disease-parameter file.
    pub disease: PathBuf,
    #[serde(default = "default_steps")]
    pub steps: usize,
    #[serde(default = "default_runs")]
    pub runs: usize,
    #[serde(default)]
    pub seed: u64,
}

fn default_steps() -> usize {
    100
}

fn default_runs() -> usize {
    1000
}

impl Scenario {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DirnError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
