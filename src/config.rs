use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_PATHS: [&str; 2] =
    ["tracediff.config.json", "config/tracediff.config.json"];

/// File names used by both tools, relative to the working directory.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_known_good")]
    pub known_good: PathBuf,

    #[serde(default = "default_normalized_good")]
    pub normalized_good: PathBuf,

    #[serde(default = "default_candidate")]
    pub candidate: PathBuf,

    #[serde(default = "default_report")]
    pub report: PathBuf,
}

fn default_known_good() -> PathBuf {
    PathBuf::from("known_good.log")
}
fn default_normalized_good() -> PathBuf {
    PathBuf::from("normalized_good.log")
}
fn default_candidate() -> PathBuf {
    PathBuf::from("6502.log")
}
fn default_report() -> PathBuf {
    PathBuf::from("compare.log")
}

impl Default for Config {
    fn default() -> Self {
        Config {
            known_good: default_known_good(),
            normalized_good: default_normalized_good(),
            candidate: default_candidate(),
            report: default_report(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_json::from_str(&text).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// An explicit path must exist; otherwise the first default path that is a
    /// file is used, falling back to built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        if let Some(path) = explicit {
            return Config::from_file(path);
        }
        for p in &DEFAULT_CONFIG_PATHS {
            let path = Path::new(p);
            if path.is_file() {
                tracing::info!(config = %path.display(), "using config file");
                return Config::from_file(path);
            }
        }
        Ok(Config::default())
    }
}
