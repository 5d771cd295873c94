//! Settings resolution: defaults, then an optional JSON file, then flags.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::CliConfig;
use crate::error::{Error, Result};

/// Number of filter results shown per query
pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "boredom-buster.json";

const APP_DIR: &str = "boredom-buster";
const GLOBAL_CONFIG_FILE: &str = "config.json";

/// Contents of a config file; every key is optional
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub suggestion_limit: Option<usize>,
    pub color: Option<bool>,
    pub seed: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Effective settings for a run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub suggestion_limit: usize,
    pub color: bool,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            color: true,
            seed: None,
        }
    }
}

impl Settings {
    /// Layer file values over defaults, then flags over both
    pub fn merge(file: FileConfig, cli: &CliConfig) -> Self {
        let defaults = Settings::default();
        let suggestion_limit = cli
            .suggestions
            .or(file.suggestion_limit)
            .unwrap_or(defaults.suggestion_limit)
            .max(1);
        let color = !cli.no_color && file.color.unwrap_or(defaults.color);
        Self {
            suggestion_limit,
            color,
            seed: cli.seed.or(file.seed),
        }
    }

    /// Find and read the config file (if any) and merge it with the flags
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = match find_config_path(cli.config.as_deref()) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                FileConfig::load(&path)?
            }
            None => FileConfig::default(),
        };
        Ok(Self::merge(file, cli))
    }
}

/// Config lookup order:
/// 1. explicit path (must exist)
/// 2. ./boredom-buster.json
/// 3. <config dir>/boredom-buster/config.json
pub fn find_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
    if local_path.exists() {
        return Some(local_path);
    }

    let global_path = dirs::config_dir()?.join(APP_DIR).join(GLOBAL_CONFIG_FILE);
    global_path.exists().then_some(global_path)
}
