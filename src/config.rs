//! Layered YAML configuration for the toolshed CLI.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const PROJECT_NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    /// Catalog file to load when `--catalog` is not given
    pub catalog: Option<PathBuf>,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            catalog: None,
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain.
    ///
    /// Search order:
    /// 1. Explicit path if provided
    /// 2. ./toolshed.yml
    /// 3. ~/.config/toolshed/toolshed.yml
    /// 4. Defaults
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let mut candidates = vec![PathBuf::from(format!("{}.yml", PROJECT_NAME))];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join(PROJECT_NAME).join(format!("{}.yml", PROJECT_NAME)));
        }
        if let Some(config) = Self::load_first(&candidates) {
            return Ok(config);
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// First candidate that exists and loads; broken files are logged and skipped
    fn load_first(candidates: &[PathBuf]) -> Option<Self> {
        for path in candidates.iter().filter(|path| path.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => return Some(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", path.display(), e);
                }
            }
        }
        None
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        config.validate()?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.log_level.as_deref().is_some_and(|level| level.trim().is_empty()) {
            eyre::bail!("log_level must not be empty");
        }
        if self.catalog.as_ref().is_some_and(|path| path.as_os_str().is_empty()) {
            eyre::bail!("catalog must not be an empty path");
        }
        Ok(())
    }

    /// Catalog path to use, preferring the command-line override
    pub fn catalog_path(&self, cli_override: Option<&PathBuf>) -> Option<PathBuf> {
        cli_override.or(self.catalog.as_ref()).cloned()
    }
}
