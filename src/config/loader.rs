use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::Result;

/// File name searched for in the current directory and its parents
pub const LOCAL_CONFIG_FILE: &str = ".palette-contrast.toml";

/// Report defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Palettes to include (all when unset)
    pub palettes: Option<Vec<String>>,
    /// Backgrounds to include (all when unset)
    pub backgrounds: Option<Vec<String>>,
    /// Emit JSON instead of text
    pub json: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
    /// Files this config was read from, lowest precedence first
    #[serde(skip)]
    pub sources: Vec<PathBuf>,
}

impl Config {
    /// Merge two configs, with `other` taking precedence
    pub fn merge(self, other: Config) -> Config {
        Config {
            report: ReportConfig {
                palettes: other.report.palettes.or(self.report.palettes),
                backgrounds: other.report.backgrounds.or(self.report.backgrounds),
                json: other.report.json.or(self.report.json),
            },
            sources: self.sources.into_iter().chain(other.sources).collect(),
        }
    }

    pub fn palettes(&self) -> &[String] {
        self.report.palettes.as_deref().unwrap_or_default()
    }

    pub fn backgrounds(&self) -> &[String] {
        self.report.backgrounds.as_deref().unwrap_or_default()
    }

    pub fn json(&self) -> bool {
        self.report.json.unwrap_or(false)
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let mut config: Config = toml::from_str(&content)?;
    debug!(
        path = %path.display(),
        palettes = ?config.report.palettes,
        backgrounds = ?config.report.backgrounds,
        json = ?config.report.json,
        "loaded config"
    );
    config.sources.push(path.to_path_buf());
    Ok(config)
}

/// Global config path: ~/.config/palette-contrast/config.toml
fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("palette-contrast").join("config.toml"))
}

fn load_global_config() -> Result<Option<Config>> {
    match global_config_path() {
        Some(path) if path.exists() => read_config(&path).map(Some),
        _ => Ok(None),
    }
}

/// Load local config from the nearest .palette-contrast.toml at or above `start_path`
fn load_local_config(start_path: &Path) -> Result<Option<Config>> {
    let mut current = start_path.to_path_buf();

    loop {
        let config_path = current.join(LOCAL_CONFIG_FILE);
        if config_path.exists() {
            return read_config(&config_path).map(Some);
        }

        if !current.pop() {
            break;
        }
    }

    Ok(None)
}

/// Load and merge global and local configs, starting the local search at `start_path`
fn load_config_from(start_path: &Path) -> Result<Config> {
    let global = load_global_config()?.unwrap_or_default();
    let local = load_local_config(start_path)?.unwrap_or_default();

    Ok(global.merge(local))
}

/// Load and merge configs (global + local)
pub fn load_config() -> Result<Config> {
    let current_dir = std::env::current_dir()?;
    load_config_from(&current_dir)
}
