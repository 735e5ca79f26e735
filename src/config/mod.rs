// SPDX-License-Identifier: MPL-2.0
//! Application configuration, loaded from and saved to a
//! `settings.toml` file under the platform config directory.
//!
//! Every field is optional in the file; missing values fall back to the
//! compiled defaults so a partial (or absent) file always yields a
//! usable configuration.

use crate::catalog::fetcher::{DEFAULT_BASE_URL, DEFAULT_ENDPOINT};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "CoastGallery";

/// How many photos the Home screen's featured strip shows.
pub const DEFAULT_FEATURED_COUNT: usize = 3;
/// Column count for the gallery grid.
pub const DEFAULT_GRID_COLUMNS: usize = 3;

/// Requested application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Photo service base URL, scheme included.
    pub base_url: Option<String>,
    /// Catalog endpoint path on the service.
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub language: Option<String>,
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub featured_count: Option<usize>,
    pub grid_columns: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    pub fn base_url(&self) -> &str {
        self.service.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn endpoint(&self) -> &str {
        self.service.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn featured_count(&self) -> usize {
        self.display.featured_count.unwrap_or(DEFAULT_FEATURED_COUNT)
    }

    pub fn grid_columns(&self) -> usize {
        let columns = self.display.grid_columns.unwrap_or(DEFAULT_GRID_COLUMNS);
        columns.max(1)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
