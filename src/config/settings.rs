use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::stats::window::DEFAULT_ROLLING_DAYS;

/// Overrides the database location, ahead of the config file.
pub const DATABASE_PATH_ENV: &str = "DATABASE_PATH";

fn default_name_width() -> usize {
    15
}
fn default_rolling_days() -> u32 {
    DEFAULT_ROLLING_DAYS
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StorageConfig {
    /// Defaults to `wordboard.db` in the platform data directory.
    #[serde(default)]
    pub database_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Player names wider than this are truncated with "...".
    #[serde(default = "default_name_width")]
    pub name_width: usize,
    #[serde(default = "default_true")]
    pub show_distribution: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            name_width: default_name_width(),
            show_distribution: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityConfig {
    /// Length of the trailing "recent activity" window, in days.
    #[serde(default = "default_rolling_days")]
    pub rolling_days: u32,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            rolling_days: default_rolling_days(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub activity: ActivityConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "wordboard")
            .context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.data_dir().to_path_buf())
    }

    /// `DATABASE_PATH`, then `storage.database_path`, then the data directory.
    pub fn db_path(&self) -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(DATABASE_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        match &self.storage.database_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::data_dir()?.join("wordboard.db")),
        }
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        Ok(config)
    }

    /// Create the parent directory of the database file.
    pub fn ensure_db_dir(db_path: &Path) -> Result<()> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Creating {:?}", parent))?;
            }
        }
        Ok(())
    }
}
