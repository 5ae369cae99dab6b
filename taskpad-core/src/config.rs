//! src/config.rs
//! ============================================================================
//! # Config: Application Configuration Loader and Saver (directories only)
//!
//! Manages the user-editable settings for the task list. Loads and saves
//! settings as TOML from the proper cross-platform config path using the
//! [`directories`](https://docs.rs/directories) crate.
//!
//! - XDG-compliant config discovery and writing (Linux, macOS, Windows)
//! - Robust defaulting if no config file exists
//! - Async load/save for smooth integration with Tokio

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// App theme (color scheme) selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    Light,
    Dark,
}

/// Main configuration struct for the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,
    /// Show the keymap footer inside the task list block.
    pub show_footer: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: Theme::Default,
            show_footer: true,
        }
    }
}

impl Config {
    /// Loads config from the TOML file at the XDG-compliant app config dir,
    /// or returns defaults when no file exists.
    pub async fn load() -> Result<Self, AppError> {
        let path: PathBuf = Self::config_path()?;
        Self::load_from(&path).await
    }

    /// Loads config from an explicit path; missing file means defaults.
    pub async fn load_from(path: &Path) -> Result<Self, AppError> {
        if path.exists() {
            let text: String =
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| AppError::ConfigIo {
                        path: path.to_path_buf(),
                        source,
                    })?;
            let cfg: Config = toml::from_str(&text)?;
            Ok(cfg)
        } else {
            Ok(Config::default())
        }
    }

    /// Saves config to the TOML file at the XDG-compliant app config dir.
    pub async fn save(&self) -> Result<(), AppError> {
        let path: PathBuf = Self::config_path()?;
        self.save_to(&path).await
    }

    /// Saves config to an explicit path, creating parent directories.
    pub async fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let toml_str: String = toml::to_string_pretty(self)?;
        tokio::fs::write(path, toml_str)
            .await
            .map_err(|source| AppError::ConfigIo {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(())
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> Result<PathBuf, AppError> {
        let proj_dirs: ProjectDirs =
            ProjectDirs::from("org", "taskpad", "Taskpad").ok_or(AppError::ConfigDir)?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}
