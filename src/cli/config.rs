//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::store::Backend;

/// Environment variable naming the notes directory.
pub const DIR_ENV_VAR: &str = "JOTBOX_DIR";

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "JOTBOX_CONFIG";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default notes directory
    pub dir: Option<PathBuf>,

    /// Default storage backend
    pub backend: Option<Backend>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// `JOTBOX_CONFIG` wins when set. Default: `~/.config/jotbox/config.toml`
    pub fn config_path() -> PathBuf {
        let env_path = std::env::var_os(CONFIG_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::resolve_config_path(env_path)
    }

    fn resolve_config_path(env_path: Option<PathBuf>) -> PathBuf {
        env_path.unwrap_or_else(|| {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("jotbox")
                .join("config.toml")
        })
    }

    /// Returns the notes directory used when nothing else is configured.
    ///
    /// Default: `~/.local/share/jotbox` (platform data directory)
    pub fn default_notes_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jotbox")
    }

    /// Resolve the notes directory.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `dir` setting
    /// 3. `JOTBOX_DIR` environment variable
    /// 4. Platform data directory
    pub fn notes_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        let env_dir = std::env::var_os(DIR_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        self.resolve_notes_dir(cli_dir, env_dir)
    }

    fn resolve_notes_dir(&self, cli_dir: Option<&PathBuf>, env_dir: Option<PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.dir.clone())
            .or(env_dir)
            .unwrap_or_else(Self::default_notes_dir)
    }

    /// Resolve the storage backend, with CLI argument taking precedence.
    pub fn backend(&self, cli_backend: Option<Backend>) -> Backend {
        cli_backend.or(self.backend).unwrap_or_default()
    }
}
