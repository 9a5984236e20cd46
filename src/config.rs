//! Startup configuration.
//!
//! Resolved once in `main` and passed by reference to command handlers.
//! Each value is taken from the first source that provides it: command-line
//! flag, environment variable, `config.toml`, built-in default.

use crate::constants;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Contents of `config.toml`
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FileConfig {
    /// Server base URL
    pub server_url: Option<String>,
    /// Repository used when neither `--repo` nor `TIMELINE_REPO` is set
    pub default_repo: Option<String>,
    /// Print errors as JSON without passing `--json-errors`
    #[serde(default)]
    pub json_errors: bool,
}

/// Values given on the command line
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub server_url: Option<String>,
    pub repo_id: Option<String>,
    pub json_errors: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_url: String,
    pub repo_id: Option<String>,
    pub json_errors: bool,
}

impl Config {
    /// Loads `config.toml` and resolves it against the flags and the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be located or the
    /// config file exists but cannot be read or parsed.
    pub fn load(overrides: &ConfigOverrides) -> Result<Self, Error> {
        let file = load_file_config(&get_config_dir()?)?;
        Ok(Self::resolve(overrides, &file, |key| std::env::var(key).ok()))
    }

    /// Resolves each setting from `overrides`, then `env`, then `file`.
    ///
    /// Empty values count as unset.
    pub fn resolve(
        overrides: &ConfigOverrides,
        file: &FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let pick = |flag: Option<&String>, var: &str, from_file: Option<&String>| {
            flag.cloned()
                .filter(|v| !v.is_empty())
                .or_else(|| env(var).filter(|v| !v.is_empty()))
                .or_else(|| from_file.cloned().filter(|v| !v.is_empty()))
        };

        Self {
            server_url: pick(
                overrides.server_url.as_ref(),
                constants::ENV_TIMELINE_SERVER,
                file.server_url.as_ref(),
            )
            .unwrap_or_else(|| constants::DEFAULT_SERVER_URL.to_string()),
            repo_id: pick(
                overrides.repo_id.as_ref(),
                constants::ENV_TIMELINE_REPO,
                file.default_repo.as_ref(),
            ),
            json_errors: overrides.json_errors || file.json_errors,
        }
    }

    /// The configured repository id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingRepository`] when none was configured.
    pub fn require_repo(&self) -> Result<&str, Error> {
        self.repo_id.as_deref().ok_or(Error::MissingRepository)
    }
}

/// Directory holding `config.toml`: `TIMELINE_CONFIG_DIR`, else `~/.config/timeline`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn get_config_dir() -> Result<PathBuf, Error> {
    if let Ok(dir) = std::env::var(constants::ENV_TIMELINE_CONFIG_DIR) {
        return Ok(PathBuf::from(dir));
    }
    let home_dir = dirs::home_dir()
        .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))?;
    Ok(home_dir.join(".config").join(constants::CONFIG_DIR_NAME))
}

/// Reads `config.toml` from `config_dir`; a missing file yields the defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_file_config(config_dir: &Path) -> Result<FileConfig, Error> {
    let config_path = config_dir.join(constants::CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(FileConfig::default());
    }
    let content = std::fs::read_to_string(&config_path)?;
    Ok(toml::from_str(&content)?)
}
