//! Configuration settings management
//!
//! This module handles loading configuration from the config file and
//! environment variables, plus validation.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{OpSecretError, Result};
use crate::item::DEFAULT_OP_PROGRAM;
use crate::secret::DEFAULT_CONCEALED_TYPE;

const APP_DIR: &str = "opsecret";
const CONFIG_FILE: &str = "opsecret.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Verbose logging on stderr
    pub debug: bool,
    /// Path or name of the 1Password CLI binary
    pub op_path: String,
    /// Field type tag exported into `stringData`
    pub concealed_type: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            op_path: DEFAULT_OP_PROGRAM.to_string(),
            concealed_type: DEFAULT_CONCEALED_TYPE.to_string(),
        }
    }
}

impl Config {
    /// Checked once the file, environment and flags have all been applied
    pub fn validate(&self) -> Result<()> {
        if self.op_path.trim().is_empty() {
            return Err(OpSecretError::config("op_path cannot be empty"));
        }

        if self.concealed_type.trim().is_empty() {
            return Err(OpSecretError::config("concealed_type cannot be empty"));
        }

        Ok(())
    }

    /// `opsecret/opsecret.toml` under the user's config directory
    pub fn get_config_path() -> Result<PathBuf> {
        config_home()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or_else(|| OpSecretError::config("Unable to determine config directory"))
    }
}

/// `$XDG_CONFIG_HOME` or `~/.config` on Unix desktops, the platform
/// directory elsewhere.
fn config_home() -> Option<PathBuf> {
    if cfg!(any(target_os = "linux", target_os = "macos")) {
        std::env::var_os("XDG_CONFIG_HOME")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
    } else {
        dirs::config_dir()
    }
}

/// Load the configuration file and environment overrides.
///
/// Command-line flags are layered on top by the caller, so the result is
/// not validated here.
pub fn load_config() -> Result<Config> {
    let mut config = match Config::get_config_path() {
        Ok(path) if path.exists() => load_from_file(&path)?,
        Ok(_) => Config::default(),
        Err(e) => {
            debug!("Skipping config file: {}", e);
            Config::default()
        }
    };

    load_from_env(&mut config);
    Ok(config)
}

pub fn load_from_file(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        OpSecretError::config(format!("Failed to read {}: {e}", path.display()))
    })?;

    let config = toml::from_str::<Config>(&contents)?;
    debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

fn load_from_env(config: &mut Config) {
    apply_env_overrides(config, |key| std::env::var(key).ok());
}

/// Apply `OPSECRET_*` overrides using `lookup` to read variables
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup("OPSECRET_DEBUG") {
        config.debug = value.to_lowercase() == "true" || value == "1";
    }

    if let Some(value) = lookup("OPSECRET_OP_PATH") {
        config.op_path = value;
    }
}
