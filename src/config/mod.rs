mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

/// Loads configuration from `CONFIG_PATH` (default `config.yaml`), then applies
/// `PORT` and `OLLAMA_BASE_URL` from the environment.
///
/// A missing file falls back to defaults.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = load_file(&config_path).await?;
    config.apply_overrides(|key| env::var(key).ok())?;

    Ok(config)
}

pub async fn load_file(config_path: &str) -> Result<Config> {
    if !tokio::fs::try_exists(config_path).await? {
        debug!("No configuration file at {}, using defaults", config_path);
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    Config::from_yaml(&config_str)
}

impl Config {
    pub fn from_yaml(config_str: &str) -> Result<Self> {
        if config_str.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(config_str)?)
    }

    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT").filter(|p| !p.is_empty()) {
            self.server.port = port
                .parse()
                .map_err(|_| Error::config(format!("PORT must be a valid port number, got '{}'", port)))?;
        }

        if let Some(base_url) = lookup("OLLAMA_BASE_URL").filter(|u| !u.is_empty()) {
            self.ollama.base_url = base_url;
        }

        Ok(())
    }
}
