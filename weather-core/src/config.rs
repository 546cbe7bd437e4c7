use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path};

/// Environment variable that supplies (or overrides) the upstream API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "weather.toml";

/// Runtime configuration for the proxy.
///
/// The API key is deliberately optional: a deployment without one still
/// starts and serves the static UI, and the API handler reports the missing
/// key per request instead of crashing.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// API key for the upstream weather provider.
    pub api_key: Option<String>,
}

impl Config {
    /// Load config from an optional TOML file, then apply the environment
    /// override. An explicit `path` must exist; the default file may be
    /// absent, in which case the config starts empty.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let cfg = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)?
                } else {
                    Self::default()
                }
            }
        };

        Ok(cfg.with_env_override(env::var(API_KEY_ENV).ok()))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// A non-empty environment value wins over the file.
    fn with_env_override(mut self, key: Option<String>) -> Self {
        match key {
            Some(key) if !key.is_empty() => self.api_key = Some(key),
            _ => {}
        }
        self
    }

    /// Returns the upstream API key, if configured.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}
