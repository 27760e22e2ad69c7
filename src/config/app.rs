// src/config/app.rs
use super::defaults::*;
use crate::error::{CoreError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_cipher")]
    pub cipher: CipherConfig,
    #[serde(default = "default_store")]
    pub store: StoreConfig,
}

/// Names of the secrets the cipher reads, never the secrets themselves
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CipherConfig {
    pub key_var: String,
    pub previous_key_var: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreConfig {
    pub membership_db: String,
    pub db_key_var: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cipher: default_cipher(),
            store: default_store(),
        }
    }
}

/// Load config from `TODO_OS_CONFIG` (or `todo-os.toml`), falling back to defaults
pub fn load() -> Result<Config> {
    let config_path =
        std::env::var("TODO_OS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let mut conf = if Path::new(&config_path).exists() {
        load_from(&config_path)?
    } else {
        warn!(path = %config_path, "config file not found, using built-in defaults");
        Config::default()
    };

    // Allow full test isolation via env vars
    if let Ok(db_path) = std::env::var("TODO_OS_MEMBERSHIP_DB") {
        conf.store.membership_db = db_path;
    }

    Ok(conf)
}

/// Parse a TOML config file; missing tables take their defaults
pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path.as_ref())?;
    toml::from_str(&content).map_err(|e| {
        CoreError::Configuration(format!(
            "invalid TOML in {}: {}",
            path.as_ref().display(),
            e.message()
        ))
    })
}
