// src/config/app.rs
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::defaults::*;
use crate::consts::{CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH};
use crate::enums::{CipherAlgorithm, HashAlgorithm};
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub hashing: HashingConfig,
    pub cipher: CipherConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashingConfig {
    pub algorithm: HashAlgorithm,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherConfig {
    pub algorithm: CipherAlgorithm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Path named by `KRYPT_CONFIG`, or `krypt.toml` in the working directory
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Parse a TOML config file; absent sections take their defaults
pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let config = toml::from_str(&content)?;
    info!(path = %path.as_ref().display(), "loaded config");
    Ok(config)
}

/// Load the process-wide config once; later calls return the cached value
///
/// A missing file is not an error: built-in defaults are used instead.
pub fn load() -> Result<&'static Config> {
    CONFIG.get_or_try_init(|| {
        let path = config_path();
        if path.exists() {
            load_from(&path)
        } else {
            warn!(path = %path.display(), "config not found, using built-in defaults");
            Ok(Config::default())
        }
    })
}
