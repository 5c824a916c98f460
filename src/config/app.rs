// src/config/app.rs
use std::fmt;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use tracing::{debug, warn};

use super::defaults::{default_cipher, default_config};
use crate::cipher::CipherManager;
use crate::consts::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, KEYS_ENV};
use crate::error::{ConfigError, Result};
use crate::random::OsRandom;

#[derive(Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_cipher")]
    pub cipher: CipherSection,
}

/// `[cipher]` table: the key list, primary first
#[derive(Clone, Deserialize)]
pub struct CipherSection {
    #[serde(default)]
    pub encoding: KeyEncoding,
    #[serde(default)]
    pub keys: Vec<String>,
}

/// How key strings in the config are turned into raw key bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeyEncoding {
    /// The string's own bytes are the key
    #[default]
    Raw,
    Hex,
    /// Standard alphabet, padded
    Base64,
}

impl KeyEncoding {
    fn name(self) -> &'static str {
        match self {
            KeyEncoding::Raw => "raw",
            KeyEncoding::Hex => "hex",
            KeyEncoding::Base64 => "base64",
        }
    }

    fn decode(self, index: usize, key: &str) -> std::result::Result<Vec<u8>, ConfigError> {
        let decoded = match self {
            KeyEncoding::Raw => return Ok(key.as_bytes().to_vec()),
            KeyEncoding::Hex => hex::decode(key.trim()).ok(),
            KeyEncoding::Base64 => STANDARD.decode(key.trim()).ok(),
        };
        decoded.ok_or(ConfigError::KeyEncoding {
            index,
            encoding: self.name(),
        })
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content).map_err(ConfigError::Toml)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Raw key bytes in configured order. Lengths are checked by [`CipherManager`].
    pub fn decoded_keys(&self) -> Result<Vec<Vec<u8>>> {
        let encoding = self.cipher.encoding;
        let keys = self
            .cipher
            .keys
            .iter()
            .enumerate()
            .map(|(index, key)| encoding.decode(index, key))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(keys)
    }
}

impl Default for Config {
    fn default() -> Self {
        default_config()
    }
}

impl fmt::Debug for CipherSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherSection")
            .field("encoding", &self.encoding)
            .field("keys", &format_args!("[REDACTED; {}]", self.keys.len()))
            .finish()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("cipher", &self.cipher)
            .finish()
    }
}

impl CipherManager<OsRandom> {
    /// Decode the configured keys and build a manager from them.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.decoded_keys()?)
    }
}

/// Load config from `RC_CONFIG` (default `rotating-cipher.toml`), then apply `RC_KEYS`
pub fn load() -> Result<Config> {
    let config_path =
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let keys_override = std::env::var(KEYS_ENV).ok();
    load_from(config_path, keys_override.as_deref())
}

/// Load config from `path`, falling back to defaults when the file is missing.
///
/// `keys_override` is a comma-separated key list that replaces the file's keys.
pub fn load_from(path: impl AsRef<Path>, keys_override: Option<&str>) -> Result<Config> {
    let path = path.as_ref();
    let mut conf = if path.exists() {
        debug!(path = %path.display(), "loading config");
        Config::from_path(path)?
    } else {
        warn!(path = %path.display(), "config file not found, using built-in defaults");
        default_config()
    };

    if let Some(keys) = keys_override {
        conf.cipher.keys = keys
            .split(',')
            .filter(|k| !k.is_empty())
            .map(str::to_owned)
            .collect();
        debug!(keys = conf.cipher.keys.len(), "key list overridden from environment");
    }

    Ok(conf)
}
