// src/config/app.rs
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;

use super::defaults::{default_cipher, default_log};
use zeroize::Zeroizing;

use crate::aliases::CipherKey;
use crate::consts::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, ENV_PREFIX};
use crate::crypto::{AesCbcPkcs7Cipher, BlockCipher, Pkcs7, StrictAesCbcPkcs7Cipher};
use crate::enums::{Encoding, PaddingMode};
use crate::error::{CoreError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cipher: CipherSection,
    pub log: LogSection,
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct CipherSection {
    pub key: Option<String>,
    pub key_encoding: Encoding,
    pub iv: Option<String>,
    pub iv_encoding: Encoding,
    pub padding: PaddingMode,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSection {
    pub level: String,
}

/// A cipher chosen at runtime, safe to share between threads
pub type SharedCipher = Box<dyn BlockCipher + Send + Sync>;

impl Default for Config {
    fn default() -> Self {
        Config {
            cipher: default_cipher(),
            log: default_log(),
        }
    }
}

impl Default for CipherSection {
    fn default() -> Self {
        default_cipher()
    }
}

impl Default for LogSection {
    fn default() -> Self {
        default_log()
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Override entries from `AESCBC_<SECTION>_<KEY>` environment variables
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_with(|name| std::env::var(name).ok())
    }

    /// Override entries using `lookup`, which maps an env-style name to a value
    pub fn apply_overrides_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(&env_key("cipher.key")) {
            self.cipher.key = Some(key);
        }
        if let Some(enc) = lookup(&env_key("cipher.key_encoding")) {
            self.cipher.key_encoding = enc.parse()?;
        }
        if let Some(iv) = lookup(&env_key("cipher.iv")) {
            self.cipher.iv = Some(iv);
        }
        if let Some(enc) = lookup(&env_key("cipher.iv_encoding")) {
            self.cipher.iv_encoding = enc.parse()?;
        }
        if let Some(padding) = lookup(&env_key("cipher.padding")) {
            self.cipher.padding = parse_padding(&padding)?;
        }
        if let Some(level) = lookup(&env_key("log.level")) {
            self.log.level = level;
        }
        Ok(())
    }
}

impl CipherSection {
    /// Decode `key` per `key_encoding`
    pub fn key_bytes(&self) -> Result<CipherKey> {
        let key = self
            .key
            .as_deref()
            .ok_or_else(|| CoreError::InvalidConfig("cipher.key is missing".into()))?;
        Ok(Zeroizing::new(self.key_encoding.decode(key)?))
    }

    /// Decode `iv` per `iv_encoding`
    pub fn iv_bytes(&self) -> Result<Vec<u8>> {
        let iv = self
            .iv
            .as_deref()
            .ok_or_else(|| CoreError::InvalidConfig("cipher.iv is missing".into()))?;
        self.iv_encoding.decode(iv)
    }

    /// Build the configured AES/CBC/PKCS#7 cipher
    pub fn build(&self) -> Result<SharedCipher> {
        let key = self.key_bytes()?;
        let iv = self.iv_bytes()?;

        let cipher: SharedCipher = match self.padding {
            PaddingMode::Lenient => {
                Box::new(AesCbcPkcs7Cipher::<Pkcs7>::new(&key, &iv)?)
            }
            PaddingMode::Strict => {
                Box::new(StrictAesCbcPkcs7Cipher::new(&key, &iv)?)
            }
        };

        #[cfg(feature = "logging")]
        tracing::debug!(
            padding = ?self.padding,
            key_len = key.len(),
            "built AES/CBC/PKCS#7 cipher"
        );

        Ok(cipher)
    }
}

impl fmt::Debug for CipherSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherSection")
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .field("key_encoding", &self.key_encoding)
            .field("iv", &self.iv)
            .field("iv_encoding", &self.iv_encoding)
            .field("padding", &self.padding)
            .finish()
    }
}

/// `cipher.key` => `AESCBC_CIPHER_KEY`
pub fn env_key(path: &str) -> String {
    format!("{ENV_PREFIX}_{}", path.replace('.', "_").to_uppercase())
}

fn parse_padding(value: &str) -> Result<PaddingMode> {
    match value.trim().to_ascii_lowercase().as_str() {
        "lenient" => Ok(PaddingMode::Lenient),
        "strict" => Ok(PaddingMode::Strict),
        other => Err(CoreError::InvalidConfig(format!(
            "unknown padding mode [{other}]; expected lenient or strict"
        ))),
    }
}

/// Read `path` (defaults if missing) and apply environment overrides
pub fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();

    let mut conf = if path.exists() {
        let conf = Config::from_path(path)?;
        #[cfg(feature = "logging")]
        tracing::debug!(path = %path.display(), "loaded config");
        conf
    } else {
        #[cfg(feature = "logging")]
        tracing::warn!(path = %path.display(), "config file not found, using built-in defaults");
        Config::default()
    };

    conf.apply_env_overrides()?;
    Ok(conf)
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Global config, loaded once from `$AESCBC_CONFIG` or `aescbc.toml`
///
/// Only a missing file falls back to defaults; an unreadable or invalid
/// file is an error and nothing is cached, so a later call retries.
pub fn load() -> Result<&'static Config> {
    if let Some(conf) = CONFIG.get() {
        return Ok(conf);
    }

    let config_path =
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let conf = load_from(&config_path)?;
    Ok(CONFIG.get_or_init(|| conf))
}
