// src/consts.rs
//! Shared constants: cipher parameters and config defaults

/// AES block size in bytes; also the required IV length
pub const BLOCK_SIZE: usize = 16;

/// Accepted AES key lengths in bytes (AES-128, AES-192, AES-256)
pub const ALLOWED_KEY_LENGTHS: &[usize] = &[16, 24, 32];

/// Environment variable naming the config file
pub const CONFIG_PATH_ENV: &str = "AESCBC_CONFIG";

/// Config file used when `AESCBC_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "aescbc.toml";

/// Prefix for environment overrides of individual config keys
// cipher.key => AESCBC_CIPHER_KEY
pub const ENV_PREFIX: &str = "AESCBC";

/// Default tracing filter for the CLI
pub const DEFAULT_LOG_LEVEL: &str = "info";
