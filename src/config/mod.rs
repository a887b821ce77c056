// src/config/mod.rs
//! Configuration for aes-cbc-vault
//!
//! TOML file + `AESCBC_*` environment overrides, with a lazy global.

pub use app::{env_key, load, load_from, CipherSection, Config, LogSection, SharedCipher};

mod app;
mod defaults;
