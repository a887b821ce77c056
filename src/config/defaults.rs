// src/config/defaults.rs
use crate::config::app::{CipherSection, LogSection};
use crate::consts::DEFAULT_LOG_LEVEL;
use crate::enums::{Encoding, PaddingMode};

// No default key or IV: they must come from the config file or environment
pub fn default_cipher() -> CipherSection {
    CipherSection {
        key: None,
        key_encoding: Encoding::Hex,
        iv: None,
        iv_encoding: Encoding::Hex,
        padding: PaddingMode::Lenient,
    }
}

pub fn default_log() -> LogSection {
    LogSection {
        level: DEFAULT_LOG_LEVEL.into(),
    }
}
