// src/enums.rs
//! Public enum types used throughout the crate
//!
//! User-visible choices: text encodings, padding strictness, key sizes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::ALLOWED_KEY_LENGTHS;
use crate::error::CipherError;

/// Byte encoding of a string value (config entries, CLI input/output)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Encoding {
    #[default]
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
    #[serde(rename = "hex")]
    Hex,
    #[serde(rename = "base64")]
    Base64,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Hex => "hex",
            Encoding::Base64 => "base64",
        };
        f.write_str(name)
    }
}

/// Which PKCS#7 unpad rule decryption applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaddingMode {
    /// Trust the trailing pad byte (bounds-checked only)
    #[default]
    Lenient,
    /// Require every pad byte to equal the pad count
    Strict,
}

/// AES variant selected by key length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySize {
    Aes128,
    Aes192,
    Aes256,
}

impl KeySize {
    /// Map a key length in bytes to its AES variant
    pub fn from_len(len: usize) -> Result<Self, CipherError> {
        match len {
            16 => Ok(KeySize::Aes128),
            24 => Ok(KeySize::Aes192),
            32 => Ok(KeySize::Aes256),
            got => Err(CipherError::InvalidKeyLength {
                got,
                allowed: ALLOWED_KEY_LENGTHS,
            }),
        }
    }
}
