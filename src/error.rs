// src/error.rs
//! Public error types for the entire crate

use thiserror::Error;

/// Failures of the cipher core.
///
/// Construction errors (`InvalidKeyLength`, `InvalidIvLength`, `CipherInit`)
/// are final for the given parameters: fix the input and build a new instance.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("illegal key length [{got}] bytes; AES key length must be one of {allowed:?} bytes")]
    InvalidKeyLength {
        got: usize,
        allowed: &'static [usize],
    },

    #[error("illegal initial vector size [{got}] bytes; initial vector size must be [{required}] bytes")]
    InvalidIvLength { got: usize, required: usize },

    #[error("failed to create AES cipher block: {0}")]
    CipherInit(String),

    #[error("ciphertext length [{len}] is not a positive multiple of the block size [{block_size}]")]
    MalformedCiphertext { len: usize, block_size: usize },

    #[error("invalid PKCS#7 padding")]
    InvalidPadding,
}

/// Crate-wide error: the cipher core plus configuration and text decoding.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Cipher operation failed: {0}")]
    Cipher(#[from] CipherError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("Invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
