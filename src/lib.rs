// src/lib.rs
//! aes-cbc-vault: AES/CBC/PKCS#7 behind a block-cipher capability
//!
//! Features:
//! - AES-128/192/256 keyed by key length
//! - CBC chaining with a caller-supplied IV
//! - PKCS#7 padding, lenient (default) or strict on decrypt
//! - TOML config with `AESCBC_*` env overrides

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod encoding;
pub mod enums;
pub mod error;

// Re-export everything users need at the crate root
pub use aliases::CipherKey;
pub use config::load as load_config;
pub use config::{Config, SharedCipher};
pub use crypto::{
    AesCbcPkcs7Cipher, BlockCipher, PaddingCodec, Pkcs7, StrictAesCbcPkcs7Cipher, StrictPkcs7,
};
pub use enums::{Encoding, KeySize, PaddingMode};
pub use error::{CipherError, CoreError, Result as CoreResult};
