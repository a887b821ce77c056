// src/crypto/primitive.rs
//! AES block primitive, keyed once and selected by key length

use std::fmt;

use aes::cipher::{BlockDecrypt, BlockEncrypt, InvalidLength, KeyInit};
use aes::{Aes128, Aes192, Aes256, Block};

use crate::enums::KeySize;
use crate::error::CipherError;

/// Expanded AES key schedule for one of the three key sizes
#[derive(Clone)]
pub(crate) enum AesBlock {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl AesBlock {
    /// `key_size` must already match `key.len()`
    pub(crate) fn new(key_size: KeySize, key: &[u8]) -> Result<Self, CipherError> {
        let init_err = |e: InvalidLength| CipherError::CipherInit(e.to_string());

        let block = match key_size {
            KeySize::Aes128 => AesBlock::Aes128(Aes128::new_from_slice(key).map_err(init_err)?),
            KeySize::Aes192 => AesBlock::Aes192(Aes192::new_from_slice(key).map_err(init_err)?),
            KeySize::Aes256 => AesBlock::Aes256(Aes256::new_from_slice(key).map_err(init_err)?),
        };
        Ok(block)
    }

    pub(crate) fn key_size(&self) -> KeySize {
        match self {
            AesBlock::Aes128(_) => KeySize::Aes128,
            AesBlock::Aes192(_) => KeySize::Aes192,
            AesBlock::Aes256(_) => KeySize::Aes256,
        }
    }

    pub(crate) fn encrypt_block(&self, block: &mut Block) {
        match self {
            AesBlock::Aes128(c) => c.encrypt_block(block),
            AesBlock::Aes192(c) => c.encrypt_block(block),
            AesBlock::Aes256(c) => c.encrypt_block(block),
        }
    }

    pub(crate) fn decrypt_block(&self, block: &mut Block) {
        match self {
            AesBlock::Aes128(c) => c.decrypt_block(block),
            AesBlock::Aes192(c) => c.decrypt_block(block),
            AesBlock::Aes256(c) => c.decrypt_block(block),
        }
    }
}

// Never print the key schedule
impl fmt::Debug for AesBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AesBlock({:?})", self.key_size())
    }
}
