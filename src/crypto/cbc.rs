// src/crypto/cbc.rs
//! AES in CBC mode with PKCS#7 padding

use std::fmt;
use std::marker::PhantomData;

use aes::Block;

use super::padding::{PaddingCodec, Pkcs7, StrictPkcs7};
use super::primitive::AesBlock;
use super::BlockCipher;
use crate::consts::BLOCK_SIZE;
use crate::enums::KeySize;
use crate::error::CipherError;

/// AES/CBC/PKCS#7 bound to one key and one IV.
///
/// The same IV is used for every call, so equal plaintexts give equal
/// ciphertexts. Build a new instance when a fresh IV is needed.
pub struct AesCbcPkcs7Cipher<P: PaddingCodec = Pkcs7> {
    iv: [u8; BLOCK_SIZE],
    block: AesBlock,
    _padding: PhantomData<fn() -> P>,
}

/// AES/CBC/PKCS#7 with padding validation on decrypt
pub type StrictAesCbcPkcs7Cipher = AesCbcPkcs7Cipher<StrictPkcs7>;

impl<P: PaddingCodec> AesCbcPkcs7Cipher<P> {
    /// Validate `key` (16, 24 or 32 bytes) and `iv` (16 bytes) and expand the key.
    pub fn new(key: &[u8], iv: &[u8]) -> Result<Self, CipherError> {
        let key_size = KeySize::from_len(key.len())?;

        let iv: [u8; BLOCK_SIZE] = iv.try_into().map_err(|_| CipherError::InvalidIvLength {
            got: iv.len(),
            required: BLOCK_SIZE,
        })?;

        let block = AesBlock::new(key_size, key)?;
        Ok(Self {
            iv,
            block,
            _padding: PhantomData,
        })
    }

    pub fn key_size(&self) -> KeySize {
        self.block.key_size()
    }

    pub fn iv(&self) -> &[u8; BLOCK_SIZE] {
        &self.iv
    }
}

impl<P: PaddingCodec> BlockCipher for AesCbcPkcs7Cipher<P> {
    fn encrypt(&self, plain: &[u8]) -> Result<Vec<u8>, CipherError> {
        let mut buf = P::pad(plain, BLOCK_SIZE);

        // C[i] = E(P[i] ^ C[i-1]), C[0] = IV
        let mut prev = self.iv;
        for chunk in buf.chunks_exact_mut(BLOCK_SIZE) {
            xor_in_place(chunk, &prev);
            self.block.encrypt_block(Block::from_mut_slice(chunk));
            prev.copy_from_slice(chunk);
        }
        Ok(buf)
    }

    fn decrypt(&self, encrypted: &[u8]) -> Result<Vec<u8>, CipherError> {
        if encrypted.is_empty() || encrypted.len() % BLOCK_SIZE != 0 {
            return Err(CipherError::MalformedCiphertext {
                len: encrypted.len(),
                block_size: BLOCK_SIZE,
            });
        }

        // P[i] = D(C[i]) ^ C[i-1], C[0] = IV
        let mut buf = encrypted.to_vec();
        let mut prev = self.iv;
        for chunk in buf.chunks_exact_mut(BLOCK_SIZE) {
            let mut current = [0u8; BLOCK_SIZE];
            current.copy_from_slice(chunk);
            self.block.decrypt_block(Block::from_mut_slice(chunk));
            xor_in_place(chunk, &prev);
            prev = current;
        }
        P::unpad(buf, BLOCK_SIZE)
    }
}

impl<P: PaddingCodec> Clone for AesCbcPkcs7Cipher<P> {
    fn clone(&self) -> Self {
        Self {
            iv: self.iv,
            block: self.block.clone(),
            _padding: PhantomData,
        }
    }
}

impl<P: PaddingCodec> fmt::Debug for AesCbcPkcs7Cipher<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AesCbcPkcs7Cipher")
            .field("key_size", &self.key_size())
            .field("iv", &hex::encode(self.iv))
            .field("padding", &std::any::type_name::<P>())
            .finish()
    }
}

fn xor_in_place(dst: &mut [u8], src: &[u8; BLOCK_SIZE]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}
