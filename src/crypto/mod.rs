// src/crypto/mod.rs
//! Pure cryptographic operations: no I/O, no logging
//!
//! All functions work exclusively on in-memory buffers. Callers depend on
//! the [`BlockCipher`] capability rather than on a concrete algorithm.

mod cbc;
mod padding;
mod primitive;

pub use cbc::{AesCbcPkcs7Cipher, StrictAesCbcPkcs7Cipher};
pub use padding::{pkcs7_pad, PaddingCodec, Pkcs7, StrictPkcs7};

use crate::error::CipherError;

/// A block cipher that encrypts and decrypts whole in-memory buffers.
///
/// Implementations must not keep per-call state: a single instance may be
/// shared between threads and used concurrently.
pub trait BlockCipher {
    /// Encrypt `plain`, returning a freshly allocated ciphertext.
    fn encrypt(&self, plain: &[u8]) -> Result<Vec<u8>, CipherError>;

    /// Decrypt `encrypted`, returning the original plaintext.
    fn decrypt(&self, encrypted: &[u8]) -> Result<Vec<u8>, CipherError>;
}

impl<C: BlockCipher + ?Sized> BlockCipher for Box<C> {
    fn encrypt(&self, plain: &[u8]) -> Result<Vec<u8>, CipherError> {
        (**self).encrypt(plain)
    }

    fn decrypt(&self, encrypted: &[u8]) -> Result<Vec<u8>, CipherError> {
        (**self).decrypt(encrypted)
    }
}
