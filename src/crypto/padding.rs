// src/crypto/padding.rs
//! PKCS#7 padding (RFC 5652 §6.3)
//!
//! Two unpad rules share the same pad step:
//! - [`Pkcs7`] trusts the trailing byte and only guards against reading
//!   past the start of the buffer.
//! - [`StrictPkcs7`] also checks the pad count range and every pad byte.

use crate::error::CipherError;

/// Padding applied before chaining and stripped after it.
pub trait PaddingCodec: Send + Sync + 'static {
    /// Return `buf` followed by 1..=`block_size` pad bytes.
    fn pad(buf: &[u8], block_size: usize) -> Vec<u8> {
        pkcs7_pad(buf, block_size)
    }

    /// Remove the padding from a decrypted buffer.
    fn unpad(buf: Vec<u8>, block_size: usize) -> Result<Vec<u8>, CipherError>;
}

/// Append `n` bytes of value `n`, where `n = block_size - len % block_size`.
///
/// `n` is never zero: an already aligned buffer gains a full block.
/// `block_size` must be in `1..=255`.
pub fn pkcs7_pad(buf: &[u8], block_size: usize) -> Vec<u8> {
    debug_assert!((1..=255).contains(&block_size));

    let pad_len = block_size - (buf.len() % block_size);
    let mut out = Vec::with_capacity(buf.len() + pad_len);
    out.extend_from_slice(buf);
    out.resize(buf.len() + pad_len, pad_len as u8);
    out
}

/// Lenient PKCS#7: truncates by the trailing byte's value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pkcs7;

impl PaddingCodec for Pkcs7 {
    fn unpad(mut buf: Vec<u8>, _block_size: usize) -> Result<Vec<u8>, CipherError> {
        let pad_len = *buf.last().ok_or(CipherError::InvalidPadding)? as usize;
        if pad_len > buf.len() {
            return Err(CipherError::InvalidPadding);
        }
        buf.truncate(buf.len() - pad_len);
        Ok(buf)
    }
}

/// Hardened PKCS#7: rejects anything [`pkcs7_pad`] could not have produced.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictPkcs7;

impl PaddingCodec for StrictPkcs7 {
    fn unpad(mut buf: Vec<u8>, block_size: usize) -> Result<Vec<u8>, CipherError> {
        let pad_len = *buf.last().ok_or(CipherError::InvalidPadding)? as usize;
        if pad_len == 0 || pad_len > block_size || pad_len > buf.len() {
            return Err(CipherError::InvalidPadding);
        }

        let body_len = buf.len() - pad_len;
        if !buf[body_len..].iter().all(|&b| b as usize == pad_len) {
            return Err(CipherError::InvalidPadding);
        }
        buf.truncate(body_len);
        Ok(buf)
    }
}
