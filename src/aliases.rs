// src/aliases.rs
//! Secret wrappers
//!
//! Key bytes decoded from config or the command line live in these types
//! until they are expanded into an AES key schedule.

use zeroize::Zeroizing;

/// Raw AES key material (16, 24 or 32 bytes), wiped on drop
pub type CipherKey = Zeroizing<Vec<u8>>;
