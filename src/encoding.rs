// src/encoding.rs
//! Text framing for keys, IVs and payloads
//!
//! The cipher works on raw bytes; these helpers convert to and from the
//! string forms used in config files and on the command line.

use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::enums::Encoding;
use crate::error::{CoreError, Result};

impl Encoding {
    /// Decode `text` into bytes
    pub fn decode(self, text: &str) -> Result<Vec<u8>> {
        let bytes = match self {
            Encoding::Utf8 => text.as_bytes().to_vec(),
            Encoding::Hex => hex::decode(text.trim())?,
            Encoding::Base64 => STANDARD.decode(text.trim())?,
        };
        Ok(bytes)
    }

    /// Encode `bytes` as text; UTF-8 output requires valid UTF-8 input
    pub fn encode(self, bytes: &[u8]) -> Result<String> {
        let text = match self {
            Encoding::Utf8 => String::from_utf8(bytes.to_vec())?,
            Encoding::Hex => hex::encode(bytes),
            Encoding::Base64 => STANDARD.encode(bytes),
        };
        Ok(text)
    }
}

impl FromStr for Encoding {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "hex" => Ok(Encoding::Hex),
            "base64" => Ok(Encoding::Base64),
            other => Err(CoreError::InvalidConfig(format!(
                "unknown encoding [{other}]; expected utf-8, hex or base64"
            ))),
        }
    }
}

/// Drop one trailing line ending (`\n` or `\r\n`), as added by a shell pipe
pub fn strip_line_ending(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}
