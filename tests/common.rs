// tests/common.rs
//! Shared test utilities: logging setup and fixed key material

#![allow(dead_code)]

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// AES-256 key used by the openssl reference vectors
pub const KEY_HEX: &str = "1234567890123456789012345678901234567890123456789012345678901234";

/// IV used by the openssl reference vectors
pub const IV_HEX: &str = "1234567890ABCDEF1234567890ABCDEF";

/// Initialize test-friendly logging; safe to call from every test
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}

pub fn key() -> Vec<u8> {
    hex::decode(KEY_HEX).unwrap()
}

pub fn iv() -> Vec<u8> {
    hex::decode(IV_HEX).unwrap()
}
