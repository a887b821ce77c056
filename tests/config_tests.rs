// tests/config_tests.rs
mod common;

use std::collections::HashMap;
use std::io::Write;

use aes_cbc_vault::config::{env_key, load_from, Config};
use aes_cbc_vault::{CipherError, CoreError, Encoding, PaddingMode};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tempfile::NamedTempFile;

fn reference_toml(padding: &str) -> String {
    format!(
        r#"
[cipher]
key = "{key}"
key_encoding = "hex"
iv = "{iv}"
iv_encoding = "hex"
padding = "{padding}"

[log]
level = "debug"
"#,
        key = common::KEY_HEX,
        iv = common::IV_HEX,
    )
}

#[test]
fn test_parse_full_config() {
    let conf = Config::from_toml_str(&reference_toml("strict")).unwrap();

    assert_eq!(conf.cipher.key.as_deref(), Some(common::KEY_HEX));
    assert_eq!(conf.cipher.iv.as_deref(), Some(common::IV_HEX));
    assert_eq!(conf.cipher.key_encoding, Encoding::Hex);
    assert_eq!(conf.cipher.padding, PaddingMode::Strict);
    assert_eq!(conf.log.level, "debug");
}

#[test]
fn test_empty_config_uses_defaults() {
    let conf = Config::from_toml_str("").unwrap();

    assert!(conf.cipher.key.is_none());
    assert!(conf.cipher.iv.is_none());
    assert_eq!(conf.cipher.key_encoding, Encoding::Hex);
    assert_eq!(conf.cipher.iv_encoding, Encoding::Hex);
    assert_eq!(conf.cipher.padding, PaddingMode::Lenient);
    assert_eq!(conf.log.level, "info");
}

#[test]
fn test_invalid_toml_is_rejected() {
    let result = Config::from_toml_str("[cipher\nkey = ");
    assert!(matches!(result, Err(CoreError::Config(_))));

    let result = Config::from_toml_str("[cipher]\npadding = \"sloppy\"");
    assert!(matches!(result, Err(CoreError::Config(_))));
}

#[test]
fn test_build_cipher_from_config() {
    common::setup();

    for padding in ["lenient", "strict"] {
        let conf = Config::from_toml_str(&reference_toml(padding)).unwrap();
        let cipher = conf.cipher.build().unwrap();

        let encrypted = cipher.encrypt(b"a").unwrap();
        assert_eq!(STANDARD.encode(&encrypted), "YPID0ng/IBlB2BS1fyya+w==");
        assert_eq!(cipher.decrypt(&encrypted).unwrap(), b"a");
    }
}

#[test]
fn test_utf8_key_and_iv() {
    let conf = Config::from_toml_str(
        r#"
[cipher]
key = "0123456789abcdef"
key_encoding = "utf-8"
iv = "fedcba9876543210"
iv_encoding = "utf8"
"#,
    )
    .unwrap();

    assert_eq!(conf.cipher.key_bytes().unwrap().len(), 16);
    assert_eq!(conf.cipher.iv_bytes().unwrap(), b"fedcba9876543210");

    let cipher = conf.cipher.build().unwrap();
    let encrypted = cipher.encrypt(b"hello").unwrap();
    assert_eq!(cipher.decrypt(&encrypted).unwrap(), b"hello");
}

#[test]
fn test_build_without_key_or_iv_fails() {
    let conf = Config::default();
    assert!(matches!(
        conf.cipher.build(),
        Err(CoreError::InvalidConfig(_))
    ));

    let mut conf = Config::default();
    conf.cipher.key = Some(common::KEY_HEX.into());
    assert!(matches!(
        conf.cipher.build(),
        Err(CoreError::InvalidConfig(_))
    ));
}

#[test]
fn test_build_propagates_cipher_errors() {
    let mut conf = Config::default();
    conf.cipher.key = Some("00".repeat(20));
    conf.cipher.iv = Some(common::IV_HEX.into());
    assert!(matches!(
        conf.cipher.build(),
        Err(CoreError::Cipher(CipherError::InvalidKeyLength { got: 20, .. }))
    ));

    conf.cipher.key = Some(common::KEY_HEX.into());
    conf.cipher.iv = Some("00".repeat(8));
    assert!(matches!(
        conf.cipher.build(),
        Err(CoreError::Cipher(CipherError::InvalidIvLength {
            got: 8,
            required: 16
        }))
    ));

    conf.cipher.iv = Some("not hex".into());
    assert!(matches!(conf.cipher.build(), Err(CoreError::Hex(_))));
}

#[test]
fn test_env_key_names() {
    assert_eq!(env_key("cipher.key"), "AESCBC_CIPHER_KEY");
    assert_eq!(env_key("cipher.iv"), "AESCBC_CIPHER_IV");
    assert_eq!(env_key("cipher.key_encoding"), "AESCBC_CIPHER_KEY_ENCODING");
    assert_eq!(env_key("log.level"), "AESCBC_LOG_LEVEL");
}

#[test]
fn test_overrides_replace_file_values() {
    let mut conf = Config::from_toml_str(&reference_toml("lenient")).unwrap();
    let vars: HashMap<&str, &str> = [
        ("AESCBC_CIPHER_KEY", "0123456789abcdef"),
        ("AESCBC_CIPHER_KEY_ENCODING", "utf-8"),
        ("AESCBC_CIPHER_IV", "AAECAwQFBgcICQoLDA0ODw=="),
        ("AESCBC_CIPHER_IV_ENCODING", "Base64"),
        ("AESCBC_CIPHER_PADDING", "Strict"),
        ("AESCBC_LOG_LEVEL", "warn"),
    ]
    .into_iter()
    .collect();

    conf.apply_overrides_with(|name| vars.get(name).map(|v| v.to_string()))
        .unwrap();

    assert_eq!(conf.cipher.key.as_deref(), Some("0123456789abcdef"));
    assert_eq!(conf.cipher.key_encoding, Encoding::Utf8);
    assert_eq!(conf.cipher.iv_encoding, Encoding::Base64);
    assert_eq!(conf.cipher.padding, PaddingMode::Strict);
    assert_eq!(conf.log.level, "warn");

    assert_eq!(conf.cipher.key_bytes().unwrap().len(), 16);
    assert_eq!(conf.cipher.iv_bytes().unwrap(), (0u8..16).collect::<Vec<_>>());

    let cipher = conf.cipher.build().unwrap();
    let encrypted = cipher.encrypt(b"from env").unwrap();
    assert_eq!(cipher.decrypt(&encrypted).unwrap(), b"from env");
}

#[test]
fn test_override_keeps_unset_values() {
    let mut conf = Config::from_toml_str(&reference_toml("strict")).unwrap();
    conf.apply_overrides_with(|_| None).unwrap();

    assert_eq!(conf.cipher.key.as_deref(), Some(common::KEY_HEX));
    assert_eq!(conf.cipher.iv.as_deref(), Some(common::IV_HEX));
    assert_eq!(conf.cipher.key_encoding, Encoding::Hex);
    assert_eq!(conf.cipher.padding, PaddingMode::Strict);
}

#[test]
fn test_override_with_unknown_encoding_fails() {
    let mut conf = Config::default();
    let result = conf.apply_overrides_with(|name| {
        (name == "AESCBC_CIPHER_KEY_ENCODING").then(|| "rot13".to_string())
    });
    assert!(matches!(result, Err(CoreError::InvalidConfig(_))));
}

#[test]
fn test_override_with_unknown_padding_fails() {
    let mut conf = Config::default();
    let result = conf.apply_overrides_with(|name| {
        (name == "AESCBC_CIPHER_PADDING").then(|| "sloppy".to_string())
    });
    assert!(matches!(result, Err(CoreError::InvalidConfig(_))));
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(reference_toml("strict").as_bytes()).unwrap();

    let conf = Config::from_path(file.path()).unwrap();
    assert_eq!(conf.cipher.padding, PaddingMode::Strict);
    assert!(conf.cipher.build().is_ok());
}

#[test]
fn test_load_from_invalid_file_fails() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[cipher]\npadding = \"strcit\"\n").unwrap();

    assert!(matches!(load_from(file.path()), Err(CoreError::Config(_))));
}

#[test]
fn test_load_from_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let conf = load_from(dir.path().join("missing.toml")).unwrap();
    assert_eq!(conf.log.level, "info");
}

#[test]
fn test_debug_redacts_key() {
    let conf = Config::from_toml_str(&reference_toml("lenient")).unwrap();
    let debug = format!("{conf:?}");
    assert!(debug.contains("<redacted>"));
    assert!(!debug.contains(common::KEY_HEX));
}
