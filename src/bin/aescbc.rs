// src/bin/aescbc.rs
//! AES/CBC/PKCS#7 on the command line
//!
//! Key and IV come from the config file, `AESCBC_*` env vars, or flags
//! (flags win). Payload is read from the argument or stdin.

use std::io::Read;
use std::path::PathBuf;

use aes_cbc_vault::config::{load_from, CipherSection};
use aes_cbc_vault::consts::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
use aes_cbc_vault::encoding::strip_line_ending;
use aes_cbc_vault::{BlockCipher, Encoding, PaddingMode};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "aescbc", version, about = "AES/CBC/PKCS#7 encrypt and decrypt")]
struct Cli {
    /// Config file
    #[arg(long, env = CONFIG_PATH_ENV, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// AES key (16, 24 or 32 bytes once decoded)
    #[arg(long)]
    key: Option<String>,

    #[arg(long, value_enum)]
    key_encoding: Option<TextEncoding>,

    /// Initialization vector (16 bytes once decoded)
    #[arg(long)]
    iv: Option<String>,

    #[arg(long, value_enum)]
    iv_encoding: Option<TextEncoding>,

    /// Reject malformed padding on decrypt
    #[arg(long)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encrypt TEXT (or stdin)
    Encrypt {
        #[arg(long, value_enum, default_value_t = TextEncoding::Utf8)]
        input_encoding: TextEncoding,
        #[arg(long, value_enum, default_value_t = TextEncoding::Base64)]
        output_encoding: TextEncoding,
        text: Option<String>,
    },
    /// Decrypt TEXT (or stdin)
    Decrypt {
        #[arg(long, value_enum, default_value_t = TextEncoding::Base64)]
        input_encoding: TextEncoding,
        #[arg(long, value_enum, default_value_t = TextEncoding::Utf8)]
        output_encoding: TextEncoding,
        text: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TextEncoding {
    #[value(name = "utf-8", alias = "utf8")]
    Utf8,
    Hex,
    Base64,
}

impl From<TextEncoding> for Encoding {
    fn from(enc: TextEncoding) -> Self {
        match enc {
            TextEncoding::Utf8 => Encoding::Utf8,
            TextEncoding::Hex => Encoding::Hex,
            TextEncoding::Base64 => Encoding::Base64,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let conf = load_from(&cli.config)
        .with_context(|| format!("Failed to load config {}", cli.config.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&conf.log.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let section = override_section(conf.cipher.clone(), &cli);
    debug!(?section, "cipher settings");

    let cipher = section
        .build()
        .context("Failed to build cipher; check key and IV")?;

    match cli.command {
        Command::Encrypt {
            input_encoding,
            output_encoding,
            text,
        } => {
            let plain = Encoding::from(input_encoding).decode(&read_text(text)?)?;
            let encrypted = cipher.encrypt(&plain).context("Encryption failed")?;
            info!(plain_len = plain.len(), encrypted_len = encrypted.len(), "encrypted");
            println!("{}", Encoding::from(output_encoding).encode(&encrypted)?);
        }
        Command::Decrypt {
            input_encoding,
            output_encoding,
            text,
        } => {
            let encrypted = Encoding::from(input_encoding).decode(&read_text(text)?)?;
            let plain = cipher.decrypt(&encrypted).context("Decryption failed")?;
            info!(encrypted_len = encrypted.len(), plain_len = plain.len(), "decrypted");
            println!("{}", Encoding::from(output_encoding).encode(&plain)?);
        }
    }
    Ok(())
}

fn override_section(mut section: CipherSection, cli: &Cli) -> CipherSection {
    if let Some(key) = &cli.key {
        section.key = Some(key.clone());
    }
    if let Some(enc) = cli.key_encoding {
        section.key_encoding = enc.into();
    }
    if let Some(iv) = &cli.iv {
        section.iv = Some(iv.clone());
    }
    if let Some(enc) = cli.iv_encoding {
        section.iv_encoding = enc.into();
    }
    if cli.strict {
        section.padding = PaddingMode::Strict;
    }
    section
}

fn read_text(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(strip_line_ending(&buf).to_owned())
        }
    }
}
