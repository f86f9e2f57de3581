//! Command-line interface for `aes-ecb`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;

use aes_ecb::Aes;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

/// Padded-ECB AES file encryption.
#[derive(Parser)]
#[command(
    name = "aesecb",
    version,
    author,
    about = "Encrypt or decrypt files with textbook AES (padded ECB)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file; output grows by 1..=16 padding bytes.
    Enc {
        /// AES key as 32, 48, or 64 hex characters (128/192/256-bit).
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input plaintext path.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output ciphertext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Decrypt a file produced by `enc` with the same key.
    Dec {
        /// AES key as 32, 48, or 64 hex characters (128/192/256-bit).
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input ciphertext path (multiple of 16 bytes).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output plaintext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Enc {
            key_hex,
            input,
            output,
        } => cmd_enc(&key_hex, &input, &output),
        Commands::Dec {
            key_hex,
            input,
            output,
        } => cmd_dec(&key_hex, &input, &output),
    }
}

fn cmd_enc(key_hex: &str, input: &PathBuf, output: &PathBuf) -> Result<()> {
    let cipher = cipher_from_hex(key_hex)?;
    let data = fs::read(input).with_context(|| format!("read {}", input.display()))?;
    let ciphertext = cipher.encrypt(&data);
    fs::write(output, ciphertext).with_context(|| format!("write {}", output.display()))?;
    Ok(())
}

fn cmd_dec(key_hex: &str, input: &PathBuf, output: &PathBuf) -> Result<()> {
    let cipher = cipher_from_hex(key_hex)?;
    let data = fs::read(input).with_context(|| format!("read {}", input.display()))?;
    let plaintext = cipher
        .decrypt(&data)
        .with_context(|| format!("decrypt {}", input.display()))?;
    fs::write(output, plaintext).with_context(|| format!("write {}", output.display()))?;
    Ok(())
}

fn cipher_from_hex(key_hex: &str) -> Result<Aes> {
    let bytes = hex::decode(key_hex.trim()).context("decode key hex")?;
    Aes::new(&bytes).context("build cipher")
}
