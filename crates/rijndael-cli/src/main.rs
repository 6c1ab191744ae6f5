//! Command-line driver for single-block AES encryption and decryption.

#![forbid(unsafe_code)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rijndael::{decrypt_block, encrypt_block, expand_key, KeySchedule};

/// Single-block AES CLI.
#[derive(Parser)]
#[command(
    name = "rijndael",
    version,
    author,
    about = "AES-128/192/256 single-block encrypt/decrypt"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one 16-byte block.
    Enc {
        /// Cipher key as 32, 48, or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Decrypt one 16-byte block.
    Dec {
        /// Cipher key as 32, 48, or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Print the expanded round keys for a key, one per line.
    Expand {
        /// Cipher key as 32, 48, or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
    },
    /// Encrypt and decrypt a random block, verifying the round trip.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Enc { key_hex, block_hex } => cmd_enc(&key_hex, &block_hex),
        Commands::Dec { key_hex, block_hex } => cmd_dec(&key_hex, &block_hex),
        Commands::Expand { key_hex } => cmd_expand(&key_hex),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_enc(key_hex: &str, block_hex: &str) -> Result<()> {
    let schedule = parse_key_hex(key_hex)?;
    let block = parse_block_hex(block_hex)?;
    let ciphertext = encrypt_block(&block, &schedule, schedule.rounds())?;
    println!("{}", hex::encode(ciphertext));
    Ok(())
}

fn cmd_dec(key_hex: &str, block_hex: &str) -> Result<()> {
    let schedule = parse_key_hex(key_hex)?;
    let block = parse_block_hex(block_hex)?;
    let plaintext = decrypt_block(&block, &schedule, schedule.rounds())?;
    println!("{}", hex::encode(plaintext));
    Ok(())
}

fn cmd_expand(key_hex: &str) -> Result<()> {
    let schedule = parse_key_hex(key_hex)?;
    for round in 0..=schedule.rounds() {
        println!("round {:2}: {}", round, hex::encode(schedule.round_key(round)));
    }
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 32];
    rng.fill_bytes(&mut key_bytes);
    let schedule = expand_key(&key_bytes)?;
    let nr = schedule.rounds();

    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);

    let ciphertext = encrypt_block(&block, &schedule, nr)?;
    let decrypted = decrypt_block(&ciphertext, &schedule, nr)?;

    println!("demo key: {}", hex::encode(key_bytes));
    println!("plaintext: {}", hex::encode(block));
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("decrypted: {}", hex::encode(decrypted));
    if decrypted != block {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<KeySchedule> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    let schedule = expand_key(&bytes).context("expand key")?;
    Ok(schedule)
}

fn parse_block_hex(hex_str: &str) -> Result<[u8; 16]> {
    let bytes = hex::decode(hex_str.trim()).context("decode block hex")?;
    if bytes.len() != 16 {
        bail!("block must be 16 bytes (32 hex characters)");
    }
    let mut block = [0u8; 16];
    block.copy_from_slice(&bytes);
    Ok(block)
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
