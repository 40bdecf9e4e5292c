//! Wallet session: the keypair loaded by the connect action. Reads the
//! Solana CLI's JSON keypair format (a 64-byte array).

use anyhow::{Context, Result};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use std::fs;
use std::path::Path;

pub struct WalletSession {
    pub keypair: Keypair,
    pub pubkey: Pubkey,
}

impl WalletSession {
    pub fn from_keypair(keypair: Keypair) -> Self {
        let pubkey = keypair.pubkey();
        Self { keypair, pubkey }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read keypair file: {}", path.display()))?;

        let bytes: Vec<u8> = serde_json::from_str(&data).context("invalid keypair JSON format")?;

        let keypair = Keypair::from_bytes(&bytes).context("invalid keypair bytes")?;

        Ok(Self::from_keypair(keypair))
    }
}
