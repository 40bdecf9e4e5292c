//! Thin wrapper around the nonblocking RPC client: balances, airdrops, rent
//! lookups, and the single submit-and-confirm path shared by every workflow.

use anyhow::{bail, Context, Result};
use solana_account_decoder::parse_token::UiTokenAmount;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    program_pack::Pack,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};
use spl_token::state::Mint;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::chain::plan::TxPlan;

const RPC_TIMEOUT: Duration = Duration::from_secs(60);
const CONFIRM_POLL: Duration = Duration::from_millis(500);
const CONFIRM_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct ChainClient {
    rpc: Arc<RpcClient>,
    commitment: CommitmentConfig,
}

impl ChainClient {
    pub fn new(rpc_url: String) -> Self {
        let commitment = CommitmentConfig::confirmed();
        let rpc = RpcClient::new_with_timeout_and_commitment(rpc_url, RPC_TIMEOUT, commitment);
        Self {
            rpc: Arc::new(rpc),
            commitment,
        }
    }

    pub async fn sol_balance(&self, owner: &Pubkey) -> Result<u64> {
        self.rpc
            .get_balance(owner)
            .await
            .context("failed to fetch SOL balance")
    }

    /// Balance of a token account in base units. An account that does not
    /// exist yet reads as zero.
    pub async fn token_balance(&self, token_account: &Pubkey) -> Result<u64> {
        match self.rpc.get_token_account_balance(token_account).await {
            Ok(balance) => {
                let balance: UiTokenAmount = balance;
                balance
                    .amount
                    .parse::<u64>()
                    .context("unparseable token amount from RPC")
            }
            Err(_) => Ok(0),
        }
    }

    pub async fn mint_rent(&self) -> Result<u64> {
        self.rpc
            .get_minimum_balance_for_rent_exemption(Mint::LEN)
            .await
            .context("failed to fetch the rent-exempt minimum for a mint account")
    }

    /// Request an airdrop and wait until it confirms.
    pub async fn request_airdrop(&self, to: &Pubkey, lamports: u64) -> Result<Signature> {
        let signature = self
            .rpc
            .request_airdrop(to, lamports)
            .await
            .context("airdrop request was rejected")?;
        tracing::info!(%signature, lamports, "airdrop requested");
        self.await_confirmation(&signature).await?;
        Ok(signature)
    }

    /// The one submit path every workflow routes through: attach the payer
    /// and a fresh blockhash, sign with the payer plus any plan signers,
    /// send, and block until the network confirms.
    pub async fn submit(&self, payer: &Keypair, plan: TxPlan) -> Result<Signature> {
        let blockhash = self
            .rpc
            .get_latest_blockhash()
            .await
            .context("failed to fetch a recent blockhash")?;

        let mut signers: Vec<&Keypair> = Vec::with_capacity(1 + plan.extra_signers.len());
        signers.push(payer);
        signers.extend(plan.extra_signers.iter());

        let transaction = Transaction::new_signed_with_payer(
            &plan.instructions,
            Some(&payer.pubkey()),
            &signers,
            blockhash,
        );

        tracing::debug!(
            instructions = plan.instructions.len(),
            signers = signers.len(),
            "submitting transaction"
        );

        let signature = self
            .rpc
            .send_and_confirm_transaction(&transaction)
            .await
            .context("transaction was not confirmed")?;
        tracing::info!(%signature, "transaction confirmed");
        Ok(signature)
    }

    async fn await_confirmation(&self, signature: &Signature) -> Result<()> {
        let started = Instant::now();
        loop {
            let confirmed = self
                .rpc
                .confirm_transaction_with_commitment(signature, self.commitment)
                .await
                .context("confirmation lookup failed")?
                .value;
            if confirmed {
                return Ok(());
            }
            if started.elapsed() > CONFIRM_TIMEOUT {
                bail!("timed out waiting for confirmation of {signature}");
            }
            tokio::time::sleep(CONFIRM_POLL).await;
        }
    }
}
