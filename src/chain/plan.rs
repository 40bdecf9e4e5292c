//! Instruction plans for every workflow the dashboard can run.
//!
//! Builders here are pure: they derive associated token accounts and lay out
//! the instruction batch, but never touch the network. The dashboard feeds a
//! plan to [`ChainClient::submit`](crate::chain::client::ChainClient::submit),
//! which attaches the payer and a fresh blockhash, signs and confirms.

use anyhow::Result;
use solana_sdk::{
    instruction::Instruction,
    program_pack::Pack,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    system_instruction,
};
use spl_associated_token_account::{
    get_associated_token_address, instruction::create_associated_token_account_idempotent,
};
use spl_token::instruction as token_instruction;
use spl_token::state::Mint;

/// Decimals used for every mint this dashboard creates.
pub const TOKEN_DECIMALS: u8 = 9;

/// Convert a whole-token count into base units for the given decimals.
pub fn whole_tokens(count: u64, decimals: u8) -> u64 {
    count.saturating_mul(10u64.pow(decimals as u32))
}

/// An instruction batch plus any keypairs that must co-sign alongside the
/// payer (the fresh mint keypair, for create).
pub struct TxPlan {
    pub instructions: Vec<Instruction>,
    pub extra_signers: Vec<Keypair>,
}

impl TxPlan {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self {
            instructions,
            extra_signers: Vec::new(),
        }
    }

    pub fn with_signer(mut self, signer: Keypair) -> Self {
        self.extra_signers.push(signer);
        self
    }
}

/// One native transfer, amount in lamports.
pub fn transfer_sol(from: &Pubkey, to: &Pubkey, lamports: u64) -> TxPlan {
    TxPlan::new(vec![system_instruction::transfer(from, to, lamports)])
}

/// Allocate a mint account and initialize it with the owner as both mint and
/// freeze authority. The new mint keypair co-signs the allocation.
pub fn create_mint(owner: &Pubkey, mint: Keypair, rent_lamports: u64, decimals: u8) -> Result<TxPlan> {
    let mint_address = mint.pubkey();
    let allocate = system_instruction::create_account(
        owner,
        &mint_address,
        rent_lamports,
        Mint::LEN as u64,
        &spl_token::id(),
    );
    let initialize = token_instruction::initialize_mint(
        &spl_token::id(),
        &mint_address,
        owner,
        Some(owner),
        decimals,
    )?;
    Ok(TxPlan::new(vec![allocate, initialize]).with_signer(mint))
}

/// Mint new supply into the owner's associated account. The account create is
/// idempotent so minting again into an existing account still works.
pub fn mint_tokens(owner: &Pubkey, mint: &Pubkey, amount: u64, decimals: u8) -> Result<TxPlan> {
    let owner_ata = get_associated_token_address(owner, mint);
    let ensure_account =
        create_associated_token_account_idempotent(owner, owner, mint, &spl_token::id());
    let mint_to = token_instruction::mint_to_checked(
        &spl_token::id(),
        mint,
        &owner_ata,
        owner,
        &[],
        amount,
        decimals,
    )?;
    Ok(TxPlan::new(vec![ensure_account, mint_to]))
}

/// Move tokens to the recipient, creating their associated account on the way
/// if it does not exist yet (funded by the sender).
pub fn send_tokens(
    owner: &Pubkey,
    recipient: &Pubkey,
    mint: &Pubkey,
    amount: u64,
    decimals: u8,
) -> Result<TxPlan> {
    let owner_ata = get_associated_token_address(owner, mint);
    let recipient_ata = get_associated_token_address(recipient, mint);
    let ensure_account =
        create_associated_token_account_idempotent(owner, recipient, mint, &spl_token::id());
    let transfer = token_instruction::transfer_checked(
        &spl_token::id(),
        &owner_ata,
        mint,
        &recipient_ata,
        owner,
        &[],
        amount,
        decimals,
    )?;
    Ok(TxPlan::new(vec![ensure_account, transfer]))
}

pub fn burn_tokens(owner: &Pubkey, mint: &Pubkey, amount: u64, decimals: u8) -> Result<TxPlan> {
    let owner_ata = get_associated_token_address(owner, mint);
    let burn = token_instruction::burn_checked(
        &spl_token::id(),
        &owner_ata,
        mint,
        owner,
        &[],
        amount,
        decimals,
    )?;
    Ok(TxPlan::new(vec![burn]))
}

pub fn approve_delegate(
    owner: &Pubkey,
    delegate: &Pubkey,
    mint: &Pubkey,
    amount: u64,
    decimals: u8,
) -> Result<TxPlan> {
    let owner_ata = get_associated_token_address(owner, mint);
    let approve = token_instruction::approve_checked(
        &spl_token::id(),
        &owner_ata,
        mint,
        delegate,
        owner,
        &[],
        amount,
        decimals,
    )?;
    Ok(TxPlan::new(vec![approve]))
}

pub fn revoke_delegate(owner: &Pubkey, mint: &Pubkey) -> Result<TxPlan> {
    let owner_ata = get_associated_token_address(owner, mint);
    let revoke = token_instruction::revoke(&spl_token::id(), &owner_ata, owner, &[])?;
    Ok(TxPlan::new(vec![revoke]))
}

/// Close the owner's associated account. When the account still holds tokens,
/// a drain to the recipient is placed ahead of the close in the same
/// transaction so both settle atomically. Rent returns to the owner. The
/// close instruction appears exactly once and always last.
pub fn close_token_account(
    owner: &Pubkey,
    recipient: &Pubkey,
    mint: &Pubkey,
    remaining: u64,
    decimals: u8,
) -> Result<TxPlan> {
    let owner_ata = get_associated_token_address(owner, mint);
    let mut instructions = Vec::with_capacity(3);

    if remaining > 0 {
        let recipient_ata = get_associated_token_address(recipient, mint);
        instructions.push(create_associated_token_account_idempotent(
            owner,
            recipient,
            mint,
            &spl_token::id(),
        ));
        instructions.push(token_instruction::transfer_checked(
            &spl_token::id(),
            &owner_ata,
            mint,
            &recipient_ata,
            owner,
            &[],
            remaining,
            decimals,
        )?);
    }

    instructions.push(token_instruction::close_account(
        &spl_token::id(),
        &owner_ata,
        owner,
        owner,
        &[],
    )?);

    Ok(TxPlan::new(instructions))
}
