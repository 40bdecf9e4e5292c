//! Keyboard-triggered dashboard actions. Every on-chain workflow funnels
//! through [`Dashboard::run_workflow`]: guard the session, build the
//! instruction list, submit it as one signed transaction, then apply the
//! action's local effect once the network confirms.

mod airdrop;
mod burn;
mod close;
mod connect;
mod create;
mod delegate;
mod mint;
mod revoke;
mod send;
mod transfer;

pub use transfer::*;

use anyhow::{Error, Result};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use spl_associated_token_account::get_associated_token_address;

use crate::chain::plan::TxPlan;
use crate::dashboard::types::{ActionStep, AppMode, Dashboard, PendingAction};
use crate::dashboard::ui::shorten;
use crate::explorer;
use crate::poller::BalanceEvent;
use crate::wallet::WalletSession;

impl Dashboard {
    /// Open the progress popup and queue `action`. The submit itself runs on
    /// the next loop pass, after the popup has painted, so the terminal never
    /// sits on a stale frame during the blocking RPC calls.
    pub(crate) fn start_action(&mut self, action: PendingAction) {
        self.mode = AppMode::ActionPopup;
        self.action_title = Some(action.title());
        self.action_steps.clear();
        self.action_steps.push(ActionStep::Starting);
        self.needs_clear = true;
        self.pending = Some(action);
        self.status_message = Some(format!("{}...", action.title()));
    }

    pub(crate) fn run_pending_action(&mut self, action: PendingAction) {
        match action {
            PendingAction::Airdrop => self.perform_airdrop(),
            PendingAction::TransferSol => self.perform_transfer_sol(),
            PendingAction::CreateMint => self.perform_create_mint(),
            PendingAction::MintTokens => self.perform_mint_tokens(),
            PendingAction::SendTokens => self.perform_send_tokens(),
            PendingAction::BurnTokens => self.perform_burn_tokens(),
            PendingAction::ApproveDelegate => self.perform_approve_delegate(),
            PendingAction::RevokeDelegate => self.perform_revoke_delegate(),
            PendingAction::CloseAccount => self.perform_close_account(),
        }
    }

    /// Entry point for the action list and the direct hotkeys. The per-action
    /// `execute_*` functions hold the guards.
    pub(crate) fn execute_token_action(&mut self, action: PendingAction) {
        match action {
            PendingAction::Airdrop => self.execute_airdrop(),
            PendingAction::TransferSol => self.execute_transfer_sol(),
            PendingAction::CreateMint => self.execute_create_mint(),
            PendingAction::MintTokens => self.execute_mint_tokens(),
            PendingAction::SendTokens => self.execute_send_tokens(),
            PendingAction::BurnTokens => self.execute_burn_tokens(),
            PendingAction::ApproveDelegate => self.execute_approve_delegate(),
            PendingAction::RevokeDelegate => self.execute_revoke_delegate(),
            PendingAction::CloseAccount => self.execute_close_account(),
        }
    }

    /// Shared submit path for every on-chain workflow. `build` turns the
    /// session into an instruction list; `on_success` applies the action's
    /// local effect before balances refresh, so effects like a new mint are
    /// visible to the refresh.
    pub(crate) fn run_workflow<B, S>(&mut self, action: PendingAction, build: B, on_success: S)
    where
        B: FnOnce(&WalletSession) -> Result<TxPlan>,
        S: FnOnce(&mut Dashboard, Signature),
    {
        let Some(wallet) = self.wallet.as_ref() else {
            tracing::warn!(action = action.title(), "skipped without a connected wallet");
            self.close_popup();
            return;
        };

        let plan = match build(wallet) {
            Ok(plan) => plan,
            Err(err) => {
                self.finish_action_err(action, &err);
                return;
            }
        };

        self.action_steps.push(ActionStep::InProgress(format!(
            "Submitting {} instruction(s)...",
            plan.instructions.len()
        )));

        let chain = self.chain.clone();
        let result = tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(chain.submit(&wallet.keypair, plan))
        });

        match result {
            Ok(signature) => {
                self.finish_action_ok(action, &signature);
                on_success(self, signature);
                self.refresh_balances();
            }
            Err(err) => self.finish_action_err(action, &err),
        }
    }

    pub(crate) fn finish_action_ok(&mut self, action: PendingAction, signature: &Signature) {
        tracing::info!(action = action.title(), %signature, "confirmed");
        self.action_steps
            .push(ActionStep::Success(format!("{} confirmed", action.title())));
        self.action_steps.push(ActionStep::Success(format!(
            "Signature {}",
            shorten(&signature.to_string())
        )));
        self.notifications.success(
            format!("{} confirmed", action.title()),
            Some(explorer::tx_url(signature, self.settings.cluster)),
        );
        self.status_message = Some(format!("{} confirmed", action.title()));
    }

    /// Uniform failure path: full error chain to the log, a short generic
    /// line to the popup and the feed.
    pub(crate) fn finish_action_err(&mut self, action: PendingAction, err: &Error) {
        tracing::error!(action = action.title(), "failed: {err:#}");
        self.action_steps
            .push(ActionStep::Error(format!("{} failed", action.title())));
        self.notifications.error(format!("{} failed", action.title()));
        self.status_message = Some(format!("{} failed - see log for details", action.title()));
    }

    /// The active mint, or a logged no-op when the action cannot run yet.
    pub(crate) fn guarded_mint(&self, action: PendingAction) -> Option<Pubkey> {
        if !self.connected() {
            tracing::warn!(action = action.title(), "skipped without a connected wallet");
            return None;
        }
        if self.mint.is_none() {
            tracing::warn!(action = action.title(), "skipped without an active mint");
        }
        self.mint
    }

    /// Off-cadence balance fetch, used right after a confirmed action so the
    /// panels do not wait for the next poll tick. Fetch failures keep the
    /// values already on screen.
    pub(crate) fn refresh_balances(&mut self) {
        let Some(wallet) = self.wallet.as_ref() else {
            return;
        };
        let owner = wallet.pubkey;
        let mint = self.mint;
        let chain = self.chain.clone();

        let (sol, token) = tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async {
                let sol = chain.sol_balance(&owner).await;
                let token = match mint {
                    Some(mint) => {
                        let ata = get_associated_token_address(&owner, &mint);
                        Some(chain.token_balance(&ata).await)
                    }
                    None => None,
                };
                (sol, token)
            })
        });

        match sol {
            Ok(lamports) => self.apply_balance_event(BalanceEvent::Updated(lamports)),
            Err(err) => tracing::warn!("balance refresh failed: {err:#}"),
        }
        match token {
            Some(Ok(amount)) => self.token_balance = Some(amount),
            Some(Err(err)) => tracing::warn!("token balance refresh failed: {err:#}"),
            None => {}
        }
    }
}
