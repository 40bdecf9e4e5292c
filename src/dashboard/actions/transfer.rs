use std::str::FromStr;

use anyhow::anyhow;
use solana_sdk::native_token::LAMPORTS_PER_SOL;
use solana_sdk::pubkey::Pubkey;

use crate::chain::plan;
use crate::dashboard::types::{AppMode, Dashboard, PendingAction};

/// Validate the transfer form. Returns the parsed destination and the amount
/// in lamports, or a message fit for the status line.
pub fn parse_transfer_inputs(recipient: &str, amount: &str) -> Result<(Pubkey, u64), String> {
    let recipient = recipient.trim();
    if recipient.is_empty() {
        return Err("Recipient address required".to_string());
    }
    let recipient =
        Pubkey::from_str(recipient).map_err(|_| "Invalid recipient address".to_string())?;

    let amount = amount.trim();
    if amount.is_empty() {
        return Err("Amount required".to_string());
    }
    let sol: f64 = amount
        .parse()
        .map_err(|_| "Invalid amount (must be a number)".to_string())?;
    if !sol.is_finite() || sol <= 0.0 {
        return Err("Amount must be greater than 0".to_string());
    }
    let lamports = (sol * LAMPORTS_PER_SOL as f64).round() as u64;
    if lamports == 0 {
        return Err("Amount must be greater than 0".to_string());
    }
    Ok((recipient, lamports))
}

impl Dashboard {
    pub fn execute_transfer_sol(&mut self) {
        if !self.connected() {
            tracing::warn!("transfer skipped without a connected wallet");
            return;
        }
        self.clear_transfer_form();
        self.mode = AppMode::TransferPopup;
        self.needs_clear = true;
        self.status_message = Some("Enter the destination and amount".to_string());
    }

    /// Enter on the transfer form. Invalid input keeps the form open with a
    /// message; valid input schedules the submit.
    pub fn submit_transfer_form(&mut self) {
        match parse_transfer_inputs(&self.transfer_recipient, &self.transfer_amount) {
            Ok(_) => self.start_action(PendingAction::TransferSol),
            Err(message) => self.status_message = Some(message),
        }
    }

    pub(crate) fn perform_transfer_sol(&mut self) {
        let parsed = parse_transfer_inputs(&self.transfer_recipient, &self.transfer_amount);
        let (recipient, lamports) = match parsed {
            Ok(parsed) => parsed,
            Err(message) => {
                self.finish_action_err(PendingAction::TransferSol, &anyhow!(message));
                return;
            }
        };
        self.clear_transfer_form();
        self.run_workflow(
            PendingAction::TransferSol,
            move |wallet| Ok(plan::transfer_sol(&wallet.pubkey, &recipient, lamports)),
            |_, _| {},
        );
    }
}
