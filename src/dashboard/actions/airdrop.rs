use rand::Rng;
use solana_sdk::native_token::LAMPORTS_PER_SOL;

use crate::dashboard::types::{ActionStep, Dashboard, PendingAction};
use crate::explorer;

impl Dashboard {
    pub fn execute_airdrop(&mut self) {
        if !self.connected() {
            tracing::warn!("airdrop skipped without a connected wallet");
            return;
        }
        self.start_action(PendingAction::Airdrop);
    }

    /// Ask the faucet for a random 1-5 SOL and wait for the drop to confirm.
    pub(crate) fn perform_airdrop(&mut self) {
        let Some(wallet) = self.wallet.as_ref() else {
            self.close_popup();
            return;
        };
        let owner = wallet.pubkey;
        let sol = rand::thread_rng().gen_range(1..=5u64);

        self.action_steps.push(ActionStep::InProgress(format!(
            "Requesting {sol} SOL from the faucet..."
        )));

        let chain = self.chain.clone();
        let result = tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current()
                .block_on(chain.request_airdrop(&owner, sol * LAMPORTS_PER_SOL))
        });

        match result {
            Ok(signature) => {
                tracing::info!(%signature, sol, "airdrop confirmed");
                self.action_steps
                    .push(ActionStep::Success(format!("Airdropped {sol} SOL")));
                self.notifications.success(
                    format!("Airdropped {sol} SOL"),
                    Some(explorer::tx_url(&signature, self.settings.cluster)),
                );
                self.status_message = Some(format!("Airdropped {sol} SOL"));
                self.refresh_balances();
            }
            Err(err) => self.finish_action_err(PendingAction::Airdrop, &err),
        }
    }
}
