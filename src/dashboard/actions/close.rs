use spl_associated_token_account::get_associated_token_address;

use crate::chain::plan::{self, TOKEN_DECIMALS};
use crate::dashboard::types::{ActionStep, Dashboard, PendingAction};
use crate::dashboard::ui::format_tokens;

impl Dashboard {
    pub fn execute_close_account(&mut self) {
        if self.guarded_mint(PendingAction::CloseAccount).is_none() {
            return;
        }
        self.start_action(PendingAction::CloseAccount);
    }

    /// Close the wallet's token account for the active mint. Any balance
    /// still in the account moves to the configured recipient in the same
    /// transaction, so tokens are never stranded by the close. Rent returns
    /// to the wallet.
    pub(crate) fn perform_close_account(&mut self) {
        let Some(mint) = self.guarded_mint(PendingAction::CloseAccount) else {
            self.close_popup();
            return;
        };
        let Some(wallet) = self.wallet.as_ref() else {
            self.close_popup();
            return;
        };
        let owner_ata = get_associated_token_address(&wallet.pubkey, &mint);

        let chain = self.chain.clone();
        let remaining = tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(chain.token_balance(&owner_ata))
        });
        let remaining = match remaining {
            Ok(remaining) => remaining,
            Err(err) => {
                self.finish_action_err(PendingAction::CloseAccount, &err);
                return;
            }
        };

        if remaining > 0 {
            self.action_steps.push(ActionStep::InProgress(format!(
                "Draining {} tokens to the recipient...",
                format_tokens(remaining)
            )));
        }

        let recipient = self.settings.recipient;
        self.run_workflow(
            PendingAction::CloseAccount,
            move |wallet| {
                plan::close_token_account(
                    &wallet.pubkey,
                    &recipient,
                    &mint,
                    remaining,
                    TOKEN_DECIMALS,
                )
            },
            |dashboard, _| dashboard.clear_active_mint(),
        );
    }
}
