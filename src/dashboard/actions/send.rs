use crate::chain::plan::{self, whole_tokens, TOKEN_DECIMALS};
use crate::dashboard::types::{Dashboard, PendingAction};

/// Whole tokens moved to the configured recipient per send action.
pub const SEND_AMOUNT: u64 = 1;

impl Dashboard {
    pub fn execute_send_tokens(&mut self) {
        if self.guarded_mint(PendingAction::SendTokens).is_none() {
            return;
        }
        self.start_action(PendingAction::SendTokens);
    }

    pub(crate) fn perform_send_tokens(&mut self) {
        let Some(mint) = self.guarded_mint(PendingAction::SendTokens) else {
            self.close_popup();
            return;
        };
        let recipient = self.settings.recipient;
        let amount = whole_tokens(SEND_AMOUNT, TOKEN_DECIMALS);
        self.run_workflow(
            PendingAction::SendTokens,
            move |wallet| {
                plan::send_tokens(&wallet.pubkey, &recipient, &mint, amount, TOKEN_DECIMALS)
            },
            |_, _| {},
        );
    }
}
