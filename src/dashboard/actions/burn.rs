use crate::chain::plan::{self, whole_tokens, TOKEN_DECIMALS};
use crate::dashboard::types::{Dashboard, PendingAction};

/// Whole tokens destroyed per burn action.
pub const BURN_AMOUNT: u64 = 1;

impl Dashboard {
    pub fn execute_burn_tokens(&mut self) {
        if self.guarded_mint(PendingAction::BurnTokens).is_none() {
            return;
        }
        self.start_action(PendingAction::BurnTokens);
    }

    pub(crate) fn perform_burn_tokens(&mut self) {
        let Some(mint) = self.guarded_mint(PendingAction::BurnTokens) else {
            self.close_popup();
            return;
        };
        let amount = whole_tokens(BURN_AMOUNT, TOKEN_DECIMALS);
        self.run_workflow(
            PendingAction::BurnTokens,
            move |wallet| plan::burn_tokens(&wallet.pubkey, &mint, amount, TOKEN_DECIMALS),
            |_, _| {},
        );
    }
}
