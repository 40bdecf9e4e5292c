use crate::chain::plan::{self, whole_tokens, TOKEN_DECIMALS};
use crate::dashboard::types::{Dashboard, PendingAction};

/// Whole tokens issued per mint action.
pub const MINT_AMOUNT: u64 = 100;

impl Dashboard {
    pub fn execute_mint_tokens(&mut self) {
        if self.guarded_mint(PendingAction::MintTokens).is_none() {
            return;
        }
        self.start_action(PendingAction::MintTokens);
    }

    pub(crate) fn perform_mint_tokens(&mut self) {
        let Some(mint) = self.guarded_mint(PendingAction::MintTokens) else {
            self.close_popup();
            return;
        };
        let amount = whole_tokens(MINT_AMOUNT, TOKEN_DECIMALS);
        self.run_workflow(
            PendingAction::MintTokens,
            move |wallet| plan::mint_tokens(&wallet.pubkey, &mint, amount, TOKEN_DECIMALS),
            |_, _| {},
        );
    }
}
