use crate::chain::plan::{self, whole_tokens, TOKEN_DECIMALS};
use crate::dashboard::types::{Dashboard, PendingAction};

/// Whole tokens the configured recipient is approved to spend.
pub const DELEGATE_AMOUNT: u64 = 1;

impl Dashboard {
    pub fn execute_approve_delegate(&mut self) {
        if self.guarded_mint(PendingAction::ApproveDelegate).is_none() {
            return;
        }
        self.start_action(PendingAction::ApproveDelegate);
    }

    pub(crate) fn perform_approve_delegate(&mut self) {
        let Some(mint) = self.guarded_mint(PendingAction::ApproveDelegate) else {
            self.close_popup();
            return;
        };
        let delegate = self.settings.recipient;
        let amount = whole_tokens(DELEGATE_AMOUNT, TOKEN_DECIMALS);
        self.run_workflow(
            PendingAction::ApproveDelegate,
            move |wallet| {
                plan::approve_delegate(&wallet.pubkey, &delegate, &mint, amount, TOKEN_DECIMALS)
            },
            |_, _| {},
        );
    }
}
