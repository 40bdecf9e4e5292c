use crate::chain::plan;
use crate::dashboard::types::{Dashboard, PendingAction};

impl Dashboard {
    pub fn execute_revoke_delegate(&mut self) {
        if self.guarded_mint(PendingAction::RevokeDelegate).is_none() {
            return;
        }
        self.start_action(PendingAction::RevokeDelegate);
    }

    pub(crate) fn perform_revoke_delegate(&mut self) {
        let Some(mint) = self.guarded_mint(PendingAction::RevokeDelegate) else {
            self.close_popup();
            return;
        };
        self.run_workflow(
            PendingAction::RevokeDelegate,
            move |wallet| plan::revoke_delegate(&wallet.pubkey, &mint),
            |_, _| {},
        );
    }
}
