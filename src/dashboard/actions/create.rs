use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;

use crate::chain::plan::{self, TOKEN_DECIMALS};
use crate::dashboard::types::{ActionStep, Dashboard, PendingAction};
use crate::dashboard::ui::shorten;
use crate::explorer;

impl Dashboard {
    pub fn execute_create_mint(&mut self) {
        if !self.connected() {
            tracing::warn!("create skipped without a connected wallet");
            return;
        }
        if self.mint.is_some() {
            tracing::warn!("create skipped while a mint is active");
            return;
        }
        self.start_action(PendingAction::CreateMint);
    }

    /// Allocate and initialize a fresh mint with the wallet as both mint and
    /// freeze authority. The mint keypair co-signs alongside the payer.
    pub(crate) fn perform_create_mint(&mut self) {
        let chain = self.chain.clone();
        let rent = tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(chain.mint_rent())
        });
        let rent = match rent {
            Ok(rent) => rent,
            Err(err) => {
                self.finish_action_err(PendingAction::CreateMint, &err);
                return;
            }
        };

        let mint = Keypair::new();
        let mint_address = mint.pubkey();
        self.action_steps.push(ActionStep::InProgress(format!(
            "Creating mint {}...",
            shorten(&mint_address.to_string())
        )));

        self.run_workflow(
            PendingAction::CreateMint,
            move |wallet| plan::create_mint(&wallet.pubkey, mint, rent, TOKEN_DECIMALS),
            move |dashboard, _| {
                dashboard.mint = Some(mint_address);
                dashboard.token_balance = Some(0);
                dashboard.notifications.info(
                    format!("Mint {}", shorten(&mint_address.to_string())),
                    Some(explorer::address_url(
                        &mint_address,
                        dashboard.settings.cluster,
                    )),
                );
            },
        );
    }
}
