use tokio::sync::mpsc;

use crate::dashboard::types::Dashboard;
use crate::dashboard::ui::shorten;
use crate::explorer;
use crate::poller::BalancePoller;
use crate::wallet::WalletSession;

impl Dashboard {
    pub fn toggle_connection(&mut self) {
        if self.connected() {
            self.disconnect_wallet();
        } else {
            self.connect_wallet();
        }
    }

    /// Load the keypair and start the balance poller. The poller's first
    /// tick fires immediately, so the SOL balance appears without waiting a
    /// full interval.
    pub fn connect_wallet(&mut self) {
        let session = match WalletSession::load(&self.settings.keypair_path) {
            Ok(session) => session,
            Err(err) => {
                tracing::error!("connect failed: {err:#}");
                self.notifications.error("Connect failed");
                self.status_message = Some(format!("Connect failed: {err}"));
                return;
            }
        };

        let owner = session.pubkey;
        tracing::info!(wallet = %owner, "wallet connected");
        self.notifications.info(
            format!("Connected {}", shorten(&owner.to_string())),
            Some(explorer::address_url(&owner, self.settings.cluster)),
        );
        self.status_message = Some("Wallet connected".to_string());

        let (events, balance_rx) = mpsc::unbounded_channel();
        let chain = self.chain.clone();
        let poller = BalancePoller::spawn(
            move || {
                let chain = chain.clone();
                async move { chain.sol_balance(&owner).await }
            },
            events,
        );

        self.wallet = Some(session);
        self.balance_rx = Some(balance_rx);
        self.poller = Some(poller);

        // A mint kept from an earlier session needs its balance back on
        // screen right away.
        if self.mint.is_some() {
            self.refresh_balances();
        }
    }

    /// Tear the session down. The poller stops with it; the mint reference
    /// stays so reconnecting picks the token panel back up.
    pub fn disconnect_wallet(&mut self) {
        if let Some(poller) = self.poller.take() {
            poller.stop();
        }
        self.balance_rx = None;
        if let Some(wallet) = self.wallet.take() {
            tracing::info!(wallet = %wallet.pubkey, "wallet disconnected");
        }
        self.sol_balance = None;
        self.balance_updated_at = None;
        self.poll_error = None;
        self.notifications.info("Disconnected", None);
        self.status_message = Some("Wallet disconnected".to_string());
    }
}
