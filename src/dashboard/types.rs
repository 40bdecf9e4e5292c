use chrono::{DateTime, Local};
use solana_sdk::pubkey::Pubkey;
use std::path::PathBuf;
use std::time::Instant;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::chain::client::ChainClient;
use crate::explorer::Cluster;
use crate::notify::Notifications;
use crate::poller::{BalanceEvent, BalancePoller};
use crate::wallet::WalletSession;

/// Startup configuration resolved from the CLI. Nothing here is persisted.
#[derive(Clone)]
pub struct Settings {
    pub rpc_url: String,
    pub keypair_path: PathBuf,
    pub recipient: Pubkey,
    pub cluster: Cluster,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    Help,
    TransferPopup,
    ActionPopup,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionStep {
    Starting,
    InProgress(String),
    Success(String),
    Error(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferInputField {
    Recipient,
    Amount,
}

/// Work scheduled by a keypress. It runs on the loop pass after the progress
/// popup has painted, so the operator always sees the in-flight state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingAction {
    Airdrop,
    TransferSol,
    CreateMint,
    MintTokens,
    SendTokens,
    BurnTokens,
    ApproveDelegate,
    RevokeDelegate,
    CloseAccount,
}

/// Rows of the token panel's action list, in render order.
pub const TOKEN_ACTIONS: [PendingAction; 7] = [
    PendingAction::CreateMint,
    PendingAction::MintTokens,
    PendingAction::SendTokens,
    PendingAction::BurnTokens,
    PendingAction::ApproveDelegate,
    PendingAction::RevokeDelegate,
    PendingAction::CloseAccount,
];

impl PendingAction {
    pub fn title(self) -> &'static str {
        match self {
            PendingAction::Airdrop => "Airdrop",
            PendingAction::TransferSol => "Transfer SOL",
            PendingAction::CreateMint => "Create token",
            PendingAction::MintTokens => "Mint tokens",
            PendingAction::SendTokens => "Send tokens",
            PendingAction::BurnTokens => "Burn tokens",
            PendingAction::ApproveDelegate => "Approve delegate",
            PendingAction::RevokeDelegate => "Revoke delegate",
            PendingAction::CloseAccount => "Close token account",
        }
    }

    pub fn hotkey(self) -> &'static str {
        match self {
            PendingAction::Airdrop => "A",
            PendingAction::TransferSol => "T",
            PendingAction::CreateMint => "N",
            PendingAction::MintTokens => "M",
            PendingAction::SendTokens => "S",
            PendingAction::BurnTokens => "B",
            PendingAction::ApproveDelegate => "D",
            PendingAction::RevokeDelegate => "V",
            PendingAction::CloseAccount => "X",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            PendingAction::Airdrop => "Request devnet SOL from the faucet",
            PendingAction::TransferSol => "Send SOL to any address",
            PendingAction::CreateMint => "Create a fresh mint (9 decimals)",
            PendingAction::MintTokens => "Mint 100 tokens to your account",
            PendingAction::SendTokens => "Send 1 token to the recipient",
            PendingAction::BurnTokens => "Burn 1 token from your account",
            PendingAction::ApproveDelegate => "Delegate 1 token to the recipient",
            PendingAction::RevokeDelegate => "Revoke the current delegate",
            PendingAction::CloseAccount => "Drain and close your token account",
        }
    }

    /// Whether the action can run in the current session state. Create is
    /// only offered while no mint is active; the other token actions require
    /// one.
    pub fn available(self, connected: bool, has_mint: bool) -> bool {
        if !connected {
            return false;
        }
        match self {
            PendingAction::Airdrop | PendingAction::TransferSol => true,
            PendingAction::CreateMint => !has_mint,
            _ => has_mint,
        }
    }
}

pub struct Dashboard {
    pub settings: Settings,
    pub chain: ChainClient,

    // wallet session and polling lifecycle
    pub wallet: Option<WalletSession>,
    pub poller: Option<BalancePoller>,
    pub balance_rx: Option<UnboundedReceiver<BalanceEvent>>,
    pub sol_balance: Option<u64>,
    pub balance_updated_at: Option<DateTime<Local>>,
    pub poll_error: Option<String>,

    // token panel
    pub mint: Option<Pubkey>,
    pub token_balance: Option<u64>,
    pub selected_action: usize,

    // interaction state
    pub mode: AppMode,
    pub action_title: Option<&'static str>,
    pub action_steps: Vec<ActionStep>,
    pub pending: Option<PendingAction>,
    pub notifications: Notifications,
    pub status_message: Option<String>,

    // transfer form
    pub transfer_recipient: String,
    pub transfer_amount: String,
    pub transfer_focus: TransferInputField,

    // loop bookkeeping
    pub should_quit: bool,
    pub needs_clear: bool,
    pub animation_frame: u32,
    pub last_animation_update: Instant,
}

impl Dashboard {
    pub fn new(settings: Settings) -> Self {
        let chain = ChainClient::new(settings.rpc_url.clone());
        Self {
            settings,
            chain,
            wallet: None,
            poller: None,
            balance_rx: None,
            sol_balance: None,
            balance_updated_at: None,
            poll_error: None,
            mint: None,
            token_balance: None,
            selected_action: 0,
            mode: AppMode::Normal,
            action_title: None,
            action_steps: Vec::new(),
            pending: None,
            notifications: Notifications::new(),
            status_message: None,
            transfer_recipient: String::new(),
            transfer_amount: String::new(),
            transfer_focus: TransferInputField::Recipient,
            should_quit: false,
            needs_clear: false,
            animation_frame: 0,
            last_animation_update: Instant::now(),
        }
    }

    pub fn connected(&self) -> bool {
        self.wallet.is_some()
    }

    /// Apply one poller event. A failed fetch keeps the previous value on
    /// screen and only surfaces the error.
    pub fn apply_balance_event(&mut self, event: BalanceEvent) {
        match event {
            BalanceEvent::Updated(lamports) => {
                self.sol_balance = Some(lamports);
                self.balance_updated_at = Some(Local::now());
                self.poll_error = None;
            }
            BalanceEvent::FetchFailed(message) => {
                self.poll_error = Some(message);
            }
        }
    }

    /// Drain whatever the poller produced since the last loop pass. Events
    /// apply in order, so the newest value wins.
    pub fn drain_balance_events(&mut self) {
        let mut drained = Vec::new();
        if let Some(rx) = self.balance_rx.as_mut() {
            while let Ok(event) = rx.try_recv() {
                drained.push(event);
            }
        }
        for event in drained {
            self.apply_balance_event(event);
        }
    }

    /// Success effect of the close workflow: the mint reference goes away.
    pub fn clear_active_mint(&mut self) {
        self.mint = None;
        self.token_balance = None;
    }

    pub fn clear_transfer_form(&mut self) {
        self.transfer_recipient.clear();
        self.transfer_amount.clear();
        self.transfer_focus = TransferInputField::Recipient;
    }

    pub fn close_popup(&mut self) {
        self.mode = AppMode::Normal;
        self.action_title = None;
        self.action_steps.clear();
        self.needs_clear = true;
    }
}
