use arboard::Clipboard;
use solana_sdk::native_token::LAMPORTS_PER_SOL;

use crate::chain::plan::TOKEN_DECIMALS;
use crate::dashboard::types::Dashboard;

/// First and last four characters of an address or signature.
pub fn shorten(value: &str) -> String {
    if value.len() <= 12 {
        return value.to_string();
    }
    format!("{}...{}", &value[..4], &value[value.len() - 4..])
}

pub fn format_sol(lamports: u64) -> String {
    format!("{:.4} SOL", lamports as f64 / LAMPORTS_PER_SOL as f64)
}

pub fn format_tokens(base_units: u64) -> String {
    format!(
        "{:.2}",
        spl_token::amount_to_ui_amount(base_units, TOKEN_DECIMALS)
    )
}

impl Dashboard {
    pub fn get_animated_dots(&self) -> &'static str {
        match self.animation_frame % 4 {
            0 => "   ",
            1 => ".  ",
            2 => ".. ",
            3 => "...",
            _ => "   ",
        }
    }

    pub fn copy_wallet_address(&mut self) {
        let Some(wallet) = self.wallet.as_ref() else {
            self.status_message = Some("Connect a wallet first".to_string());
            return;
        };
        let text = wallet.pubkey.to_string();
        self.copy_to_clipboard(text, "Wallet address copied");
    }

    /// E copies the most recent explorer link from the activity feed.
    pub fn copy_latest_link(&mut self) {
        let Some(link) = self.notifications.latest_link().map(str::to_string) else {
            self.status_message = Some("No explorer link to copy yet".to_string());
            return;
        };
        self.copy_to_clipboard(link, "Explorer link copied");
    }

    fn copy_to_clipboard(&mut self, text: String, done: &str) {
        match Clipboard::new() {
            Ok(mut clipboard) => match clipboard.set_text(text) {
                Ok(()) => self.status_message = Some(done.to_string()),
                Err(err) => self.status_message = Some(format!("Clipboard copy failed: {err}")),
            },
            Err(err) => self.status_message = Some(format!("Clipboard unavailable: {err}")),
        }
    }
}
