//! Terminal dashboard. One event loop owns all session state; blocking
//! submits run between draws, after the progress popup has painted.

pub mod actions;
pub mod types;
pub mod ui;

#[cfg(test)]
mod tests;

pub use types::{Dashboard, Settings};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use types::{AppMode, PendingAction, TransferInputField, TOKEN_ACTIONS};

const FRAME_INTERVAL: Duration = Duration::from_millis(150);

impl Dashboard {
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        self.status_message = Some("Press [C] to connect your wallet".to_string());

        let result = self.run_app(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        if let Some(poller) = self.poller.take() {
            poller.stop();
        }

        result.map_err(Into::into)
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        loop {
            if self.last_animation_update.elapsed() >= FRAME_INTERVAL {
                self.animation_frame = self.animation_frame.wrapping_add(1);
                self.last_animation_update = Instant::now();
            }

            self.drain_balance_events();

            if self.needs_clear {
                terminal.clear()?;
                self.needs_clear = false;
            }

            terminal.draw(|f| self.ui(f))?;

            // Run the queued workflow only after its popup has painted, so
            // the screen shows progress while the submit blocks.
            if let Some(action) = self.pending.take() {
                self.run_pending_action(action);
            }

            if !event::poll(FRAME_INTERVAL)? {
                continue;
            }

            if let Event::Key(key) = event::read()? {
                // Windows terminals emit Press and Release; react to Press only.
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key.code);
                }
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    fn handle_key_event(&mut self, code: KeyCode) {
        match self.mode {
            AppMode::Help => {
                self.mode = AppMode::Normal;
                self.needs_clear = true;
            }
            AppMode::ActionPopup => {
                if code == KeyCode::Esc {
                    self.close_popup();
                    self.status_message = None;
                }
            }
            AppMode::TransferPopup => self.handle_transfer_key(code),
            AppMode::Normal => self.handle_normal_key(code),
        }
    }

    fn handle_transfer_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.clear_transfer_form();
                self.mode = AppMode::Normal;
                self.needs_clear = true;
                self.status_message = Some("Transfer cancelled".to_string());
            }
            KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
                self.transfer_focus = match self.transfer_focus {
                    TransferInputField::Recipient => TransferInputField::Amount,
                    TransferInputField::Amount => TransferInputField::Recipient,
                };
            }
            KeyCode::Char(c) => match self.transfer_focus {
                TransferInputField::Recipient => self.transfer_recipient.push(c),
                TransferInputField::Amount => {
                    if c.is_ascii_digit() || c == '.' {
                        self.transfer_amount.push(c);
                    }
                }
            },
            KeyCode::Backspace => {
                match self.transfer_focus {
                    TransferInputField::Recipient => self.transfer_recipient.pop(),
                    TransferInputField::Amount => self.transfer_amount.pop(),
                };
            }
            KeyCode::Enter => self.submit_transfer_form(),
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?') | KeyCode::F(1) => {
                self.mode = AppMode::Help;
            }
            KeyCode::Char('c') | KeyCode::Char('C') => self.toggle_connection(),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                if self.connected() {
                    self.refresh_balances();
                    self.status_message = Some("Balances refreshed".to_string());
                }
            }
            KeyCode::Char('a') | KeyCode::Char('A') => self.execute_airdrop(),
            KeyCode::Char('t') | KeyCode::Char('T') => self.execute_transfer_sol(),
            KeyCode::Char('w') | KeyCode::Char('W') => self.copy_wallet_address(),
            KeyCode::Char('e') | KeyCode::Char('E') => self.copy_latest_link(),
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
                if self.selected_action > 0 {
                    self.selected_action -= 1;
                } else {
                    self.selected_action = TOKEN_ACTIONS.len() - 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
                self.selected_action = (self.selected_action + 1) % TOKEN_ACTIONS.len();
            }
            KeyCode::Enter => self.execute_token_action(TOKEN_ACTIONS[self.selected_action]),
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.execute_token_action(PendingAction::CreateMint)
            }
            KeyCode::Char('m') | KeyCode::Char('M') => {
                self.execute_token_action(PendingAction::MintTokens)
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.execute_token_action(PendingAction::SendTokens)
            }
            KeyCode::Char('b') | KeyCode::Char('B') => {
                self.execute_token_action(PendingAction::BurnTokens)
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                self.execute_token_action(PendingAction::ApproveDelegate)
            }
            KeyCode::Char('v') | KeyCode::Char('V') => {
                self.execute_token_action(PendingAction::RevokeDelegate)
            }
            KeyCode::Char('x') | KeyCode::Char('X') => {
                self.execute_token_action(PendingAction::CloseAccount)
            }
            _ => {}
        }
    }
}
