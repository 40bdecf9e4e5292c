#[cfg(test)]
mod dashboard_tests {
    use super::super::actions::parse_transfer_inputs;
    use super::super::types::*;
    use super::super::ui::{format_sol, format_tokens, shorten};
    use crate::explorer::Cluster;
    use crate::poller::BalanceEvent;
    use crate::wallet::WalletSession;
    use chrono::Local;
    use crossterm::event::KeyCode;
    use solana_sdk::signature::{Keypair, Signer};
    use std::path::PathBuf;

    fn settings() -> Settings {
        Settings {
            rpc_url: "http://127.0.0.1:8899".to_string(),
            keypair_path: PathBuf::from("/tmp/id.json"),
            recipient: Keypair::new().pubkey(),
            cluster: Cluster::Devnet,
        }
    }

    fn dashboard() -> Dashboard {
        Dashboard::new(settings())
    }

    fn connected_dashboard() -> Dashboard {
        let mut dash = dashboard();
        dash.wallet = Some(WalletSession::from_keypair(Keypair::new()));
        dash
    }

    #[test]
    fn starts_disconnected_and_idle() {
        let dash = dashboard();
        assert!(!dash.connected());
        assert_eq!(dash.mode, AppMode::Normal);
        assert!(dash.sol_balance.is_none());
        assert!(dash.mint.is_none());
        assert!(dash.token_balance.is_none());
        assert!(dash.pending.is_none());
        assert!(dash.notifications.is_empty());
        assert_eq!(dash.selected_action, 0);
    }

    #[test]
    fn token_actions_ignore_keys_without_a_wallet() {
        let mut dash = dashboard();
        for action in TOKEN_ACTIONS {
            dash.execute_token_action(action);
            assert_eq!(dash.mode, AppMode::Normal, "{} opened a popup", action.title());
            assert!(dash.pending.is_none());
        }
        assert!(dash.notifications.is_empty());
    }

    #[test]
    fn airdrop_and_transfer_require_a_connection() {
        let mut dash = dashboard();
        dash.execute_airdrop();
        assert_eq!(dash.mode, AppMode::Normal);
        assert!(dash.pending.is_none());

        dash.execute_transfer_sol();
        assert_eq!(dash.mode, AppMode::Normal);
    }

    #[test]
    fn mint_actions_need_an_active_mint() {
        let mut dash = connected_dashboard();
        for action in [
            PendingAction::MintTokens,
            PendingAction::SendTokens,
            PendingAction::BurnTokens,
            PendingAction::ApproveDelegate,
            PendingAction::RevokeDelegate,
            PendingAction::CloseAccount,
        ] {
            dash.execute_token_action(action);
            assert_eq!(dash.mode, AppMode::Normal, "{} opened a popup", action.title());
            assert!(dash.pending.is_none());
        }
    }

    #[test]
    fn create_is_blocked_while_a_mint_is_active() {
        let mut dash = connected_dashboard();
        dash.mint = Some(Keypair::new().pubkey());
        dash.execute_create_mint();
        assert_eq!(dash.mode, AppMode::Normal);
        assert!(dash.pending.is_none());
    }

    #[test]
    fn mint_key_queues_the_workflow_behind_a_popup() {
        let mut dash = connected_dashboard();
        dash.mint = Some(Keypair::new().pubkey());
        dash.execute_mint_tokens();
        assert_eq!(dash.mode, AppMode::ActionPopup);
        assert_eq!(dash.pending, Some(PendingAction::MintTokens));
        assert_eq!(dash.action_title, Some("Mint tokens"));
        assert_eq!(dash.action_steps, vec![ActionStep::Starting]);
    }

    #[test]
    fn airdrop_key_opens_the_progress_popup() {
        let mut dash = connected_dashboard();
        dash.handle_normal_key(KeyCode::Char('a'));
        assert_eq!(dash.mode, AppMode::ActionPopup);
        assert_eq!(dash.pending, Some(PendingAction::Airdrop));
    }

    #[test]
    fn failed_poll_keeps_the_previous_balance() {
        let mut dash = dashboard();
        dash.apply_balance_event(BalanceEvent::Updated(42));
        assert_eq!(dash.sol_balance, Some(42));
        assert!(dash.balance_updated_at.is_some());

        dash.apply_balance_event(BalanceEvent::FetchFailed("rpc down".to_string()));
        assert_eq!(dash.sol_balance, Some(42));
        assert_eq!(dash.poll_error.as_deref(), Some("rpc down"));

        dash.apply_balance_event(BalanceEvent::Updated(43));
        assert_eq!(dash.sol_balance, Some(43));
        assert!(dash.poll_error.is_none());
    }

    #[test]
    fn drained_events_apply_in_arrival_order() {
        let mut dash = dashboard();
        let (events, balance_rx) = tokio::sync::mpsc::unbounded_channel();
        dash.balance_rx = Some(balance_rx);

        events.send(BalanceEvent::Updated(10)).unwrap();
        events.send(BalanceEvent::FetchFailed("boom".to_string())).unwrap();
        events.send(BalanceEvent::Updated(20)).unwrap();
        dash.drain_balance_events();

        assert_eq!(dash.sol_balance, Some(20));
        assert!(dash.poll_error.is_none());
    }

    #[test]
    fn disconnect_clears_the_session_but_keeps_the_mint() {
        let mut dash = connected_dashboard();
        dash.sol_balance = Some(5);
        dash.balance_updated_at = Some(Local::now());
        dash.poll_error = Some("stale".to_string());
        dash.mint = Some(Keypair::new().pubkey());
        dash.token_balance = Some(7);

        dash.disconnect_wallet();

        assert!(!dash.connected());
        assert!(dash.sol_balance.is_none());
        assert!(dash.balance_updated_at.is_none());
        assert!(dash.poll_error.is_none());
        assert!(dash.balance_rx.is_none());
        assert!(dash.poller.is_none());
        assert!(dash.mint.is_some());
        assert_eq!(dash.token_balance, Some(7));
    }

    #[test]
    fn close_success_effect_clears_the_mint() {
        let mut dash = connected_dashboard();
        dash.mint = Some(Keypair::new().pubkey());
        dash.token_balance = Some(98);
        dash.clear_active_mint();
        assert!(dash.mint.is_none());
        assert!(dash.token_balance.is_none());
    }

    #[test]
    fn transfer_inputs_reject_bad_values() {
        let valid = Keypair::new().pubkey().to_string();
        assert!(parse_transfer_inputs("", "1").is_err());
        assert!(parse_transfer_inputs("not-an-address", "1").is_err());
        assert!(parse_transfer_inputs(&valid, "").is_err());
        assert!(parse_transfer_inputs(&valid, "abc").is_err());
        assert!(parse_transfer_inputs(&valid, "0").is_err());
        assert!(parse_transfer_inputs(&valid, "-2").is_err());
        assert!(parse_transfer_inputs(&valid, "NaN").is_err());
    }

    #[test]
    fn transfer_inputs_convert_sol_to_lamports() {
        let recipient = Keypair::new().pubkey();
        let (parsed, lamports) = parse_transfer_inputs(&recipient.to_string(), "1.5")
            .expect("valid inputs");
        assert_eq!(parsed, recipient);
        assert_eq!(lamports, 1_500_000_000);

        let (_, lamports) = parse_transfer_inputs(&format!("  {recipient} "), " 2 ")
            .expect("whitespace trims");
        assert_eq!(lamports, 2_000_000_000);
    }

    #[test]
    fn transfer_form_keeps_amount_numeric() {
        let mut dash = connected_dashboard();
        dash.execute_transfer_sol();
        assert_eq!(dash.mode, AppMode::TransferPopup);

        dash.handle_transfer_key(KeyCode::Tab);
        for c in ['1', 'x', '.', '5', '!'] {
            dash.handle_transfer_key(KeyCode::Char(c));
        }
        assert_eq!(dash.transfer_amount, "1.5");

        dash.handle_transfer_key(KeyCode::Backspace);
        assert_eq!(dash.transfer_amount, "1.");
    }

    #[test]
    fn transfer_submit_with_bad_input_stays_on_the_form() {
        let mut dash = connected_dashboard();
        dash.execute_transfer_sol();
        dash.handle_transfer_key(KeyCode::Enter);
        assert_eq!(dash.mode, AppMode::TransferPopup);
        assert_eq!(
            dash.status_message.as_deref(),
            Some("Recipient address required")
        );
    }

    #[test]
    fn transfer_submit_with_valid_input_queues_the_send() {
        let mut dash = connected_dashboard();
        dash.execute_transfer_sol();
        dash.transfer_recipient = Keypair::new().pubkey().to_string();
        dash.transfer_amount = "0.25".to_string();
        dash.handle_transfer_key(KeyCode::Enter);
        assert_eq!(dash.mode, AppMode::ActionPopup);
        assert_eq!(dash.pending, Some(PendingAction::TransferSol));
    }

    #[test]
    fn esc_cancels_the_transfer_form() {
        let mut dash = connected_dashboard();
        dash.execute_transfer_sol();
        dash.transfer_recipient.push('x');
        dash.handle_transfer_key(KeyCode::Esc);
        assert_eq!(dash.mode, AppMode::Normal);
        assert!(dash.transfer_recipient.is_empty());
        assert_eq!(dash.transfer_focus, TransferInputField::Recipient);
    }

    #[test]
    fn selection_wraps_both_directions() {
        let mut dash = dashboard();
        dash.handle_normal_key(KeyCode::Up);
        assert_eq!(dash.selected_action, TOKEN_ACTIONS.len() - 1);
        dash.handle_normal_key(KeyCode::Down);
        assert_eq!(dash.selected_action, 0);
        dash.handle_normal_key(KeyCode::Char('j'));
        assert_eq!(dash.selected_action, 1);
    }

    #[test]
    fn any_key_closes_help() {
        let mut dash = dashboard();
        dash.handle_normal_key(KeyCode::Char('?'));
        assert_eq!(dash.mode, AppMode::Help);
        dash.handle_key_event(KeyCode::Char('z'));
        assert_eq!(dash.mode, AppMode::Normal);
    }

    #[test]
    fn closing_the_action_popup_resets_progress_state() {
        let mut dash = connected_dashboard();
        dash.mint = Some(Keypair::new().pubkey());
        dash.execute_burn_tokens();
        dash.pending = None;
        dash.handle_key_event(KeyCode::Esc);
        assert_eq!(dash.mode, AppMode::Normal);
        assert!(dash.action_steps.is_empty());
        assert!(dash.action_title.is_none());
        assert!(dash.needs_clear);
    }

    #[test]
    fn availability_follows_session_state() {
        use PendingAction::*;
        for action in TOKEN_ACTIONS {
            assert!(!action.available(false, false));
            assert!(!action.available(false, true));
        }
        assert!(CreateMint.available(true, false));
        assert!(!CreateMint.available(true, true));
        for action in [
            MintTokens,
            SendTokens,
            BurnTokens,
            ApproveDelegate,
            RevokeDelegate,
            CloseAccount,
        ] {
            assert!(!action.available(true, false), "{}", action.title());
            assert!(action.available(true, true), "{}", action.title());
        }
        assert!(Airdrop.available(true, false));
        assert!(TransferSol.available(true, true));
    }

    #[test]
    fn balances_render_with_fixed_precision() {
        assert_eq!(format_sol(1_500_000_000), "1.5000 SOL");
        assert_eq!(format_sol(0), "0.0000 SOL");
        assert_eq!(format_tokens(98_000_000_000), "98.00");
        assert_eq!(format_tokens(1_250_000_000), "1.25");
    }

    #[test]
    fn long_addresses_shorten_for_display() {
        let key = Keypair::new().pubkey().to_string();
        let short = shorten(&key);
        assert!(short.starts_with(&key[..4]));
        assert!(short.ends_with(&key[key.len() - 4..]));
        assert!(short.contains("..."));
        assert_eq!(shorten("abc"), "abc");
    }
}
