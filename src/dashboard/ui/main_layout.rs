use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table},
    Frame,
};

use super::helpers::{format_sol, format_tokens, shorten};
use crate::dashboard::types::{Dashboard, TOKEN_ACTIONS};
use crate::icons::Icons;
use crate::notify::ToastKind;
use crate::theme::Theme;

impl Dashboard {
    pub fn render_header(&self, f: &mut Frame, area: Rect) {
        let (link_text, link_color) = if self.connected() {
            ("CONNECTED", Theme::success())
        } else {
            ("OFFLINE", Theme::disabled())
        };

        let line = Line::from(vec![
            Span::styled(
                " SOLDECK ",
                Style::default()
                    .fg(Theme::BASE)
                    .bg(Theme::header())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} {}", Icons::NETWORK, self.settings.cluster),
                Style::default().fg(Theme::info()),
            ),
            Span::raw("  "),
            Span::styled(
                self.settings.rpc_url.clone(),
                Style::default().fg(Theme::DIM),
            ),
            Span::raw("  "),
            Span::styled(
                link_text,
                Style::default().fg(link_color).add_modifier(Modifier::BOLD),
            ),
        ]);

        let header = Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Theme::inactive_border())),
            )
            .style(Style::default().bg(Theme::PANEL_BG));
        f.render_widget(header, area);
    }

    pub fn render_account_panel(&self, f: &mut Frame, area: Rect) {
        let label = |text: &'static str| {
            Line::from(Span::styled(
                text,
                Style::default()
                    .fg(Theme::CYAN)
                    .add_modifier(Modifier::BOLD),
            ))
        };

        let mut rows = Vec::new();

        let (status_text, status_color) = if self.connected() {
            ("CONNECTED", Theme::success())
        } else {
            ("NOT CONNECTED", Theme::disabled())
        };
        rows.push(Row::new(vec![
            label("STATUS"),
            Line::from(Span::styled(
                status_text,
                Style::default()
                    .fg(status_color)
                    .add_modifier(Modifier::BOLD),
            )),
        ]));

        let wallet_line = match self.wallet.as_ref() {
            Some(wallet) => Line::from(vec![
                Span::styled(wallet.pubkey.to_string(), Style::default().fg(Theme::TEXT)),
                Span::styled("  [W] copy", Style::default().fg(Theme::DIM)),
            ]),
            None => Line::from(Span::styled(
                "Press [C] to connect",
                Style::default().fg(Theme::YELLOW),
            )),
        };
        rows.push(Row::new(vec![label("WALLET"), wallet_line]));

        rows.push(Row::new(vec![
            label("KEYPAIR"),
            Line::from(Span::styled(
                self.settings.keypair_path.display().to_string(),
                Style::default().fg(Theme::DIM),
            )),
        ]));

        let balance_line = match self.sol_balance {
            Some(lamports) => Line::from(Span::styled(
                format_sol(lamports),
                Style::default()
                    .fg(Theme::GREEN)
                    .add_modifier(Modifier::BOLD),
            )),
            None if self.connected() => Line::from(Span::styled(
                format!("fetching{}", self.get_animated_dots()),
                Style::default().fg(Theme::progress()),
            )),
            None => Line::from(Span::styled("-", Style::default().fg(Theme::DIM))),
        };
        rows.push(Row::new(vec![label("BALANCE"), balance_line]));

        // A failed poll keeps the last value on screen and flags it stale.
        let updated_line = match (&self.balance_updated_at, &self.poll_error) {
            (_, Some(_)) => Line::from(Span::styled(
                "stale - last fetch failed",
                Style::default().fg(Theme::error()),
            )),
            (Some(at), None) => Line::from(Span::styled(
                at.format("%H:%M:%S").to_string(),
                Style::default().fg(Theme::SUBTEXT),
            )),
            (None, None) => Line::from(Span::styled("-", Style::default().fg(Theme::DIM))),
        };
        rows.push(Row::new(vec![label("UPDATED"), updated_line]));

        rows.push(Row::new(vec![
            label("RECIPIENT"),
            Line::from(Span::styled(
                shorten(&self.settings.recipient.to_string()),
                Style::default().fg(Theme::PURPLE),
            )),
        ]));

        let widths = [Constraint::Length(10), Constraint::Min(30)];
        let table = Table::new(rows, widths)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Theme::inactive_border()))
                    .border_type(BorderType::Double)
                    .title(format!(" ┃ {} ACCOUNT ┃ ", Icons::WALLET))
                    .title_style(
                        Style::default()
                            .fg(Theme::ORANGE)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .style(Style::default().bg(Theme::PANEL_BG))
            .column_spacing(2);
        f.render_widget(table, area);
    }

    pub fn render_token_panel(&self, f: &mut Frame, area: Rect) {
        let label = |text: String| {
            Line::from(Span::styled(
                text,
                Style::default()
                    .fg(Theme::CYAN)
                    .add_modifier(Modifier::BOLD),
            ))
        };

        let mut rows = Vec::new();

        let mint_line = match self.mint {
            Some(mint) => Line::from(vec![
                Span::styled(
                    mint.to_string(),
                    Style::default()
                        .fg(Theme::PURPLE)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("  [E] link", Style::default().fg(Theme::DIM)),
            ]),
            None => Line::from(Span::styled(
                "No active mint",
                Style::default().fg(Theme::DIM),
            )),
        };
        rows.push(Row::new(vec![
            label(format!("{} MINT", Icons::MINT)),
            mint_line,
        ]));

        let tokens_line = match self.token_balance {
            Some(amount) => Line::from(Span::styled(
                format!("{} tokens", format_tokens(amount)),
                Style::default()
                    .fg(Theme::GREEN)
                    .add_modifier(Modifier::BOLD),
            )),
            None => Line::from(Span::styled("-", Style::default().fg(Theme::DIM))),
        };
        rows.push(Row::new(vec![
            label(format!("{} HELD", Icons::BALANCE)),
            tokens_line,
        ]));

        rows.push(Row::new(vec![
            Line::from(Span::styled("─────────", Style::default().fg(Theme::FAINT))),
            Line::from(Span::styled(
                "────────────────────────────────────────",
                Style::default().fg(Theme::FAINT),
            )),
        ]));

        for (idx, action) in TOKEN_ACTIONS.iter().enumerate() {
            let selected = idx == self.selected_action;
            let enabled = action.available(self.connected(), self.mint.is_some());
            let marker = if selected { Icons::ARROW_RIGHT } else { " " };

            let key_color = if enabled { Theme::CYAN } else { Theme::disabled() };
            let title_color = if !enabled {
                Theme::disabled()
            } else if selected {
                Theme::selection()
            } else {
                Theme::TEXT
            };
            let title_modifier = if selected {
                Modifier::BOLD
            } else {
                Modifier::empty()
            };

            let mut row = Row::new(vec![
                Line::from(Span::styled(
                    format!("{marker} [{}]", action.hotkey()),
                    Style::default().fg(key_color),
                )),
                Line::from(vec![
                    Span::styled(
                        format!("{:<20}", action.title()),
                        Style::default().fg(title_color).add_modifier(title_modifier),
                    ),
                    Span::styled(action.blurb(), Style::default().fg(Theme::DIM)),
                ]),
            ]);
            if selected {
                row = row.style(Style::default().bg(Theme::SURFACE));
            }
            rows.push(row);
        }

        let border = if self.connected() {
            Theme::active_border()
        } else {
            Theme::inactive_border()
        };

        let widths = [Constraint::Length(9), Constraint::Min(40)];
        let table = Table::new(rows, widths)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border))
                    .border_type(BorderType::Double)
                    .title(" ┃ TOKEN LIFECYCLE ┃ ")
                    .title_style(
                        Style::default()
                            .fg(Theme::ORANGE)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .style(Style::default().bg(Theme::PANEL_BG))
            .column_spacing(2);
        f.render_widget(table, area);
    }

    pub fn render_activity_feed(&self, f: &mut Frame, area: Rect) {
        let mut lines = Vec::new();

        if self.notifications.is_empty() {
            lines.push(Line::from(Span::styled(
                "No activity yet",
                Style::default().fg(Theme::DIM),
            )));
        } else {
            for toast in self.notifications.latest_first() {
                let (icon, color) = match toast.kind {
                    ToastKind::Success => (Icons::OK, Theme::success()),
                    ToastKind::Error => (Icons::FAIL, Theme::error()),
                    ToastKind::Info => (Icons::INFO, Theme::info()),
                };
                let mut spans = vec![
                    Span::styled(
                        toast.at.format("[%H:%M:%S] ").to_string(),
                        Style::default().fg(Theme::FAINT),
                    ),
                    Span::styled(format!("{icon} "), Style::default().fg(color)),
                    Span::styled(toast.text.clone(), Style::default().fg(Theme::TEXT)),
                ];
                if let Some(link) = &toast.link {
                    spans.push(Span::styled(
                        format!("  {} {}", Icons::LINK, link),
                        Style::default().fg(Theme::BLUE),
                    ));
                }
                lines.push(Line::from(spans));
            }
        }

        let feed = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Theme::inactive_border()))
                    .border_type(BorderType::Double)
                    .title(" ┃ ACTIVITY ┃ ")
                    .title_style(
                        Style::default()
                            .fg(Theme::ORANGE)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .style(Style::default().bg(Theme::PANEL_BG));
        f.render_widget(feed, area);
    }

    pub fn render_footer(&self, f: &mut Frame, area: Rect) {
        let key = |k: &'static str| {
            Span::styled(
                format!(" {k} "),
                Style::default()
                    .fg(Theme::BASE)
                    .bg(Theme::CYAN)
                    .add_modifier(Modifier::BOLD),
            )
        };
        let text =
            |t: &'static str| Span::styled(format!(" {t}  "), Style::default().fg(Theme::SUBTEXT));

        let hints = Line::from(vec![
            key("C"),
            text("Connect"),
            key("A"),
            text("Airdrop"),
            key("T"),
            text("Transfer"),
            key("R"),
            text("Refresh"),
            key("Enter"),
            text("Run action"),
            key("H"),
            text("Help"),
            key("Q"),
            text("Quit"),
        ]);

        let status = match &self.status_message {
            Some(message) => Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Theme::YELLOW),
            )),
            None => Line::from(Span::styled("Ready", Style::default().fg(Theme::DIM))),
        };

        let footer = Paragraph::new(vec![hints, status])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Theme::inactive_border())),
            )
            .style(Style::default().bg(Theme::PANEL_BG));
        f.render_widget(footer, area);
    }
}
