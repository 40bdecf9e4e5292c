use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};

use super::helpers::format_sol;
use crate::dashboard::types::{ActionStep, Dashboard, TransferInputField};
use crate::icons::Icons;
use crate::theme::Theme;

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

impl Dashboard {
    /// Progress popup for the running workflow. It paints before the submit
    /// blocks, then repaints with the outcome steps.
    pub fn render_action_popup(&self, f: &mut Frame, area: Rect) {
        let popup_area = centered_rect(70, 60, area);
        f.render_widget(Clear, popup_area);

        let title = self.action_title.unwrap_or("ACTION");
        let mut lines = vec![Line::from("")];

        if self.action_steps.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("Preparing{}", self.get_animated_dots()),
                Style::default()
                    .fg(Theme::progress())
                    .add_modifier(Modifier::ITALIC),
            )));
        } else {
            for step in &self.action_steps {
                let line = match step {
                    ActionStep::Starting => Line::from(vec![
                        Span::styled(
                            format!("{} ", Icons::BUSY),
                            Style::default().fg(Theme::progress()),
                        ),
                        Span::styled(
                            format!("Preparing{}", self.get_animated_dots()),
                            Style::default().fg(Theme::progress()),
                        ),
                    ]),
                    ActionStep::InProgress(message) => Line::from(vec![
                        Span::styled(
                            format!("{} ", Icons::BUSY),
                            Style::default().fg(Theme::progress()),
                        ),
                        Span::styled(message.clone(), Style::default().fg(Theme::progress())),
                    ]),
                    ActionStep::Success(message) => Line::from(vec![
                        Span::styled(
                            format!("{} ", Icons::OK),
                            Style::default()
                                .fg(Theme::success())
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(message.clone(), Style::default().fg(Theme::success())),
                    ]),
                    ActionStep::Error(message) => Line::from(vec![
                        Span::styled(
                            format!("{} ", Icons::FAIL),
                            Style::default()
                                .fg(Theme::error())
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(message.clone(), Style::default().fg(Theme::error())),
                    ]),
                };
                lines.push(line);
                lines.push(Line::from(""));
            }
        }

        lines.push(Line::from(vec![
            Span::styled(
                " [Esc] ",
                Style::default()
                    .fg(Theme::BASE)
                    .bg(Theme::error())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Close", Style::default().fg(Theme::TEXT)),
        ]));

        let popup = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Theme::active_border()))
                    .border_type(BorderType::Double)
                    .title(format!(" ┃ {} ┃ ", title.to_uppercase()))
                    .title_style(
                        Style::default()
                            .fg(Theme::ORANGE)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .style(Style::default().bg(Theme::PANEL_BG))
            .wrap(Wrap { trim: false });
        f.render_widget(popup, popup_area);
    }

    pub fn render_transfer_popup(&self, f: &mut Frame, area: Rect) {
        let popup_area = centered_rect(70, 50, area);
        f.render_widget(Clear, popup_area);

        let label = |text: &'static str| {
            Line::from(Span::styled(
                text,
                Style::default()
                    .fg(Theme::CYAN)
                    .add_modifier(Modifier::BOLD),
            ))
        };
        let field = |value: &str, placeholder: &'static str, focused: bool| {
            let (shown, color) = if value.is_empty() {
                (placeholder.to_string(), Theme::DIM)
            } else if focused {
                (value.to_string(), Theme::selection())
            } else {
                (value.to_string(), Theme::TEXT)
            };
            let mut spans = vec![Span::styled(
                shown,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )];
            if focused {
                spans.push(Span::styled(
                    "_",
                    Style::default().fg(Theme::selection()),
                ));
            }
            Line::from(spans)
        };

        let available = match self.sol_balance {
            Some(lamports) => format_sol(lamports),
            None => "-".to_string(),
        };

        let rows = vec![
            Row::new(vec![
                label("AVAILABLE"),
                Line::from(Span::styled(
                    available,
                    Style::default()
                        .fg(Theme::GREEN)
                        .add_modifier(Modifier::BOLD),
                )),
            ]),
            Row::new(vec![
                Line::from(Span::styled("─────────", Style::default().fg(Theme::FAINT))),
                Line::from(Span::styled(
                    "────────────────────────────────────",
                    Style::default().fg(Theme::FAINT),
                )),
            ]),
            Row::new(vec![
                label("RECIPIENT"),
                field(
                    &self.transfer_recipient,
                    "[wallet address]",
                    self.transfer_focus == TransferInputField::Recipient,
                ),
            ]),
            Row::new(vec![
                label("AMOUNT"),
                field(
                    &self.transfer_amount,
                    "[amount in SOL]",
                    self.transfer_focus == TransferInputField::Amount,
                ),
            ]),
            Row::new(vec![
                Line::from(Span::styled("─────────", Style::default().fg(Theme::FAINT))),
                Line::from(Span::styled(
                    "────────────────────────────────────",
                    Style::default().fg(Theme::FAINT),
                )),
            ]),
            Row::new(vec![
                label("CONTROLS"),
                Line::from(vec![
                    Span::styled(
                        " [Tab] ",
                        Style::default()
                            .fg(Theme::BASE)
                            .bg(Theme::BLUE)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(" Switch  ", Style::default().fg(Theme::SUBTEXT)),
                    Span::styled(
                        " [Enter] ",
                        Style::default()
                            .fg(Theme::BASE)
                            .bg(Theme::GREEN)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(" Send  ", Style::default().fg(Theme::SUBTEXT)),
                    Span::styled(
                        " [Esc] ",
                        Style::default()
                            .fg(Theme::BASE)
                            .bg(Theme::RED)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(" Cancel", Style::default().fg(Theme::SUBTEXT)),
                ]),
            ]),
        ];

        let widths = [Constraint::Length(11), Constraint::Min(38)];
        let table = Table::new(rows, widths)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Theme::active_border()))
                    .border_type(BorderType::Double)
                    .title(" ┃ TRANSFER SOL ┃ ")
                    .title_style(
                        Style::default()
                            .fg(Theme::ORANGE)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .style(Style::default().bg(Theme::PANEL_BG))
            .column_spacing(2);
        f.render_widget(table, popup_area);
    }

    pub fn render_help_overlay(&self, f: &mut Frame, area: Rect) {
        let section = |text: &'static str| {
            Line::from(Span::styled(
                text,
                Style::default()
                    .fg(Theme::success())
                    .add_modifier(Modifier::BOLD),
            ))
        };
        let entry = |text: &'static str| {
            Line::from(Span::styled(text, Style::default().fg(Theme::TEXT)))
        };

        let help_text = vec![
            Line::from(Span::styled(
                "SOLDECK - HELP",
                Style::default()
                    .fg(Theme::CYAN)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            section("Session:"),
            entry("  C           - Connect / disconnect wallet"),
            entry("  A           - Airdrop 1-5 SOL from the faucet"),
            entry("  T           - Transfer SOL to any address"),
            entry("  R           - Refresh balances now"),
            Line::from(""),
            section("Token lifecycle:"),
            entry("  Up/Down j/k - Select an action"),
            entry("  Enter       - Run the selected action"),
            entry("  N           - Create token mint"),
            entry("  M           - Mint 100 tokens"),
            entry("  S           - Send 1 token to the recipient"),
            entry("  B           - Burn 1 token"),
            entry("  D           - Approve the recipient as delegate"),
            entry("  V           - Revoke the delegate"),
            entry("  X           - Drain and close the token account"),
            Line::from(""),
            section("Other:"),
            entry("  W           - Copy wallet address"),
            entry("  E           - Copy latest explorer link"),
            entry("  H or ?      - Show this help"),
            entry("  Q or Esc    - Quit"),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to close help",
                Style::default().fg(Theme::YELLOW),
            )),
        ];

        let help_area = centered_rect(60, 75, area);
        f.render_widget(Clear, help_area);

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Theme::active_border()))
                    .border_type(BorderType::Double)
                    .title(" ┃ HELP ┃ ")
                    .title_style(
                        Style::default()
                            .fg(Theme::ORANGE)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .style(Style::default().bg(Theme::PANEL_BG))
            .wrap(Wrap { trim: true });
        f.render_widget(help, help_area);
    }
}
