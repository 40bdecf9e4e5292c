mod helpers;
mod main_layout;
mod popups;

pub use helpers::*;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::dashboard::types::{AppMode, Dashboard};
use crate::theme::Theme;

impl Dashboard {
    pub fn ui(&self, f: &mut Frame) {
        let size = f.area();

        let background = Block::default().style(Style::default().bg(Theme::BASE));
        f.render_widget(background, size);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(12),
                Constraint::Length(8),
                Constraint::Length(4),
            ])
            .split(size);

        self.render_header(f, chunks[0]);

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(chunks[1]);

        self.render_account_panel(f, panels[0]);
        self.render_token_panel(f, panels[1]);
        self.render_activity_feed(f, chunks[2]);
        self.render_footer(f, chunks[3]);

        // Overlays paint last, on top of the panels.
        if self.mode == AppMode::Help {
            self.render_help_overlay(f, size);
        }
        match self.mode {
            AppMode::TransferPopup => self.render_transfer_popup(f, size),
            AppMode::ActionPopup => self.render_action_popup(f, size),
            _ => {}
        }
    }
}
