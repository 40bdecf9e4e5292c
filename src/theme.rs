// Dark terminal theme for the soldeck dashboard.

use ratatui::style::Color;

pub struct Theme;

impl Theme {
    // Base backgrounds
    pub const BASE: Color = Color::Rgb(8, 10, 18);          // Deep night blue
    pub const PANEL_BG: Color = Color::Rgb(14, 16, 28);     // Main panels
    pub const SURFACE: Color = Color::Rgb(22, 26, 40);      // Elevated rows

    // Text hierarchy
    pub const TEXT: Color = Color::Rgb(235, 240, 250);      // Primary
    pub const SUBTEXT: Color = Color::Rgb(170, 180, 205);   // Secondary
    pub const DIM: Color = Color::Rgb(90, 98, 125);         // Muted labels
    pub const FAINT: Color = Color::Rgb(55, 60, 80);        // Separators

    // Accents
    pub const CYAN: Color = Color::Rgb(60, 220, 240);       // Keys, headers
    pub const GREEN: Color = Color::Rgb(90, 230, 150);      // Success, balances
    pub const RED: Color = Color::Rgb(255, 95, 120);        // Errors
    pub const YELLOW: Color = Color::Rgb(255, 215, 80);     // Selection, warnings
    pub const PURPLE: Color = Color::Rgb(170, 120, 255);    // Mint identity
    pub const ORANGE: Color = Color::Rgb(255, 165, 70);     // Panel titles
    pub const BLUE: Color = Color::Rgb(95, 160, 255);       // Info, links

    // Borders
    pub const BORDER: Color = Color::Rgb(60, 72, 100);
    pub const BORDER_FOCUS: Color = Color::Rgb(0, 195, 255);

    /// Border color for the panel holding keyboard focus.
    pub const fn active_border() -> Color {
        Self::BORDER_FOCUS
    }

    /// Border color for everything else.
    pub const fn inactive_border() -> Color {
        Self::BORDER
    }

    /// Panel and table header text.
    pub const fn header() -> Color {
        Self::ORANGE
    }

    /// Confirmed transactions, healthy balances.
    pub const fn success() -> Color {
        Self::GREEN
    }

    /// Failed workflows and rejected input.
    pub const fn error() -> Color {
        Self::RED
    }

    /// Neutral information and explorer links.
    pub const fn info() -> Color {
        Self::BLUE
    }

    /// Currently selected list row or input field.
    pub const fn selection() -> Color {
        Self::YELLOW
    }

    /// Work that is still in flight.
    pub const fn progress() -> Color {
        Self::CYAN
    }

    /// Disabled actions (for example token actions without a mint).
    pub const fn disabled() -> Color {
        Self::DIM
    }
}
