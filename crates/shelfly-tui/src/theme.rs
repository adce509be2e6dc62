//! Warm Counter palette and semantic styling for the TUI.
//!
//! The Theming screen documents this module: structural styles decide
//! where things sit, skinning styles decide how they look. Screens only
//! ever use the semantic functions, never raw colors.

use ratatui::style::{Color, Modifier, Style};

use shelfly_core::StockStatus;

// ── Core Palette ──────────────────────────────────────────────────────

pub const AMBER: Color = Color::Rgb(255, 196, 84); // #ffc454
pub const TERRACOTTA: Color = Color::Rgb(224, 108, 84); // #e06c54
pub const SAGE_GREEN: Color = Color::Rgb(152, 195, 121); // #98c379
pub const SKY_BLUE: Color = Color::Rgb(97, 175, 239); // #61afef
pub const PLUM: Color = Color::Rgb(198, 120, 221); // #c678dd

// ── Extended Palette ──────────────────────────────────────────────────

pub const SOFT_WHITE: Color = Color::Rgb(220, 223, 228); // #dcdfe4
pub const SLATE_GRAY: Color = Color::Rgb(92, 99, 112); // #5c6370
pub const BG_HIGHLIGHT: Color = Color::Rgb(44, 49, 58); // #2c313a
pub const BG_DARK: Color = Color::Rgb(30, 33, 39); // #1e2127

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default().fg(AMBER).add_modifier(Modifier::BOLD)
}

/// Border for a focused panel.
pub fn border_focused() -> Style {
    Style::default().fg(AMBER)
}

/// Border for an unfocused panel.
pub fn border_default() -> Style {
    Style::default().fg(SLATE_GRAY)
}

/// Table header row.
pub fn table_header() -> Style {
    Style::default()
        .fg(SKY_BLUE)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Normal table row text.
pub fn table_row() -> Style {
    Style::default().fg(SOFT_WHITE)
}

/// Selected / highlighted table row.
pub fn table_selected() -> Style {
    Style::default()
        .fg(AMBER)
        .bg(BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Active tab in the tab bar.
pub fn tab_active() -> Style {
    Style::default().fg(AMBER).add_modifier(Modifier::BOLD)
}

/// Inactive tab in the tab bar.
pub fn tab_inactive() -> Style {
    Style::default().fg(SOFT_WHITE)
}

/// Key hint text (e.g., "q quit  ? help").
pub fn key_hint() -> Style {
    Style::default().fg(SLATE_GRAY)
}

/// Key hint key character.
pub fn key_hint_key() -> Style {
    Style::default().fg(SKY_BLUE).add_modifier(Modifier::BOLD)
}

/// Inventory status coloring, shared by table cells and detail panel.
pub fn stock_style(status: StockStatus) -> Style {
    let color = match status {
        StockStatus::InStock => SAGE_GREEN,
        StockStatus::LowStock => AMBER,
        StockStatus::OutOfStock => TERRACOTTA,
    };
    Style::default().fg(color)
}
