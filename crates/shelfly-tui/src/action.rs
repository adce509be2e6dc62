//! All possible UI actions. Actions are the sole mechanism for state mutation.

use shelfly_core::{ProductCode, ProductSnapshot};

use crate::screen::ScreenId;

/// Table layout mode for the catalog screen.
///
/// The two options offered by the layout toggle. `value()` gives the
/// stable form used in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    #[default]
    Stacked,
    Scroll,
}

impl LayoutMode {
    /// Both options in toggle order.
    pub const ALL: [LayoutMode; 2] = [Self::Stacked, Self::Scroll];

    /// Label shown on the toggle control.
    pub fn label(self) -> &'static str {
        match self {
            Self::Stacked => "Stacked",
            Self::Scroll => "Scroll",
        }
    }

    /// Stable value for config files ("stack" / "scroll").
    pub fn value(self) -> &'static str {
        match self {
            Self::Stacked => "stack",
            Self::Scroll => "scroll",
        }
    }

    /// Parse a config value. Accepts both the wire form and the label
    /// form, case-insensitively.
    pub fn from_value(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "stack" | "stacked" => Some(Self::Stacked),
            "scroll" => Some(Self::Scroll),
            _ => None,
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Stacked => Self::Scroll,
            Self::Scroll => Self::Stacked,
        }
    }
}

/// Every state transition in the TUI is expressed as an Action.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Resize(u16, u16),

    // ── Navigation ────────────────────────────────────────────────
    SwitchScreen(ScreenId),
    GoBack,
    ToggleHelp,

    // ── Data events (from the catalog stream) ─────────────────────
    ProductsLoaded(ProductSnapshot),

    // ── Catalog screen ────────────────────────────────────────────
    SetLayout(LayoutMode),
    OpenDetail(ProductCode),
    CloseDetail,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_values_match_the_toggle_options() {
        assert_eq!(LayoutMode::Stacked.value(), "stack");
        assert_eq!(LayoutMode::Scroll.value(), "scroll");
        assert_eq!(LayoutMode::Stacked.label(), "Stacked");
        assert_eq!(LayoutMode::Scroll.label(), "Scroll");
    }

    #[test]
    fn layout_default_is_stacked() {
        assert_eq!(LayoutMode::default(), LayoutMode::Stacked);
    }

    #[test]
    fn layout_toggle_is_an_involution() {
        for mode in LayoutMode::ALL {
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn layout_parses_config_values() {
        assert_eq!(LayoutMode::from_value("stack"), Some(LayoutMode::Stacked));
        assert_eq!(LayoutMode::from_value("stacked"), Some(LayoutMode::Stacked));
        assert_eq!(LayoutMode::from_value("Scroll"), Some(LayoutMode::Scroll));
        assert_eq!(LayoutMode::from_value("grid"), None);
    }
}
