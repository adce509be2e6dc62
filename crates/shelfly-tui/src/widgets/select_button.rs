//! Two-or-more option toggle rendered as a single line — the terminal
//! cousin of a segmented select button.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use crate::theme;

/// Renders the option row with the active option highlighted.
///
/// The active option is bracketed and bold amber; inactive options are
/// plain. The returned line is centered by the caller's Paragraph.
pub fn render_select_button<'a>(labels: &[&'a str], active_index: usize) -> Line<'a> {
    let mut spans = Vec::with_capacity(labels.len() * 2);

    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", theme::key_hint()));
        }

        if i == active_index {
            spans.push(Span::styled(
                format!("[{label}]"),
                theme::tab_active().add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(*label, theme::tab_inactive()));
        }
    }

    Line::from(spans)
}
