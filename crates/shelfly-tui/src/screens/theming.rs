//! Theming screen — static reference documentation for the styling
//! system. No data dependencies; scroll position is its only state.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Wrap};
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;
use crate::component::Component;
use crate::theme;

pub struct ThemingScreen {
    focused: bool,
    scroll: u16,
}

impl ThemingScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            scroll: 0,
        }
    }

    fn body_lines() -> Vec<Line<'static>> {
        let heading = |text: &'static str| {
            Line::from(Span::styled(
                text,
                Style::default()
                    .fg(theme::AMBER)
                    .add_modifier(Modifier::BOLD),
            ))
        };
        let para = |text: &'static str| Line::from(Span::styled(text, theme::table_row()));
        let blank = Line::from("");

        vec![
            heading("Architecture"),
            blank.clone(),
            para("Every widget is styled through a single palette module rather than"),
            para("per-widget colors. The palette exposes semantic styles — titles,"),
            para("borders, table rows, key hints — so a widget never names a raw color."),
            para("Swapping the palette restyles the whole application at once."),
            blank.clone(),
            heading("Designer"),
            blank.clone(),
            para("The palette ships a warm counter scheme: amber accents on a dark"),
            para("slate background, with terracotta reserved for depleted stock and"),
            para("sage green for healthy stock. Contrast pairs were picked for"),
            para("legibility on both light and dark terminal backgrounds."),
            blank.clone(),
            heading("Scale"),
            blank.clone(),
            para("Sizing follows the terminal cell grid. Widgets request constraints"),
            para("in rows and columns, never pixels, so the interface reflows from a"),
            para("phone-sized terminal up to a full-screen session without special"),
            para("cases. The stacked catalog layout exists for exactly the narrow end"),
            para("of that range."),
            blank,
        ]
    }
}

impl Default for ThemingScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ThemingScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            KeyCode::Char('g') => self.scroll = 0,
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Theming ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme::border_focused()
            } else {
                theme::border_default()
            });

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(8)]).split(inner);

        let body = Paragraph::new(Self::body_lines())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(body, layout[0]);

        // Style reference table
        let header = Row::new([
            Cell::from("Style").style(theme::table_header()),
            Cell::from("Applies to").style(theme::table_header()),
        ]);
        let reference = [
            ("title", "Panel and screen titles"),
            ("border_focused", "Border of the active panel"),
            ("table_header", "Column headings"),
            ("table_selected", "The highlighted row"),
            ("stock(status)", "Inventory badges, by stock level"),
            ("key_hint", "Keybinding help text"),
        ];
        let rows: Vec<Row> = reference
            .iter()
            .map(|(name, applies)| {
                Row::new([
                    Cell::from(*name).style(Style::default().fg(theme::SKY_BLUE)),
                    Cell::from(*applies).style(theme::table_row()),
                ])
            })
            .collect();
        let table = Table::new(
            rows,
            [Constraint::Length(18), Constraint::Fill(1)],
        )
        .header(header);
        frame.render_widget(table, layout[1]);
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &'static str {
        "Theming"
    }

    fn init(&mut self, _action_tx: UnboundedSender<Action>) -> Result<()> {
        Ok(())
    }

    fn update(&mut self, _action: &Action) -> Result<Option<Action>> {
        Ok(None)
    }
}
