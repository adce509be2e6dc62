//! Catalog screen — the product table with its layout toggle.
//!
//! The toggle offers exactly two modes. Scroll renders the classic
//! four-column table; Stacked renders each record as a vertical
//! label/value block, the terminal analogue of a stacked responsive
//! layout. Enter opens a detail panel with the fields the table hides.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState, Wrap,
};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use shelfly_core::{Product, ProductSnapshot};

use crate::action::{Action, LayoutMode};
use crate::component::Component;
use crate::theme;
use crate::widgets::{fmt, select_button};

/// Lines one stacked record occupies, including its trailing separator.
const STACKED_BLOCK_HEIGHT: usize = 5;

pub struct CatalogScreen {
    focused: bool,
    action_tx: Option<UnboundedSender<Action>>,
    products: ProductSnapshot,
    layout: LayoutMode,
    table_state: TableState,
    detail_open: bool,
}

impl CatalogScreen {
    pub fn new(initial_layout: LayoutMode) -> Self {
        Self {
            focused: false,
            action_tx: None,
            products: Arc::new(Vec::new()),
            layout: initial_layout,
            table_state: TableState::default(),
            detail_open: false,
        }
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    fn selected_index(&self) -> usize {
        self.table_state.selected().unwrap_or(0)
    }

    fn select(&mut self, idx: usize) {
        let len = self.products.len();
        let clamped = if len == 0 { 0 } else { idx.min(len - 1) };
        self.table_state.select(Some(clamped));
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn move_selection(&mut self, delta: isize) {
        let len = self.products.len();
        if len == 0 {
            return;
        }
        let current = self.selected_index() as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        self.select(next as usize);
    }

    fn selected_product(&self) -> Option<&Arc<Product>> {
        self.products.get(self.selected_index())
    }

    // ── Rendering ────────────────────────────────────────────────

    fn render_scroll_table(&self, frame: &mut Frame, area: Rect) {
        let header = Row::new([
            Cell::from("Code").style(theme::table_header()),
            Cell::from("Name").style(theme::table_header()),
            Cell::from("Category").style(theme::table_header()),
            Cell::from("Quantity").style(theme::table_header()),
        ]);

        let selected_idx = self.selected_index();
        let rows: Vec<Row> = self
            .products
            .iter()
            .enumerate()
            .map(|(i, product)| {
                let is_selected = i == selected_idx;
                let prefix = if is_selected { "▸" } else { " " };

                let row_style = if is_selected {
                    theme::table_selected()
                } else {
                    theme::table_row()
                };

                Row::new([
                    Cell::from(format!("{prefix}{}", product.code)),
                    Cell::from(product.name.clone()),
                    Cell::from(product.category.clone()),
                    Cell::from(product.quantity.to_string()),
                ])
                .style(row_style)
            })
            .collect();

        let widths = [
            Constraint::Length(12),
            Constraint::Fill(2),
            Constraint::Fill(1),
            Constraint::Length(8),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(theme::table_selected());

        let mut state = self.table_state;
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn render_stacked(&self, frame: &mut Frame, area: Rect) {
        let selected_idx = self.selected_index();
        let mut lines: Vec<Line> = Vec::with_capacity(self.products.len() * STACKED_BLOCK_HEIGHT);

        for (i, product) in self.products.iter().enumerate() {
            let is_selected = i == selected_idx;
            let label_style = theme::key_hint();
            let value_style = if is_selected {
                Style::default()
                    .fg(theme::AMBER)
                    .add_modifier(Modifier::BOLD)
            } else {
                theme::table_row()
            };
            let prefix = if is_selected { "▸ " } else { "  " };

            let field = |label: &'static str, value: String| {
                Line::from(vec![
                    Span::styled(format!("{prefix}{label:<10}"), label_style),
                    Span::styled(value, value_style),
                ])
            };

            lines.push(field("Code", product.code.to_string()));
            lines.push(field("Name", product.name.clone()));
            lines.push(field("Category", product.category.clone()));
            lines.push(field("Quantity", product.quantity.to_string()));
            lines.push(Line::from(Span::styled(
                format!("  {}", "─".repeat(24)),
                theme::key_hint(),
            )));
        }

        // Keep the selected block in view without persistent scroll state.
        let height = usize::from(area.height);
        let selected_top = selected_idx * STACKED_BLOCK_HEIGHT;
        let max_offset = lines.len().saturating_sub(height);
        let offset = selected_top
            .saturating_sub(height / 2)
            .min(max_offset);

        #[allow(clippy::cast_possible_truncation)]
        let scroll = offset.min(usize::from(u16::MAX)) as u16;
        let paragraph = Paragraph::new(lines).scroll((scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect, product: &Product) {
        let title = format!(" {}  ·  {} ", product.name, product.code);
        let block = Block::default()
            .title(title)
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let detail_layout =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

        let label = |text: &'static str| Span::styled(text, theme::key_hint());
        let lines = vec![
            Line::from(""),
            Line::from(vec![
                label("  Price      "),
                Span::styled(fmt::fmt_price(product.price), Style::default().fg(theme::SAGE_GREEN)),
                label("       Rating    "),
                Span::styled(fmt::fmt_rating(product.rating), Style::default().fg(theme::AMBER)),
            ]),
            Line::from(vec![
                label("  Status     "),
                Span::styled(
                    product.inventory_status.to_string(),
                    theme::stock_style(product.inventory_status),
                ),
                label("       Quantity  "),
                Span::styled(product.quantity.to_string(), theme::table_row()),
            ]),
            Line::from(vec![
                label("  Category   "),
                Span::styled(product.category.clone(), Style::default().fg(theme::PLUM)),
                label("       Image     "),
                Span::styled(product.image.clone(), theme::table_row()),
            ]),
            Line::from(""),
            Line::from(vec![
                label("  "),
                Span::styled(product.description.clone(), theme::table_row()),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), detail_layout[0]);

        let hints = Line::from(vec![
            Span::styled("  Esc ", theme::key_hint_key()),
            Span::styled("back", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), detail_layout[1]);
    }
}

impl Component for CatalogScreen {
    fn init(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        self.action_tx = Some(action_tx);
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.detail_open {
            return match key.code {
                KeyCode::Esc => Ok(Some(Action::CloseDetail)),
                _ => Ok(None),
            };
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_selection(1);
                Ok(None)
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_selection(-1);
                Ok(None)
            }
            KeyCode::Char('g') => {
                self.select(0);
                Ok(None)
            }
            KeyCode::Char('G') => {
                let len = self.products.len();
                if len > 0 {
                    self.select(len - 1);
                }
                Ok(None)
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_selection(10);
                Ok(None)
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_selection(-10);
                Ok(None)
            }
            // The layout toggle: the new mode flows through the action
            // loop so `update` is the single place state changes.
            KeyCode::Char('t') | KeyCode::Left | KeyCode::Right => {
                Ok(Some(Action::SetLayout(self.layout.toggled())))
            }
            KeyCode::Enter => Ok(self
                .selected_product()
                .map(|p| Action::OpenDetail(p.code.clone()))),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::ProductsLoaded(products) => {
                // Stored verbatim; a reload replaces, never appends.
                self.products = Arc::clone(products);
                let len = self.products.len();
                if len > 0 && self.selected_index() >= len {
                    self.select(len - 1);
                }
            }
            Action::SetLayout(mode) => {
                // Exactly the chosen mode, nothing else changes.
                self.layout = *mode;
                debug!(mode = mode.value(), "layout switched");
            }
            Action::OpenDetail(_) => {
                self.detail_open = true;
            }
            Action::CloseDetail => {
                self.detail_open = false;
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let title = format!(" Products ({}) ", self.products.len());
        let block = Block::default()
            .title(title)
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

        // Split for content + optional detail panel
        let (content_area, detail_area) = if self.detail_open {
            let chunks =
                Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)])
                    .split(inner);
            (chunks[0], Some(chunks[1]))
        } else {
            (inner, None)
        };

        let layout = Layout::vertical([
            Constraint::Length(1), // layout toggle
            Constraint::Length(1), // spacer
            Constraint::Min(1),    // table / stacked list
            Constraint::Length(1), // hints
        ])
        .split(content_area);

        // The toggle control, centered
        let labels: Vec<&str> = LayoutMode::ALL.iter().map(|m| m.label()).collect();
        let active = LayoutMode::ALL
            .iter()
            .position(|&m| m == self.layout)
            .unwrap_or(0);
        let toggle = select_button::render_select_button(&labels, active);
        frame.render_widget(
            Paragraph::new(toggle).alignment(Alignment::Center),
            layout[0],
        );

        // The product collection in the current layout mode
        match self.layout {
            LayoutMode::Scroll => self.render_scroll_table(frame, layout[2]),
            LayoutMode::Stacked => self.render_stacked(frame, layout[2]),
        }

        // Key hints
        let hints = Line::from(vec![
            Span::styled("  j/k ", theme::key_hint_key()),
            Span::styled("navigate  ", theme::key_hint()),
            Span::styled("t ", theme::key_hint_key()),
            Span::styled("layout  ", theme::key_hint()),
            Span::styled("Enter ", theme::key_hint_key()),
            Span::styled("details", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), layout[3]);

        // Render detail panel if open
        if let Some(detail_area) = detail_area {
            if let Some(product) = self.selected_product() {
                self.render_detail(frame, detail_area, product);
            }
        }
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &'static str {
        "Catalog"
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEvent;
    use pretty_assertions::assert_eq;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use shelfly_core::sample_products;

    use super::*;

    fn snapshot_of(products: Vec<Product>) -> ProductSnapshot {
        Arc::new(products.into_iter().map(Arc::new).collect())
    }

    fn bamboo_watch() -> Product {
        sample_products()
            .into_iter()
            .find(|p| p.name == "Bamboo Watch")
            .expect("sample data contains it")
    }

    /// Render the screen into a test terminal and return the buffer rows.
    fn rendered_lines(screen: &CatalogScreen, width: u16, height: u16) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal
            .draw(|frame| screen.render(frame, frame.area()))
            .expect("draw");

        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect())
            .collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn initial_mode_is_stacked() {
        let screen = CatalogScreen::new(LayoutMode::default());
        assert_eq!(screen.layout(), LayoutMode::Stacked);
    }

    #[test]
    fn toggle_key_proposes_the_other_mode() {
        let mut screen = CatalogScreen::new(LayoutMode::Stacked);
        let action = screen
            .handle_key_event(key(KeyCode::Char('t')))
            .expect("handled");

        let Some(Action::SetLayout(mode)) = action else {
            panic!("expected SetLayout, got {action:?}");
        };
        assert_eq!(mode, LayoutMode::Scroll);
        assert_eq!(mode.value(), "scroll");
        // The key handler alone does not mutate; only `update` does.
        assert_eq!(screen.layout(), LayoutMode::Stacked);
    }

    #[test]
    fn set_layout_changes_exactly_the_mode() {
        let mut screen = CatalogScreen::new(LayoutMode::Stacked);
        screen
            .update(&Action::ProductsLoaded(snapshot_of(sample_products())))
            .expect("update");
        screen.select(3);

        screen
            .update(&Action::SetLayout(LayoutMode::Scroll))
            .expect("update");

        assert_eq!(screen.layout(), LayoutMode::Scroll);
        // Everything else is untouched: selection, data, detail state.
        assert_eq!(screen.selected_index(), 3);
        assert_eq!(screen.products.len(), 10);
        assert!(!screen.detail_open);
    }

    #[test]
    fn loaded_products_render_one_row_each() {
        let mut screen = CatalogScreen::new(LayoutMode::Scroll);
        screen
            .update(&Action::ProductsLoaded(snapshot_of(sample_products())))
            .expect("update");

        let lines = rendered_lines(&screen, 80, 24);
        let text = lines.join("\n");

        assert!(text.contains("Products (10)"));
        for product in sample_products() {
            assert!(text.contains(&product.name), "missing row for {}", product.name);
        }
    }

    #[test]
    fn single_record_scenario_shows_all_four_fields() {
        let mut screen = CatalogScreen::new(LayoutMode::Scroll);
        screen
            .update(&Action::ProductsLoaded(snapshot_of(vec![bamboo_watch()])))
            .expect("update");

        let lines = rendered_lines(&screen, 80, 16);
        let row = lines
            .iter()
            .find(|l| l.contains("Bamboo Watch"))
            .expect("one data row");

        assert!(row.contains("f230fh0g3"));
        assert!(row.contains("Accessories"));
        assert!(row.contains("24"));
        assert!(lines.iter().any(|l| l.contains("Products (1)")));
    }

    #[test]
    fn stacked_mode_renders_labelled_fields() {
        let mut screen = CatalogScreen::new(LayoutMode::Stacked);
        screen
            .update(&Action::ProductsLoaded(snapshot_of(vec![bamboo_watch()])))
            .expect("update");

        let lines = rendered_lines(&screen, 80, 16);

        // In stacked mode label and value share a line per field.
        let code_line = lines
            .iter()
            .find(|l| l.contains("Code"))
            .expect("code field");
        assert!(code_line.contains("f230fh0g3"));

        let qty_line = lines
            .iter()
            .find(|l| l.contains("Quantity"))
            .expect("quantity field");
        assert!(qty_line.contains("24"));
    }

    #[test]
    fn empty_collection_renders_zero_rows() {
        let screen = CatalogScreen::new(LayoutMode::Scroll);
        let lines = rendered_lines(&screen, 80, 16);
        let text = lines.join("\n");

        assert!(text.contains("Products (0)"));
        assert!(!text.contains("Bamboo Watch"));
        // No error surface of any kind.
        assert!(!text.to_lowercase().contains("error"));
    }

    #[test]
    fn reloading_replaces_instead_of_appending() {
        let mut screen = CatalogScreen::new(LayoutMode::Scroll);
        let snap = snapshot_of(sample_products());
        screen
            .update(&Action::ProductsLoaded(snap.clone()))
            .expect("update");
        screen
            .update(&Action::ProductsLoaded(snap))
            .expect("update");

        assert_eq!(screen.products.len(), 10);
    }

    #[test]
    fn enter_opens_detail_with_hidden_fields() {
        let mut screen = CatalogScreen::new(LayoutMode::Scroll);
        screen
            .update(&Action::ProductsLoaded(snapshot_of(vec![bamboo_watch()])))
            .expect("update");

        let action = screen
            .handle_key_event(key(KeyCode::Enter))
            .expect("handled")
            .expect("detail action");
        screen.update(&action).expect("update");
        assert!(screen.detail_open);

        let text = rendered_lines(&screen, 90, 30).join("\n");
        assert!(text.contains("$65.00"));
        assert!(text.contains("★★★★★"));
        assert!(text.contains("In Stock"));

        // Esc closes it again.
        let close = screen
            .handle_key_event(key(KeyCode::Esc))
            .expect("handled")
            .expect("close action");
        screen.update(&close).expect("update");
        assert!(!screen.detail_open);
    }

    #[test]
    fn selection_clamps_to_collection_bounds() {
        let mut screen = CatalogScreen::new(LayoutMode::Scroll);
        screen
            .update(&Action::ProductsLoaded(snapshot_of(sample_products())))
            .expect("update");

        screen.handle_key_event(key(KeyCode::Char('G'))).expect("handled");
        assert_eq!(screen.selected_index(), 9);

        // Shrinking the collection pulls the selection back in range.
        screen
            .update(&Action::ProductsLoaded(snapshot_of(vec![bamboo_watch()])))
            .expect("update");
        assert_eq!(screen.selected_index(), 0);
    }
}
