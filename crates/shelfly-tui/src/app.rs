//! Application orchestrator — owns the screens, the action channel,
//! and the main event loop.

use std::collections::HashMap;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use shelfly_core::{Catalog, ProductProvider};

use crate::action::{Action, LayoutMode};
use crate::component::Component;
use crate::data_bridge::spawn_data_bridge;
use crate::event::{Event, EventReader};
use crate::screen::ScreenId;
use crate::screens::create_screens;
use crate::theme;
use crate::tui::Tui;

const TICK_RATE: Duration = Duration::from_millis(250);
const RENDER_RATE: Duration = Duration::from_millis(33);

pub struct App {
    screens: HashMap<ScreenId, Box<dyn Component>>,
    active_screen: ScreenId,
    previous_screen: Option<ScreenId>,
    running: bool,
    help_visible: bool,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    catalog: Catalog,
    data_cancel: CancellationToken,
}

impl App {
    pub fn new(initial_layout: LayoutMode) -> Result<Self> {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let mut screens = create_screens(initial_layout);
        for screen in screens.values_mut() {
            screen.init(action_tx.clone())?;
        }

        Ok(Self {
            screens,
            active_screen: ScreenId::default(),
            previous_screen: None,
            running: true,
            help_visible: false,
            action_tx,
            action_rx,
            catalog: Catalog::new(),
            data_cancel: CancellationToken::new(),
        })
    }

    /// Run the application until quit. Starts the one-shot data fetch
    /// in the background; the UI comes up immediately with whatever the
    /// catalog holds (nothing, at first).
    pub async fn run<P: ProductProvider + 'static>(&mut self, provider: P) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        tokio::spawn(spawn_data_bridge(
            provider,
            self.catalog.clone(),
            self.action_tx.clone(),
            self.data_cancel.clone(),
        ));

        let mut events = EventReader::new(TICK_RATE, RENDER_RATE);

        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_focused(true);
        }

        info!(screen = %self.active_screen, "app started");

        while self.running {
            tokio::select! {
                Some(event) = events.next() => {
                    match event {
                        Event::Key(key) => self.handle_key_event(key)?,
                        Event::Resize(w, h) => {
                            self.action_tx.send(Action::Resize(w, h))?;
                        }
                        Event::Tick => self.action_tx.send(Action::Tick)?,
                        Event::Render => {
                            tui.draw(|frame| self.render(frame))?;
                        }
                    }
                }
                Some(action) = self.action_rx.recv() => {
                    self.process_action(action)?;
                }
            }
        }

        self.data_cancel.cancel();
        events.stop();
        tui.exit()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        // Global bindings first
        let global = match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Quit)
            }
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            KeyCode::Char(c @ '1'..='2') => {
                let number = u8::try_from(c.to_digit(10).unwrap_or(1)).unwrap_or(1);
                ScreenId::from_number(number).map(Action::SwitchScreen)
            }
            KeyCode::Tab => Some(Action::SwitchScreen(self.active_screen.next())),
            KeyCode::BackTab => Some(Action::SwitchScreen(self.active_screen.prev())),
            KeyCode::Esc if self.help_visible => Some(Action::ToggleHelp),
            _ => None,
        };

        if let Some(action) = global {
            self.action_tx.send(action)?;
            return Ok(());
        }

        if self.help_visible {
            return Ok(());
        }

        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            if let Some(action) = screen.handle_key_event(key)? {
                self.action_tx.send(action)?;
                return Ok(());
            }
        }

        // Esc falls through to history navigation when the screen
        // didn't use it.
        if key.code == KeyCode::Esc && self.previous_screen.is_some() {
            self.action_tx.send(Action::GoBack)?;
        }
        Ok(())
    }

    fn process_action(&mut self, action: Action) -> Result<()> {
        debug!(?action, "processing action");
        match &action {
            Action::Quit => {
                self.running = false;
                return Ok(());
            }
            Action::ToggleHelp => {
                self.help_visible = !self.help_visible;
                return Ok(());
            }
            Action::SwitchScreen(target) => {
                if *target != self.active_screen {
                    self.switch_screen(*target);
                }
                return Ok(());
            }
            Action::GoBack => {
                if let Some(previous) = self.previous_screen.take() {
                    self.switch_screen(previous);
                }
                return Ok(());
            }
            _ => {}
        }

        // Data actions reach every screen; the rest only the active one.
        let follow_up = if matches!(action, Action::ProductsLoaded(_)) {
            let mut follow = None;
            for screen in self.screens.values_mut() {
                if let Some(next) = screen.update(&action)? {
                    follow = Some(next);
                }
            }
            follow
        } else if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.update(&action)?
        } else {
            None
        };

        if let Some(next) = follow_up {
            self.action_tx.send(next)?;
        }
        Ok(())
    }

    fn switch_screen(&mut self, target: ScreenId) {
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_focused(false);
        }
        self.previous_screen = Some(self.active_screen);
        self.active_screen = target;
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_focused(true);
        }
        info!(screen = %target, "switched screen");
    }

    fn render(&self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Min(1),    // active screen
            Constraint::Length(1), // tab bar
            Constraint::Length(1), // status bar
        ])
        .split(frame.area());

        if let Some(screen) = self.screens.get(&self.active_screen) {
            screen.render(frame, layout[0]);
        }

        self.render_tab_bar(frame, layout[1]);
        self.render_status_bar(frame, layout[2]);

        if self.help_visible {
            self.render_help_overlay(frame);
        }
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw(" ")];
        for id in ScreenId::ALL {
            let style = if id == self.active_screen {
                theme::tab_active()
            } else {
                theme::tab_inactive()
            };
            spans.push(Span::styled(format!(" {} {} ", id.number(), id.label()), style));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let left = Line::from(vec![
            Span::styled(" shelfly ", theme::tab_active()),
            Span::styled(format!("  {} items", self.catalog.len()), theme::key_hint()),
            Span::styled(
                self.catalog
                    .loaded_at()
                    .map(|at| format!("  loaded {}", at.format("%H:%M:%S")))
                    .unwrap_or_default(),
                theme::key_hint(),
            ),
        ]);
        let right = Line::from(vec![
            Span::styled("? ", theme::key_hint_key()),
            Span::styled("help  ", theme::key_hint()),
            Span::styled("q ", theme::key_hint_key()),
            Span::styled("quit ", theme::key_hint()),
        ]);

        let chunks =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(16)]).split(area);
        frame.render_widget(Paragraph::new(left), chunks[0]);
        frame.render_widget(
            Paragraph::new(right).alignment(Alignment::Right),
            chunks[1],
        );
    }

    fn render_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();
        let [popup] = Layout::horizontal([Constraint::Length(46)])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::vertical([Constraint::Length(14)])
            .flex(Flex::Center)
            .areas(popup);

        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Help ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused())
            .style(Style::default().bg(theme::BG_DARK));

        let entry = |keys: &'static str, what: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {keys:<12}"), theme::key_hint_key()),
                Span::styled(what, theme::key_hint()),
            ])
        };
        let lines = vec![
            Line::from(""),
            entry("1-2 / Tab", "switch screen"),
            entry("j / k", "move selection"),
            entry("g / G", "jump to first / last"),
            entry("t", "toggle Stacked / Scroll layout"),
            entry("Enter", "open product details"),
            entry("Esc", "close details / help"),
            entry("?", "toggle this help"),
            entry("q", "quit"),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), popup);
    }
}
