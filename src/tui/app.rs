use anyhow::Result;
use chrono::{Duration, Local, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::cli::handlers::load_table;
use crate::config::AppConfig;
use crate::prayer_times::{Board, PrayerTimeEngine};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{clock, header, next_prayer, prayers, statusbar};
use crate::utils::format::gregorian_label;

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Dashboard,
    Help,
}

pub struct App {
    pub view: View,
    pub config: AppConfig,
    pub should_quit: bool,
    engine: PrayerTimeEngine,
    /// Added to the system clock; non-zero when started with `--at`.
    clock_offset: Duration,
    pub now: NaiveDateTime,

    // Last successful computation; kept when a reload fails
    pub board: Option<Board>,
    pub last_refresh: Option<NaiveDateTime>,
    pub last_error: Option<String>,
    ticks_since_refresh: u64,
}

impl App {
    pub fn new(config: AppConfig, start_at: Option<NaiveDateTime>) -> Self {
        let system_now = Local::now().naive_local();
        let clock_offset = start_at.map(|at| at - system_now).unwrap_or_else(Duration::zero);
        let engine = PrayerTimeEngine::new(&config.display, config.table.format.time_format);

        App {
            view: View::Dashboard,
            config,
            should_quit: false,
            engine,
            clock_offset,
            now: system_now + clock_offset,
            board: None,
            last_refresh: None,
            last_error: None,
            ticks_since_refresh: 0,
        }
    }

    fn current_time(&self) -> NaiveDateTime {
        Local::now().naive_local() + self.clock_offset
    }

    /// Re-read the table and recompute the board. On failure the previous
    /// board stays on screen.
    pub fn refresh(&mut self) {
        self.now = self.current_time();
        self.ticks_since_refresh = 0;

        match load_table(&self.config) {
            Ok(table) => {
                self.board = Some(self.engine.compute(&table, self.now));
                self.last_refresh = Some(self.now);
                self.last_error = None;
            }
            Err(e) => {
                log::warn!("Refresh failed: {:#}", e);
                self.last_error = Some(format!("{:#}", e));
            }
        }
    }

    /// Called once per second: advance the clock, reload when due.
    pub fn tick(&mut self) {
        self.now = self.current_time();
        self.ticks_since_refresh += 1;
        if self.ticks_since_refresh >= self.config.display.refresh_secs.max(1) {
            self.refresh();
        }
    }

    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) {
        // Only handle actual key presses — ignore release/repeat events from some terminals
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.view {
            View::Dashboard => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                KeyCode::Char('r') => {
                    self.refresh();
                }
                KeyCode::Char('?') => {
                    self.view = View::Help;
                }
                _ => {}
            },
            View::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') => {
                    self.view = View::Dashboard;
                }
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                _ => {}
            },
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        self.draw_dashboard(frame);
        if self.view == View::Help {
            self.draw_help_overlay(frame);
        }
    }

    fn draw_dashboard(&self, frame: &mut Frame) {
        let area = frame.area();

        // Clear background
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Length(3), // clock
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let (gregorian, hijri) = match &self.board {
            Some(Board::Ready(board)) => (board.gregorian.clone(), board.hijri.as_deref()),
            Some(Board::NoData { gregorian, .. }) => (gregorian.clone(), None),
            None => (gregorian_label(self.now.date()), None),
        };
        header::render(frame, outer_chunks[0], &self.config.display.title, &gregorian, hijri);
        clock::render(frame, outer_chunks[1], self.now.time());
        statusbar::render(
            frame,
            outer_chunks[3],
            self.last_refresh,
            self.last_error.as_deref(),
        );

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(outer_chunks[2]);

        match &self.board {
            Some(Board::Ready(board)) => {
                prayers::render(frame, columns[0], board);
                next_prayer::render(frame, columns[1], Some(&board.next));
            }
            Some(Board::NoData { .. }) => {
                prayers::render_message(frame, columns[0], "No data for today");
                next_prayer::render(frame, columns[1], None);
            }
            None => {
                prayers::render_message(frame, columns[0], "Timetable not loaded");
                next_prayer::render(frame, columns[1], None);
            }
        }
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();

        // Center a help box
        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: (area.height / 2).min(12),
        };

        frame.render_widget(Clear, popup_area);

        let refresh_hint = format!("Reload now (auto every {}s)", self.config.display.refresh_secs);
        let help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::gold().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  [r]          ", theme::gold()),
                Span::styled(refresh_hint, theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [?]          ", theme::gold()),
                Span::styled("Toggle help", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [Esc] / [q]  ", theme::gold()),
                Span::styled("Quit", theme::dim()),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                format!("  Table: {}", self.config.table.path.display()),
                theme::dim(),
            )),
        ];

        let block = Block::default()
            .title(Span::styled(" Help ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::gold())
            .style(theme::panel());

        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, popup_area);
    }
}

/// Run the TUI event loop.
pub fn run(config: AppConfig, start_at: Option<NaiveDateTime>) -> Result<()> {
    let mut app = App::new(config, start_at);
    app.refresh();

    let mut terminal = ratatui::init();
    let events = EventHandler::new(1000);

    let result: Result<()> = loop {
        if let Err(e) = terminal.draw(|frame| app.draw(frame)) {
            break Err(e.into());
        }

        match events.next() {
            Ok(Event::Key(key)) => {
                app.handle_key(key);
                if app.should_quit {
                    break Ok(());
                }
            }
            Ok(Event::Tick) => {
                app.tick();
            }
            Ok(Event::Resize) => {}
            Err(e) => break Err(e.into()),
        }
    };

    ratatui::restore();
    result
}
