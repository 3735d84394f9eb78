use anyhow::Result;
use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use log::warn;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use rusqlite::Connection;
use std::time::Duration;

use crate::config::AppConfig;
use crate::db::repository::ScoreRepo;
use crate::stats::{Leaderboard, RollingWindow};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{header, leaderboard, player, statusbar, summary};

const TICK: Duration = Duration::from_millis(500);
/// Re-read the store this often so results recorded from another shell show up.
const RELOAD_EVERY_SECS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Board,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardScope {
    AllTime,
    Week,
}

impl BoardScope {
    fn toggled(self) -> Self {
        match self {
            BoardScope::AllTime => BoardScope::Week,
            BoardScope::Week => BoardScope::AllTime,
        }
    }
}

pub struct App {
    pub config: AppConfig,
    pub view: View,
    pub scope: BoardScope,
    pub selected: usize,
    pub should_quit: bool,
    pub status: Option<String>,

    // Recomputed from the store on every load
    pub all_time: Leaderboard,
    pub weekly: Leaderboard,
    pub loaded_at: DateTime<Utc>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let now = Utc::now();
        let rolling = RollingWindow::new(config.activity.rolling_days);
        App {
            config,
            view: View::Board,
            scope: BoardScope::AllTime,
            selected: 0,
            should_quit: false,
            status: None,
            all_time: Leaderboard::all_time(&[], now, rolling),
            weekly: Leaderboard::weekly(&[], now),
            loaded_at: now,
        }
    }

    pub fn load(&mut self, conn: &Connection) -> Result<()> {
        let records = ScoreRepo::all(conn)?;
        let now = Utc::now();
        let rolling = RollingWindow::new(self.config.activity.rolling_days);
        self.all_time = Leaderboard::all_time(&records, now, rolling);
        self.weekly = Leaderboard::weekly(&records, now);
        self.loaded_at = now;
        self.clamp_selection();
        Ok(())
    }

    pub fn current(&self) -> &Leaderboard {
        match self.scope {
            BoardScope::AllTime => &self.all_time,
            BoardScope::Week => &self.weekly,
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.current().players.len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    fn reload(&mut self, conn: &Connection) {
        match self.load(conn) {
            Ok(()) => self.status = None,
            Err(e) => {
                warn!("Reload failed: {:#}", e);
                self.status = Some(format!("reload failed: {}", e));
            }
        }
    }

    pub fn tick(&mut self, conn: &Connection) {
        if (Utc::now() - self.loaded_at).num_seconds() >= RELOAD_EVERY_SECS {
            self.reload(conn);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, conn: &Connection) {
        // Some terminals also report release and repeat events
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.view {
            View::Board => self.handle_board_key(key, conn),
            View::Help => self.handle_help_key(key),
        }
    }

    fn handle_board_key(&mut self, key: KeyEvent, conn: &Connection) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.view = View::Help;
            }
            KeyCode::Tab | KeyCode::Char('w') => {
                self.scope = self.scope.toggled();
                self.selected = 0;
            }
            KeyCode::Char('r') => {
                self.reload(conn);
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                let max = self.current().players.len().saturating_sub(1);
                if self.selected < max {
                    self.selected += 1;
                }
            }
            KeyCode::Home => {
                self.selected = 0;
            }
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            self.view = View::Board;
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        self.draw_board(frame);
        if self.view == View::Help {
            self.draw_help_overlay(frame);
        }
    }

    fn draw_board(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let board = self.current();
        header::render(frame, outer[0], &board.title());
        statusbar::render(frame, outer[2], self.status.as_deref());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(outer[1]);

        leaderboard::render(
            frame,
            columns[0],
            board,
            self.selected,
            self.config.display.name_width,
        );

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(10), Constraint::Min(0)])
            .split(columns[1]);

        summary::render(frame, right[0], &board.summary);
        player::render(
            frame,
            right[1],
            board.players.get(self.selected),
            self.config.display.show_distribution,
        );
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();
        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: (area.height / 2).max(12).min(area.height),
        };

        frame.render_widget(Clear, popup_area);

        let key_line = |key: &'static str, what: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {:<12} ", key), theme::green()),
                Span::styled(what, theme::dim()),
            ])
        };

        let help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::green().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            key_line("[Tab] / [w]", "Switch all time / this week"),
            key_line("[↑ ↓]", "Select player"),
            key_line("[Home]", "Back to the top"),
            key_line("[r]", "Reload from the database"),
            key_line("[?]", "Toggle help"),
            key_line("[Esc] / [q]", "Quit"),
            Line::from(""),
            Line::from(Span::styled(
                "  Score = win rate × wins ÷ average attempts",
                theme::dim(),
            )),
        ];

        let block = Block::default()
            .title(Span::styled(" Help ", theme::green()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::green())
            .style(theme::surface());

        frame.render_widget(Paragraph::new(help_text).block(block), popup_area);
    }
}

/// Run the TUI event loop.
pub fn run(conn: Connection, config: AppConfig) -> Result<()> {
    let mut app = App::new(config);
    app.load(&conn)?;

    let mut terminal = ratatui::init();
    let events = EventHandler::new(TICK);

    let result = (|| -> Result<()> {
        loop {
            terminal.draw(|frame| app.draw(frame))?;

            match events.next()? {
                Event::Key(key) => {
                    app.handle_key(key, &conn);
                    if app.should_quit {
                        return Ok(());
                    }
                }
                Event::Resize => {}
                Event::Tick => app.tick(&conn),
            }
        }
    })();

    ratatui::restore();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;
    use crate::db::seed::seed_sample;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn seeded() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        seed_sample(&conn, Utc::now(), false).unwrap();
        conn
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let conn = seeded();
        let mut app = App::new(AppConfig::default());
        app.load(&conn).unwrap();
        assert_eq!(app.current().players.len(), 4);

        app.handle_key(press(KeyCode::Up), &conn);
        assert_eq!(app.selected, 0);
        for _ in 0..10 {
            app.handle_key(press(KeyCode::Down), &conn);
        }
        assert_eq!(app.selected, 3);
    }

    #[test]
    fn tab_switches_scope_and_resets_selection() {
        let conn = seeded();
        let mut app = App::new(AppConfig::default());
        app.load(&conn).unwrap();
        app.handle_key(press(KeyCode::Down), &conn);

        app.handle_key(press(KeyCode::Tab), &conn);
        assert_eq!(app.scope, BoardScope::Week);
        assert_eq!(app.selected, 0);
        app.handle_key(press(KeyCode::Tab), &conn);
        assert_eq!(app.scope, BoardScope::AllTime);
    }

    #[test]
    fn help_and_quit() {
        let conn = seeded();
        let mut app = App::new(AppConfig::default());
        app.handle_key(press(KeyCode::Char('?')), &conn);
        assert_eq!(app.view, View::Help);
        app.handle_key(press(KeyCode::Esc), &conn);
        assert_eq!(app.view, View::Board);
        assert!(!app.should_quit);
        app.handle_key(press(KeyCode::Esc), &conn);
        assert!(app.should_quit);
    }

    #[test]
    fn reload_picks_up_new_rows() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        let mut app = App::new(AppConfig::default());
        app.load(&conn).unwrap();
        assert!(app.current().is_empty());

        seed_sample(&conn, Utc::now(), false).unwrap();
        app.handle_key(press(KeyCode::Char('r')), &conn);
        assert_eq!(app.current().players.len(), 4);
        assert!(app.status.is_none());
    }
}
