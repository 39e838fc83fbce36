use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::error;
use ratatui::{backend::Backend, Terminal};

use super::messages;
use crate::config::UiConfig;
use crate::game::{DropOutcome, GameEngine, IgnoredReason, COLS};

pub struct App {
    engine: GameEngine,
    selected_column: usize,
    initial_column: usize,
    poll_interval: Duration,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &UiConfig) -> Self {
        let initial_column = config.initial_column.min(COLS - 1);
        App {
            engine: GameEngine::new(),
            selected_column: initial_column,
            initial_column,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            should_quit: false,
            message: None,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = (c as u8 - b'1') as usize;
                self.drop_piece();
            }
            KeyCode::Char('n') | KeyCode::Char('r') => {
                self.engine.reset();
                self.selected_column = self.initial_column;
                self.message = Some(messages::NEW_GAME.to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.engine.drop_piece(self.selected_column) {
            Ok(DropOutcome::Placed(placement)) => {
                self.message = messages::outcome(placement.status);
            }
            Ok(DropOutcome::Ignored {
                reason: IgnoredReason::GameOver,
                ..
            }) => {
                self.message = Some(messages::GAME_OVER.to_string());
            }
            Ok(DropOutcome::Ignored {
                reason: IgnoredReason::ColumnFull,
                ..
            }) => {
                self.message = Some(messages::COLUMN_FULL.to_string());
            }
            Err(e) => {
                // The selector is clamped to the board, so this is a bug
                error!("selector produced a bad column: {e}");
                self.message = Some(e.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.engine, self.selected_column, &self.message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&UiConfig::default())
    }
}
