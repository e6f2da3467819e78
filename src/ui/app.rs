use crate::config::AppConfig;
use crate::game::{GameSession, MoveOutcome, Player, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

pub struct App {
    session: GameSession,
    starting_player: Player,
    selected_column: usize,
    initial_column: usize,
    poll_interval: Duration,
    show_controls: bool,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let starting_player = config.game.starting_player.to_player();
        App {
            session: GameSession::with_starting_player(starting_player),
            starting_player,
            selected_column: config.ui.initial_column,
            initial_column: config.ui.initial_column,
            poll_interval: Duration::from_millis(config.ui.poll_interval_ms),
            show_controls: config.ui.show_controls,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    /// Drop the active player's piece in the selected column
    fn drop_piece(&mut self) {
        match self.session.drop_piece(self.selected_column) {
            MoveOutcome::Placed { .. } => {}
            MoveOutcome::Won { by, .. } => {
                self.message = Some(format!("{} wins! Press 'r' for a new game.", by.name()));
            }
            MoveOutcome::Tied { .. } => {
                self.message = Some("It's a tie! Press 'r' for a new game.".to_string());
            }
            MoveOutcome::Ignored => {
                self.message = Some(if self.session.is_over() {
                    "Game over! Press 'r' to restart.".to_string()
                } else {
                    "Column is full!".to_string()
                });
            }
        }
    }

    /// Start a fresh game
    fn restart(&mut self) {
        self.session = GameSession::with_starting_player(self.starting_player);
        self.selected_column = self.initial_column;
        self.message = Some("New game started!".to_string());
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.session,
            self.selected_column,
            &self.message,
            self.show_controls,
        );
    }
}
