use crate::game::{GameSession, GameStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget;

pub fn render(
    frame: &mut Frame,
    session: &GameSession,
    selected_column: usize,
    message: &Option<String>,
    show_controls: bool,
) {
    let constraints = if show_controls {
        vec![
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ]
    } else {
        vec![
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    render_header(frame, session, chunks[0]);
    board_widget::render_board(frame, session.board(), selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    if show_controls {
        render_controls(frame, chunks[3]);
    }
}

fn render_header(frame: &mut Frame, session: &GameSession, area: Rect) {
    let (status, color) = match session.status() {
        GameStatus::InProgress => {
            let player = session.active_player();
            (
                format!("Current turn: {}", player.name()),
                board_widget::player_color(player),
            )
        }
        GameStatus::Won(player) => (
            format!("Game Over: {} wins", player.name()),
            board_widget::player_color(player),
        ),
        GameStatus::Tied => ("Game Over: tie".to_string(), Color::Gray),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter/Space: Drop  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
