//! Core Connect Four game logic: board representation, player types, and the
//! per-game session state machine. Pure state, no rendering — the terminal
//! UI is a separate consumer of the outcomes reported here.

mod board;
mod player;
mod session;

pub use board::{Board, COLS, ROWS};
pub use player::Player;
pub use session::{GameSession, GameStatus, MoveOutcome};
