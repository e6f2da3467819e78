//! Terminal UI: crossterm event loop, full-screen game view, and the board
//! grid renderer. Reads outcomes reported by the game core; never mutates
//! the board directly.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
