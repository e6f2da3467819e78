//! # Connect Four
//!
//! A two-player Connect Four game for the terminal, built with Ratatui.
//! Players take turns dropping pieces into a 7-wide, 6-tall grid until one
//! lines up four in a row or the grid fills for a tie.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, session state machine
//! - [`ui`] — Terminal UI: event loop, game view, board widget
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
