//! mathgrid — a keyboard-driven arithmetic drill for the terminal.
//!
//! A square grid of answer cells is formed by a set of row headers and
//! column headers; the player fills in `row op column` for every cell,
//! plus the row totals, column totals and the grand total, against a
//! running timer. Stopping the game scores every cell.
//!
//! The crate is layered so the game itself never touches the terminal:
//! - [`domain`] holds the pure game logic (cells, puzzle generation,
//!   answers, navigation, scoring),
//! - [`app`] orchestrates it (state machine, controller, tick source),
//! - [`config`] carries the in-process settings,
//! - [`input`] maps terminal key events to game commands,
//! - [`ui`] renders the grid with ratatui and runs the event loop.

pub mod app;
pub mod config;
pub mod domain;
pub mod input;
pub mod ui;
