//! Terminal frontend
//!
//! The view layer: renders the grid with ratatui and runs the event
//! loop that feeds key presses and timer ticks into the game. All game
//! rules live below this layer; the ui only reads accessors and
//! forwards commands.

pub mod app;
pub mod renderer;

pub use app::{App, AppError, run};
