//! Application orchestration layer
//!
//! This module coordinates the domain parts: the session state machine,
//! the controller owning all game state, and the recurring tick source
//! feeding the play timer.

pub mod controller;
pub mod state;
pub mod ticker;

pub use controller::{CellStyle, Game};
pub use state::{GameState, StateEvent, StateMachine};
pub use ticker::{Tick, Ticker};
