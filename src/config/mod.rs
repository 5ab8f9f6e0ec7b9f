//! Configuration module for mathgrid
//!
//! In-process settings only: the grid dimension and the tick cadence.
//! There are no config files and no environment variables; whatever
//! embeds the game decides these values and hands them over at
//! construction time.

pub mod game;

pub use game::{GameConfig, GameConfigError};
