//! Domain logic and core data structures
//!
//! This module contains the pure game logic: cell identity, puzzle
//! generation, answer storage, cursor navigation and scoring. Nothing
//! here knows about the terminal or the event loop.

pub mod answers;
pub mod cell;
pub mod navigation;
pub mod puzzle;
pub mod scoring;
