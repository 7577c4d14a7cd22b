//! Core domain types for Mapitals
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear semantics.

mod capital;
mod game;
pub mod text;

pub use capital::{Capital, Region, RegionParseError};
pub use game::{ADJUSTED_ZOOM_LEVELS, Game, GameStatus, GuessOutcome, MAX_WRONG_GUESSES};
