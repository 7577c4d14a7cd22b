//! Mapitals
//!
//! A capital-city guessing game: reveal the capital and its country or state
//! one letter at a time before six wrong guesses zoom the map all the way out.
//! Everyone gets the same daily puzzle per region, picked deterministically
//! from the date.
//!
//! # Quick Start
//!
//! ```rust
//! use mapitals::core::{Capital, Game, GuessOutcome, Region};
//!
//! let capital = Capital::new("Paris", "France", 48.8566, 2.3522, Region::Europe);
//! let mut game = Game::new(capital);
//!
//! assert_eq!(game.guess('p'), GuessOutcome::Hit);
//! assert_eq!(game.masked_city(), "P____");
//! ```

// Core domain types
pub mod core;

// Deterministic daily selection, results, share text
pub mod daily;

// Embedded capital tables
pub mod atlas;

// Shuffled practice decks
pub mod practice;

// Profile persistence
pub mod store;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
