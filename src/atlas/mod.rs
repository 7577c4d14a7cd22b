//! Reference tables of capitals
//!
//! Provides the embedded world and U.S. state capital tables compiled into
//! the binary, plus loading utilities.

mod embedded;
pub mod loader;

pub use embedded::{
    CAPITALS, CAPITALS_COUNT, CapitalRecord, STATE_CAPITALS, STATE_CAPITALS_COUNT,
};
