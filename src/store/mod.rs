//! Key-value persistence
//!
//! The browser original kept score, streaks, and daily results in
//! `localStorage`; here the same records live behind a [`Store`] trait with
//! an in-memory implementation for tests and a JSON file store for real
//! profiles. Game logic never touches the store directly — the application
//! layer goes through [`profile::Profile`].

mod file;
mod memory;
pub mod profile;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use profile::Profile;

use std::fmt;
use std::io;

/// String key-value storage with `localStorage`-like semantics
pub trait Store {
    /// Read a value, `None` if the key was never set
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, overwriting any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a key if present
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Error type for store operations
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Corrupt(serde_json::Error),
    NoDataDir,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Store I/O error: {e}"),
            Self::Corrupt(e) => write!(f, "Store file is not valid JSON: {e}"),
            Self::NoDataDir => write!(f, "No user data directory available"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Corrupt(e) => Some(e),
            Self::NoDataDir => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Corrupt(e)
    }
}
