//! Core game logic for Secret Word
//!
//! Pure, synchronous types with no terminal or file I/O: the catalog, letter
//! normalization and the session state machine.

pub mod catalog;
pub mod letters;
mod session;

pub use catalog::{Catalog, CatalogError, Category};
pub use session::{Board, GameSession, GuessOutcome, MAX_GUESSES, ROUND_POINTS, Stage, Tile};
