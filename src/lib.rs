//! Secret Word
//!
//! Guess a hidden word letter by letter from its category hint, with
//! accent-aware guessing: a plain `A` also reveals `Ã`, `Á` and `Â`.
//!
//! # Quick Start
//!
//! ```rust
//! use secret_word::core::{Catalog, GameSession, GuessOutcome, Stage};
//!
//! let catalog = Catalog::new([("Frutas", vec!["maçã"])]).unwrap();
//! let mut session = GameSession::with_seed(&catalog, 42);
//! session.start_game();
//!
//! session.verify_letter('m');
//! session.verify_letter('c');
//! let outcome = session.verify_letter('a');
//!
//! assert!(matches!(outcome, GuessOutcome::RoundWon { score: 100, .. }));
//! assert_eq!(session.stage(), Stage::Playing);
//! ```

// Core game logic
pub mod core;

// Word catalogs
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Diagnostic logging
pub mod logging;
