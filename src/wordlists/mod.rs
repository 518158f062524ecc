//! Word lists for Secret Word
//!
//! Provides the built-in catalog compiled into the binary and a loader for
//! catalog files.

mod embedded;
pub mod loader;

pub use embedded::{CATEGORIES, CATEGORY_COUNT, WORD_COUNT};
