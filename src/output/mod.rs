//! Terminal output formatting
//!
//! Display utilities for line-mode play and command results.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_categories, print_verify_report};
