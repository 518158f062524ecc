//! Command implementations

pub mod simple;
pub mod verify;

pub use simple::run_simple;
pub use verify::{VerifyReport, WordCheck, check_word, run_verify};
