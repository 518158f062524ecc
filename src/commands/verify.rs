//! Verify the catalog - auto-play every word
//!
//! Plays each catalog word in its own session, once typing every distinct
//! character as it appears and once typing only the keys of a plain
//! keyboard, and reports words that cannot be won.

use crate::core::letters::{base_letter, decompose, is_separator};
use crate::core::{Catalog, GameSession, Stage};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Result from auto-playing a single word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCheck {
    pub category: String,
    pub word: String,
    /// Won by typing each distinct character exactly as written
    pub direct: bool,
    /// Won using only unaccented keys
    pub plain_keys: bool,
    /// Characters no plain key reveals
    pub unreachable: Vec<char>,
}

impl WordCheck {
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.direct && self.plain_keys
    }
}

/// Statistics from verifying a whole catalog
#[derive(Debug)]
pub struct VerifyReport {
    pub total_words: usize,
    pub direct_winnable: usize,
    pub plain_key_winnable: usize,
    pub failures: Vec<WordCheck>,
    pub total_time: Duration,
}

impl VerifyReport {
    /// Whether every word can at least be won by typing it as written
    #[must_use]
    pub const fn all_direct_winnable(&self) -> bool {
        self.direct_winnable == self.total_words
    }
}

/// Keys typed when playing the word exactly as written
#[must_use]
pub fn direct_keys(word: &str) -> Vec<char> {
    let mut keys = decompose(word);
    keys.retain(|&c| !is_separator(c));
    keys.sort_unstable();
    keys.dedup();
    keys
}

/// Keys typed on a keyboard without accented letters
#[must_use]
pub fn plain_keys(word: &str) -> Vec<char> {
    let mut keys: Vec<char> = direct_keys(word)
        .into_iter()
        .map(base_letter)
        .filter(char::is_ascii)
        .collect();
    keys.sort_unstable();
    keys.dedup();
    keys
}

/// Play a single-word session with the given keys
///
/// Returns whether the round was won before the keys ran out.
#[must_use]
pub fn autoplay(category: &str, word: &str, keys: &[char]) -> bool {
    let Ok(catalog) = Catalog::new([(category, [word])]) else {
        return false;
    };
    let mut session = GameSession::with_seed(&catalog, 0);
    session.start_game();

    for &key in keys {
        session.verify_letter(key);
        if session.score() > 0 {
            return true;
        }
        if session.stage() == Stage::Ended {
            return false;
        }
    }

    false
}

/// Auto-play one word both ways
#[must_use]
pub fn check_word(category: &str, word: &str) -> WordCheck {
    let unreachable = direct_keys(word)
        .into_iter()
        .filter(|c| !base_letter(*c).is_ascii())
        .collect();

    WordCheck {
        category: category.to_string(),
        word: word.to_string(),
        direct: autoplay(category, word, &direct_keys(word)),
        plain_keys: autoplay(category, word, &plain_keys(word)),
        unreachable,
    }
}

/// Verify every word of the catalog in parallel
pub fn run_verify(catalog: &Catalog, show_progress: bool) -> VerifyReport {
    let entries: Vec<(&str, &str)> = catalog.entries().collect();

    let pb = if show_progress {
        ProgressBar::new(entries.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();

    let results: Vec<WordCheck> = entries
        .par_iter()
        .map(|&(category, word)| {
            let check = check_word(category, word);
            debug!(%category, %word, direct = check.direct, plain = check.plain_keys, "word checked");
            pb.inc(1);
            check
        })
        .collect();

    pb.finish_with_message("Complete!");

    let direct_winnable = results.iter().filter(|r| r.direct).count();
    let plain_key_winnable = results.iter().filter(|r| r.plain_keys).count();
    let failures: Vec<WordCheck> = results.into_iter().filter(|r| !r.is_clean()).collect();

    for failure in &failures {
        warn!(category = %failure.category, word = %failure.word, "word not fully winnable");
    }

    VerifyReport {
        total_words: entries.len(),
        direct_winnable,
        plain_key_winnable,
        failures,
        total_time: start.elapsed(),
    }
}
