//! Game session controller
//!
//! Owns all mutable game state and applies the player's actions: starting a
//! round, guessing a letter and retrying after a loss. Win and loss checks
//! run synchronously at the end of every guess.

use super::catalog::Catalog;
use super::letters::{decompose, equivalence_class, is_separator, to_upper};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;
use tracing::{debug, info};

/// Wrong guesses allowed per game
pub const MAX_GUESSES: u32 = 3;

/// Points awarded for each word fully revealed
pub const ROUND_POINTS: u32 = 100;

/// Coarse game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Waiting for the player to start
    Start,
    /// A word is on the board
    Playing,
    /// Out of guesses
    Ended,
}

/// Result of a single guess, for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Not playing, or the input was not a guessable character
    Ignored,
    /// The letter (or its class) was already classified; no penalty
    Repeated(char),
    /// Newly revealed characters
    Hit(Vec<char>),
    /// The letter is not in the word; one guess was spent
    Miss(char),
    /// The last hidden letter was revealed and a new round started
    RoundWon { word: String, score: u32 },
    /// The last guess was spent and the game ended
    GameOver { word: String, score: u32 },
}

/// How a single letter position is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Revealed(char),
    Hidden,
    Separator,
}

/// Read-only snapshot of a session for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<'s> {
    pub stage: Stage,
    pub category: &'s str,
    pub tiles: Vec<Tile>,
    pub wrong_letters: &'s [char],
    pub remaining_guesses: u32,
    pub score: u32,
}

/// One player's play session
pub struct GameSession<'a> {
    catalog: &'a Catalog,
    rng: StdRng,
    stage: Stage,
    picked_word: String,
    picked_category: String,
    letters: Vec<char>,
    guessed_letters: FxHashSet<char>,
    wrong_letters: Vec<char>,
    remaining_guesses: u32,
    score: u32,
}

impl<'a> GameSession<'a> {
    /// Create a session drawing words with an OS-seeded RNG
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_rng(catalog, StdRng::from_os_rng())
    }

    /// Create a session with reproducible word selection
    ///
    /// # Examples
    /// ```
    /// use secret_word::core::{Catalog, GameSession, Stage};
    ///
    /// let catalog = Catalog::new([("Frutas", vec!["maçã"])]).unwrap();
    /// let mut session = GameSession::with_seed(&catalog, 1);
    ///
    /// session.start_game();
    /// assert_eq!(session.stage(), Stage::Playing);
    /// assert_eq!(session.letters(), &['M', 'A', 'Ç', 'Ã']);
    /// ```
    #[must_use]
    pub fn with_seed(catalog: &'a Catalog, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: &'a Catalog, rng: StdRng) -> Self {
        Self {
            catalog,
            rng,
            stage: Stage::Start,
            picked_word: String::new(),
            picked_category: String::new(),
            letters: Vec::new(),
            guessed_letters: FxHashSet::default(),
            wrong_letters: Vec::new(),
            remaining_guesses: MAX_GUESSES,
            score: 0,
        }
    }

    /// Leave the start screen and put the first word on the board
    ///
    /// Returns `false` (and does nothing) unless the stage is `Start`.
    pub fn start_game(&mut self) -> bool {
        if self.stage != Stage::Start {
            debug!(stage = ?self.stage, "start ignored");
            return false;
        }

        self.new_round();
        true
    }

    /// Pick a fresh word and reset per-round tracking
    ///
    /// Score and remaining guesses carry over between rounds.
    fn new_round(&mut self) {
        self.clear_letter_states();

        let (word, category) = self.catalog.pick(&mut self.rng);
        self.picked_word = word.to_string();
        self.picked_category = category.to_string();
        self.letters = decompose(word);
        self.stage = Stage::Playing;

        debug!(category = %self.picked_category, tiles = self.letters.len(), "round started");
    }

    fn clear_letter_states(&mut self) {
        self.guessed_letters.clear();
        self.wrong_letters.clear();
    }

    /// Guess a single character
    ///
    /// The guess is uppercased first. A plain A, E, I, O, U or C also
    /// covers its accented variants, so one guess may reveal several
    /// characters. Any variant of the class already classified earlier makes
    /// the guess a free repeat, even if nothing new matches.
    ///
    /// # Examples
    /// ```
    /// use secret_word::core::{Catalog, GameSession, GuessOutcome};
    ///
    /// let catalog = Catalog::new([("Frutas", vec!["maçã"])]).unwrap();
    /// let mut session = GameSession::with_seed(&catalog, 0);
    /// session.start_game();
    ///
    /// assert_eq!(session.verify_letter('c'), GuessOutcome::Hit(vec!['Ç']));
    /// assert_eq!(session.verify_letter('a'), GuessOutcome::Hit(vec!['A', 'Ã']));
    /// assert_eq!(session.remaining_guesses(), 3);
    /// ```
    pub fn verify_letter(&mut self, input: char) -> GuessOutcome {
        if self.stage != Stage::Playing || input.is_whitespace() || input.is_control() {
            return GuessOutcome::Ignored;
        }

        let letter = to_upper(input);
        let outcome = match equivalence_class(letter) {
            Some(class) => self.verify_class(letter, class),
            None => self.verify_single(letter),
        };
        debug!(%letter, ?outcome, remaining = self.remaining_guesses, "letter verified");

        if let Some(won) = self.check_win() {
            return won;
        }
        if let Some(lost) = self.check_loss() {
            return lost;
        }
        outcome
    }

    fn verify_class(&mut self, base: char, class: &[char]) -> GuessOutcome {
        let mut exists = false;
        let mut revealed = Vec::new();

        for &variant in class {
            if self.is_classified(variant) {
                exists = true;
                continue;
            }

            if self.letters.contains(&variant) {
                self.guessed_letters.insert(variant);
                revealed.push(variant);
                exists = true;
            }
        }

        if !revealed.is_empty() {
            GuessOutcome::Hit(revealed)
        } else if exists {
            GuessOutcome::Repeated(base)
        } else {
            self.record_miss(base)
        }
    }

    fn verify_single(&mut self, letter: char) -> GuessOutcome {
        if self.is_classified(letter) {
            return GuessOutcome::Repeated(letter);
        }

        if self.letters.contains(&letter) {
            self.guessed_letters.insert(letter);
            GuessOutcome::Hit(vec![letter])
        } else {
            self.record_miss(letter)
        }
    }

    fn is_classified(&self, c: char) -> bool {
        self.guessed_letters.contains(&c) || self.wrong_letters.contains(&c)
    }

    fn record_miss(&mut self, letter: char) -> GuessOutcome {
        self.wrong_letters.push(letter);
        self.remaining_guesses = self.remaining_guesses.saturating_sub(1);
        GuessOutcome::Miss(letter)
    }

    /// Start a new round if every distinct non-space letter is revealed
    fn check_win(&mut self) -> Option<GuessOutcome> {
        if self.stage != Stage::Playing {
            return None;
        }

        let unique = self
            .letters
            .iter()
            .filter(|&&c| !is_separator(c))
            .collect::<FxHashSet<_>>()
            .len();
        if self.guessed_letters.len() != unique {
            return None;
        }

        self.score += ROUND_POINTS;
        let word = std::mem::take(&mut self.picked_word);
        info!(%word, score = self.score, "round won");

        self.new_round();
        Some(GuessOutcome::RoundWon {
            word,
            score: self.score,
        })
    }

    /// End the game once no guesses remain
    fn check_loss(&mut self) -> Option<GuessOutcome> {
        if self.stage != Stage::Playing || self.remaining_guesses > 0 {
            return None;
        }

        self.clear_letter_states();
        self.stage = Stage::Ended;
        info!(word = %self.picked_word, score = self.score, "game over");

        Some(GuessOutcome::GameOver {
            word: self.picked_word.clone(),
            score: self.score,
        })
    }

    /// Reset score and guesses and return to the start screen
    ///
    /// Returns `false` (and does nothing) unless the game has ended.
    pub fn retry(&mut self) -> bool {
        if self.stage != Stage::Ended {
            debug!(stage = ?self.stage, "retry ignored");
            return false;
        }

        self.score = 0;
        self.remaining_guesses = MAX_GUESSES;
        self.stage = Stage::Start;
        info!("session reset");
        true
    }

    /// Snapshot of everything the presentation layer displays
    #[must_use]
    pub fn board(&self) -> Board<'_> {
        let tiles = self
            .letters
            .iter()
            .map(|&c| {
                if self.guessed_letters.contains(&c) {
                    Tile::Revealed(c)
                } else if is_separator(c) {
                    Tile::Separator
                } else {
                    Tile::Hidden
                }
            })
            .collect();

        Board {
            stage: self.stage,
            category: &self.picked_category,
            tiles,
            wrong_letters: &self.wrong_letters,
            remaining_guesses: self.remaining_guesses,
            score: self.score,
        }
    }

    #[inline]
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn remaining_guesses(&self) -> u32 {
        self.remaining_guesses
    }

    #[must_use]
    pub fn picked_word(&self) -> &str {
        &self.picked_word
    }

    #[must_use]
    pub fn picked_category(&self) -> &str {
        &self.picked_category
    }

    /// Uppercase characters of the current word, spaces included
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[must_use]
    pub const fn guessed_letters(&self) -> &FxHashSet<char> {
        &self.guessed_letters
    }

    /// Wrong guesses in the order they were made
    #[must_use]
    pub fn wrong_letters(&self) -> &[char] {
        &self.wrong_letters
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_of(word: &str) -> Catalog {
        Catalog::new([("Teste", vec![word])]).unwrap()
    }

    fn playing(catalog: &Catalog) -> GameSession<'_> {
        let mut session = GameSession::with_seed(catalog, 0);
        assert!(session.start_game());
        session
    }

    #[test]
    fn new_session_waits_at_start() {
        let catalog = catalog_of("banana");
        let session = GameSession::with_seed(&catalog, 0);

        assert_eq!(session.stage(), Stage::Start);
        assert_eq!(session.score(), 0);
        assert_eq!(session.remaining_guesses(), MAX_GUESSES);
        assert!(session.letters().is_empty());
    }

    #[test]
    fn start_game_populates_word() {
        let catalog = catalog_of("maçã");
        let session = playing(&catalog);

        assert_eq!(session.stage(), Stage::Playing);
        assert_eq!(session.picked_word(), "maçã");
        assert_eq!(session.picked_category(), "Teste");
        assert_eq!(session.letters(), &['M', 'A', 'Ç', 'Ã']);
        assert!(session.guessed_letters().is_empty());
        assert!(session.wrong_letters().is_empty());
    }

    #[test]
    fn start_game_only_from_start() {
        let catalog = catalog_of("banana");
        let mut session = playing(&catalog);
        session.verify_letter('b');

        assert!(!session.start_game());
        assert!(session.guessed_letters().contains(&'B'));
    }

    #[test]
    fn guesses_ignored_outside_playing() {
        let catalog = catalog_of("banana");
        let mut session = GameSession::with_seed(&catalog, 0);

        assert_eq!(session.verify_letter('b'), GuessOutcome::Ignored);
        assert_eq!(session.remaining_guesses(), MAX_GUESSES);
    }

    #[test]
    fn whitespace_guess_ignored() {
        let catalog = catalog_of("a b");
        let mut session = playing(&catalog);

        assert_eq!(session.verify_letter(' '), GuessOutcome::Ignored);
        assert!(session.guessed_letters().is_empty());
        assert_eq!(session.remaining_guesses(), MAX_GUESSES);
    }

    #[test]
    fn lowercase_guess_matches_uppercase_letters() {
        let catalog = catalog_of("banana");
        let mut session = playing(&catalog);

        assert_eq!(session.verify_letter('n'), GuessOutcome::Hit(vec!['N']));
        assert!(session.guessed_letters().contains(&'N'));
    }

    #[test]
    fn plain_miss_costs_one_guess() {
        let catalog = catalog_of("banana");
        let mut session = playing(&catalog);

        assert_eq!(session.verify_letter('z'), GuessOutcome::Miss('Z'));
        assert_eq!(session.wrong_letters(), &['Z']);
        assert_eq!(session.remaining_guesses(), 2);
    }

    #[test]
    fn repeated_hit_is_free() {
        let catalog = catalog_of("banana");
        let mut session = playing(&catalog);

        session.verify_letter('b');
        let before = session.guessed_letters().clone();

        assert_eq!(session.verify_letter('b'), GuessOutcome::Repeated('B'));
        assert_eq!(session.guessed_letters(), &before);
        assert_eq!(session.remaining_guesses(), MAX_GUESSES);
    }

    #[test]
    fn repeated_miss_is_free() {
        let catalog = catalog_of("banana");
        let mut session = playing(&catalog);

        session.verify_letter('z');
        assert_eq!(session.verify_letter('Z'), GuessOutcome::Repeated('Z'));
        assert_eq!(session.wrong_letters(), &['Z']);
        assert_eq!(session.remaining_guesses(), 2);
    }

    #[test]
    fn base_letter_reveals_accented_variants() {
        let catalog = Catalog::new([("Frutas", vec!["MAÇÃ"])]).unwrap();
        let mut session = playing(&catalog);

        assert_eq!(session.verify_letter('C'), GuessOutcome::Hit(vec!['Ç']));
        assert!(session.guessed_letters().contains(&'Ç'));

        assert_eq!(session.verify_letter('m'), GuessOutcome::Hit(vec!['M']));
        assert_eq!(session.remaining_guesses(), MAX_GUESSES);
        assert!(session.wrong_letters().is_empty());
    }

    #[test]
    fn base_letter_reveals_several_variants_at_once() {
        let catalog = Catalog::new([("Frutas", vec!["MAÇÃ"])]).unwrap();
        let mut session = playing(&catalog);

        assert_eq!(session.verify_letter('A'), GuessOutcome::Hit(vec!['A', 'Ã']));
        assert!(session.guessed_letters().contains(&'A'));
        assert!(session.guessed_letters().contains(&'Ã'));
        assert_eq!(session.remaining_guesses(), MAX_GUESSES);
    }

    #[test]
    fn base_letter_miss_records_base() {
        let catalog = catalog_of("pneu");
        let mut session = playing(&catalog);

        assert_eq!(session.verify_letter('a'), GuessOutcome::Miss('A'));
        assert_eq!(session.wrong_letters(), &['A']);
        assert_eq!(session.remaining_guesses(), 2);

        // Whole class already known
        assert_eq!(session.verify_letter('a'), GuessOutcome::Repeated('A'));
        assert_eq!(session.remaining_guesses(), 2);
    }

    #[test]
    fn accented_guess_is_checked_directly() {
        let catalog = catalog_of("pão");
        let mut session = playing(&catalog);

        assert_eq!(session.verify_letter('ã'), GuessOutcome::Hit(vec!['Ã']));
        assert_eq!(session.verify_letter('é'), GuessOutcome::Miss('É'));
        assert_eq!(session.remaining_guesses(), 2);
    }

    #[test]
    fn classified_variant_makes_base_guess_free() {
        // 'Ã' was revealed on its own; 'A' is not in the word but costs nothing
        let catalog = catalog_of("pão");
        let mut session = playing(&catalog);

        session.verify_letter('ã');
        assert_eq!(session.verify_letter('a'), GuessOutcome::Repeated('A'));
        assert_eq!(session.remaining_guesses(), MAX_GUESSES);
        assert!(session.wrong_letters().is_empty());
    }

    #[test]
    fn revealing_all_letters_wins_round() {
        let catalog = Catalog::new([("Frutas", vec!["MAÇÃ"])]).unwrap();
        let mut session = playing(&catalog);

        session.verify_letter('m');
        session.verify_letter('c');
        let outcome = session.verify_letter('a');

        assert_eq!(
            outcome,
            GuessOutcome::RoundWon {
                word: "MAÇÃ".to_string(),
                score: ROUND_POINTS
            }
        );
        assert_eq!(session.score(), ROUND_POINTS);
        assert_eq!(session.stage(), Stage::Playing);
        assert!(session.guessed_letters().is_empty());
        assert!(session.wrong_letters().is_empty());
        assert_eq!(session.picked_word(), "MAÇÃ");
    }

    #[test]
    fn spaces_never_need_guessing() {
        let catalog = catalog_of("A B");
        let mut session = playing(&catalog);
        assert_eq!(session.letters(), &['A', ' ', 'B']);

        session.verify_letter('a');
        assert_eq!(session.score(), 0);

        let outcome = session.verify_letter('b');
        assert!(matches!(outcome, GuessOutcome::RoundWon { score: 100, .. }));
    }

    #[test]
    fn guessing_distinct_letters_in_any_order_wins() {
        let catalog = catalog_of("para-choque");
        let mut session = playing(&catalog);

        let mut distinct: Vec<char> = session.letters().to_vec();
        distinct.sort_unstable();
        distinct.dedup();
        distinct.reverse();

        let mut outcome = GuessOutcome::Ignored;
        for c in distinct {
            outcome = session.verify_letter(c);
            if session.score() > 0 {
                break;
            }
        }

        assert!(matches!(outcome, GuessOutcome::RoundWon { .. }));
        assert_eq!(session.score(), ROUND_POINTS);
        assert_eq!(session.remaining_guesses(), MAX_GUESSES);
    }

    #[test]
    fn guesses_carry_over_between_rounds() {
        let catalog = catalog_of("ovo");
        let mut session = playing(&catalog);

        session.verify_letter('x');
        session.verify_letter('v');
        session.verify_letter('o');

        assert_eq!(session.score(), ROUND_POINTS);
        assert_eq!(session.remaining_guesses(), 2);
        assert!(session.wrong_letters().is_empty());
    }

    #[test]
    fn three_misses_end_the_game() {
        let catalog = catalog_of("banana");
        let mut session = playing(&catalog);
        session.verify_letter('b');

        assert_eq!(session.verify_letter('x'), GuessOutcome::Miss('X'));
        assert_eq!(session.verify_letter('y'), GuessOutcome::Miss('Y'));
        let outcome = session.verify_letter('z');

        assert_eq!(
            outcome,
            GuessOutcome::GameOver {
                word: "banana".to_string(),
                score: 0
            }
        );
        assert_eq!(session.stage(), Stage::Ended);
        assert_eq!(session.remaining_guesses(), 0);
        assert!(session.guessed_letters().is_empty());
        assert!(session.wrong_letters().is_empty());
    }

    #[test]
    fn remaining_guesses_never_increase_within_round() {
        let catalog = catalog_of("computador");
        let mut session = playing(&catalog);

        let mut last = session.remaining_guesses();
        for c in ['k', 'o', 'w', 'c', 'o', 'k', 'z'] {
            session.verify_letter(c);
            assert!(session.remaining_guesses() <= last);
            last = session.remaining_guesses();
        }
        assert_eq!(session.stage(), Stage::Ended);
        assert_eq!(session.remaining_guesses(), 0);

        // No further penalty once ended
        assert_eq!(session.verify_letter('q'), GuessOutcome::Ignored);
        assert_eq!(session.remaining_guesses(), 0);
    }

    #[test]
    fn retry_resets_to_start() {
        let catalog = catalog_of("ovo");
        let mut session = playing(&catalog);
        session.verify_letter('o');
        session.verify_letter('v');
        assert_eq!(session.score(), ROUND_POINTS);

        for c in ['x', 'y', 'z'] {
            session.verify_letter(c);
        }
        assert_eq!(session.stage(), Stage::Ended);
        assert_eq!(session.score(), ROUND_POINTS);

        assert!(session.retry());
        assert_eq!(session.stage(), Stage::Start);
        assert_eq!(session.score(), 0);
        assert_eq!(session.remaining_guesses(), MAX_GUESSES);

        assert!(session.start_game());
        assert_eq!(session.stage(), Stage::Playing);
    }

    #[test]
    fn retry_only_after_game_over() {
        let catalog = catalog_of("ovo");
        let mut session = playing(&catalog);
        session.verify_letter('x');

        assert!(!session.retry());
        assert_eq!(session.stage(), Stage::Playing);
        assert_eq!(session.remaining_guesses(), 2);
    }

    #[test]
    fn board_shows_revealed_hidden_and_separators() {
        let catalog = catalog_of("pão de queijo");
        let mut session = playing(&catalog);
        session.verify_letter('a');
        session.verify_letter('k');

        let board = session.board();
        assert_eq!(board.stage, Stage::Playing);
        assert_eq!(board.category, "Teste");
        assert_eq!(board.wrong_letters, &['K']);
        assert_eq!(board.remaining_guesses, 2);
        assert_eq!(board.tiles[0], Tile::Hidden);
        assert_eq!(board.tiles[1], Tile::Revealed('Ã'));
        assert_eq!(board.tiles[3], Tile::Separator);
        assert_eq!(
            board.tiles.iter().filter(|t| **t == Tile::Separator).count(),
            2
        );
    }

    #[test]
    fn wrong_letters_keep_guess_order() {
        let catalog = catalog_of("computador");
        let mut session = playing(&catalog);

        session.verify_letter('z');
        session.verify_letter('e');

        assert_eq!(session.wrong_letters(), &['Z', 'E']);
    }
}
