//! Formatting utilities for board and outcome text

use crate::core::{GuessOutcome, Tile};

/// Placeholder shown for a letter that is still hidden
pub const HIDDEN_PLACEHOLDER: char = '_';

/// Shown in place of a space between words
pub const SEPARATOR_MARK: char = '-';

/// Render tiles as space-separated characters, e.g. `M _ Ç _`
#[must_use]
pub fn tiles_to_string(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(|tile| match tile {
            Tile::Revealed(c) => *c,
            Tile::Hidden => HIDDEN_PLACEHOLDER,
            Tile::Separator => SEPARATOR_MARK,
        })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Comma-separated list of letters already used, in guess order
#[must_use]
pub fn letters_to_list(letters: &[char]) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Row of filled and empty markers for the guesses left
#[must_use]
pub fn guesses_bar(remaining: u32, max: u32) -> String {
    let filled = remaining.min(max) as usize;
    format!("{}{}", "●".repeat(filled), "○".repeat(max as usize - filled))
}

/// Player-facing message for a guess outcome
///
/// Returns `None` for ignored input, which needs no feedback.
#[must_use]
pub fn describe_outcome(outcome: &GuessOutcome) -> Option<String> {
    let text = match outcome {
        GuessOutcome::Ignored => return None,
        GuessOutcome::Repeated(c) => format!("'{c}' was already tried"),
        GuessOutcome::Hit(revealed) => match revealed.as_slice() {
            [single] => format!("'{single}' is in the word!"),
            many => format!("Revealed {}!", letters_to_list(many)),
        },
        GuessOutcome::Miss(c) => format!("No '{c}' in this word"),
        GuessOutcome::RoundWon { word, score } => {
            format!("You got it: {}! Score: {score}", word.to_uppercase())
        }
        GuessOutcome::GameOver { word, score } => {
            format!("Out of guesses. The word was {}. Score: {score}", word.to_uppercase())
        }
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_render_placeholders_and_separators() {
        let tiles = [Tile::Revealed('A'), Tile::Separator, Tile::Hidden];
        assert_eq!(tiles_to_string(&tiles), "A - _");
    }

    #[test]
    fn tiles_empty() {
        assert_eq!(tiles_to_string(&[]), "");
    }

    #[test]
    fn letters_list_keeps_order() {
        assert_eq!(letters_to_list(&['Z', 'E', 'K']), "Z, E, K");
        assert_eq!(letters_to_list(&[]), "");
    }

    #[test]
    fn guesses_bar_full_and_empty() {
        assert_eq!(guesses_bar(3, 3), "●●●");
        assert_eq!(guesses_bar(1, 3), "●○○");
        assert_eq!(guesses_bar(0, 3), "○○○");
    }

    #[test]
    fn describe_multiple_reveals() {
        let text = describe_outcome(&GuessOutcome::Hit(vec!['A', 'Ã'])).unwrap();
        assert_eq!(text, "Revealed A, Ã!");
    }

    #[test]
    fn describe_ignored_is_silent() {
        assert!(describe_outcome(&GuessOutcome::Ignored).is_none());
    }

    #[test]
    fn describe_game_over_names_word() {
        let outcome = GuessOutcome::GameOver {
            word: "maçã".to_string(),
            score: 200,
        };
        let text = describe_outcome(&outcome).unwrap();
        assert!(text.contains("MAÇÃ"));
        assert!(text.contains("200"));
    }
}
