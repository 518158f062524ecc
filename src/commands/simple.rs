//! Simple interactive CLI mode
//!
//! Line-based game loop without TUI

use crate::core::{GameSession, GuessOutcome, Stage};
use crate::output::formatters::describe_outcome;
use crate::output::print_board;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(session: &mut GameSession<'_>) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Secret Word - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the secret word one letter at a time.");
    println!("A plain A, E, I, O, U or C also reveals its accented forms.");
    println!("Type 'quit' at any prompt to leave.\n");

    loop {
        match session.stage() {
            Stage::Start => {
                let input = get_user_input("Press Enter to play")?;
                if is_quit(&input) {
                    break;
                }
                session.start_game();
            }
            Stage::Playing => {
                print_board(&session.board());

                let input = get_user_input("Letter")?;
                if is_quit(&input) {
                    break;
                }

                let Some(letter) = parse_guess(&input) else {
                    println!("{}\n", "Type exactly one letter.".red());
                    continue;
                };

                let outcome = session.verify_letter(letter);
                if let Some(text) = describe_outcome(&outcome) {
                    let text = match outcome {
                        GuessOutcome::Hit(_) => text.green(),
                        GuessOutcome::RoundWon { .. } => text.bright_green().bold(),
                        GuessOutcome::Miss(_) | GuessOutcome::GameOver { .. } => text.red(),
                        GuessOutcome::Repeated(_) | GuessOutcome::Ignored => text.normal(),
                    };
                    println!("{text}\n");
                }
            }
            Stage::Ended => {
                println!("\n{}", "═".repeat(60).bright_cyan());
                println!("{}", "    G A M E   O V E R    ".bright_red().bold());
                println!("{}", "═".repeat(60).bright_cyan());
                println!(
                    "\n  Final score: {}\n",
                    session.score().to_string().bright_yellow().bold()
                );

                match get_user_input("Play again? (yes/no)")?
                    .to_lowercase()
                    .as_str()
                {
                    "yes" | "y" | "" => {
                        session.retry();
                    }
                    _ => break,
                }
            }
        }
    }

    println!("\n👋 Thanks for playing! Final score: {}\n", session.score());
    Ok(())
}

/// Accept input that is exactly one character
fn parse_guess(input: &str) -> Option<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() => Some(c),
        _ => None,
    }
}

fn is_quit(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "quit" | "exit")
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        // EOF
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_guess_single_char() {
        assert_eq!(parse_guess("a"), Some('a'));
        assert_eq!(parse_guess("ç"), Some('ç'));
    }

    #[test]
    fn parse_guess_rejects_other_lengths() {
        assert_eq!(parse_guess(""), None);
        assert_eq!(parse_guess("ab"), None);
        assert_eq!(parse_guess(" "), None);
    }

    #[test]
    fn quit_words() {
        assert!(is_quit("quit"));
        assert!(is_quit("EXIT"));
        assert!(!is_quit("q"));
    }
}
