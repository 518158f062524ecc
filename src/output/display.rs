//! Display functions for boards and command results

use super::formatters::{guesses_bar, letters_to_list, tiles_to_string};
use crate::commands::VerifyReport;
use crate::core::{Board, Catalog, MAX_GUESSES};
use colored::Colorize;

/// Print the current round for line-mode play
pub fn print_board(board: &Board<'_>) {
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Score: {}   Guesses: {}",
        board.score.to_string().bright_yellow().bold(),
        guesses_bar(board.remaining_guesses, MAX_GUESSES).red()
    );
    println!("Hint: {}", board.category.bright_cyan().bold());
    println!("\n    {}\n", tiles_to_string(&board.tiles).bright_white().bold());
    if !board.wrong_letters.is_empty() {
        println!(
            "Letters already used: {}",
            letters_to_list(board.wrong_letters).bright_black()
        );
    }
}

/// Print the catalog's categories with their word counts
pub fn print_categories(catalog: &Catalog) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "CATEGORIES".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    for category in catalog.categories() {
        println!(
            "  {} {:>4} words",
            format!("{:<24}", category.name()).bright_white(),
            category.words().len()
        );
    }

    println!(
        "\n  {} categories, {} words",
        catalog.len(),
        catalog.word_count().to_string().bright_yellow()
    );
}

/// Print the result of verifying a catalog
pub fn print_verify_report(report: &VerifyReport, verbose: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CATALOG VERIFICATION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let pct = |count: usize| {
        if report.total_words > 0 {
            count as f64 / report.total_words as f64 * 100.0
        } else {
            0.0
        }
    };

    println!("\n📊 {}", "Results:".bright_cyan().bold());
    println!("   Words checked:       {}", report.total_words);
    println!(
        "   Winnable as typed:   {} {}",
        report.direct_winnable,
        format!("({:.1}%)", pct(report.direct_winnable)).green()
    );
    println!(
        "   Winnable plain keys: {} {}",
        report.plain_key_winnable,
        format!("({:.1}%)", pct(report.plain_key_winnable)).green()
    );
    println!(
        "   Time taken:          {:.2}s",
        report.total_time.as_secs_f64()
    );

    if report.failures.is_empty() {
        println!("\n{}", "✅ Every word can be won.".green().bold());
        return;
    }

    println!("\n⚠️  {}", "Problem words:".bright_yellow().bold());
    for failure in &report.failures {
        let reason = if failure.direct {
            "needs accented input".yellow()
        } else {
            "cannot be won".red().bold()
        };
        println!(
            "   {} {} {reason}",
            format!("{:<16}", failure.category).bright_black(),
            format!("{:<20}", failure.word).bright_white()
        );
        if verbose && !failure.unreachable.is_empty() {
            println!(
                "   {:<16} no plain key for: {}",
                "",
                letters_to_list(&failure.unreachable)
            );
        }
    }
}
