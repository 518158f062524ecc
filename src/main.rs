//! Secret Word - CLI
//!
//! Word-guessing game with a TUI and a simple line mode, plus catalog tools.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use secret_word::{
    commands::{run_simple, run_verify},
    core::{Catalog, GameSession},
    logging::{self, LogTarget},
    output::{print_categories, print_verify_report},
    wordlists::loader::{builtin, load_from_file},
};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "secret_word",
    about = "Guess the secret word letter by letter before your guesses run out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Catalog file ('[Category]' headers, one word per line); built-in if omitted
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Seed for reproducible word selection
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log filter, e.g. 'debug' or 'secret_word=info' (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Append logs to this file (the TUI only logs when this is set)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Auto-play every catalog word and report words that cannot be won
    Verify {
        /// Show which characters have no plain key
        #[arg(short, long)]
        verbose: bool,
    },

    /// List catalog categories and word counts
    Categories,
}

/// Load the catalog based on the -c flag
fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let catalog = match path {
        Some(path) => load_from_file(path)?,
        None => builtin()?,
    };
    info!(
        categories = catalog.len(),
        words = catalog.word_count(),
        "catalog loaded"
    );
    Ok(catalog)
}

fn new_session(catalog: &Catalog, seed: Option<u64>) -> GameSession<'_> {
    match seed {
        Some(seed) => GameSession::with_seed(catalog, seed),
        None => GameSession::new(catalog),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let target = match (&command, cli.log_file.as_deref()) {
        (_, Some(path)) => LogTarget::File(path),
        (Commands::Play, None) => LogTarget::Disabled,
        _ => LogTarget::Stderr,
    };
    logging::init(target, cli.log_level.as_deref())?;

    let catalog = load_catalog(cli.catalog.as_deref())?;

    match command {
        Commands::Play => run_play_command(&catalog, cli.seed),
        Commands::Simple => {
            let mut session = new_session(&catalog, cli.seed);
            run_simple(&mut session)?;
            Ok(())
        }
        Commands::Verify { verbose } => run_verify_command(&catalog, verbose),
        Commands::Categories => {
            print_categories(&catalog);
            Ok(())
        }
    }
}

fn run_verify_command(catalog: &Catalog, verbose: bool) -> Result<()> {
    println!("🎯 Verifying {} words...", catalog.word_count());

    let report = run_verify(catalog, true);
    print_verify_report(&report, verbose);

    if !report.all_direct_winnable() {
        bail!(
            "{} word(s) cannot be won",
            report.total_words - report.direct_winnable
        );
    }
    Ok(())
}

fn run_play_command(catalog: &Catalog, seed: Option<u64>) -> Result<()> {
    use secret_word::interactive::{App, run_tui};

    let app = App::new(new_session(catalog, seed));
    run_tui(app)
}
