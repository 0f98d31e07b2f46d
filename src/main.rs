//! Wordle Game - CLI
//!
//! Play a round of the word-guessing game in the terminal, or score a single guess.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io;
use wordle_game::{
    commands::{run_play, score_words},
    game::{Game, seeded_rng, select_solution},
    output::{NoClear, TerminalScreen, print_score_report},
    wordlists::{WordPool, WordSource},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden 5-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for solution selection (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Keep previous output instead of clearing the screen between guesses
    #[arg(long, global = true)]
    no_clear: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Report seed and word list details on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game (default)
    Play,

    /// Score a guess against a solution
    Score {
        /// The solution word
        solution: String,

        /// The guess to score
        guess: String,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli),
        Commands::Score { solution, guess } => run_score_command(&solution, &guess),
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    let source = WordSource::from_arg(&cli.wordlist);
    let pool = WordPool::load(&source)
        .with_context(|| format!("Cannot start game with word list {source}"))?;

    let (mut rng, seed) = seeded_rng(cli.seed);
    let solution = select_solution(&pool, &mut rng)
        .with_context(|| format!("Word list {source} is empty"))?;

    if cli.verbose {
        eprintln!(
            "{}",
            format!("word list: {source} ({} words), seed: {seed}", pool.len()).dimmed()
        );
    }

    let mut game = Game::new(solution);
    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    if cli.no_clear {
        run_play(&mut game, &mut input, &mut out, &mut NoClear)?;
    } else {
        run_play(&mut game, &mut input, &mut out, &mut TerminalScreen)?;
    }

    Ok(())
}

fn run_score_command(solution: &str, guess: &str) -> Result<()> {
    let report = score_words(solution, guess).context("Invalid word")?;
    print_score_report(&mut io::stdout().lock(), &report)?;
    Ok(())
}
