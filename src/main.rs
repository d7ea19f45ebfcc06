//! Word Finder - CLI
//!
//! Lists every dictionary word that can be spelled from a set of letters.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use word_finder::{
    commands::{FindConfig, run_find, scramble},
    log::init_logger,
    output::{print_find_report, print_scramble_result},
    wordlists::WordSource,
};

#[derive(Parser)]
#[command(
    name = "word_finder",
    about = "Find every word that can be spelled from a set of letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default), '-' for stdin, or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List words formable from the given letters
    Find {
        /// Available letters
        letters: String,

        /// Only words using every letter exactly (anagrams)
        #[arg(short, long)]
        anagrams: bool,

        /// Print only the number of matches
        #[arg(short, long)]
        count: bool,

        /// Stop after reading this many words from the list
        #[arg(short = 'n', long)]
        max_words: Option<usize>,

        /// Separator printed after each match
        #[arg(long, default_value = "\n")]
        separator: String,

        /// Show a spinner while scanning
        #[arg(long)]
        progress: bool,
    },

    /// Shuffle the given letters
    Scramble {
        /// Letters to shuffle
        letters: String,

        /// Seed for a repeatable shuffle
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);

    match cli.command {
        Commands::Find {
            letters,
            anagrams,
            count,
            max_words,
            separator,
            progress,
        } => {
            let config = FindConfig {
                anagrams_only: anagrams,
                max_words,
                separator,
                progress,
                ..FindConfig::new(letters)
            };
            run_find_command(config, &cli.wordlist, count)
        }
        Commands::Scramble { letters, seed } => run_scramble_command(&letters, seed),
    }
}

fn run_find_command(config: FindConfig, wordlist: &str, count_only: bool) -> Result<()> {
    let source = WordSource::parse(wordlist);
    log::debug!("Reading candidates from {source}");

    let reader = source
        .open()
        .with_context(|| format!("Failed to load word list from {source}"))?;

    let report = run_find(config, reader);
    print_find_report(&report, count_only);
    Ok(())
}

fn run_scramble_command(letters: &str, seed: Option<u64>) -> Result<()> {
    let result = scramble(letters, seed).context("Cannot scramble letters")?;
    print_scramble_result(&result);
    Ok(())
}
