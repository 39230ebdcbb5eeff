//! DAAD abbreviation tokenizer CLI.
//!
//! Reads a JSON database generated by the DRC frontend, sweeps candidate
//! maximum abbreviation lengths for the table with the smallest total
//! encoded size, and writes the resulting token file.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use toktab::{
    codec,
    corpus::{Database, TokenFile},
    search::{self, CancelFlag, SweepConfig},
    VERSION,
};

#[derive(Parser)]
#[command(name = "toktab")]
#[command(version = VERSION)]
#[command(about = "Abbreviation table optimizer for DAAD adventure databases", long_about = None)]
struct Cli {
    /// Input filename, JSON database generated by the DRC frontend
    input: PathBuf,

    /// Output filename for the best tokens found (default: stdout)
    output: Option<PathBuf>,

    /// Disable compatibility with original interpreters
    #[arg(short = 'c', long = "no-compatibility", action = ArgAction::SetFalse)]
    compatible: bool,

    /// Smallest maximum abbreviation length tried by the sweep
    #[arg(short = 'l', long, value_name = "MIN_LENGTH", default_value_t = 3)]
    min_length: usize,

    /// Largest maximum abbreviation length tried by the sweep
    #[arg(short = 'L', long, value_name = "MAX_LENGTH", default_value_t = 30)]
    max_length: usize,

    /// Show additional information
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    if cli.max_length < cli.min_length {
        anyhow::bail!("--max-length must be at least --min-length");
    }

    let database = Database::load(&cli.input)?;
    let texts = database.texts();

    let cancel = CancelFlag::new();
    {
        let cancel = cancel.clone();
        ctrlc::set_handler(move || cancel.cancel())?;
    }

    let original_len: usize = texts.iter().map(|text| text.chars().count() + 1).sum();
    println!("Length of texts without compression (excluding objects): {original_len}");

    let config = SweepConfig {
        min_candidate_len: cli.min_length,
        max_candidate_len: cli.max_length,
    };

    // The bar would fight the per-step log lines in verbose mode
    let bar = if cli.verbose {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(config.steps() as u64)
    };
    bar.set_style(ProgressStyle::with_template(
        "{bar:40.cyan/blue} {pos}/{len} lengths tried",
    )?);

    let outcome = search::sweep(&texts, &config, &cancel, |_, _| bar.inc(1));
    bar.finish_and_clear();

    println!("{} bytes saved from text compression", outcome.saved());

    let abbreviations = match &outcome.best {
        Some(best) => {
            if cli.verbose {
                println!();
                println!(
                    "The best combination of abbreviations was found with maximum abbreviation length {}",
                    best.max_len
                );
                println!("{} abbreviations in total, which are:", best.abbreviations.len());
                println!("{:?}", best.abbreviations);
            }
            best.abbreviations.clone()
        }
        None => Vec::new(),
    };
    println!();

    let (tokens, warnings) = codec::encode(&abbreviations, cli.compatible);
    for warning in &warnings {
        eprintln!(
            "Error converting abbreviation {:?}: it has {} characters that exceed code 127, but aren't in the legacy table",
            warning.abbreviation, warning.unmapped
        );
    }

    let token_file = TokenFile::new(tokens);
    match &cli.output {
        Some(path) => {
            std::fs::write(path, serde_json::to_string(&token_file)?)?;
            println!("Abbreviations stored in: {}", path.display());
        }
        None => println!("{}", serde_json::to_string(&token_file)?),
    }

    Ok(())
}
