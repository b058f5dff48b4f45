//! Wordle Patterns - CLI
//!
//! Builds the compatibility cache for a word list, ranks patterns and words
//! from it, renders the HTML report and runs the sampling estimator.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use wordle_patterns::{
    analysis::{DEFAULT_TOP_PATTERNS, EstimateConfig},
    commands::{
        BuildConfig, rank_cached_patterns, rank_cached_words, render_cached_report, run_build,
        run_estimate,
    },
    output::{
        print_build_result, print_estimates, print_pattern_ranking, print_report_summary,
        print_word_ranking,
    },
    storage::load_word_list,
};

#[derive(Parser)]
#[command(
    name = "wordle_patterns",
    about = "Wordle feedback pattern analysis: compatibility cache, pattern and word rankings",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list: one five-letter word per line
    #[arg(short = 'w', long, global = true, default_value = "words.txt")]
    words: PathBuf,

    /// Compatibility cache (JSON)
    #[arg(short = 'c', long, global = true, default_value = "output.json")]
    cache: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the compatibility cache from the word list
    Build {
        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Rank patterns by how many (guess, secret) pairs they allow
    RankPatterns {
        /// Only show the best N patterns
        #[arg(short = 'n', long)]
        top: Option<usize>,
    },

    /// Rank words by how many of the top patterns they can produce
    RankWords {
        /// Number of top patterns to score against
        #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_PATTERNS)]
        top: usize,
    },

    /// Render the top patterns as a printable HTML report
    Report {
        /// Number of top patterns to render
        #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_PATTERNS)]
        top: usize,

        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Estimate the chance that one of several sampled words is good
    Estimate {
        /// Ranked word file: `rank word` per line
        #[arg(short, long, default_value = "word_ranks.txt")]
        ranks: PathBuf,

        /// Number of trials
        #[arg(short, long, default_value_t = 100)]
        trials: usize,

        /// Distinct words drawn per trial
        #[arg(short = 'k', long, default_value_t = 4)]
        sample_size: usize,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { quiet } => run_build_command(&cli.words, &cli.cache, quiet),
        Commands::RankPatterns { top } => {
            let ranking = rank_cached_patterns(&cli.cache, top)
                .with_context(|| format!("ranking patterns from {}", cli.cache.display()))?;
            print_pattern_ranking(&ranking);
            Ok(())
        }
        Commands::RankWords { top } => {
            let ranking = rank_cached_words(&cli.cache, top)
                .with_context(|| format!("ranking words from {}", cli.cache.display()))?;
            print_word_ranking(&ranking);
            Ok(())
        }
        Commands::Report { top, output } => run_report_command(&cli.cache, top, output.as_deref()),
        Commands::Estimate {
            ranks,
            trials,
            sample_size,
            seed,
        } => {
            let config = EstimateConfig {
                trials,
                sample_size,
            };
            let result = run_estimate(&ranks, &config, seed)
                .with_context(|| format!("estimating from {}", ranks.display()))?;
            print_estimates(&result);
            Ok(())
        }
    }
}

fn run_build_command(words_path: &Path, cache_path: &Path, quiet: bool) -> Result<()> {
    let words = load_word_list(words_path)
        .with_context(|| format!("loading word list {}", words_path.display()))?;

    let config = BuildConfig {
        show_progress: !quiet,
        ..BuildConfig::default()
    };
    let result = run_build(&words, &config, cache_path)
        .with_context(|| format!("building cache {}", cache_path.display()))?;

    print_build_result(&result);
    Ok(())
}

fn run_report_command(cache_path: &Path, top: usize, output: Option<&Path>) -> Result<()> {
    let report = render_cached_report(cache_path, top)
        .with_context(|| format!("rendering report from {}", cache_path.display()))?;

    match output {
        Some(path) => {
            fs::write(path, &report.html)
                .with_context(|| format!("writing report {}", path.display()))?;
            print_report_summary(&report, &path.display().to_string());
        }
        None => {
            print!("{}", report.html);
            print_report_summary(&report, "stdout");
        }
    }
    Ok(())
}
