//! Display functions for command results
//!
//! Headings and summaries go to stderr; ranking and estimate lines go to
//! stdout so they can be piped.

use super::formatters::{pattern_symbols, score_bar};
use crate::commands::{BuildResult, EstimateResult, PatternRanking, ReportResult, WordRanking};
use colored::Colorize;

fn heading(title: &str) {
    eprintln!("\n{}", "═".repeat(60).cyan());
    eprintln!(" {} ", title.bright_cyan().bold());
    eprintln!("{}", "═".repeat(60).cyan());
}

/// Print the summary of a build
pub fn print_build_result(result: &BuildResult) {
    heading("COMPATIBILITY CACHE BUILT");

    eprintln!("\n📊 {}", "Build:".bright_cyan().bold());
    eprintln!("   Words:            {}", result.word_count);
    eprintln!("   Patterns:         {}", result.pattern_count);
    eprintln!(
        "   Associations:     {}",
        result.association_count.to_string().bright_yellow().bold()
    );
    eprintln!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    eprintln!(
        "   Cache:            {}",
        result.cache_path.display().to_string().green()
    );
}

/// Print a pattern ranking as `score id` lines
pub fn print_pattern_ranking(ranking: &PatternRanking) {
    heading("PATTERN RANKING");
    eprintln!(
        "Showing {} of {} patterns\n",
        ranking.ranks.len(),
        ranking.total_patterns
    );

    let best = ranking.ranks.first().map_or(0, |r| r.score);
    for ranked in &ranking.ranks {
        println!(
            "{} {}  {} {}",
            ranked.score,
            ranked.pattern.id(),
            pattern_symbols(ranked.pattern),
            score_bar(ranked.score, best, 20).green()
        );
    }
}

/// Print a word ranking as `score word` lines
pub fn print_word_ranking(ranking: &WordRanking) {
    heading("WORD RANKING");
    eprintln!(
        "Scored against the top {} patterns\n",
        ranking.top_patterns
    );

    for ranked in &ranking.ranks {
        println!("{} {}", ranked.score, ranked.word);
    }
}

/// Print where a report went
pub fn print_report_summary(result: &ReportResult, destination: &str) {
    eprintln!(
        "{} {} patterns on {} pages -> {}",
        "Report:".bright_cyan().bold(),
        result.patterns,
        result.pages,
        destination.green()
    );
}

/// Print one estimate per line, then the mean
pub fn print_estimates(result: &EstimateResult) {
    heading("PROBABILITY ESTIMATES");
    eprintln!(
        "{} trials of {} draws from {} ranked words\n",
        result.estimates.len(),
        result.sample_size,
        result.entries
    );

    for estimate in &result.estimates {
        println!("{estimate}");
    }

    eprintln!(
        "\n   Mean:   {}",
        format!("{:.4}", result.mean()).bright_yellow().bold()
    );
}
