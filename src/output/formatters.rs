//! Formatting utilities for terminal output

use crate::core::{Outcome, Pattern};

/// Format a pattern as terminal symbols: ✓ match, ✗ absent, ➡ elsewhere
#[must_use]
pub fn pattern_symbols(pattern: Pattern) -> String {
    pattern
        .outcomes()
        .iter()
        .map(|outcome| match outcome {
            Outcome::Match => '✓',
            Outcome::Absent => '✗',
            Outcome::Elsewhere => '➡',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a score relative to the best score in a ranking
#[must_use]
pub fn score_bar(score: usize, best: usize, width: usize) -> String {
    create_progress_bar(score as f64, best as f64, width)
}
