//! Build command
//!
//! Enumerates patterns, builds the compatibility set for a word list and
//! writes it to the cache.

use crate::analysis::CompatibilitySet;
use crate::core::{OutcomeBudget, Pattern, Word};
use crate::error::Result;
use crate::storage::write_cache;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Configuration for a build
#[derive(Debug, Clone, Copy)]
pub struct BuildConfig {
    pub budget: OutcomeBudget,
    pub show_progress: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            budget: OutcomeBudget::STANDARD,
            show_progress: true,
        }
    }
}

/// Result of a build run
#[derive(Debug)]
pub struct BuildResult {
    pub word_count: usize,
    pub pattern_count: usize,
    pub association_count: usize,
    pub duration: Duration,
    pub cache_path: PathBuf,
}

/// Build the compatibility set for `words`, with a progress bar over patterns
#[must_use]
pub fn build_set(words: &[Word], config: &BuildConfig) -> CompatibilitySet {
    let patterns = Pattern::enumerate(config.budget);

    let pb = if config.show_progress {
        ProgressBar::new(patterns.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} patterns ({percent}%) | {elapsed}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let set = CompatibilitySet::build_with_progress(words, &patterns, || pb.inc(1));

    pb.finish_and_clear();
    set
}

/// Build the set for `words` and write it to `cache_path`
///
/// # Errors
///
/// Returns an error if the cache cannot be written.
pub fn run_build(words: &[Word], config: &BuildConfig, cache_path: &Path) -> Result<BuildResult> {
    let start = Instant::now();
    let set = build_set(words, config);
    write_cache(&set, cache_path)?;

    Ok(BuildResult {
        word_count: set.words().len(),
        pattern_count: set.groups().len(),
        association_count: set.association_count(),
        duration: start.elapsed(),
        cache_path: cache_path.to_path_buf(),
    })
}
