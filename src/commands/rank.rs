//! Ranking commands
//!
//! Load a compatibility cache and rank its patterns or words.

use crate::analysis::{RankedPattern, RankedWord, rank_patterns, rank_words, top_patterns};
use crate::error::Result;
use crate::storage::read_cache;
use std::path::Path;

/// Pattern ranking, best first
#[derive(Debug)]
pub struct PatternRanking {
    pub total_patterns: usize,
    pub ranks: Vec<RankedPattern>,
}

/// Word ranking against the top patterns
#[derive(Debug)]
pub struct WordRanking {
    pub top_patterns: usize,
    pub ranks: Vec<RankedWord>,
}

/// Rank the cached patterns, keeping the best `top` (all when `None`)
///
/// # Errors
///
/// Returns an error if the cache is missing or malformed.
pub fn rank_cached_patterns(cache_path: &Path, top: Option<usize>) -> Result<PatternRanking> {
    let set = read_cache(cache_path)?;
    let mut ranks = rank_patterns(&set);
    let total_patterns = ranks.len();

    if let Some(n) = top {
        ranks.truncate(n);
    }

    Ok(PatternRanking {
        total_patterns,
        ranks,
    })
}

/// Rank the cached words by how many of the `top` best patterns they produce
///
/// # Errors
///
/// Returns an error if the cache is missing or malformed.
pub fn rank_cached_words(cache_path: &Path, top: usize) -> Result<WordRanking> {
    let set = read_cache(cache_path)?;
    let best = top_patterns(&set, top);

    Ok(WordRanking {
        top_patterns: best.len(),
        ranks: rank_words(&set, &best),
    })
}
