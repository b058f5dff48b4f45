//! Pattern and word rankings
//!
//! Both rankings are pure functions of a [`CompatibilitySet`]. Scores sort
//! descending; ties keep the set's order (pattern enumeration order, word
//! table order).

use super::set::CompatibilitySet;
use crate::core::{Pattern, Word};
use rustc_hash::FxHashSet;

/// Number of top patterns the word ranking and the report use by default
pub const DEFAULT_TOP_PATTERNS: usize = 100;

/// A pattern with its association count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedPattern {
    pub pattern: Pattern,
    pub score: usize,
}

/// A word with the number of top patterns it can produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedWord {
    pub word: Word,
    pub score: usize,
}

/// Rank every pattern by its total (guess, compatible secret) count
///
/// A high score means the pattern is easy to satisfy, i.e. it discriminates
/// poorly between candidates.
#[must_use]
pub fn rank_patterns(set: &CompatibilitySet) -> Vec<RankedPattern> {
    let mut ranks: Vec<RankedPattern> = set
        .groups()
        .iter()
        .map(|group| RankedPattern {
            pattern: group.pattern(),
            score: group.association_count(),
        })
        .collect();

    ranks.sort_by(|a, b| b.score.cmp(&a.score));
    ranks
}

/// The `n` highest scoring patterns, best first
#[must_use]
pub fn top_patterns(set: &CompatibilitySet, n: usize) -> Vec<Pattern> {
    rank_patterns(set)
        .into_iter()
        .take(n)
        .map(|ranked| ranked.pattern)
        .collect()
}

/// Rank words by how many of `top` patterns they produce against some secret
///
/// Only words that are a guess key under at least one pattern are ranked.
///
/// # Examples
/// ```
/// use wordle_patterns::analysis::{CompatibilitySet, rank_words, top_patterns};
/// use wordle_patterns::core::{Pattern, Word};
///
/// let words: Vec<Word> = ["crane", "slate", "trace"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let set = CompatibilitySet::build(&words, &Pattern::all());
///
/// let ranks = rank_words(&set, &top_patterns(&set, 100));
/// assert!(ranks.windows(2).all(|w| w[0].score >= w[1].score));
/// ```
#[must_use]
pub fn rank_words(set: &CompatibilitySet, top: &[Pattern]) -> Vec<RankedWord> {
    let top: FxHashSet<Pattern> = top.iter().copied().collect();

    let mut ranks: Vec<RankedWord> = set
        .guesses()
        .map(|word| RankedWord {
            word: word.clone(),
            score: set.patterns_for(word).filter(|p| top.contains(p)).count(),
        })
        .collect();

    ranks.sort_by(|a, b| b.score.cmp(&a.score));
    ranks
}
