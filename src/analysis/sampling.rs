//! Probability-union sampling over ranked words
//!
//! Each ranked word carries an integer rank, read as a percentage chance of
//! the word being a good guess. A trial draws a few distinct words and asks
//! how likely it is that at least one of them is good.

use crate::error::{Error, Result};
use rand::Rng;
use rand::seq::IndexedRandom;

/// One line of a ranked word file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankEntry {
    pub rank: i64,
    pub word: String,
}

impl RankEntry {
    /// The rank read as a probability (rank / 100)
    #[must_use]
    pub fn probability(&self) -> f64 {
        self.rank as f64 / 100.0
    }
}

/// Sampling parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimateConfig {
    pub trials: usize,
    pub sample_size: usize,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            trials: 100,
            sample_size: 4,
        }
    }
}

/// Probability that at least one of several independent events occurs
///
/// Folds `acc = p + (1 - p) * acc` from `acc = 0`, which equals
/// `1 - Π(1 - p)`; the fold order is kept so results are bit-for-bit stable.
///
/// # Examples
/// ```
/// use wordle_patterns::analysis::prob_union;
///
/// assert_eq!(prob_union(&[]), 0.0);
/// assert_eq!(prob_union(&[0.25]), 0.25);
/// assert_eq!(prob_union(&[1.0, 0.5, 0.0, 0.0]), 1.0);
/// ```
#[must_use]
pub fn prob_union(probs: &[f64]) -> f64 {
    probs.iter().fold(0.0, |acc, &p| p + (1.0 - p) * acc)
}

/// Run `config.trials` trials, each drawing `config.sample_size` distinct entries
///
/// Returns one union probability per trial.
///
/// # Errors
/// Returns `Error::InsufficientSample` if there are fewer entries than the
/// sample size.
pub fn estimate<R>(entries: &[RankEntry], config: &EstimateConfig, rng: &mut R) -> Result<Vec<f64>>
where
    R: Rng + ?Sized,
{
    if entries.len() < config.sample_size {
        return Err(Error::InsufficientSample {
            requested: config.sample_size,
            available: entries.len(),
        });
    }

    let estimates = (0..config.trials)
        .map(|_| {
            let probs: Vec<f64> = entries
                .choose_multiple(&mut *rng, config.sample_size)
                .map(RankEntry::probability)
                .collect();
            prob_union(&probs)
        })
        .collect();

    Ok(estimates)
}
