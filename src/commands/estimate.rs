//! Estimate command
//!
//! Samples a ranked word file and reports, per trial, the probability that
//! at least one sampled word is a good guess.

use crate::analysis::{EstimateConfig, estimate};
use crate::error::Result;
use crate::storage::load_word_ranks;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;

/// Estimates from one run
#[derive(Debug)]
pub struct EstimateResult {
    pub entries: usize,
    pub sample_size: usize,
    pub estimates: Vec<f64>,
}

impl EstimateResult {
    /// Mean of the per-trial estimates (0 when there are none)
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.estimates.is_empty() {
            return 0.0;
        }
        self.estimates.iter().sum::<f64>() / self.estimates.len() as f64
    }
}

/// Run the estimator over the ranked word file at `ranks_path`
///
/// With a `seed` the run is reproducible; otherwise the thread RNG is used.
///
/// # Errors
///
/// Returns an error if the file is missing or malformed, or holds fewer
/// entries than the sample size.
pub fn run_estimate(
    ranks_path: &Path,
    config: &EstimateConfig,
    seed: Option<u64>,
) -> Result<EstimateResult> {
    let entries = load_word_ranks(ranks_path)?;

    let estimates = match seed {
        Some(seed) => estimate(&entries, config, &mut StdRng::seed_from_u64(seed))?,
        None => estimate(&entries, config, &mut rand::rng())?,
    };

    Ok(EstimateResult {
        entries: entries.len(),
        sample_size: config.sample_size,
        estimates,
    })
}
