//! Feedback pattern analysis
//!
//! The compatibility predicate, the pairwise compatibility set built from it,
//! the rankings derived from that set, and the independent sampling
//! estimator.

mod compatibility;
pub mod ranking;
pub mod sampling;
mod set;

pub use compatibility::is_compatible;
pub use ranking::{
    DEFAULT_TOP_PATTERNS, RankedPattern, RankedWord, rank_patterns, rank_words, top_patterns,
};
pub use sampling::{EstimateConfig, RankEntry, estimate, prob_union};
pub use set::{CompatibilitySet, PatternGroup, WordId};
