//! Command implementations

pub mod build;
pub mod estimate;
pub mod rank;
pub mod report;

pub use build::{BuildConfig, BuildResult, build_set, run_build};
pub use estimate::{EstimateResult, run_estimate};
pub use rank::{PatternRanking, WordRanking, rank_cached_patterns, rank_cached_words};
pub use report::{ReportResult, render_cached_report};
