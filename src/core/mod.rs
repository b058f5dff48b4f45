//! Core domain types
//!
//! Words, per-letter outcomes and feedback patterns. Everything here is pure
//! and cheap to copy or clone.

mod outcome;
mod pattern;
mod word;

pub use outcome::{OUTCOME_COUNT, Outcome, OutcomeBudget};
pub use pattern::{Pattern, PatternError, enumerate_sequences};
pub use word::{WORD_LENGTH, Word, WordError};
