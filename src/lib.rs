//! Wordle Patterns
//!
//! Feedback pattern analysis for Wordle. For every feedback pattern and every
//! guess word, precomputes which secrets stay compatible, then ranks patterns
//! and words by how little they discriminate.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_patterns::analysis::{CompatibilitySet, rank_patterns};
//! use wordle_patterns::core::{Pattern, Word};
//!
//! let words: Vec<Word> = ["crane", "slate", "trace"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//!
//! let set = CompatibilitySet::build(&words, &Pattern::all());
//! let ranks = rank_patterns(&set);
//! println!("Most common pattern: {} ({})", ranks[0].pattern, ranks[0].score);
//! ```

// Core domain types
pub mod core;

// Compatibility predicate, sets, rankings and sampling
pub mod analysis;

// Word lists, ranked word files and the compatibility cache
pub mod storage;

// Command implementations
pub mod commands;

// Terminal output and the HTML report
pub mod output;

pub mod error;

pub use error::{Error, Result};
