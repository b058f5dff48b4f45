//! Pattern compatibility predicate
//!
//! Decides whether `candidate`, guessed against `secret`, is consistent with
//! the game reporting `pattern`.
//!
//! The secret's letters form a pool keyed by position. Three passes shrink
//! the pool in a fixed order, and later passes see only what earlier passes
//! left behind:
//! 1. `Match` positions must hold the same letter in both words and consume
//!    that slot. A non-`Match` position where both words agree rejects,
//!    because the game would have reported `Match` there.
//! 2. `Elsewhere` positions consume one remaining occurrence of the
//!    candidate's letter, searched by value and removed by position.
//! 3. `Absent` positions require the candidate's letter to be gone from the
//!    pool.
//!
//! Reordering the passes changes the duplicate-letter semantics.

use crate::core::{Outcome, Pattern, WORD_LENGTH, Word};

/// Secret letters not yet accounted for, keyed by position
struct LetterPool([Option<char>; WORD_LENGTH]);

impl LetterPool {
    fn new(word: &Word) -> Self {
        Self((*word.chars()).map(Some))
    }

    fn take(&mut self, position: usize) {
        self.0[position] = None;
    }

    /// First remaining position holding `letter`
    fn find(&self, letter: char) -> Option<usize> {
        self.0.iter().position(|&slot| slot == Some(letter))
    }

    fn contains(&self, letter: char) -> bool {
        self.find(letter).is_some()
    }
}

/// Check whether guessing `candidate` against `secret` could report `pattern`
///
/// The relation is not symmetric: the pool is drawn from `secret` and
/// searched for the letters of `candidate`.
///
/// # Examples
/// ```
/// use wordle_patterns::analysis::is_compatible;
/// use wordle_patterns::core::{Pattern, Word};
///
/// let secret = Word::new("abcde").unwrap();
/// let pattern = Pattern::from_id("01111").unwrap();
///
/// assert!(is_compatible(&secret, &pattern, &Word::new("axxxx").unwrap()));
/// assert!(!is_compatible(&secret, &pattern, &Word::new("xacde").unwrap()));
/// ```
#[must_use]
pub fn is_compatible(secret: &Word, pattern: &Pattern, candidate: &Word) -> bool {
    let mut pool = LetterPool::new(secret);

    for (i, &outcome) in pattern.outcomes().iter().enumerate() {
        let same = secret.char_at(i) == candidate.char_at(i);
        match outcome {
            Outcome::Match if same => pool.take(i),
            Outcome::Match => return false,
            _ if same => return false,
            _ => {}
        }
    }

    for i in pattern.positions_of(Outcome::Elsewhere) {
        match pool.find(candidate.char_at(i)) {
            Some(position) => pool.take(position),
            None => return false,
        }
    }

    pattern
        .positions_of(Outcome::Absent)
        .all(|i| !pool.contains(candidate.char_at(i)))
}
