//! Feedback patterns and their enumeration
//!
//! A pattern is five outcomes, one per letter position. Externally a pattern
//! is identified by the decimal number formed from its outcome codes,
//! zero-padded to five digits (`[Match, Absent, Match, Elsewhere, Elsewhere]`
//! is `"01022"`).
//!
//! The universe of patterns is bounded by an [`OutcomeBudget`]: with the
//! standard budget no outcome appears more than three times, which leaves
//! 210 of the 243 possible sequences.

use super::outcome::{OUTCOME_COUNT, Outcome, OutcomeBudget};
use super::word::WORD_LENGTH;
use std::fmt;
use thiserror::Error;

/// Feedback pattern: one outcome per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern([Outcome; WORD_LENGTH]);

/// Error type for invalid pattern identifiers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern identifier must have 1 to 5 digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid outcome digit {0:?}")]
    InvalidDigit(char),
}

impl Pattern {
    #[inline]
    #[must_use]
    pub const fn new(outcomes: [Outcome; WORD_LENGTH]) -> Self {
        Self(outcomes)
    }

    /// Every outcome is `Match`: the pattern a word produces against itself
    pub const ALL_MATCH: Self = Self([Outcome::Match; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn outcomes(&self) -> &[Outcome; WORD_LENGTH] {
        &self.0
    }

    /// Positions carrying `outcome`, in ascending order
    pub fn positions_of(&self, outcome: Outcome) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(move |&(_, &o)| o == outcome)
            .map(|(i, _)| i)
    }

    /// Decimal identifier, zero-padded to five digits
    ///
    /// # Examples
    /// ```
    /// use wordle_patterns::core::{Outcome, Pattern};
    ///
    /// let p = Pattern::new([
    ///     Outcome::Match,
    ///     Outcome::Absent,
    ///     Outcome::Match,
    ///     Outcome::Elsewhere,
    ///     Outcome::Elsewhere,
    /// ]);
    /// assert_eq!(p.id(), "01022");
    /// assert_eq!(Pattern::from_id("01022").unwrap(), p);
    /// ```
    #[must_use]
    pub fn id(&self) -> String {
        self.0.iter().map(|o| char::from(b'0' + o.code())).collect()
    }

    /// The identifier read as a plain integer (`"01022"` is 1022)
    #[must_use]
    pub fn number(&self) -> u32 {
        self.0
            .iter()
            .fold(0, |acc, o| acc * 10 + u32::from(o.code()))
    }

    /// Parse a decimal identifier
    ///
    /// Identifiers shorter than five digits are left-padded with `0`, since
    /// the number 1022 and the string `"01022"` name the same pattern.
    ///
    /// # Errors
    /// Returns `PatternError` if the identifier is empty, longer than five
    /// digits, or contains a digit other than 0, 1 or 2.
    pub fn from_id(id: &str) -> Result<Self, PatternError> {
        let digits: Vec<char> = id.chars().collect();
        if digits.is_empty() || digits.len() > WORD_LENGTH {
            return Err(PatternError::InvalidLength(digits.len()));
        }

        let mut outcomes = [Outcome::Match; WORD_LENGTH];
        let offset = WORD_LENGTH - digits.len();
        for (slot, &ch) in outcomes[offset..].iter_mut().zip(&digits) {
            *slot = Outcome::from_digit(ch).ok_or(PatternError::InvalidDigit(ch))?;
        }

        Ok(Self(outcomes))
    }

    /// Comma separated outcome codes, e.g. `0,1,0,2,2`
    #[must_use]
    pub fn to_codes(&self) -> String {
        self.0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Whether no outcome exceeds the standard budget
    #[must_use]
    pub fn is_within_budget(&self) -> bool {
        OutcomeBudget::STANDARD.allows(&self.0)
    }

    /// Every pattern allowed by `budget`, in enumeration order
    #[must_use]
    pub fn enumerate(budget: OutcomeBudget) -> Vec<Self> {
        enumerate_sequences(WORD_LENGTH, budget)
            .into_iter()
            .filter_map(|seq| <[Outcome; WORD_LENGTH]>::try_from(seq).ok().map(Self))
            .collect()
    }

    /// Every pattern allowed by the standard budget
    #[must_use]
    pub fn all() -> Vec<Self> {
        Self::enumerate(OutcomeBudget::STANDARD)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s)
    }
}

/// Enumerate every outcome sequence of `length` that stays within `budget`
///
/// Depth-first: at each position try the outcomes in code order, spending
/// one unit of that outcome's budget and restoring it on return. The order is
/// deterministic, and downstream artifacts rely on it.
///
/// # Examples
/// ```
/// use wordle_patterns::core::{OutcomeBudget, enumerate_sequences};
///
/// let sequences = enumerate_sequences(3, OutcomeBudget([1, 1, 1]));
/// assert_eq!(sequences.len(), 6); // permutations of the three outcomes
/// ```
#[must_use]
pub fn enumerate_sequences(length: usize, budget: OutcomeBudget) -> Vec<Vec<Outcome>> {
    let mut remaining = budget.0;
    let mut prefix = Vec::with_capacity(length);
    let mut out = Vec::new();
    extend_sequences(length, &mut remaining, &mut prefix, &mut out);
    out
}

fn extend_sequences(
    length: usize,
    remaining: &mut [usize; OUTCOME_COUNT],
    prefix: &mut Vec<Outcome>,
    out: &mut Vec<Vec<Outcome>>,
) {
    if prefix.len() == length {
        out.push(prefix.clone());
        return;
    }

    for outcome in Outcome::ALL {
        let slot = outcome.index();
        if remaining[slot] > 0 {
            remaining[slot] -= 1;
            prefix.push(outcome);
            extend_sequences(length, remaining, prefix, out);
            prefix.pop();
            remaining[slot] += 1;
        }
    }
}
