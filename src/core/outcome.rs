//! Per-letter feedback outcomes
//!
//! The numeric codes are part of the external encoding (pattern identifiers
//! and the report glyph table): 0 = must match, 1 = absent, 2 = elsewhere.

use std::fmt;

/// Number of distinct outcome tags
pub const OUTCOME_COUNT: usize = 3;

/// Feedback for one position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Outcome {
    /// Letter present at this exact position
    Match = 0,
    /// Letter not present (after multiplicity is accounted for)
    Absent = 1,
    /// Letter present in the secret but not at this position
    Elsewhere = 2,
}

impl Outcome {
    /// All outcomes in code order
    pub const ALL: [Self; OUTCOME_COUNT] = [Self::Match, Self::Absent, Self::Elsewhere];

    /// The external numeric code (0, 1 or 2)
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Index into per-outcome tables such as budgets and glyph lookups
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Decode an external numeric code
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Match),
            1 => Some(Self::Absent),
            2 => Some(Self::Elsewhere),
            _ => None,
        }
    }

    /// Decode a decimal digit character
    #[must_use]
    pub fn from_digit(ch: char) -> Option<Self> {
        ch.to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .and_then(Self::from_code)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Maximum number of times each outcome may appear in a pattern
///
/// Indexed by [`Outcome::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeBudget(pub [usize; OUTCOME_COUNT]);

impl OutcomeBudget {
    /// The budget the analysis uses: each outcome at most three times
    pub const STANDARD: Self = Self([3, 3, 3]);

    #[inline]
    #[must_use]
    pub const fn limit(&self, outcome: Outcome) -> usize {
        self.0[outcome.index()]
    }

    /// Whether `outcomes` stays within this budget
    #[must_use]
    pub fn allows(&self, outcomes: &[Outcome]) -> bool {
        Outcome::ALL.iter().all(|&tag| {
            outcomes.iter().filter(|&&o| o == tag).count() <= self.limit(tag)
        })
    }
}

impl Default for OutcomeBudget {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(Outcome::Match.code(), 0);
        assert_eq!(Outcome::Absent.code(), 1);
        assert_eq!(Outcome::Elsewhere.code(), 2);
    }

    #[test]
    fn decode_codes_and_digits() {
        for outcome in Outcome::ALL {
            assert_eq!(Outcome::from_code(outcome.code()), Some(outcome));
        }
        assert_eq!(Outcome::from_digit('2'), Some(Outcome::Elsewhere));
        assert_eq!(Outcome::from_digit('3'), None);
        assert_eq!(Outcome::from_digit('x'), None);
    }

    #[test]
    fn standard_budget_rejects_four_of_a_kind() {
        use Outcome::{Absent, Elsewhere, Match};

        let budget = OutcomeBudget::STANDARD;
        assert!(budget.allows(&[Match, Match, Match, Absent, Absent]));
        assert!(!budget.allows(&[Absent, Absent, Absent, Absent, Elsewhere]));
        assert!(!budget.allows(&[Match; 5]));
    }
}
