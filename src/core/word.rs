//! Word representation
//!
//! A Word is an immutable sequence of exactly five letter tokens. No alphabet
//! or case rules are applied: the corpus is compared token by token.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word and pattern
pub const WORD_LENGTH: usize = 5;

/// A five-letter word from the corpus
///
/// Ordering and hashing follow the text, so words can key maps and sort
/// deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: [char; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` unless the text is exactly five
    /// characters long.
    ///
    /// # Examples
    /// ```
    /// use wordle_patterns::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        let letters: Vec<char> = text.chars().collect();
        let chars: [char; WORD_LENGTH] = letters
            .try_into()
            .map_err(|letters: Vec<char>| WordError::InvalidLength(letters.len()))?;

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters of the word
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; WORD_LENGTH] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), &['c', 'r', 'a', 'n', 'e']);
    }

    #[test]
    fn word_creation_keeps_tokens_verbatim() {
        let word = Word::new("CrAn3").unwrap();
        assert_eq!(word.text(), "CrAn3");
        assert_eq!(word.char_at(4), '3');
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_length_counts_characters_not_bytes() {
        let word = Word::new("ñandú").unwrap();
        assert_eq!(word.char_at(0), 'ñ');
        assert_eq!(word.char_at(4), 'ú');
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.char_at(0), 'c');
        assert_eq!(word.char_at(2), 'a');
        assert_eq!(word.char_at(4), 'e');
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "speed".parse().unwrap();
        assert_eq!(format!("{word}"), "speed");
    }

    #[test]
    fn word_ordering_follows_text() {
        let mut words = vec![
            Word::new("slate").unwrap(),
            Word::new("aback").unwrap(),
            Word::new("crane").unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["aback", "crane", "slate"]);
    }
}
