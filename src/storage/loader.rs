//! Word list and ranked word file loading
//!
//! Both files are line oriented and read wholesale before any computation.
//! Blank lines are skipped; anything else that does not parse is fatal and
//! reported with its file and line.

use crate::analysis::RankEntry;
use crate::core::{WORD_LENGTH, Word, WordError};
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Load a word list: one five-letter word per line
///
/// # Errors
///
/// Returns `Error::InputNotFound` if the file does not exist, `Error::Io` if it
/// cannot be read, and `Error::LengthMismatch` for a word that is not five
/// letters long.
///
/// # Examples
/// ```no_run
/// use wordle_patterns::storage::loader::load_word_list;
///
/// let words = load_word_list("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::from_io(path, e))?;
    parse_word_list(&content, path)
}

/// Parse word list content; `source` only labels errors
///
/// # Errors
///
/// Returns `Error::LengthMismatch` for a word that is not five letters long.
pub fn parse_word_list(content: &str, source: &Path) -> Result<Vec<Word>> {
    non_blank_lines(content)
        .map(|(line_no, line)| {
            Word::new(line).map_err(|WordError::InvalidLength(actual)| Error::LengthMismatch {
                context: format!("{}:{line_no} ({line:?})", source.display()),
                expected: WORD_LENGTH,
                actual,
            })
        })
        .collect()
}

/// Load a ranked word file: `rank word` per line, whitespace separated
///
/// # Errors
///
/// Returns `Error::InputNotFound` if the file does not exist, `Error::Io` if it
/// cannot be read, and `Error::MalformedRecord` for a line that is not an
/// integer followed by a single token.
pub fn load_word_ranks<P: AsRef<Path>>(path: P) -> Result<Vec<RankEntry>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::from_io(path, e))?;
    parse_word_ranks(&content, path)
}

/// Parse ranked word content; `source` only labels errors
///
/// # Errors
///
/// Returns `Error::MalformedRecord` for a line that is not an integer followed
/// by a single token.
pub fn parse_word_ranks(content: &str, source: &Path) -> Result<Vec<RankEntry>> {
    non_blank_lines(content)
        .map(|(line_no, line)| {
            let location = format!("line {line_no}");
            let fields: Vec<&str> = line.split_whitespace().collect();

            let [rank, word] = fields.as_slice() else {
                return Err(Error::malformed(
                    source,
                    location,
                    format!("expected `rank word`, got {} fields", fields.len()),
                ));
            };

            let rank = rank.parse::<i64>().map_err(|e| {
                Error::malformed(source, &location, format!("rank {rank:?} is not an integer: {e}"))
            })?;

            Ok(RankEntry {
                rank,
                word: (*word).to_string(),
            })
        })
        .collect()
}

/// Trimmed non-empty lines with 1-based line numbers
fn non_blank_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn source() -> PathBuf {
        PathBuf::from("test.txt")
    }

    #[test]
    fn parse_word_list_keeps_order() {
        let words = parse_word_list("crane\nslate\nirate\n", &source()).unwrap();

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn parse_word_list_skips_blank_lines_and_whitespace() {
        let words = parse_word_list("  crane \r\n\n\nslate\n", &source()).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate"]);
    }

    #[test]
    fn parse_word_list_rejects_wrong_length_with_line() {
        let err = parse_word_list("crane\nabc\nslate\n", &source()).unwrap_err();

        match err {
            Error::LengthMismatch {
                context,
                expected,
                actual,
            } => {
                assert_eq!(expected, 5);
                assert_eq!(actual, 3);
                assert!(context.contains("test.txt:2"), "{context}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_word_list_empty() {
        assert!(parse_word_list("", &source()).unwrap().is_empty());
    }

    #[test]
    fn parse_word_ranks_reads_pairs() {
        let ranks = parse_word_ranks("100 w1\n50\tw2\n0 w3\n-5 w4\n", &source()).unwrap();

        assert_eq!(ranks.len(), 4);
        assert_eq!(
            ranks[0],
            RankEntry {
                rank: 100,
                word: "w1".to_string()
            }
        );
        assert_eq!(ranks[1].rank, 50);
        assert_eq!(ranks[1].word, "w2");
        assert_eq!(ranks[3].rank, -5);
    }

    #[test]
    fn parse_word_ranks_rejects_non_integer_rank() {
        let err = parse_word_ranks("100 w1\nhigh w2\n", &source()).unwrap_err();

        match err {
            Error::MalformedRecord { location, .. } => assert_eq!(location, "line 2"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_word_ranks_rejects_wrong_field_count() {
        assert!(matches!(
            parse_word_ranks("100\n", &source()),
            Err(Error::MalformedRecord { .. })
        ));
        assert!(matches!(
            parse_word_ranks("100 w1 extra\n", &source()),
            Err(Error::MalformedRecord { .. })
        ));
    }

    #[test]
    fn missing_files_are_input_not_found() {
        let missing = std::env::temp_dir().join("wordle_patterns_no_such_file.txt");

        assert!(matches!(
            load_word_list(&missing),
            Err(Error::InputNotFound { .. })
        ));
        assert!(matches!(
            load_word_ranks(&missing),
            Err(Error::InputNotFound { .. })
        ));
    }

    #[test]
    fn load_word_list_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "wordle_patterns_words_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "crane\nslate\n").unwrap();

        let words = load_word_list(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
    }
}
