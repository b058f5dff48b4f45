//! Compatibility cache artifact
//!
//! JSON object keyed by pattern identifier. Each value maps a guess word to
//! its compatible secrets concatenated into one flat string, five characters
//! per word:
//!
//! ```json
//! { "11010": { "crane": "slatetrace", "slate": "crane" } }
//! ```
//!
//! Keys are written zero-padded to five digits. Shorter keys (the identifier
//! written as a bare number) are accepted on read.

use crate::analysis::CompatibilitySet;
use crate::core::{Pattern, PatternError, WORD_LENGTH, Word, WordError};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// On-disk shape: pattern id -> guess -> flattened secrets
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct CacheFile(BTreeMap<String, BTreeMap<String, String>>);

impl CacheFile {
    fn encode(set: &CompatibilitySet) -> Self {
        let groups = set
            .groups()
            .iter()
            .map(|group| {
                let guesses: BTreeMap<String, String> = group
                    .entries()
                    .map(|(guess, secrets)| {
                        let flat: String = secrets.iter().map(|&id| set.word(id).text()).collect();
                        (set.word(guess).text().to_string(), flat)
                    })
                    .collect();
                (group.pattern().id(), guesses)
            })
            .collect();

        Self(groups)
    }

    fn decode(self, source: &Path) -> Result<CompatibilitySet> {
        let mut records = Vec::with_capacity(self.0.len());

        for (key, guesses) in self.0 {
            let pattern = Pattern::from_id(&key).map_err(|e| match e {
                PatternError::InvalidLength(actual) => Error::LengthMismatch {
                    context: format!("{} key {key:?}", source.display()),
                    expected: WORD_LENGTH,
                    actual,
                },
                PatternError::InvalidDigit(_) => {
                    Error::malformed(source, format!("key {key}"), e.to_string())
                }
            })?;

            let mut entries = Vec::with_capacity(guesses.len());
            for (guess, flat) in guesses {
                let location = format!("key {key}/{guess}");
                let guess = Word::new(guess).map_err(|WordError::InvalidLength(actual)| {
                    Error::LengthMismatch {
                        context: format!("{} {location}", source.display()),
                        expected: WORD_LENGTH,
                        actual,
                    }
                })?;
                let secrets = split_words(&flat).ok_or_else(|| {
                    Error::malformed(
                        source,
                        &location,
                        format!(
                            "word stream of {} characters is not a multiple of {WORD_LENGTH}",
                            flat.chars().count()
                        ),
                    )
                })?;
                entries.push((guess, secrets));
            }

            records.push((pattern, entries));
        }

        // Unpadded keys sort differently as strings
        records.sort_by_key(|(pattern, _)| *pattern);
        Ok(CompatibilitySet::from_records(records))
    }
}

/// Regroup a flat character stream into five-letter words
fn split_words(flat: &str) -> Option<Vec<Word>> {
    let chars: Vec<char> = flat.chars().collect();
    if chars.len() % WORD_LENGTH != 0 {
        return None;
    }

    chars
        .chunks(WORD_LENGTH)
        .map(|chunk| Word::new(chunk.iter().collect::<String>()).ok())
        .collect()
}

/// Serialize a set to the cache's JSON text
///
/// # Errors
///
/// Returns `Error::Encode` if serialization fails.
pub fn to_json(set: &CompatibilitySet) -> Result<String> {
    serde_json::to_string(&CacheFile::encode(set)).map_err(Error::Encode)
}

/// Parse cache JSON text; `source` only labels errors
///
/// # Errors
///
/// Returns `Error::MalformedRecord` for invalid JSON, a bad pattern key or a
/// word stream whose length is not a multiple of five, and
/// `Error::LengthMismatch` for a guess word or key of the wrong length.
pub fn from_json(text: &str, source: &Path) -> Result<CompatibilitySet> {
    let file: CacheFile = serde_json::from_str(text)
        .map_err(|e| Error::malformed(source, format!("line {}", e.line()), e.to_string()))?;
    file.decode(source)
}

/// Write a set to `path`
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be created or written, and
/// `Error::Encode` if serialization fails.
pub fn write_cache<P: AsRef<Path>>(set: &CompatibilitySet, path: P) -> Result<()> {
    let path = path.as_ref();
    let io_err = |e: std::io::Error| Error::Io {
        path: path.to_path_buf(),
        source: e,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
    serde_json::to_writer(&mut writer, &CacheFile::encode(set))
        .map_err(|e| write_error(path, e))?;
    writer.flush().map_err(io_err)
}

/// Split a serializer failure into the I/O side and the encoding side
fn write_error(path: &Path, e: serde_json::Error) -> Error {
    if e.is_io() {
        Error::Io {
            path: path.to_path_buf(),
            source: e.into(),
        }
    } else {
        Error::Encode(e)
    }
}

/// Read a set from `path`
///
/// # Errors
///
/// Returns `Error::InputNotFound` if the file does not exist, plus every error
/// [`from_json`] can return.
pub fn read_cache<P: AsRef<Path>>(path: P) -> Result<CompatibilitySet> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path).map_err(|e| Error::from_io(path, e))?);

    let file: CacheFile = serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            Error::Io {
                path: path.to_path_buf(),
                source: e.into(),
            }
        } else {
            Error::malformed(path, format!("line {}", e.line()), e.to_string())
        }
    })?;
    file.decode(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::path::PathBuf;

    fn source() -> PathBuf {
        PathBuf::from("output.json")
    }

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn association_set(set: &CompatibilitySet) -> BTreeSet<(Pattern, String, String)> {
        set.associations()
            .map(|(p, g, s)| (p, g.text().to_string(), s.text().to_string()))
            .collect()
    }

    #[test]
    fn decode_regroups_flat_streams() {
        let json = r#"{ "11010": { "crane": "slatetrace", "slate": "crane" } }"#;
        let set = from_json(json, &source()).unwrap();
        let pattern = Pattern::from_id("11010").unwrap();
        let w = words(&["crane", "slate", "trace"]);

        assert_eq!(set.secrets(&pattern, &w[0]), [&w[1], &w[2]]);
        assert_eq!(set.secrets(&pattern, &w[1]), [&w[0]]);
        assert_eq!(set.association_count(), 3);
    }

    #[test]
    fn decode_pads_numeric_keys() {
        let json = r#"{ "1111": { "abcde": "axxxx" } }"#;
        let set = from_json(json, &source()).unwrap();

        let pattern = set.patterns().next().unwrap();
        assert_eq!(pattern.id(), "01111");
    }

    #[test]
    fn padded_and_unpadded_keys_merge_without_duplicates() {
        let json = r#"{ "1111": { "abcde": "axxxx" }, "01111": { "abcde": "axxxx" } }"#;
        let set = from_json(json, &source()).unwrap();

        assert_eq!(set.groups().len(), 1);
        assert_eq!(set.association_count(), 1);
    }

    #[test]
    fn encode_pads_keys_and_flattens() {
        let set = from_json(r#"{ "1111": { "abcde": "axxxxayyyy" } }"#, &source()).unwrap();
        let json = to_json(&set).unwrap();

        assert_eq!(json, r#"{"01111":{"abcde":"axxxxayyyy"}}"#);
    }

    #[test]
    fn json_round_trip_preserves_associations() {
        let corpus = words(&["crane", "slate", "trace", "react", "caret", "speed", "erase"]);
        let built = CompatibilitySet::build(&corpus, &Pattern::all());

        let loaded = from_json(&to_json(&built).unwrap(), &source()).unwrap();

        assert_eq!(association_set(&built), association_set(&loaded));
        assert_eq!(
            built.patterns().collect::<Vec<_>>(),
            loaded.patterns().collect::<Vec<_>>()
        );
    }

    #[test]
    fn stream_length_must_be_multiple_of_five() {
        let err = from_json(r#"{ "11010": { "crane": "slat" } }"#, &source()).unwrap_err();

        match err {
            Error::MalformedRecord { location, .. } => assert_eq!(location, "key 11010/crane"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_keys_are_rejected() {
        assert!(matches!(
            from_json(r#"{ "01301": {} }"#, &source()),
            Err(Error::MalformedRecord { .. })
        ));
        assert!(matches!(
            from_json(r#"{ "010110": {} }"#, &source()),
            Err(Error::LengthMismatch { actual: 6, .. })
        ));
    }

    #[test]
    fn guess_of_wrong_length_is_rejected() {
        assert!(matches!(
            from_json(r#"{ "11010": { "cranes": "slate" } }"#, &source()),
            Err(Error::LengthMismatch { actual: 6, .. })
        ));
    }

    #[test]
    fn invalid_json_is_malformed() {
        assert!(matches!(
            from_json("{ not json", &source()),
            Err(Error::MalformedRecord { .. })
        ));
        assert!(matches!(
            from_json(r#"{ "11010": ["crane"] }"#, &source()),
            Err(Error::MalformedRecord { .. })
        ));
    }

    #[test]
    fn write_failures_keep_their_kind() {
        let path = source();

        let io = serde_json::Error::io(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        match write_error(&path, io) {
            Error::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }

        let encode = serde_json::from_str::<u8>("x").unwrap_err();
        let err = write_error(&path, encode);
        assert!(matches!(err, Error::Encode(_)));
        assert!(err.to_string().starts_with("failed to encode cache"));
    }

    #[test]
    fn missing_cache_is_input_not_found() {
        let missing = std::env::temp_dir().join("wordle_patterns_no_such_cache.json");
        assert!(matches!(
            read_cache(&missing),
            Err(Error::InputNotFound { .. })
        ));
    }

    #[test]
    fn file_round_trip() {
        let corpus = words(&["crane", "slate", "trace"]);
        let built = CompatibilitySet::build(&corpus, &Pattern::all());
        let path = std::env::temp_dir().join(format!(
            "wordle_patterns_cache_{}.json",
            std::process::id()
        ));

        write_cache(&built, &path).unwrap();
        let loaded = read_cache(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(association_set(&built), association_set(&loaded));
        assert_eq!(loaded.groups().len(), 210);
    }
}
