//! Pairwise compatibility sets
//!
//! For every pattern and every ordered pair `(w1, w2)` of corpus words,
//! records `w2` under `(pattern, w1)` when [`is_compatible`]`(w1, pattern, w2)`
//! holds. `w1` is the key (the guess key of the rankings and the cache) and
//! supplies the letter pool. Built once (in parallel, one task per pattern)
//! and read-only afterwards.
//!
//! Words are interned into a table and referenced by [`WordId`]. The set
//! owns two views of the same associations:
//! - by pattern: pattern -> guess key -> compatible words
//! - by word: guess key -> patterns under which it has at least one

use super::compatibility::is_compatible;
use crate::core::{Pattern, Word};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeMap;

/// Index into the word table of a [`CompatibilitySet`]
pub type WordId = usize;

/// Associations recorded for one pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternGroup {
    pattern: Pattern,
    compatible: BTreeMap<WordId, Vec<WordId>>,
}

impl PatternGroup {
    #[must_use]
    pub const fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// Guesses with at least one compatible secret, with those secrets
    pub fn entries(&self) -> impl Iterator<Item = (WordId, &[WordId])> {
        self.compatible
            .iter()
            .map(|(&guess, secrets)| (guess, secrets.as_slice()))
    }

    /// Total number of (guess, secret) associations
    #[must_use]
    pub fn association_count(&self) -> usize {
        self.compatible.values().map(Vec::len).sum()
    }
}

/// Every (pattern, guess) -> compatible secrets association for a corpus
#[derive(Debug, Clone, Default)]
pub struct CompatibilitySet {
    words: Vec<Word>,
    index: FxHashMap<Word, WordId>,
    groups: Vec<PatternGroup>,
    by_word: Vec<Vec<usize>>,
}

impl CompatibilitySet {
    /// Build the set by evaluating the predicate for every pattern and pair
    ///
    /// Duplicate words in `words` are kept once, at their first position.
    ///
    /// # Examples
    /// ```
    /// use wordle_patterns::analysis::CompatibilitySet;
    /// use wordle_patterns::core::{Pattern, Word};
    ///
    /// let words = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
    /// let set = CompatibilitySet::build(&words, &Pattern::all());
    ///
    /// let pattern = Pattern::from_id("11010").unwrap();
    /// let secrets = set.secrets(&pattern, &words[0]);
    /// assert_eq!(secrets, [&words[1]]);
    /// ```
    #[must_use]
    pub fn build(words: &[Word], patterns: &[Pattern]) -> Self {
        Self::build_with_progress(words, patterns, || {})
    }

    /// Like [`CompatibilitySet::build`], calling `tick` once per finished pattern
    ///
    /// `tick` runs on worker threads.
    #[must_use]
    pub fn build_with_progress<F>(words: &[Word], patterns: &[Pattern], tick: F) -> Self
    where
        F: Fn() + Sync,
    {
        let mut set = Self::default();
        for word in words {
            set.intern(word.clone());
        }

        let table = &set.words;
        set.groups = patterns
            .par_iter()
            .map(|&pattern| {
                let group = compare_all(pattern, table);
                tick();
                group
            })
            .collect();

        set.index_words();
        set
    }

    /// Assemble a set from already computed associations
    ///
    /// Records for the same pattern are merged and repeated secrets under one
    /// guess are kept once. Words are interned in order of first appearance.
    #[must_use]
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (Pattern, Vec<(Word, Vec<Word>)>)>,
    {
        let mut set = Self::default();
        let mut positions: FxHashMap<Pattern, usize> = FxHashMap::default();

        for (pattern, guesses) in records {
            let slot = *positions.entry(pattern).or_insert_with(|| {
                set.groups.push(PatternGroup {
                    pattern,
                    compatible: BTreeMap::new(),
                });
                set.groups.len() - 1
            });

            for (guess, secrets) in guesses {
                let guess = set.intern(guess);
                let secrets: Vec<WordId> = secrets.into_iter().map(|w| set.intern(w)).collect();
                if !secrets.is_empty() {
                    set.groups[slot]
                        .compatible
                        .entry(guess)
                        .or_default()
                        .extend(secrets);
                }
            }
        }

        for group in &mut set.groups {
            for secrets in group.compatible.values_mut() {
                let mut seen = FxHashSet::default();
                secrets.retain(|&id| seen.insert(id));
            }
        }

        set.index_words();
        set
    }

    fn intern(&mut self, word: Word) -> WordId {
        if let Some(&id) = self.index.get(&word) {
            return id;
        }
        let id = self.words.len();
        self.index.insert(word.clone(), id);
        self.words.push(word);
        id
    }

    fn index_words(&mut self) {
        let mut by_word = vec![Vec::new(); self.words.len()];
        for (slot, group) in self.groups.iter().enumerate() {
            for &guess in group.compatible.keys() {
                by_word[guess].push(slot);
            }
        }
        self.by_word = by_word;
    }

    /// Word table, in interning order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn word(&self, id: WordId) -> &Word {
        &self.words[id]
    }

    #[must_use]
    pub fn id_of(&self, word: &Word) -> Option<WordId> {
        self.index.get(word).copied()
    }

    /// Per-pattern groups in enumeration (or file) order
    #[must_use]
    pub fn groups(&self) -> &[PatternGroup] {
        &self.groups
    }

    #[must_use]
    pub fn group(&self, pattern: &Pattern) -> Option<&PatternGroup> {
        self.groups.iter().find(|g| g.pattern == *pattern)
    }

    pub fn patterns(&self) -> impl Iterator<Item = Pattern> + '_ {
        self.groups.iter().map(PatternGroup::pattern)
    }

    /// Words recorded under `(pattern, guess)`, in word-table order
    #[must_use]
    pub fn secrets(&self, pattern: &Pattern, guess: &Word) -> Vec<&Word> {
        let Some(guess) = self.id_of(guess) else {
            return Vec::new();
        };
        self.group(pattern)
            .and_then(|g| g.compatible.get(&guess))
            .map(|ids| ids.iter().map(|&id| &self.words[id]).collect())
            .unwrap_or_default()
    }

    /// Patterns under which `guess` has at least one compatible secret
    pub fn patterns_for(&self, guess: &Word) -> impl Iterator<Item = Pattern> + '_ {
        self.id_of(guess)
            .map(|id| self.by_word[id].as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&slot| self.groups[slot].pattern)
    }

    /// Words that are a guess key under at least one pattern
    pub fn guesses(&self) -> impl Iterator<Item = &Word> {
        self.words
            .iter()
            .zip(&self.by_word)
            .filter(|(_, slots)| !slots.is_empty())
            .map(|(word, _)| word)
    }

    /// Every (pattern, guess, secret) association
    pub fn associations(&self) -> impl Iterator<Item = (Pattern, &Word, &Word)> {
        self.groups.iter().flat_map(move |group| {
            group.entries().flat_map(move |(guess, secrets)| {
                secrets
                    .iter()
                    .map(move |&secret| (group.pattern, &self.words[guess], &self.words[secret]))
            })
        })
    }

    /// Total number of associations across all patterns
    #[must_use]
    pub fn association_count(&self) -> usize {
        self.groups.iter().map(PatternGroup::association_count).sum()
    }
}

/// Apply the predicate to every ordered pair of words for one pattern
fn compare_all(pattern: Pattern, words: &[Word]) -> PatternGroup {
    let mut compatible = BTreeMap::new();

    for (key_id, key) in words.iter().enumerate() {
        let matches: Vec<WordId> = words
            .iter()
            .enumerate()
            .filter(|(_, candidate)| is_compatible(key, &pattern, candidate))
            .map(|(id, _)| id)
            .collect();

        if !matches.is_empty() {
            compatible.insert(key_id, matches);
        }
    }

    PatternGroup {
        pattern,
        compatible,
    }
}
