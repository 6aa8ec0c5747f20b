use crate::difficulty::DifficultyConfig;
use crate::error::{GameError, Result};
use rand::Rng;
use rand::rngs::{StdRng, ThreadRng};
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::collections::HashSet;

/// Keep the lines of `data` that are `length` ASCII letters, lowercased, in bank order.
pub fn load_wordbank_from_str(data: &str, length: usize) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| word.len() == length && word.chars().all(|c| c.is_ascii_alphabetic()))
        .collect()
}

/// The accepted-guess vocabulary. Lookups ignore case.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for word in iter {
            set.insert(word.as_ref());
        }
        set
    }
}

/// The hidden answer, stored lowercase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetWord(String);

impl TargetWord {
    pub fn new(word: &str) -> Self {
        Self(word.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in letters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches(&self, word: &str) -> bool {
        self.0 == word.to_lowercase()
    }
}

/// Result of one provider run: the vocabulary and the word to guess.
#[derive(Clone, Debug)]
pub struct WordSelection {
    pub word_set: WordSet,
    pub selected_magic_word: TargetWord,
}

pub trait WordSetProvider {
    fn generate_words_set(
        &mut self,
        raw_bank: &str,
        config: &DifficultyConfig,
    ) -> Result<WordSelection>;
}

/// Picks the target uniformly at random from the filtered bank.
pub struct RandomWordSetProvider<R> {
    rng: R,
}

impl RandomWordSetProvider<ThreadRng> {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomWordSetProvider<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomWordSetProvider<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomWordSetProvider<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> WordSetProvider for RandomWordSetProvider<R> {
    fn generate_words_set(
        &mut self,
        raw_bank: &str,
        config: &DifficultyConfig,
    ) -> Result<WordSelection> {
        let words = load_wordbank_from_str(raw_bank, config.word_length);
        let Some(selected) = words.choose(&mut self.rng) else {
            return Err(GameError::EmptyWordBank {
                length: config.word_length,
            });
        };
        let selected_magic_word = TargetWord::new(selected);
        let word_set: WordSet = words.iter().collect();
        log::info!(
            "Generated {} word set: {} words",
            config.label,
            word_set.len()
        );
        Ok(WordSelection {
            word_set,
            selected_magic_word,
        })
    }
}
