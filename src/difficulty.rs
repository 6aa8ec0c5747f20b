//! Difficulty levels and the board layout each one implies.

use crate::error::{GameError, Result};
use clap::ValueEnum;
use std::fs;
use std::path::PathBuf;

pub const EMBEDDED_WORDBANK_EASY: &str = include_str!("resources/wordbank-easy.txt");
pub const EMBEDDED_WORDBANK_MEDIUM: &str = include_str!("resources/wordbank-medium.txt");
pub const EMBEDDED_WORDBANK_HARD: &str = include_str!("resources/wordbank-hard.txt");

/// Rows and word length always add up to this, so longer words get fewer tries.
const ROWS_PLUS_LENGTH: usize = 12;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    pub const fn word_length(self) -> usize {
        match self {
            Self::Easy => 5,
            Self::Medium => 6,
            Self::Hard => 7,
        }
    }

    pub const fn row_count(self) -> usize {
        ROWS_PLUS_LENGTH - self.word_length()
    }

    pub const fn embedded_wordbank(self) -> &'static str {
        match self {
            Self::Easy => EMBEDDED_WORDBANK_EASY,
            Self::Medium => EMBEDDED_WORDBANK_MEDIUM,
            Self::Hard => EMBEDDED_WORDBANK_HARD,
        }
    }
}

/// Where the raw word bank for a game comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WordBankRef {
    Embedded(Difficulty),
    File(PathBuf),
}

impl WordBankRef {
    /// Read the raw, unfiltered bank text.
    pub fn load(&self) -> Result<String> {
        match self {
            Self::Embedded(difficulty) => Ok(difficulty.embedded_wordbank().to_string()),
            Self::File(path) => fs::read_to_string(path).map_err(|source| GameError::WordBankIo {
                path: path.clone(),
                source,
            }),
        }
    }
}

/// Everything the engine and the word-set provider need to know about a level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DifficultyConfig {
    pub label: &'static str,
    pub word_length: usize,
    pub row_count: usize,
    pub word_bank: WordBankRef,
}

impl DifficultyConfig {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            label: difficulty.label(),
            word_length: difficulty.word_length(),
            row_count: difficulty.row_count(),
            word_bank: WordBankRef::Embedded(difficulty),
        }
    }

    pub fn easy() -> Self {
        Self::new(Difficulty::Easy)
    }

    pub fn medium() -> Self {
        Self::new(Difficulty::Medium)
    }

    pub fn hard() -> Self {
        Self::new(Difficulty::Hard)
    }

    #[must_use]
    pub fn with_rows(mut self, row_count: usize) -> Self {
        self.row_count = row_count.max(1);
        self
    }

    #[must_use]
    pub fn with_word_bank_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.word_bank = WordBankRef::File(path.into());
        self
    }
}

impl From<Difficulty> for DifficultyConfig {
    fn from(difficulty: Difficulty) -> Self {
        Self::new(difficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_per_difficulty() {
        assert_eq!(
            (Difficulty::Easy.word_length(), Difficulty::Easy.row_count()),
            (5, 7)
        );
        assert_eq!(
            (Difficulty::Medium.word_length(), Difficulty::Medium.row_count()),
            (6, 6)
        );
        assert_eq!(
            (Difficulty::Hard.word_length(), Difficulty::Hard.row_count()),
            (7, 5)
        );
    }

    #[test]
    fn test_with_rows_never_zero() {
        assert_eq!(DifficultyConfig::easy().with_rows(0).row_count, 1);
        assert_eq!(DifficultyConfig::easy().with_rows(6).row_count, 6);
    }

    #[test]
    fn test_embedded_banks_load() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let raw = WordBankRef::Embedded(difficulty).load().unwrap();
            assert!(
                raw.lines()
                    .any(|line| line.trim().len() == difficulty.word_length())
            );
        }
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = std::env::temp_dir().join("wordle_game_no_such_bank.txt");
        let _ = fs::remove_file(&path);
        let err = WordBankRef::File(path.clone()).load().unwrap_err();
        match err {
            GameError::WordBankIo { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("Expected WordBankIo, got {other:?}"),
        }
    }
}
