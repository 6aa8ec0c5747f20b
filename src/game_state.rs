//! The game state engine.
//!
//! # State Machine
//! - `Active` → `Won`: a submitted row matches the target
//! - `Active` → `Lost`: a valid, non-matching row is submitted on the last row
//! - `Won` and `Lost` are terminal; a new engine is built for the next game
//!
//! Every grid mutation is written through to the injected
//! [`PersistenceStore`]. When the game ends the stored progress is reset so
//! the next [`GameEngine::load`] starts fresh, while the finished board stays
//! visible in memory.

use crate::board::{Cell, Cursor, Grid};
use crate::difficulty::DifficultyConfig;
use crate::feedback::{LetterFeedback, get_feedback};
use crate::persistence::{self, LoadedGame, PersistenceStore, SavedProgress};
use crate::wordbank::{TargetWord, WordSelection, WordSet};
use crate::{debug_log, info_log};
use std::collections::BTreeSet;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GameStatus {
    #[default]
    Active,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub const fn game_over_state(self) -> GameOverState {
        GameOverState {
            is_over: self.is_over(),
            won_by_match: matches!(self, Self::Won),
        }
    }
}

/// `won_by_match` is only set when the game ended on the target word.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GameOverState {
    pub is_over: bool,
    pub won_by_match: bool,
}

/// One discrete input from a keyboard or line reader.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Letter(char),
    Delete,
    Submit,
}

/// Why an operation left the engine untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The word set has not been installed yet.
    NotReady,
    GameOver,
    NotALetter,
    RowFull,
    RowEmpty,
    RowIncomplete,
    NoRowsLeft,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineEvent {
    LetterPlaced { row: usize, col: usize, letter: char },
    LetterDeleted { row: usize, col: usize },
    RowAccepted { row: usize },
    InvalidWordSubmitted { word: String },
    Won { row: usize },
    Lost,
    Ignored(IgnoreReason),
}

/// Read-only view handed to renderers after every operation.
#[derive(Clone, Debug)]
pub struct EngineSnapshot<'a> {
    pub grid: &'a Grid,
    pub cursor: Cursor,
    pub status: GameStatus,
    pub game_over: GameOverState,
    pub last_event: Option<&'a EngineEvent>,
    pub ready: bool,
}

pub struct GameEngine<S> {
    config: DifficultyConfig,
    grid: Grid,
    cursor: Cursor,
    word_set: Option<WordSet>,
    target: Option<TargetWord>,
    status: GameStatus,
    /// Rows accepted as guesses; only these get feedback.
    submitted_rows: usize,
    last_event: Option<EngineEvent>,
    store: S,
}

impl<S: PersistenceStore> GameEngine<S> {
    /// Build an engine from whatever `store` holds for this difficulty.
    ///
    /// The engine is not ready until [`install_words`](Self::install_words)
    /// runs. Saved progress is only trusted together with a saved target of
    /// the configured length.
    pub fn load(config: DifficultyConfig, store: S) -> Self {
        let LoadedGame { target, progress } = persistence::load_game(&store);
        let target = target.filter(|t| t.len() == config.word_length);
        let progress = if target.is_some() { progress } else { None };
        if let Some(target) = &target {
            debug_log!("Found saved target of length {}", target.len());
        }
        Self::build(config, target, progress, store)
    }

    /// Build a ready engine from explicit parts, optionally resuming `saved`.
    pub fn from_parts(
        config: DifficultyConfig,
        word_set: WordSet,
        target: TargetWord,
        saved: Option<SavedProgress>,
        store: S,
    ) -> Self {
        let mut engine = Self::build(config, None, saved, store);
        engine.install_words(WordSelection {
            word_set,
            selected_magic_word: target,
        });
        engine
    }

    /// [`load`](Self::load) followed by [`install_words`](Self::install_words).
    pub fn start(config: DifficultyConfig, selection: WordSelection, store: S) -> Self {
        let mut engine = Self::load(config, store);
        engine.install_words(selection);
        engine
    }

    fn build(
        config: DifficultyConfig,
        target: Option<TargetWord>,
        saved: Option<SavedProgress>,
        store: S,
    ) -> Self {
        let rows = config.row_count;
        let cols = config.word_length;
        let (grid, cursor, submitted_rows) = match saved {
            Some(SavedProgress {
                grid,
                cursor,
                submitted_rows,
            }) if grid.has_shape(rows, cols) && cursor.fits(rows, cols) =>
            {
                // A saved cursor off the origin resumes on the following row
                let cursor = if cursor.is_origin() {
                    cursor
                } else {
                    Cursor::new((cursor.row_index + 1).min(rows), 0)
                };
                log::info!(
                    "Resuming {} game at row {}",
                    config.label,
                    cursor.row_index
                );
                // The skipped row only counts if it was accepted before saving
                (grid, cursor, submitted_rows.min(cursor.row_index))
            }
            Some(_) => {
                log::info!("Discarding saved board that does not fit {}", config.label);
                (Grid::new(rows, cols), Cursor::ORIGIN, 0)
            }
            None => (Grid::new(rows, cols), Cursor::ORIGIN, 0),
        };

        let mut engine = Self {
            config,
            grid,
            cursor,
            word_set: None,
            target,
            status: GameStatus::Active,
            submitted_rows,
            last_event: None,
            store,
        };
        if engine.cursor.row_index >= rows {
            log::info!("Resumed past the last row, game is lost");
            engine.finish(GameStatus::Lost);
            engine.last_event = Some(EngineEvent::Lost);
        }
        engine
    }

    /// Finish initialization with the provider's output.
    ///
    /// A target restored from the store wins over the provider's pick; a
    /// freshly adopted target is persisted.
    pub fn install_words(&mut self, selection: WordSelection) {
        let WordSelection {
            word_set,
            selected_magic_word,
        } = selection;
        if self.target.is_none() {
            if !self.status.is_over() {
                persistence::save_target(&mut self.store, &selected_magic_word);
            }
            self.target = Some(selected_magic_word);
        }
        info_log!("Installed word set with {} words", word_set.len());
        self.word_set = Some(word_set);
    }

    pub fn is_ready(&self) -> bool {
        self.word_set.is_some() && self.target.is_some()
    }

    pub fn apply(&mut self, command: Command) -> EngineEvent {
        match command {
            Command::Letter(letter) => self.select_letter(letter),
            Command::Delete => self.delete_letter(),
            Command::Submit => self.submit_row(),
        }
    }

    pub fn select_letter(&mut self, letter: char) -> EngineEvent {
        let event = match self.check_playable() {
            Err(reason) => EngineEvent::Ignored(reason),
            Ok(()) if !letter.is_ascii_alphabetic() => {
                EngineEvent::Ignored(IgnoreReason::NotALetter)
            }
            Ok(()) if self.cursor.col_index >= self.config.word_length => {
                EngineEvent::Ignored(IgnoreReason::RowFull)
            }
            Ok(()) => {
                let Cursor {
                    row_index: row,
                    col_index: col,
                } = self.cursor;
                self.grid.set(row, col, Cell::Letter(letter));
                self.cursor.col_index += 1;
                self.save_progress();
                debug_log!("Placed '{}' at ({}, {})", letter, row, col);
                EngineEvent::LetterPlaced { row, col, letter }
            }
        };
        self.record(event)
    }

    pub fn delete_letter(&mut self) -> EngineEvent {
        let event = match self.check_playable() {
            Err(reason) => EngineEvent::Ignored(reason),
            Ok(()) if self.cursor.col_index == 0 => EngineEvent::Ignored(IgnoreReason::RowEmpty),
            Ok(()) => {
                let row = self.cursor.row_index;
                let col = self.cursor.col_index - 1;
                self.grid.set(row, col, Cell::Empty);
                self.cursor.col_index = col;
                self.save_progress();
                debug_log!("Cleared ({}, {})", row, col);
                EngineEvent::LetterDeleted { row, col }
            }
        };
        self.record(event)
    }

    pub fn submit_row(&mut self) -> EngineEvent {
        let event = match self.check_playable() {
            Err(reason) => EngineEvent::Ignored(reason),
            Ok(()) => self.evaluate_row(),
        };
        self.record(event)
    }

    fn evaluate_row(&mut self) -> EngineEvent {
        let row = self.cursor.row_index;
        if self.cursor.col_index != self.config.word_length {
            return EngineEvent::Ignored(IgnoreReason::RowIncomplete);
        }
        let Some(word) = self.grid.row_word(row) else {
            return EngineEvent::Ignored(IgnoreReason::RowIncomplete);
        };

        if !self.accepts(&word) {
            log::info!("Rejected '{word}': not in word set");
            return EngineEvent::InvalidWordSubmitted { word };
        }

        self.submitted_rows = row + 1;
        if self.target.as_ref().is_some_and(|t| t.matches(&word)) {
            log::info!("Solved on row {}", row + 1);
            self.finish(GameStatus::Won);
            return EngineEvent::Won { row };
        }

        if row + 1 >= self.config.row_count {
            log::info!("Out of rows, game lost");
            self.finish(GameStatus::Lost);
            return EngineEvent::Lost;
        }

        self.cursor = self.cursor.next_row();
        persistence::save_submitted_rows(&mut self.store, self.submitted_rows);
        info_log!("Accepted '{}' on row {}", word, row + 1);
        EngineEvent::RowAccepted { row }
    }

    /// Whether `word` counts as a real guess. The target itself always does,
    /// even if the current word bank no longer lists it.
    fn accepts(&self, word: &str) -> bool {
        self.target.as_ref().is_some_and(|t| t.matches(word))
            || self.word_set.as_ref().is_some_and(|set| set.contains(word))
    }

    fn check_playable(&self) -> Result<(), IgnoreReason> {
        if self.status.is_over() {
            Err(IgnoreReason::GameOver)
        } else if !self.is_ready() {
            Err(IgnoreReason::NotReady)
        } else if self.cursor.row_index >= self.config.row_count {
            Err(IgnoreReason::NoRowsLeft)
        } else {
            Ok(())
        }
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        persistence::reset_progress(
            &mut self.store,
            self.config.row_count,
            self.config.word_length,
        );
    }

    fn save_progress(&mut self) {
        persistence::save_progress(&mut self.store, &self.grid, self.cursor);
    }

    fn record(&mut self, event: EngineEvent) -> EngineEvent {
        self.last_event = Some(event.clone());
        event
    }

    /// Wipe the stored game, for starting over before this one has ended.
    pub fn discard_saved_game(&mut self) {
        persistence::reset_progress(
            &mut self.store,
            self.config.row_count,
            self.config.word_length,
        );
    }
}

impl<S> GameEngine<S> {
    pub fn config(&self) -> &DifficultyConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn game_over_state(&self) -> GameOverState {
        self.status.game_over_state()
    }

    pub fn last_event(&self) -> Option<&EngineEvent> {
        self.last_event.as_ref()
    }

    pub fn target(&self) -> Option<&TargetWord> {
        self.target.as_ref()
    }

    pub fn word_set(&self) -> Option<&WordSet> {
        self.word_set.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn snapshot(&self) -> EngineSnapshot<'_> {
        EngineSnapshot {
            grid: &self.grid,
            cursor: self.cursor,
            status: self.status,
            game_over: self.status.game_over_state(),
            last_event: self.last_event.as_ref(),
            ready: self.word_set.is_some() && self.target.is_some(),
        }
    }

    fn played_rows(&self) -> std::ops::Range<usize> {
        0..self.submitted_rows.min(self.config.row_count)
    }

    fn played_word(&self, row: usize) -> Option<String> {
        if !self.played_rows().contains(&row) {
            return None;
        }
        self.grid.row_word(row)
    }

    /// Colouring of an accepted row, or `None` for rows still open or abandoned.
    pub fn row_feedback(&self, row: usize) -> Option<Vec<LetterFeedback>> {
        let word = self.played_word(row)?;
        let target = self.target.as_ref()?;
        Some(get_feedback(&word, target.as_str()))
    }

    /// Uppercase letters from accepted rows that the target does not contain.
    pub fn disabled_letters(&self) -> BTreeSet<char> {
        let Some(target) = self.target.as_ref() else {
            return BTreeSet::new();
        };
        let mut disabled = BTreeSet::new();
        for row in self.played_rows() {
            let Some(word) = self.played_word(row) else {
                continue;
            };
            for c in word.chars() {
                if !target.as_str().contains(c.to_ascii_lowercase()) {
                    disabled.insert(c.to_ascii_uppercase());
                }
            }
        }
        disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{
        BOARD_KEY, CORRECT_WORD_KEY, CURR_TRYOUT_KEY, MemoryStore, SUBMITTED_ROWS_KEY,
    };

    fn words() -> WordSet {
        ["crane", "words", "slate", "pious", "light", "games", "brick"]
            .into_iter()
            .collect()
    }

    fn engine(store: MemoryStore) -> GameEngine<MemoryStore> {
        GameEngine::from_parts(
            DifficultyConfig::easy().with_rows(6),
            words(),
            TargetWord::new("crane"),
            None,
            store,
        )
    }

    fn type_word<S: PersistenceStore>(engine: &mut GameEngine<S>, word: &str) {
        for c in word.chars() {
            engine.select_letter(c);
        }
    }

    #[test]
    fn test_select_letter_advances_column() {
        let mut engine = engine(MemoryStore::new());
        let event = engine.select_letter('w');
        assert_eq!(
            event,
            EngineEvent::LetterPlaced {
                row: 0,
                col: 0,
                letter: 'w'
            }
        );
        assert_eq!(engine.cursor(), Cursor::new(0, 1));
        assert_eq!(engine.grid().cell(0, 0), Some(Cell::Letter('w')));
    }

    #[test]
    fn test_select_letter_ignored_on_full_row() {
        let mut engine = engine(MemoryStore::new());
        type_word(&mut engine, "words");
        let before = engine.grid().clone();
        assert_eq!(
            engine.select_letter('x'),
            EngineEvent::Ignored(IgnoreReason::RowFull)
        );
        assert_eq!(engine.cursor(), Cursor::new(0, 5));
        assert_eq!(engine.grid(), &before);
    }

    #[test]
    fn test_select_letter_rejects_non_letters() {
        let mut engine = engine(MemoryStore::new());
        assert_eq!(
            engine.select_letter('3'),
            EngineEvent::Ignored(IgnoreReason::NotALetter)
        );
        assert_eq!(engine.cursor(), Cursor::ORIGIN);
    }

    #[test]
    fn test_delete_letter_on_empty_row_is_ignored() {
        let mut engine = engine(MemoryStore::new());
        assert_eq!(
            engine.delete_letter(),
            EngineEvent::Ignored(IgnoreReason::RowEmpty)
        );
        assert_eq!(engine.cursor(), Cursor::ORIGIN);
    }

    #[test]
    fn test_delete_letter_clears_previous_cell() {
        let mut engine = engine(MemoryStore::new());
        type_word(&mut engine, "wo");
        assert_eq!(
            engine.delete_letter(),
            EngineEvent::LetterDeleted { row: 0, col: 1 }
        );
        assert_eq!(engine.cursor(), Cursor::new(0, 1));
        assert_eq!(engine.grid().cell(0, 1), Some(Cell::Empty));
        assert_eq!(engine.grid().cell(0, 0), Some(Cell::Letter('w')));
    }

    #[test]
    fn test_submit_incomplete_row_is_ignored() {
        let mut engine = engine(MemoryStore::new());
        type_word(&mut engine, "cran");
        assert_eq!(
            engine.submit_row(),
            EngineEvent::Ignored(IgnoreReason::RowIncomplete)
        );
        assert_eq!(engine.cursor(), Cursor::new(0, 4));
        assert_eq!(engine.status(), GameStatus::Active);
    }

    #[test]
    fn test_invalid_word_keeps_row_for_correction() {
        let mut engine = engine(MemoryStore::new());
        type_word(&mut engine, "zzzzz");
        let event = engine.submit_row();
        assert_eq!(
            event,
            EngineEvent::InvalidWordSubmitted {
                word: "zzzzz".to_string()
            }
        );
        assert_eq!(engine.cursor(), Cursor::new(0, 5));
        assert_eq!(engine.grid().row_word(0).as_deref(), Some("zzzzz"));
        assert_eq!(engine.last_event(), Some(&event));
        assert!(!engine.game_over_state().is_over);
    }

    #[test]
    fn test_valid_guess_moves_to_next_row() {
        let mut engine = engine(MemoryStore::new());
        type_word(&mut engine, "WORDS");
        assert_eq!(engine.submit_row(), EngineEvent::RowAccepted { row: 0 });
        assert_eq!(engine.cursor(), Cursor::new(1, 0));
    }

    #[test]
    fn test_matching_word_wins_case_insensitively() {
        let mut engine = engine(MemoryStore::new());
        type_word(&mut engine, "CrAnE");
        assert_eq!(engine.submit_row(), EngineEvent::Won { row: 0 });
        assert_eq!(
            engine.game_over_state(),
            GameOverState {
                is_over: true,
                won_by_match: true
            }
        );
    }

    #[test]
    fn test_target_missing_from_word_set_still_wins() {
        let mut engine = GameEngine::from_parts(
            DifficultyConfig::easy(),
            ["words"].into_iter().collect(),
            TargetWord::new("crane"),
            None,
            MemoryStore::new(),
        );
        type_word(&mut engine, "crane");
        assert_eq!(engine.submit_row(), EngineEvent::Won { row: 0 });
    }

    #[test]
    fn test_win_on_last_row_is_a_win() {
        let mut engine = GameEngine::from_parts(
            DifficultyConfig::easy().with_rows(2),
            words(),
            TargetWord::new("crane"),
            None,
            MemoryStore::new(),
        );
        type_word(&mut engine, "words");
        engine.submit_row();
        type_word(&mut engine, "crane");
        assert_eq!(engine.submit_row(), EngineEvent::Won { row: 1 });
        assert_eq!(engine.status(), GameStatus::Won);
    }

    #[test]
    fn test_operations_after_game_over_are_ignored() {
        let mut engine = engine(MemoryStore::new());
        type_word(&mut engine, "crane");
        engine.submit_row();
        let grid = engine.grid().clone();
        for command in [Command::Letter('a'), Command::Delete, Command::Submit] {
            assert_eq!(
                engine.apply(command),
                EngineEvent::Ignored(IgnoreReason::GameOver)
            );
        }
        assert_eq!(engine.grid(), &grid);
    }

    #[test]
    fn test_not_ready_until_words_installed() {
        let store = MemoryStore::new();
        let mut engine = GameEngine::load(DifficultyConfig::easy(), store.clone());
        assert!(!engine.is_ready());
        assert_eq!(
            engine.select_letter('a'),
            EngineEvent::Ignored(IgnoreReason::NotReady)
        );
        assert_eq!(
            engine.submit_row(),
            EngineEvent::Ignored(IgnoreReason::NotReady)
        );
        assert!(!engine.snapshot().ready);
        for key in [CORRECT_WORD_KEY, BOARD_KEY, CURR_TRYOUT_KEY] {
            assert!(store.get(key).unwrap().is_none());
        }

        engine.install_words(WordSelection {
            word_set: words(),
            selected_magic_word: TargetWord::new("slate"),
        });
        assert!(engine.is_ready());
        assert_eq!(
            store.get(CORRECT_WORD_KEY).unwrap().as_deref(),
            Some("\"slate\"")
        );
        assert!(matches!(
            engine.select_letter('a'),
            EngineEvent::LetterPlaced { row: 0, col: 0, .. }
        ));
    }

    #[test]
    fn test_grid_mutations_are_persisted() {
        let store = MemoryStore::new();
        let mut engine = engine(store.clone());
        type_word(&mut engine, "wor");
        engine.delete_letter();

        assert_eq!(
            store.get(CURR_TRYOUT_KEY).unwrap().as_deref(),
            Some(r#"{"rowIndex":0,"colIndex":2}"#)
        );
        let board = store.get(BOARD_KEY).unwrap().unwrap();
        assert!(board.starts_with(r#"[["w","o","","",""]"#));
    }

    #[test]
    fn test_game_over_resets_store_but_not_memory() {
        let store = MemoryStore::new();
        let mut engine = engine(store.clone());
        type_word(&mut engine, "crane");
        engine.submit_row();

        assert!(store.get(CORRECT_WORD_KEY).unwrap().is_none());
        assert_eq!(
            store.get(CURR_TRYOUT_KEY).unwrap().as_deref(),
            Some(r#"{"rowIndex":0,"colIndex":0}"#)
        );
        let loaded = persistence::load_game(&store);
        assert_eq!(loaded.progress.unwrap().grid, Grid::new(6, 5));
        assert_eq!(engine.grid().row_word(0).as_deref(), Some("crane"));
    }

    #[test]
    fn test_resume_moves_past_saved_row() {
        let store = MemoryStore::new();
        {
            let mut engine = engine(store.clone());
            type_word(&mut engine, "words");
            engine.submit_row();
            type_word(&mut engine, "sl");
        }
        let resumed = GameEngine::load(DifficultyConfig::easy().with_rows(6), store.clone());
        assert_eq!(resumed.cursor(), Cursor::new(2, 0));
        assert_eq!(resumed.target(), Some(&TargetWord::new("crane")));
        assert_eq!(resumed.grid().row_word(0).as_deref(), Some("words"));
        assert_eq!(resumed.grid().cell(1, 0), Some(Cell::Letter('s')));
        assert!(resumed.row_feedback(0).is_some());
        assert_eq!(resumed.row_feedback(1), None);
    }

    #[test]
    fn test_resume_skips_unsubmitted_row_without_feedback() {
        let store = MemoryStore::new();
        {
            let mut engine = engine(store.clone());
            type_word(&mut engine, "words");
        }
        let resumed = GameEngine::start(
            DifficultyConfig::easy().with_rows(6),
            WordSelection {
                word_set: words(),
                selected_magic_word: TargetWord::new("slate"),
            },
            store,
        );
        assert_eq!(resumed.cursor(), Cursor::new(1, 0));
        assert_eq!(resumed.grid().row_word(0).as_deref(), Some("words"));
        assert_eq!(resumed.row_feedback(0), None);
        assert!(resumed.disabled_letters().is_empty());
    }

    #[test]
    fn test_accepted_rows_are_counted_in_store() {
        let store = MemoryStore::new();
        let mut engine = engine(store.clone());
        type_word(&mut engine, "zzzzz");
        engine.submit_row();
        assert!(store.get(SUBMITTED_ROWS_KEY).unwrap().is_none());

        for _ in 0..5 {
            engine.delete_letter();
        }
        type_word(&mut engine, "words");
        engine.submit_row();
        assert_eq!(
            store.get(SUBMITTED_ROWS_KEY).unwrap().as_deref(),
            Some("1")
        );
    }

    #[test]
    fn test_resume_ignores_board_of_other_difficulty() {
        let store = MemoryStore::new();
        {
            let mut engine = engine(store.clone());
            type_word(&mut engine, "wo");
        }
        let resumed = GameEngine::load(DifficultyConfig::medium(), store);
        assert_eq!(resumed.cursor(), Cursor::ORIGIN);
        assert_eq!(resumed.grid(), &Grid::new(6, 6));
        assert!(resumed.target().is_none());
    }

    #[test]
    fn test_resume_past_last_row_is_lost() {
        let store = MemoryStore::new();
        let config = DifficultyConfig::easy().with_rows(1);
        {
            let mut engine = GameEngine::from_parts(
                config.clone(),
                words(),
                TargetWord::new("crane"),
                None,
                store.clone(),
            );
            type_word(&mut engine, "wo");
        }
        let resumed = GameEngine::load(config, store.clone());
        assert_eq!(resumed.status(), GameStatus::Lost);
        assert_eq!(resumed.cursor(), Cursor::new(1, 0));
        assert!(store.get(CORRECT_WORD_KEY).unwrap().is_none());
    }

    #[test]
    fn test_disabled_letters_and_feedback_from_played_rows() {
        let mut engine = engine(MemoryStore::new());
        type_word(&mut engine, "words");
        engine.submit_row();
        type_word(&mut engine, "sla");

        let expected: BTreeSet<char> = ['D', 'O', 'S', 'W'].into_iter().collect();
        assert_eq!(engine.disabled_letters(), expected);
        assert_eq!(
            engine.row_feedback(0),
            Some(vec![
                LetterFeedback::NoMatch,
                LetterFeedback::NoMatch,
                LetterFeedback::PartialMatch,
                LetterFeedback::NoMatch,
                LetterFeedback::NoMatch,
            ])
        );
        assert_eq!(engine.row_feedback(1), None);
    }

    #[test]
    fn test_failing_store_does_not_break_play() {
        use crate::error::StoreError;
        use std::io;

        struct BrokenStore;

        impl PersistenceStore for BrokenStore {
            fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
                Err(StoreError::Io(io::Error::other("unavailable")))
            }
            fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
                Err(StoreError::Io(io::Error::other("quota exceeded")))
            }
            fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
                Err(StoreError::Io(io::Error::other("unavailable")))
            }
        }

        let mut engine = GameEngine::start(
            DifficultyConfig::easy(),
            WordSelection {
                word_set: words(),
                selected_magic_word: TargetWord::new("crane"),
            },
            BrokenStore,
        );
        type_word(&mut engine, "crane");
        assert_eq!(engine.submit_row(), EngineEvent::Won { row: 0 });
    }
}
