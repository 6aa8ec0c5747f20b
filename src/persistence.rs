//! Key-value persistence of an unfinished game.
//!
//! Stored keys:
//! - `correctWord`: the target word as a JSON string
//! - `board`: the grid as a 2-D JSON array of strings
//! - `currTryout`: the cursor as `{"rowIndex": n, "colIndex": m}`
//! - `submittedRows`: how many rows were accepted as guesses
//!
//! Every helper here swallows storage failures after logging them. The
//! engine's in-memory state stays authoritative for the running session.

use crate::board::{Cursor, Grid};
use crate::error::StoreError;
use crate::wordbank::TargetWord;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub const CORRECT_WORD_KEY: &str = "correctWord";
pub const BOARD_KEY: &str = "board";
pub const CURR_TRYOUT_KEY: &str = "currTryout";
pub const SUBMITTED_ROWS_KEY: &str = "submittedRows";

const APP_DIR: &str = "wordle-game";
const STATE_FILE: &str = "state.json";

pub trait PersistenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

}

impl PersistenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON object file, rewritten on every change.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open `path`, starting empty if it is missing or unreadable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match Self::read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!(
                    "Ignoring unreadable state file {}: {}",
                    path.display(),
                    e
                );
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(path: &Path) -> Result<BTreeMap<String, String>, StoreError> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl PersistenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// Default location of the state file, under the platform data directory.
pub fn default_state_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR).join(STATE_FILE))
}

/// Grid and cursor as they were last written.
///
/// Rows at or past `submitted_rows` were typed but never accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedProgress {
    pub grid: Grid,
    pub cursor: Cursor,
    pub submitted_rows: usize,
}

/// Everything a new engine can pick up from the store.
#[derive(Clone, Debug, Default)]
pub struct LoadedGame {
    pub target: Option<TargetWord>,
    pub progress: Option<SavedProgress>,
}

fn read_json<T: DeserializeOwned>(store: &impl PersistenceStore, key: &str) -> Option<T> {
    match store.get(key) {
        Ok(Some(text)) => match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Discarding malformed '{key}' entry: {e}");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            log::warn!("Failed to read '{key}': {e}");
            None
        }
    }
}

fn write_json<T: Serialize>(store: &mut impl PersistenceStore, key: &str, value: &T) {
    let result = serde_json::to_string(value)
        .map_err(StoreError::from)
        .and_then(|text| store.set(key, &text));
    if let Err(e) = result {
        log::warn!("Failed to save '{key}': {e}");
    }
}

/// Read the saved target, grid and cursor. Missing or malformed entries come back as `None`.
pub fn load_game(store: &impl PersistenceStore) -> LoadedGame {
    let target = read_json::<String>(store, CORRECT_WORD_KEY).map(|word| TargetWord::new(&word));
    let grid = read_json::<Grid>(store, BOARD_KEY);
    let cursor = read_json::<Cursor>(store, CURR_TRYOUT_KEY);
    let progress = match (grid, cursor) {
        (Some(grid), Some(cursor)) => Some(SavedProgress {
            grid,
            cursor,
            submitted_rows: read_json(store, SUBMITTED_ROWS_KEY).unwrap_or(0),
        }),
        _ => None,
    };
    LoadedGame { target, progress }
}

pub fn save_target(store: &mut impl PersistenceStore, target: &TargetWord) {
    write_json(store, CORRECT_WORD_KEY, &target.as_str());
}

pub fn save_progress(store: &mut impl PersistenceStore, grid: &Grid, cursor: Cursor) {
    write_json(store, BOARD_KEY, grid);
    write_json(store, CURR_TRYOUT_KEY, &cursor);
}

pub fn save_submitted_rows(store: &mut impl PersistenceStore, submitted_rows: usize) {
    write_json(store, SUBMITTED_ROWS_KEY, &submitted_rows);
}

/// Forget the finished game: empty board of the given size, no target, cursor at the origin.
pub fn reset_progress(store: &mut impl PersistenceStore, row_count: usize, col_count: usize) {
    write_json(store, BOARD_KEY, &Grid::new(row_count, col_count));
    if let Err(e) = store.remove(CORRECT_WORD_KEY) {
        log::warn!("Failed to remove '{CORRECT_WORD_KEY}': {e}");
    }
    write_json(store, CURR_TRYOUT_KEY, &Cursor::ORIGIN);
    write_json(store, SUBMITTED_ROWS_KEY, &0_usize);
}
