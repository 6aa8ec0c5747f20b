// Library interface for wordle-game
// This allows integration tests to access internal modules

pub mod board;
pub mod cli;
pub mod difficulty;
pub mod error;
pub mod feedback;
pub mod game_state;
pub mod logging;
pub mod persistence;
pub mod session;
pub mod tui;
pub mod wordbank;

// Re-export commonly used types for easier testing
pub use board::{Cell, Cursor, Grid};
pub use difficulty::{Difficulty, DifficultyConfig};
pub use error::{GameError, Result};
pub use feedback::{LetterFeedback, get_feedback};
pub use game_state::{Command, EngineEvent, GameEngine, GameOverState, GameStatus};
pub use persistence::{FileStore, MemoryStore, PersistenceStore};
pub use session::game_loop;
pub use wordbank::{RandomWordSetProvider, TargetWord, WordSelection, WordSet, WordSetProvider};
