use crate::board::Cell;
use crate::difficulty::{Difficulty, DifficultyConfig};
use crate::feedback::feedback_string;
use crate::game_state::{Command, GameOverState, GameStatus};
use crate::session::{EngineView, GameInterface, UserAction};
use crate::wordbank::TargetWord;
use clap::Parser;
use std::collections::VecDeque;
use std::io::BufRead;
use std::path::PathBuf;

/// Wordle game options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Word length and number of tries
    #[arg(short = 'd', long = "difficulty", value_enum, default_value_t = Difficulty::Easy)]
    pub difficulty: Difficulty,

    /// Path to a newline-delimited wordbank file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// File used to save an unfinished game
    #[arg(long = "state")]
    pub state_path: Option<PathBuf>,

    /// Play with line-based prompts instead of the full-screen interface
    #[arg(long = "cli")]
    pub plain: bool,
}

impl Cli {
    pub fn difficulty_config(&self) -> DifficultyConfig {
        let config = DifficultyConfig::new(self.difficulty);
        match &self.wordbank_path {
            Some(path) => config.with_word_bank_file(path),
            None => config,
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

pub enum GuessInput {
    Word(String),
    Invalid,
    Exit,
    NewGame,
}

fn is_valid_word(word: &str, length: usize) -> bool {
    word.len() == length && word.chars().all(|c| c.is_ascii_alphabetic())
}

pub fn read_guess<R: BufRead>(reader: &mut R, length: usize) -> GuessInput {
    println!(
        "\nEnter your guess ({length} letters, or 'exit' to quit, or 'next' to start a new game):"
    );
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => return GuessInput::Exit,
        Ok(_) => {}
    }
    let input = input.trim().to_uppercase();

    match input.as_str() {
        "EXIT" => GuessInput::Exit,
        "NEXT" => GuessInput::NewGame,
        _ if is_valid_word(&input, length) => GuessInput::Word(input),
        _ => {
            println!("Invalid guess. Please enter {length} letters.");
            GuessInput::Invalid
        }
    }
}

pub fn format_row(cells: &[Cell], feedback: Option<&str>) -> String {
    let letters: String = cells
        .iter()
        .map(|cell| cell.letter().map_or('_', |c| c.to_ascii_uppercase()))
        .collect();
    match feedback {
        Some(marks) => format!("{letters}  {marks}"),
        None => letters,
    }
}

pub const NOT_PLAYABLE_MESSAGE: &str = "Word list not loaded - game is not playable.";

pub fn format_board(view: &EngineView<'_>) -> Vec<String> {
    let mut lines = vec![format!("{} board:", view.label)];
    for (row, cells) in view.snapshot.grid.iter_rows().enumerate() {
        let marks = view
            .feedback
            .get(row)
            .and_then(Option::as_ref)
            .map(|f| feedback_string(f));
        lines.push(format!("  {}", format_row(cells, marks.as_deref())));
    }
    if !view.disabled_letters.is_empty() {
        let letters: String = view.disabled_letters.iter().collect();
        lines.push(format!("Not in the word: {letters}"));
    }
    if !view.snapshot.ready {
        lines.push(NOT_PLAYABLE_MESSAGE.to_string());
    }
    lines
}

pub fn display_board(view: &EngineView<'_>) {
    for line in format_board(view) {
        println!("{line}");
    }
}

/// Line-based front end. Each line is a whole guess; it is typed into the
/// current row letter by letter, after clearing whatever the row holds.
pub struct CliInterface<R: BufRead> {
    reader: R,
    pending: VecDeque<Command>,
    word_length: usize,
    typed: usize,
    finished: bool,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            word_length: 0,
            typed: 0,
            finished: false,
        }
    }

    fn queue_word(&mut self, word: &str) {
        self.pending
            .extend(std::iter::repeat_n(Command::Delete, self.typed));
        self.pending.extend(word.chars().map(Command::Letter));
        self.pending.push_back(Command::Submit);
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn render(&mut self, view: &EngineView<'_>) {
        self.word_length = view.snapshot.grid.col_count();
        self.typed = view.snapshot.cursor.col_index;
        self.finished = view.snapshot.status != GameStatus::Active;
        // Only redraw once a queued line has been fully applied
        if self.pending.is_empty() {
            display_board(view);
        }
    }

    fn next_action(&mut self) -> Option<UserAction> {
        if let Some(command) = self.pending.pop_front() {
            return Some(UserAction::Input(command));
        }
        match read_guess(&mut self.reader, self.word_length) {
            GuessInput::Exit => {
                println!("Exiting.");
                Some(UserAction::Exit)
            }
            GuessInput::NewGame => Some(UserAction::NewGame),
            GuessInput::Word(_) if self.finished => {
                println!("This game is over. Type 'next' for a new game.");
                None
            }
            GuessInput::Word(word) => {
                self.queue_word(&word);
                self.pending.pop_front().map(UserAction::Input)
            }
            GuessInput::Invalid => None,
        }
    }

    fn notify_invalid_word(&mut self, word: &str) {
        println!("'{}' is not in the word list.", word.to_uppercase());
    }

    fn notify_game_over(&mut self, outcome: GameOverState, target: Option<&TargetWord>) {
        let answer = target.map_or_else(String::new, |t| t.as_str().to_uppercase());
        if outcome.won_by_match {
            println!("Solved! The word was {answer}.");
        } else {
            println!("Out of tries. The word was {answer}.");
        }
        println!("Type 'next' for a new game or 'exit' to quit.");
    }

    fn notify_error(&mut self, message: &str) {
        println!("Error: {message}");
    }
}
