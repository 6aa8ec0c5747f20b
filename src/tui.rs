//! TUI (Terminal User Interface) front end for the game
//!
//! Key bindings map straight onto engine commands: letters type into the
//! current row, Backspace deletes, Enter submits. Esc quits at any time and
//! `N` starts a new game once the current one is over.

use crate::board::{Cell, Cursor};
use crate::feedback::LetterFeedback;
use crate::game_state::{Command, GameOverState, GameStatus};
use crate::session::{EngineView, GameInterface, UserAction};
use crate::wordbank::TargetWord;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

fn feedback_colors(feedback: Option<LetterFeedback>, is_cursor: bool) -> (Color, Color) {
    match feedback {
        Some(LetterFeedback::Match) => (Color::Green, Color::Black),
        Some(LetterFeedback::PartialMatch) => (Color::Yellow, Color::Black),
        Some(LetterFeedback::NoMatch) => (Color::Gray, Color::White),
        None if is_cursor => (Color::White, Color::Black),
        None => (Color::DarkGray, Color::White),
    }
}

/// Owned copy of the last engine view, redrawn on every frame.
#[derive(Debug, Default)]
struct BoardState {
    label: String,
    rows: Vec<Vec<Cell>>,
    feedback: Vec<Option<Vec<LetterFeedback>>>,
    cursor: Cursor,
    status: GameStatus,
    ready: bool,
    disabled_letters: Vec<char>,
}

impl BoardState {
    fn from_view(view: &EngineView<'_>) -> Self {
        Self {
            label: view.label.to_string(),
            rows: view.snapshot.grid.iter_rows().map(<[Cell]>::to_vec).collect(),
            feedback: view.feedback.clone(),
            cursor: view.snapshot.cursor,
            status: view.snapshot.status,
            ready: view.snapshot.ready,
            disabled_letters: view.disabled_letters.clone(),
        }
    }
}

/// Map a key press onto a player action.
fn key_to_action(key: KeyEvent, status: GameStatus) -> Option<UserAction> {
    if key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Esc => Some(UserAction::Exit),
        KeyCode::Char('n' | 'N') if status.is_over() => Some(UserAction::NewGame),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            Some(UserAction::Input(Command::Letter(c.to_ascii_uppercase())))
        }
        KeyCode::Backspace => Some(UserAction::Input(Command::Delete)),
        KeyCode::Enter => Some(UserAction::Input(Command::Submit)),
        _ => None,
    }
}

/// Main TUI interface component.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    board: BoardState,
    message: String,
    error_message: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal backend created");

        Ok(Self {
            terminal,
            board: BoardState::default(),
            message: String::new(),
            error_message: String::new(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let board = &self.board;
        let message = &self.message;
        let error_message = &self.error_message;
        self.terminal.draw(|f| {
            Self::render_static(f, board, message, error_message);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, board: &BoardState, message: &str, error_message: &str) {
        #[allow(clippy::cast_possible_truncation)]
        let board_height = (board.rows.len() as u16) * 2 + 2;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Title
                Constraint::Length(board_height), // Grid
                Constraint::Length(5),            // Keyboard
                Constraint::Min(3),               // Messages
                Constraint::Length(3),            // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0], &board.label);
        Self::render_board(f, chunks[1], board);
        Self::render_keyboard(f, chunks[2], &board.disabled_letters);
        Self::render_messages(f, chunks[3], board, message, error_message);
        Self::render_instructions(f, chunks[4], board.status);
    }

    fn render_title(f: &mut Frame, area: Rect, label: &str) {
        let title = Paragraph::new(format!("WORDLE - {label}"))
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_board(f: &mut Frame, area: Rect, board: &BoardState) {
        let block = Block::default().title("Board").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        for (row_index, cells) in board.rows.iter().enumerate() {
            let y = inner.y + (row_index as u16 * 2);
            if y >= inner.y + inner.height {
                return;
            }
            let marks = board.feedback.get(row_index).and_then(Option::as_ref);
            let mut spans = vec![Span::raw("  ")];
            for (col_index, cell) in cells.iter().enumerate() {
                let is_cursor = board.status == GameStatus::Active
                    && board.cursor == Cursor::new(row_index, col_index);
                let mark = marks.and_then(|m| m.get(col_index).copied());
                let (bg_color, fg_color) = feedback_colors(mark, is_cursor);
                let letter = cell.letter().map_or(' ', |c| c.to_ascii_uppercase());
                spans.push(Span::styled(
                    format!(" {letter} "),
                    Style::default().fg(fg_color).bg(bg_color),
                ));
                spans.push(Span::raw(" "));
            }
            let line = Paragraph::new(Line::from(spans));
            f.render_widget(
                line,
                Rect {
                    x: inner.x,
                    y,
                    width: inner.width,
                    height: 1,
                },
            );
        }
    }

    fn render_keyboard(f: &mut Frame, area: Rect, disabled: &[char]) {
        let lines: Vec<Line> = KEYBOARD_ROWS
            .iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .chars()
                    .map(|c| {
                        let style = if disabled.contains(&c) {
                            Style::default().fg(Color::DarkGray)
                        } else {
                            Style::default().fg(Color::White)
                        };
                        Span::styled(format!(" {c}"), style)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();
        let paragraph =
            Paragraph::new(lines).block(Block::default().title("Keyboard").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_messages(
        f: &mut Frame,
        area: Rect,
        board: &BoardState,
        message: &str,
        error_message: &str,
    ) {
        let mut lines = Vec::new();
        if !board.ready {
            lines.push(Line::from(Span::styled(
                "Word list not loaded - game is not playable",
                ERROR_STYLE,
            )));
        }
        if !message.is_empty() {
            let style = if board.status == GameStatus::Won {
                SUCCESS_STYLE
            } else {
                MESSAGE_STYLE
            };
            lines.push(Line::from(Span::styled(message, style)));
        }
        if !error_message.is_empty() {
            lines.push(Line::from(Span::styled(error_message, ERROR_STYLE)));
        }
        let paragraph =
            Paragraph::new(lines).block(Block::default().title("Status").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, status: GameStatus) {
        let text = if status.is_over() {
            "N: New Game | ESC: Quit"
        } else {
            "Type letters | BACKSPACE: Delete | ENTER: Submit | ESC: Quit"
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }
        match event::read()? {
            // Only process Press events, ignore Release and Repeat to avoid double input
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                debug_log!("handle_input() - Key event: {:?}", key.code);
                Ok(key_to_action(key, self.board.status))
            }
            Event::Resize(_, _) => {
                self.draw_or_log();
                Ok(None)
            }
            _ => Ok(None),
        }
    }
}

impl GameInterface for TuiInterface {
    fn render(&mut self, view: &EngineView<'_>) {
        self.board = BoardState::from_view(view);
        if view.snapshot.status == GameStatus::Active {
            self.message.clear();
        }
        self.draw_or_log();
    }

    fn next_action(&mut self) -> Option<UserAction> {
        match self.handle_input() {
            Ok(Some(action)) => {
                // Any new input dismisses the invalid-word notice
                self.error_message.clear();
                Some(action)
            }
            Ok(None) => None,
            Err(e) => {
                log::error!("Input error, exiting: {e}");
                Some(UserAction::Exit)
            }
        }
    }

    fn notify_invalid_word(&mut self, word: &str) {
        self.error_message = format!("'{}' is not in the word list", word.to_uppercase());
        self.draw_or_log();
    }

    fn notify_game_over(&mut self, outcome: GameOverState, target: Option<&TargetWord>) {
        let answer = target.map_or_else(String::new, |t| t.as_str().to_uppercase());
        self.message = if outcome.won_by_match {
            format!("Solved! The word was {answer}")
        } else {
            format!("Out of tries. The word was {answer}")
        };
        self.draw_or_log();
    }

    fn notify_error(&mut self, message: &str) {
        self.error_message = message.to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
