//! Grid and cursor types shared by the engine and the persistence layer.
//!
//! Both serialize to the persisted JSON layout: the grid as a 2-D array of
//! one-letter strings (`""` for an empty cell), the cursor as
//! `{"rowIndex": .., "colIndex": ..}`.

use crate::error::GameError;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Cell {
    #[default]
    Empty,
    Letter(char),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Empty => None,
            Self::Letter(c) => Some(c),
        }
    }
}

impl TryFrom<String> for Cell {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(Self::Empty),
            (Some(c), None) if c.is_ascii_alphabetic() => Ok(Self::Letter(c)),
            _ => Err(GameError::InvalidCell(value)),
        }
    }
}

impl From<Cell> for String {
    fn from(cell: Cell) -> Self {
        cell.letter().map(String::from).unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(row_count: usize, col_count: usize) -> Self {
        Self {
            rows: vec![vec![Cell::Empty; col_count]; row_count],
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the first row; a well-formed grid has every row this wide.
    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn has_shape(&self, row_count: usize, col_count: usize) -> bool {
        self.rows.len() == row_count && self.rows.iter().all(|row| row.len() == col_count)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row)?.get(col).copied()
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// The letters of `row` joined, or `None` while any cell is still empty.
    pub fn row_word(&self, row: usize) -> Option<String> {
        self.rows.get(row)?.iter().map(|cell| cell.letter()).collect()
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if let Some(slot) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *slot = cell;
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cursor {
    pub row_index: usize,
    pub col_index: usize,
}

impl Cursor {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(row_index: usize, col_index: usize) -> Self {
        Self {
            row_index,
            col_index,
        }
    }

    pub const fn is_origin(self) -> bool {
        self.row_index == 0 && self.col_index == 0
    }

    pub const fn fits(self, row_count: usize, col_count: usize) -> bool {
        self.row_index <= row_count && self.col_index <= col_count
    }

    /// First cell of the following row.
    #[must_use]
    pub const fn next_row(self) -> Self {
        Self::new(self.row_index + 1, 0)
    }
}
