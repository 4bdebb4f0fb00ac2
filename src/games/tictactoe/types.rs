//! Core domain types for tic-tac-toe.

use super::error::{Axis, BoardError};
use super::slice::{Slice, SliceKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

pub(super) const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Content of a board cell.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Unclaimed cell.
    #[default]
    #[strum(to_string = ".", serialize = "empty", serialize = "none")]
    Empty,
    /// Claimed by player X.
    #[strum(to_string = "X")]
    X,
    /// Claimed by player O.
    #[strum(to_string = "O")]
    O,
}

impl Mark {
    /// Checks if the cell is unclaimed.
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored row-major: `(x, y)` lives at `y * BOARD_SIZE + x`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    /// Rebuilds a board from row-major cells.
    pub(super) fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Maps `(x, y)` to its row-major offset.
    fn index(x: usize, y: usize) -> Result<usize, BoardError> {
        if x >= BOARD_SIZE {
            return Err(BoardError::InvalidPosition {
                axis: Axis::X,
                value: x,
            });
        }
        if y >= BOARD_SIZE {
            return Err(BoardError::InvalidPosition {
                axis: Axis::Y,
                value: y,
            });
        }
        Ok(y * BOARD_SIZE + x)
    }

    /// Returns the mark at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidPosition`] if either coordinate is
    /// outside `0..BOARD_SIZE`.
    pub fn get_space(&self, x: usize, y: usize) -> Result<Mark, BoardError> {
        Ok(self.cells[Self::index(x, y)?])
    }

    /// Overwrites the mark at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidPosition`] if either coordinate is
    /// outside `0..BOARD_SIZE`. The board is left untouched.
    #[instrument(skip(self))]
    pub fn set_space(&mut self, x: usize, y: usize, mark: Mark) -> Result<(), BoardError> {
        let idx = Self::index(x, y)?;
        debug!(idx, previous = %self.cells[idx], "Setting space");
        self.cells[idx] = mark;
        Ok(())
    }

    /// Empties the cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidPosition`] for out-of-range coordinates.
    pub fn clear_space(&mut self, x: usize, y: usize) -> Result<(), BoardError> {
        self.set_space(x, y, Mark::Empty)
    }

    /// Empties every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    /// Checks if every cell is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|m| m.is_empty())
    }

    /// Returns row `row`. An out-of-range row fails when the slice is read.
    pub fn row(&self, row: usize) -> Slice<'_> {
        Slice::new(self, SliceKind::Row(row))
    }

    /// Returns column `col`. An out-of-range column fails when the slice is read.
    pub fn column(&self, col: usize) -> Slice<'_> {
        Slice::new(self, SliceKind::Column(col))
    }

    /// Returns the diagonal from `(0, 0)` to `(2, 2)`.
    pub fn main_diagonal(&self) -> Slice<'_> {
        Slice::new(self, SliceKind::MainDiagonal)
    }

    /// Returns the diagonal from `(2, 0)` to `(0, 2)`.
    pub fn anti_diagonal(&self) -> Slice<'_> {
        Slice::new(self, SliceKind::AntiDiagonal)
    }

    /// Returns every line a player can complete: rows, then columns,
    /// then the main and anti diagonals.
    pub fn lines(&self) -> [Slice<'_>; 2 * BOARD_SIZE + 2] {
        [
            self.row(0),
            self.row(1),
            self.row(2),
            self.column(0),
            self.column(1),
            self.column(2),
            self.main_diagonal(),
            self.anti_diagonal(),
        ]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.cells.chunks(BOARD_SIZE).enumerate() {
            let symbols: Vec<String> = row.iter().map(|m| m.to_string()).collect();
            write!(f, "{}", symbols.join("|"))?;
            if y + 1 < BOARD_SIZE {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
