//! Read-only views over three cells in a line.

use super::error::{Axis, BoardError};
use super::types::{BOARD_SIZE, Board, Mark};

/// Which line of the board a [`Slice`] covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SliceKind {
    /// Row `y`, left to right.
    #[display("row {}", _0)]
    Row(usize),
    /// Column `x`, top to bottom.
    #[display("column {}", _0)]
    Column(usize),
    /// `(0, 0)` to `(2, 2)`.
    #[display("main diagonal")]
    MainDiagonal,
    /// `(2, 0)` to `(0, 2)`.
    #[display("anti diagonal")]
    AntiDiagonal,
}

impl SliceKind {
    /// Computes the `(x, y)` pairs along this line.
    ///
    /// Row and column indices are not checked here; reading a cell through
    /// [`Slice::get`] validates them against the board.
    pub fn coordinates(self) -> [(usize, usize); BOARD_SIZE] {
        std::array::from_fn(|k| match self {
            SliceKind::Row(y) => (k, y),
            SliceKind::Column(x) => (x, k),
            SliceKind::MainDiagonal => (k, k),
            SliceKind::AntiDiagonal => (BOARD_SIZE - 1 - k, k),
        })
    }
}

/// A line of three cells borrowed from a [`Board`].
///
/// Holds no cell data; every read goes through the board's validated getter.
#[derive(Debug, Clone, Copy)]
pub struct Slice<'a> {
    board: &'a Board,
    kind: SliceKind,
}

impl<'a> Slice<'a> {
    pub(super) fn new(board: &'a Board, kind: SliceKind) -> Self {
        Self { board, kind }
    }

    /// Returns the line this slice covers.
    pub fn kind(&self) -> SliceKind {
        self.kind
    }

    /// Returns the `(x, y)` pairs this slice reads.
    pub fn coordinates(&self) -> [(usize, usize); BOARD_SIZE] {
        self.kind.coordinates()
    }

    /// Returns the mark at offset `k` along the line.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidPosition`] if `k` is not in
    /// `0..BOARD_SIZE` or the slice's row/column index is out of range.
    pub fn get(&self, k: usize) -> Result<Mark, BoardError> {
        let (x, y) = *self
            .coordinates()
            .get(k)
            .ok_or(BoardError::InvalidPosition {
                axis: Axis::Index,
                value: k,
            })?;
        self.board.get_space(x, y)
    }

    /// Returns all three marks in line order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidPosition`] if the row/column index is
    /// out of range.
    pub fn marks(&self) -> Result<[Mark; BOARD_SIZE], BoardError> {
        let coords = self.coordinates();
        let mut marks = [Mark::Empty; BOARD_SIZE];
        for (mark, (x, y)) in marks.iter_mut().zip(coords) {
            *mark = self.board.get_space(x, y)?;
        }
        Ok(marks)
    }
}
