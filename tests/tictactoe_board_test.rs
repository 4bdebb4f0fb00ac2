//! Tests for board access and line slices.

use strictly_board::{Axis, BOARD_SIZE, Board, BoardError, Mark, SliceKind};

#[test]
fn test_fresh_board_all_empty() {
    let board = Board::new();
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            assert_eq!(board.get_space(x, y).unwrap(), Mark::Empty);
        }
    }
}

#[test]
fn test_set_then_get() {
    let mut board = Board::new();
    board.set_space(2, 0, Mark::X).unwrap();
    board.set_space(0, 2, Mark::O).unwrap();
    assert_eq!(board.get_space(2, 0).unwrap(), Mark::X);
    assert_eq!(board.get_space(0, 2).unwrap(), Mark::O);
    assert_eq!(board.get_space(1, 1).unwrap(), Mark::Empty);
}

#[test]
fn test_invalid_positions() {
    let mut board = Board::new();
    for (x, y) in [(3, 0), (0, 3), (3, 3), (100, 1)] {
        assert!(matches!(
            board.get_space(x, y),
            Err(BoardError::InvalidPosition { .. })
        ));
        assert!(matches!(
            board.set_space(x, y, Mark::X),
            Err(BoardError::InvalidPosition { .. })
        ));
    }
    assert_eq!(board, Board::new());
}

#[test]
fn test_x_checked_before_y() {
    let board = Board::new();
    assert_eq!(
        board.get_space(5, 5),
        Err(BoardError::InvalidPosition {
            axis: Axis::X,
            value: 5
        })
    );
}

#[test]
fn test_middle_row() {
    let mut board = Board::new();
    board.set_space(0, 1, Mark::X).unwrap();
    board.set_space(1, 1, Mark::O).unwrap();
    board.set_space(2, 1, Mark::X).unwrap();
    assert_eq!(board.row(1).marks().unwrap(), [Mark::X, Mark::O, Mark::X]);
}

#[test]
fn test_diagonals() {
    let mut board = Board::new();
    board.set_space(0, 0, Mark::X).unwrap();
    board.set_space(1, 1, Mark::X).unwrap();
    board.set_space(2, 2, Mark::X).unwrap();
    assert_eq!(board.main_diagonal().marks().unwrap(), [Mark::X; 3]);

    let mut board = Board::new();
    board.set_space(2, 0, Mark::O).unwrap();
    board.set_space(1, 1, Mark::O).unwrap();
    board.set_space(0, 2, Mark::O).unwrap();
    assert_eq!(board.anti_diagonal().marks().unwrap(), [Mark::O; 3]);
}

#[test]
fn test_out_of_range_line() {
    let board = Board::new();
    assert!(matches!(
        board.row(3).marks(),
        Err(BoardError::InvalidPosition { axis: Axis::Y, .. })
    ));
    assert!(matches!(
        board.column(3).marks(),
        Err(BoardError::InvalidPosition { axis: Axis::X, .. })
    ));
}

#[test]
fn test_uniform_line_found_by_caller() {
    let mut board = Board::new();
    for y in 0..BOARD_SIZE {
        board.set_space(1, y, Mark::O).unwrap();
    }

    let full: Vec<SliceKind> = board
        .lines()
        .iter()
        .filter(|line| {
            let marks = line.marks().unwrap();
            !marks[0].is_empty() && marks.iter().all(|m| *m == marks[0])
        })
        .map(|line| line.kind())
        .collect();

    assert_eq!(full, vec![SliceKind::Column(1)]);
}
