use super::{Board, Cell, CELL_COUNT, CENTER_CELL};

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    for cell in 1..=CELL_COUNT {
        assert_eq!(board.get(cell), Cell::Empty);
    }
    assert!(!board.is_full());
    assert_eq!(board.empty_cells().len(), 9);
}

#[test]
fn test_place_and_get() {
    let mut board = Board::new();
    board.place(1, Cell::O);
    board.place(CENTER_CELL, Cell::X);

    assert_eq!(board.get(1), Cell::O);
    assert_eq!(board.get(CENTER_CELL), Cell::X);
    assert_eq!(board.get(9), Cell::Empty);
    assert!(!board.is_empty(1));
    assert!(board.is_empty(9));
}

#[test]
fn test_empty_cells_ascending() {
    let mut board = Board::new();
    board.place(2, Cell::O);
    board.place(7, Cell::X);

    assert_eq!(board.empty_cells(), vec![1, 3, 4, 5, 6, 8, 9]);
}

#[test]
fn test_is_full() {
    let mut board = Board::new();
    for cell in 1..=CELL_COUNT {
        assert!(!board.is_full());
        board.place(cell, if cell % 2 == 0 { Cell::O } else { Cell::X });
    }
    assert!(board.is_full());
    assert!(board.empty_cells().is_empty());
}

#[test]
fn test_reset() {
    let mut board = Board::new();
    board.place(3, Cell::X);
    board.place(5, Cell::O);
    board.reset();

    for cell in 1..=CELL_COUNT {
        assert_eq!(board.get(cell), Cell::Empty);
    }
}

#[test]
fn test_in_range() {
    assert!(!Board::in_range(0));
    assert!(Board::in_range(1));
    assert!(Board::in_range(9));
    assert!(!Board::in_range(10));
}

#[test]
fn test_opponent() {
    assert_eq!(Cell::O.opponent(), Cell::X);
    assert_eq!(Cell::X.opponent(), Cell::O);
    assert_eq!(Cell::Empty.opponent(), Cell::Empty);
}

#[test]
fn test_copy_probe_leaves_original_unchanged() {
    let board = Board::new();
    let mut probe = board;
    probe.place(5, Cell::X);

    assert_eq!(board.get(5), Cell::Empty);
    assert_eq!(probe.get(5), Cell::X);
}
