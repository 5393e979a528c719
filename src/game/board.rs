use std::fmt;

use arrayvec::ArrayVec;

use super::Piece;
use crate::error::{BoardParseError, ColumnFullError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CENTER_COL: usize = COLS / 2;

/// Playable columns in ascending order, never more than [`COLS`].
pub type Columns = ArrayVec<usize, COLS>;

/// `(column, row)` pairs: a playable column and the row a piece would land in.
pub type OpenSlots = ArrayVec<(usize, usize), COLS>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Player,
    Ai,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Player => 'X',
            Cell::Ai => 'O',
        }
    }

    fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '.' => Some(Cell::Empty),
            'X' => Some(Cell::Player),
            'O' => Some(Cell::Ai),
            _ => None,
        }
    }
}

/// Fixed 6x7 grid. Row 0 is the bottom; pieces in a column are contiguous
/// from row 0 upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Build a board from text rows, top row first.
    ///
    /// `.` is empty, `X` a player piece, `O` an AI piece. The layout must
    /// respect gravity.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardParseError> {
        if rows.len() != ROWS {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut board = Board::new();
        for (i, line) in rows.iter().enumerate() {
            let row = ROWS - 1 - i;
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != COLS {
                return Err(BoardParseError::RowWidth {
                    row,
                    width: symbols.len(),
                });
            }
            for (col, &symbol) in symbols.iter().enumerate() {
                board.cells[row][col] =
                    Cell::from_symbol(symbol).ok_or(BoardParseError::UnknownSymbol(symbol))?;
            }
        }

        for col in 0..COLS {
            for row in 1..ROWS {
                if board.cells[row][col] != Cell::Empty && board.cells[row - 1][col] == Cell::Empty
                {
                    return Err(BoardParseError::FloatingPiece { row, col });
                }
            }
        }

        Ok(board)
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// A column can take another piece when its top cell is still empty.
    pub fn is_valid_column(&self, col: usize) -> bool {
        col < COLS && self.cells[ROWS - 1][col] == Cell::Empty
    }

    /// Lowest empty row of `col`.
    ///
    /// Callers check [`Board::is_valid_column`] first; a full column here is
    /// a contract violation.
    pub fn next_open_row(&self, col: usize) -> Result<usize, ColumnFullError> {
        (0..ROWS)
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(ColumnFullError { column: col })
    }

    /// Place `piece` at `(row, col)` without re-validating the target.
    pub fn drop_piece(&mut self, row: usize, col: usize, piece: Piece) {
        self.cells[row][col] = piece.to_cell();
    }

    /// Clear `(row, col)`, reverting a previous [`Board::drop_piece`].
    pub fn undo(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Cell::Empty;
    }

    /// Every playable column with its landing row, in ascending column order.
    pub fn open_slots(&self) -> OpenSlots {
        (0..COLS)
            .filter_map(|col| {
                (0..ROWS)
                    .find(|&row| self.cells[row][col] == Cell::Empty)
                    .map(|row| (col, row))
            })
            .collect()
    }

    /// Playable columns in ascending order.
    pub fn valid_columns(&self) -> Columns {
        (0..COLS).filter(|&col| self.is_valid_column(col)).collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.is_valid_column(col))
    }

    pub fn count_in_column(&self, col: usize, piece: Piece) -> usize {
        let cell = piece.to_cell();
        (0..ROWS).filter(|&row| self.cells[row][col] == cell).count()
    }

    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            let line: String = self.cells[row].iter().map(|c| c.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(board: &mut Board, col: usize, piece: Piece) -> usize {
        let row = board.next_open_row(col).unwrap();
        board.drop_piece(row, col, piece);
        row
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_drop_piece_stacks_from_bottom() {
        let mut board = Board::new();

        let row = play(&mut board, 3, Piece::Player);
        assert_eq!(row, 0);
        assert_eq!(board.get(0, 3), Cell::Player);

        let row = play(&mut board, 3, Piece::Ai);
        assert_eq!(row, 1);
        assert_eq!(board.get(1, 3), Cell::Ai);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            play(&mut board, 0, Piece::Player);
        }

        assert!(!board.is_valid_column(0));
        assert_eq!(board.next_open_row(0), Err(ColumnFullError { column: 0 }));
        assert_eq!(board.valid_columns().as_slice(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_out_of_range_column_is_invalid() {
        let board = Board::new();
        assert!(!board.is_valid_column(COLS));
    }

    #[test]
    fn test_undo_restores_cell() {
        let mut board = Board::new();
        let row = play(&mut board, 2, Piece::Ai);
        board.undo(row, 2);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_open_slots_match_next_open_row() {
        let mut board = Board::new();
        play(&mut board, 1, Piece::Player);
        play(&mut board, 1, Piece::Ai);
        play(&mut board, 5, Piece::Player);

        for (col, row) in board.open_slots() {
            assert_eq!(board.next_open_row(col), Ok(row));
        }
        assert_eq!(board.open_slots()[1], (1, 2));
        assert_eq!(board.open_slots()[5], (5, 1));
    }

    #[test]
    fn test_valid_columns_is_idempotent() {
        let mut board = Board::new();
        play(&mut board, 4, Piece::Ai);
        assert_eq!(board.valid_columns(), board.valid_columns());
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                play(&mut board, col, Piece::Player);
            }
        }
        assert!(board.is_full());
        assert!(board.valid_columns().is_empty());
        assert!(board.open_slots().is_empty());
    }

    #[test]
    fn test_count_in_column() {
        let mut board = Board::new();
        play(&mut board, CENTER_COL, Piece::Ai);
        play(&mut board, CENTER_COL, Piece::Player);
        play(&mut board, CENTER_COL, Piece::Ai);
        assert_eq!(board.count_in_column(CENTER_COL, Piece::Ai), 2);
        assert_eq!(board.count_in_column(CENTER_COL, Piece::Player), 1);
    }

    #[test]
    fn test_from_rows_and_display() {
        let rows = [
            ".......",
            ".......",
            ".......",
            ".......",
            "...O...",
            "..XOX..",
        ];
        let board = Board::from_rows(&rows).unwrap();
        assert_eq!(board.get(0, 2), Cell::Player);
        assert_eq!(board.get(1, 3), Cell::Ai);
        assert_eq!(board.to_string(), rows.join("\n") + "\n");
    }

    #[test]
    fn test_from_rows_rejects_floating_piece() {
        let rows = [
            ".......",
            ".......",
            ".......",
            ".......",
            "...O...",
            ".......",
        ];
        assert_eq!(
            Board::from_rows(&rows),
            Err(BoardParseError::FloatingPiece { row: 1, col: 3 })
        );
    }

    #[test]
    fn test_from_rows_rejects_bad_shape() {
        assert_eq!(
            Board::from_rows(&["......."]),
            Err(BoardParseError::RowCount(1))
        );
        let rows = [".......", ".......", ".......", ".......", ".......", "..Z...."];
        assert_eq!(
            Board::from_rows(&rows),
            Err(BoardParseError::UnknownSymbol('Z'))
        );
    }
}
