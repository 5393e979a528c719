//! Win and end-of-game detection over a whole board.

use super::board::{Board, COLS, ROWS};
use super::Piece;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Piece),
    Draw,
}

impl Board {
    /// True if `piece` has four in a row horizontally, vertically, or on
    /// either diagonal anywhere on the board.
    pub fn has_four(&self, piece: Piece) -> bool {
        let cell = piece.to_cell();
        let line = |row: usize, col: usize, dr: isize, dc: isize| {
            (0..4).all(|i| {
                let r = (row as isize + dr * i) as usize;
                let c = (col as isize + dc * i) as usize;
                self.get(r, c) == cell
            })
        };

        // Horizontal
        for row in 0..ROWS {
            for col in 0..COLS - 3 {
                if line(row, col, 0, 1) {
                    return true;
                }
            }
        }

        // Vertical
        for col in 0..COLS {
            for row in 0..ROWS - 3 {
                if line(row, col, 1, 0) {
                    return true;
                }
            }
        }

        // Diagonal, rising to the right
        for col in 0..COLS - 3 {
            for row in 0..ROWS - 3 {
                if line(row, col, 1, 1) {
                    return true;
                }
            }
        }

        // Diagonal, falling to the right
        for col in 0..COLS - 3 {
            for row in 3..ROWS {
                if line(row, col, -1, 1) {
                    return true;
                }
            }
        }

        false
    }

    /// A board is terminal once either side has four or no column is open.
    pub fn is_terminal(&self) -> bool {
        self.has_four(Piece::Player) || self.has_four(Piece::Ai) || self.valid_columns().is_empty()
    }

    /// The decided result of the board, if any. A win takes precedence over a
    /// full board.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.has_four(Piece::Player) {
            Some(Outcome::Winner(Piece::Player))
        } else if self.has_four(Piece::Ai) {
            Some(Outcome::Winner(Piece::Ai))
        } else if self.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }
}
