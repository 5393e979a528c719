use crate::game::{Board, Piece, CENTER_COL};

use super::search::Score;

/// Trait for evaluating a board position from a piece's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, piece: Piece) -> Score;
}

/// Points per piece sitting in the center column.
pub const CENTER_WEIGHT: Score = 3;

/// Scores a position purely by center-column occupancy: three points for
/// every `piece` in column 3.
///
/// Wins, threats and the opponent's pieces are deliberately not looked at;
/// the engine's move choices and timing profile depend on this exact shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterColumnHeuristic;

impl Heuristic for CenterColumnHeuristic {
    fn evaluate(&self, board: &Board, piece: Piece) -> Score {
        CENTER_WEIGHT * board.count_in_column(CENTER_COL, piece) as Score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_is_zero() {
        let board = Board::new();
        assert_eq!(CenterColumnHeuristic.evaluate(&board, Piece::Ai), 0);
        assert_eq!(CenterColumnHeuristic.evaluate(&board, Piece::Player), 0);
    }

    #[test]
    fn counts_only_own_center_pieces() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            "...O...",
            "...X...",
            "...O...",
            "OOXOOO.",
        ])
        .unwrap();
        assert_eq!(CenterColumnHeuristic.evaluate(&board, Piece::Ai), 9);
        assert_eq!(CenterColumnHeuristic.evaluate(&board, Piece::Player), 3);
    }

    #[test]
    fn ignores_wins_off_center() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "OOOO...",
        ])
        .unwrap();
        assert!(board.has_four(Piece::Ai));
        assert_eq!(CenterColumnHeuristic.evaluate(&board, Piece::Ai), 3);

        let edge = Board::from_rows(&[
            ".......",
            ".......",
            "O......",
            "O......",
            "O......",
            "O......",
        ])
        .unwrap();
        assert_eq!(CenterColumnHeuristic.evaluate(&edge, Piece::Ai), 0);
    }
}
