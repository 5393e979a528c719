use crate::game::{Board, Piece};

use super::search::{SearchAlgorithm, SearchEngine};

/// Anything that can pick a column for one side of the board.
pub trait Agent {
    /// Select a column, or `None` when no column is playable.
    fn select_column(&mut self, board: &Board) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Plays one side using alpha-beta search.
///
/// The search always scores for the AI piece, so playing the human side
/// means minimizing that score.
pub struct AlphaBetaAgent {
    engine: SearchEngine,
    piece: Piece,
}

impl AlphaBetaAgent {
    pub fn new(engine: SearchEngine, piece: Piece) -> Self {
        AlphaBetaAgent { engine, piece }
    }
}

impl Agent for AlphaBetaAgent {
    fn select_column(&mut self, board: &Board) -> Option<usize> {
        let maximizing = self.piece == Piece::Ai;
        self.engine
            .search(SearchAlgorithm::AlphaBeta, board, maximizing)
            .result
            .column
    }

    fn name(&self) -> &str {
        "Alpha-Beta"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_legal_column() {
        let mut agent = AlphaBetaAgent::new(SearchEngine::new(3), Piece::Ai);
        let board = Board::new();
        let column = agent.select_column(&board).unwrap();
        assert!(board.valid_columns().contains(&column));
    }

    #[test]
    fn no_column_on_finished_board() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "OOOO...",
        ])
        .unwrap();
        let mut agent = AlphaBetaAgent::new(SearchEngine::new(4), Piece::Player);
        assert_eq!(agent.select_column(&board), None);
    }

    #[test]
    fn human_side_breaks_ties_to_first_column() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "...O...",
        ])
        .unwrap();
        let mut agent = AlphaBetaAgent::new(SearchEngine::new(1), Piece::Player);
        // Depth 1 only sees its own drop, which never changes the AI count.
        assert_eq!(agent.select_column(&board), Some(0));
    }

    #[test]
    fn name_is_alpha_beta() {
        let agent = AlphaBetaAgent::new(SearchEngine::default(), Piece::Ai);
        assert_eq!(agent.name(), "Alpha-Beta");
    }
}
