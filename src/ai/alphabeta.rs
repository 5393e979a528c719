//! Minimax with alpha-beta pruning.

use crate::game::{Board, Piece};

use super::eval::{CenterColumnHeuristic, Heuristic};
use super::search::{Score, SearchResult};

/// Alpha-beta search over `board` to `depth` plies with the center-column
/// heuristic. Root callers pass `NEG_INF` and `POS_INF` for the bounds.
///
/// Returns the same column and score as minimax at the same depth;
/// only the number of nodes visited differs.
pub fn alpha_beta(
    board: &Board,
    depth: u32,
    alpha: Score,
    beta: Score,
    maximizing: bool,
) -> SearchResult {
    let mut scratch = *board;
    let mut nodes = 0;
    alpha_beta_from(
        &mut scratch,
        depth,
        alpha,
        beta,
        maximizing,
        &CenterColumnHeuristic,
        &mut nodes,
    )
}

pub(crate) fn alpha_beta_from(
    board: &mut Board,
    depth: u32,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    heuristic: &dyn Heuristic,
    nodes: &mut u64,
) -> SearchResult {
    *nodes += 1;

    if depth == 0 || board.is_terminal() {
        return SearchResult::leaf(heuristic.evaluate(board, Piece::Ai));
    }

    let piece = if maximizing { Piece::Ai } else { Piece::Player };
    let mut best = SearchResult::unexplored(maximizing);

    for (col, row) in board.open_slots() {
        board.drop_piece(row, col, piece);
        let score =
            alpha_beta_from(board, depth - 1, alpha, beta, !maximizing, heuristic, nodes).score;
        board.undo(row, col);
        best.consider(col, score, maximizing);

        if maximizing {
            alpha = alpha.max(best.score);
        } else {
            beta = beta.min(best.score);
        }
        if alpha >= beta {
            break;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::minimax::{minimax, minimax_from};
    use crate::ai::search::{NEG_INF, POS_INF};

    fn root(board: &Board, depth: u32) -> SearchResult {
        alpha_beta(board, depth, NEG_INF, POS_INF, true)
    }

    #[test]
    fn depth_one_on_empty_board_picks_center() {
        assert_eq!(
            root(&Board::new(), 1),
            SearchResult {
                column: Some(3),
                score: 3
            }
        );
    }

    #[test]
    fn matches_minimax_from_empty_board() {
        for depth in 0..=5 {
            assert_eq!(
                root(&Board::new(), depth),
                minimax(&Board::new(), depth, true),
                "depth {depth}"
            );
        }
    }

    #[test]
    fn matches_minimax_mid_game() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            "...O...",
            "..XX...",
            ".OOXO..",
            "XXOOXX.",
        ])
        .unwrap();
        for depth in 1..=4 {
            assert_eq!(root(&board, depth), minimax(&board, depth, true));
            assert_eq!(
                alpha_beta(&board, depth, NEG_INF, POS_INF, false),
                minimax(&board, depth, false)
            );
        }
    }

    #[test]
    fn visits_no_more_nodes_than_minimax() {
        let mut board = Board::new();
        let mut ab_nodes = 0;
        let mut mm_nodes = 0;
        alpha_beta_from(
            &mut board,
            4,
            NEG_INF,
            POS_INF,
            true,
            &CenterColumnHeuristic,
            &mut ab_nodes,
        );
        minimax_from(&mut board, 4, true, &CenterColumnHeuristic, &mut mm_nodes);
        assert!(ab_nodes < mm_nodes, "{ab_nodes} vs {mm_nodes}");
    }

    #[test]
    fn takes_center_column_win() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            "...O...",
            "..XO...",
            ".XXOX..",
        ])
        .unwrap();
        let result = root(&board, 1);
        assert_eq!(result.column, Some(3));

        let mut after = board;
        after.drop_piece(3, 3, Piece::Ai);
        assert!(after.has_four(Piece::Ai));
    }

    #[test]
    fn off_center_win_is_not_rewarded() {
        // A vertical win in column 0 scores nothing under the center-column
        // heuristic, so the engine plays the center instead.
        let board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            "O......",
            "O......",
            "O.XX...",
        ])
        .unwrap();
        let result = root(&board, 1);
        assert_eq!(result.column, Some(3));
        assert_eq!(result, minimax(&board, 1, true));
    }

    #[test]
    fn pruned_search_restores_board() {
        let mut board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            "...X...",
            "..OOX..",
        ])
        .unwrap();
        let before = board;
        let mut nodes = 0;
        alpha_beta_from(
            &mut board,
            4,
            NEG_INF,
            POS_INF,
            true,
            &CenterColumnHeuristic,
            &mut nodes,
        );
        assert_eq!(board, before);
    }
}
