//! Exhaustive depth-limited minimax.

use crate::game::{Board, Piece};

use super::eval::{CenterColumnHeuristic, Heuristic};
use super::search::SearchResult;

/// Plain minimax over `board` to `depth` plies with the center-column
/// heuristic. `maximizing` is true when the AI is to move.
///
/// Depth-0 and terminal nodes score the board for the AI regardless of who
/// moved last, and return no column.
pub fn minimax(board: &Board, depth: u32, maximizing: bool) -> SearchResult {
    let mut scratch = *board;
    let mut nodes = 0;
    minimax_from(
        &mut scratch,
        depth,
        maximizing,
        &CenterColumnHeuristic,
        &mut nodes,
    )
}

/// Drops, recurses and undoes on `board`, leaving it as it was found.
pub(crate) fn minimax_from(
    board: &mut Board,
    depth: u32,
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
        let score = minimax_from(board, depth - 1, !maximizing, heuristic, nodes).score;
        board.undo(row, col);
        best.consider(col, score, maximizing);
    }

    best
}
