//! Shared search types and the engine that runs and times both search
//! variants on the same board.

use std::fmt;
use std::time::{Duration, Instant};

use crate::game::Board;

use super::alphabeta::alpha_beta_from;
use super::eval::{CenterColumnHeuristic, Heuristic};
use super::minimax::minimax_from;

pub type Score = i32;

/// Stands in for negative infinity in the search bounds.
pub const NEG_INF: Score = Score::MIN;
/// Stands in for positive infinity in the search bounds.
pub const POS_INF: Score = Score::MAX;

/// Lookahead used for move selection during play.
pub const DEFAULT_DEPTH: u32 = 4;

/// Outcome of one search call.
///
/// `column` is `None` at a depth-0 or terminal node, where no move is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: Score,
}

impl SearchResult {
    pub(crate) fn leaf(score: Score) -> Self {
        SearchResult {
            column: None,
            score,
        }
    }

    /// Starting point for a node's column loop: no column, worst score.
    pub(crate) fn unexplored(maximizing: bool) -> Self {
        SearchResult {
            column: None,
            score: if maximizing { NEG_INF } else { POS_INF },
        }
    }

    /// Take `(column, score)` if it is strictly better for the side to move.
    /// The first candidate always wins, so earlier columns keep ties.
    pub(crate) fn consider(&mut self, column: usize, score: Score, maximizing: bool) {
        let better = if maximizing {
            score > self.score
        } else {
            score < self.score
        };
        if self.column.is_none() || better {
            self.column = Some(column);
            self.score = score;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchAlgorithm {
    Minimax,
    AlphaBeta,
}

impl SearchAlgorithm {
    pub fn name(self) -> &'static str {
        match self {
            SearchAlgorithm::Minimax => "minimax",
            SearchAlgorithm::AlphaBeta => "alpha-beta",
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A search result with its cost.
#[derive(Debug, Clone, Copy)]
pub struct SearchReport {
    pub algorithm: SearchAlgorithm,
    pub result: SearchResult,
    /// Nodes visited, root and leaves included.
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Both variants run on the same position.
#[derive(Debug, Clone, Copy)]
pub struct Comparison {
    pub minimax: SearchReport,
    pub alpha_beta: SearchReport,
}

/// Depth-limited adversarial search, always scored from the AI's side.
pub struct SearchEngine {
    depth: u32,
    heuristic: Box<dyn Heuristic>,
}

impl SearchEngine {
    pub fn new(depth: u32) -> Self {
        SearchEngine {
            depth,
            heuristic: Box::new(CenterColumnHeuristic),
        }
    }

    pub fn with_heuristic(depth: u32, heuristic: Box<dyn Heuristic>) -> Self {
        SearchEngine { depth, heuristic }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Run one variant on a private copy of `board`.
    pub fn search(
        &self,
        algorithm: SearchAlgorithm,
        board: &Board,
        maximizing: bool,
    ) -> SearchReport {
        let mut scratch = *board;
        let mut nodes = 0;
        let start = Instant::now();
        let result = match algorithm {
            SearchAlgorithm::Minimax => minimax_from(
                &mut scratch,
                self.depth,
                maximizing,
                self.heuristic.as_ref(),
                &mut nodes,
            ),
            SearchAlgorithm::AlphaBeta => alpha_beta_from(
                &mut scratch,
                self.depth,
                NEG_INF,
                POS_INF,
                maximizing,
                self.heuristic.as_ref(),
                &mut nodes,
            ),
        };
        let elapsed = start.elapsed();

        log::debug!(
            "{algorithm} depth={} column={:?} score={} nodes={nodes} elapsed={:.5}s",
            self.depth,
            result.column,
            result.score,
            elapsed.as_secs_f64()
        );

        SearchReport {
            algorithm,
            result,
            nodes,
            elapsed,
        }
    }

    /// Minimax first, then alpha-beta, both for the maximizing (AI) side.
    pub fn compare(&self, board: &Board) -> Comparison {
        let minimax = self.search(SearchAlgorithm::Minimax, board, true);
        let alpha_beta = self.search(SearchAlgorithm::AlphaBeta, board, true);
        if minimax.result != alpha_beta.result {
            log::warn!(
                "search variants disagree: minimax {:?}, alpha-beta {:?}",
                minimax.result,
                alpha_beta.result
            );
        }
        Comparison {
            minimax,
            alpha_beta,
        }
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}
