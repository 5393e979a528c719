use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Board, Outcome, Piece, COLS};
use crate::ai::{Comparison, Score, SearchEngine, TimingRecord};
use crate::error::MoveError;

/// Who opens a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    #[default]
    Random,
    Human,
    Ai,
}

impl FirstPlayer {
    pub fn resolve<R: Rng>(self, rng: &mut R) -> Piece {
        match self {
            FirstPlayer::Human => Piece::Player,
            FirstPlayer::Ai => Piece::Ai,
            FirstPlayer::Random => {
                if rng.random_bool(0.5) {
                    Piece::Player
                } else {
                    Piece::Ai
                }
            }
        }
    }
}

/// What the AI did on its turn.
#[derive(Debug, Clone, Copy)]
pub struct AiTurn {
    pub column: usize,
    pub row: usize,
    pub score: Score,
    pub outcome: Option<Outcome>,
    pub comparison: Comparison,
}

/// One match: the live board, whose turn it is, and the search timings
/// gathered on each AI turn.
#[derive(Debug, Clone)]
pub struct MatchSession {
    board: Board,
    to_move: Piece,
    outcome: Option<Outcome>,
    timings: TimingRecord,
}

impl MatchSession {
    pub fn new(first: Piece) -> Self {
        log::info!("match started, {} moves first", first.name());
        MatchSession {
            board: Board::new(),
            to_move: first,
            outcome: None,
            timings: TimingRecord::new(),
        }
    }

    /// Start a new match on a fresh board with an empty timing record.
    pub fn reset(&mut self, first: Piece) {
        *self = MatchSession::new(first);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Piece {
        self.to_move
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn timings(&self) -> &TimingRecord {
        &self.timings
    }

    /// Apply the human's move in `col`.
    pub fn play_human(&mut self, col: usize) -> Result<Option<Outcome>, MoveError> {
        self.check_turn(Piece::Player)?;
        self.apply(col, Piece::Player)?;
        Ok(self.outcome)
    }

    /// Run both searches on copies of the board, record their times, and
    /// play alpha-beta's column.
    pub fn play_ai(&mut self, engine: &SearchEngine) -> Result<AiTurn, MoveError> {
        self.check_turn(Piece::Ai)?;

        let comparison = engine.compare(&self.board);
        self.timings
            .record(comparison.minimax.elapsed, comparison.alpha_beta.elapsed);

        let chosen = comparison.alpha_beta.result;
        let column = chosen.column.ok_or(MoveError::GameOver)?;
        let row = self.apply(column, Piece::Ai)?;

        Ok(AiTurn {
            column,
            row,
            score: chosen.score,
            outcome: self.outcome,
            comparison,
        })
    }

    fn check_turn(&self, piece: Piece) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.to_move != piece {
            return Err(MoveError::NotYourTurn(piece.name()));
        }
        Ok(())
    }

    fn apply(&mut self, col: usize, piece: Piece) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        if !self.board.is_valid_column(col) {
            return Err(MoveError::ColumnFull(col));
        }
        let row = self
            .board
            .next_open_row(col)
            .map_err(|e| MoveError::ColumnFull(e.column))?;
        self.board.drop_piece(row, col, piece);

        self.outcome = self.board.outcome();
        self.to_move = piece.other();

        if let Some(outcome) = self.outcome {
            log::info!(
                "match finished: {:?} after {} AI turns",
                outcome,
                self.timings.len()
            );
        }

        Ok(row)
    }
}

/// Wins and draws across consecutive matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub player_wins: u32,
    pub ai_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Piece::Player) => self.player_wins += 1,
            Outcome::Winner(Piece::Ai) => self.ai_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn matches(&self) -> u32 {
        self.player_wins + self.ai_wins + self.draws
    }
}
