//! Core Connect Four rules: the gravity board, win and end-of-game
//! detection, and the match session that drives play between a human and
//! the search engine.

mod board;
mod piece;
mod rules;
mod session;

pub use board::{Board, Cell, Columns, OpenSlots, CENTER_COL, COLS, ROWS};
pub use piece::Piece;
pub use rules::Outcome;
pub use session::{AiTurn, FirstPlayer, MatchSession, Scoreboard};
