//! Move selection: the center-column heuristic, minimax and alpha-beta
//! search, per-round timing, and agents built on top of them.

mod agent;
mod alphabeta;
mod eval;
mod minimax;
mod random;
mod search;
mod timing;

pub use agent::{Agent, AlphaBetaAgent};
pub use alphabeta::alpha_beta;
pub use eval::{CenterColumnHeuristic, Heuristic, CENTER_WEIGHT};
pub use minimax::minimax;
pub use random::RandomAgent;
pub use search::{
    Comparison, Score, SearchAlgorithm, SearchEngine, SearchReport, SearchResult, DEFAULT_DEPTH,
    NEG_INF, POS_INF,
};
pub use timing::{RoundTiming, TimingRecord};
