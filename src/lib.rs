//! # Connect Four Search
//!
//! A Connect Four engine that picks the AI's move with depth-limited
//! alpha-beta search while timing plain minimax on the same position, so the
//! two strategies can be compared round by round.
//!
//! ## Modules
//!
//! - [`game`]: Board, win and terminal detection, match session, scoreboard
//! - [`ai`]: Center-column heuristic, minimax, alpha-beta, timing record, agents
//! - [`ui`]: Terminal UI: setup menus, game view, timing table
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
