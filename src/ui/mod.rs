//! Terminal UI: title and setup menus, the game board, and the end-of-match
//! timing table and scoreboard.

mod app;
mod game_view;
mod menu_view;
pub mod palette;
mod timing_view;

pub use app::App;
