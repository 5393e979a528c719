use crate::ai::SearchEngine;
use crate::config::AppConfig;
use crate::error::MoveError;
use crate::game::{AiTurn, FirstPlayer, MatchSession, Outcome, Piece, Scoreboard, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::Backend, Terminal};
use std::io;

use super::palette::{pick_ai_color, PieceColor, PALETTE};
use super::timing_view::visible_rounds;

const MAX_NICKNAME_LEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Screen {
    Title,
    Nickname,
    ColorSelect,
    ColorConfirm,
    Playing,
    Timing,
    Scoreboard,
}

pub struct App {
    pub(super) screen: Screen,
    pub(super) nickname: String,
    pub(super) color_index: usize,
    pub(super) ai_color_index: usize,
    pub(super) session: MatchSession,
    pub(super) scores: Scoreboard,
    pub(super) selected_column: usize,
    pub(super) timing_scroll: usize,
    pub(super) timing_page: usize,
    pub(super) message: Option<String>,
    pub(super) last_ai_turn: Option<AiTurn>,
    pub(super) ai_pending: bool,
    engine: SearchEngine,
    first_player: FirstPlayer,
    rng: StdRng,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let rng = match config.session.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        App {
            screen: Screen::Title,
            nickname: String::new(),
            color_index: 0,
            ai_color_index: 1,
            session: MatchSession::new(Piece::Player),
            scores: Scoreboard::default(),
            selected_column: 3, // Start in middle
            timing_scroll: 0,
            timing_page: 1,
            message: None,
            last_ai_turn: None,
            ai_pending: false,
            engine: SearchEngine::new(config.search.depth),
            first_player: config.session.first_player,
            rng,
            should_quit: false,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // The frame above shows the human's piece; search only now.
            if self.ai_pending {
                self.play_pending_ai();
                continue;
            }

            self.timing_page = visible_rounds(terminal.size()?.height);
            self.handle_events()?;
        }
        Ok(())
    }

    pub(super) fn player_color(&self) -> PieceColor {
        PALETTE[self.color_index]
    }

    pub(super) fn ai_color(&self) -> PieceColor {
        PALETTE[self.ai_color_index]
    }

    pub(super) fn display_name(&self) -> &str {
        if self.nickname.is_empty() {
            "Player"
        } else {
            &self.nickname
        }
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Title => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => self.screen = Screen::Nickname,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            Screen::Nickname => match key.code {
                KeyCode::Enter => {
                    self.nickname = self.nickname.trim().to_string();
                    self.screen = Screen::ColorSelect;
                }
                KeyCode::Backspace => {
                    self.nickname.pop();
                }
                KeyCode::Char(c) if !c.is_control() => {
                    if self.nickname.chars().count() < MAX_NICKNAME_LEN {
                        self.nickname.push(c);
                    }
                }
                _ => {}
            },
            Screen::ColorSelect => match key.code {
                KeyCode::Left => {
                    self.color_index = (self.color_index + PALETTE.len() - 1) % PALETTE.len();
                }
                KeyCode::Right => {
                    self.color_index = (self.color_index + 1) % PALETTE.len();
                }
                KeyCode::Enter => {
                    self.ai_color_index = pick_ai_color(self.color_index, &mut self.rng);
                    self.screen = Screen::ColorConfirm;
                }
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            Screen::ColorConfirm => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                    self.start_match();
                }
            }
            Screen::Playing => self.handle_playing_key(key),
            Screen::Timing => match key.code {
                KeyCode::Up => {
                    self.timing_scroll = self.timing_scroll.saturating_sub(1);
                }
                KeyCode::Down => {
                    if self.timing_scroll + self.timing_page < self.session.timings().len() {
                        self.timing_scroll += 1;
                    }
                }
                KeyCode::Char(' ') | KeyCode::Enter => self.screen = Screen::Scoreboard,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            Screen::Scoreboard => match key.code {
                KeyCode::Enter => self.start_match(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
        }
    }

    fn handle_playing_key(&mut self, key: KeyEvent) {
        if self.session.is_over() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                self.timing_scroll = 0;
                self.screen = Screen::Timing;
            } else if key.code == KeyCode::Char('q') {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = c as usize - '1' as usize;
                self.drop_piece();
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.drop_piece(),
            _ => {}
        }
    }

    /// Fresh board, timings cleared, scores carried over.
    fn start_match(&mut self) {
        let first = self.first_player.resolve(&mut self.rng);
        self.session.reset(first);
        self.selected_column = 3;
        self.last_ai_turn = None;
        self.message = Some(match first {
            Piece::Player => format!("{} starts.", self.display_name()),
            Piece::Ai => "AI starts.".to_string(),
        });
        self.screen = Screen::Playing;

        self.ai_pending = first == Piece::Ai;
    }

    /// Drop the human's piece in the selected column and queue the AI reply.
    fn drop_piece(&mut self) {
        match self.session.play_human(self.selected_column) {
            Ok(Some(outcome)) => self.finish(outcome),
            Ok(None) => {
                self.message = Some("AI is thinking...".to_string());
                self.ai_pending = true;
            }
            Err(MoveError::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(err) => {
                self.message = Some(format!("{err}"));
            }
        }
    }

    /// Run the AI's reply queued by the last key press.
    pub(super) fn play_pending_ai(&mut self) {
        if !self.ai_pending {
            return;
        }
        self.ai_pending = false;
        match self.session.play_ai(&self.engine) {
            Ok(turn) => {
                self.message = None;
                self.last_ai_turn = Some(turn);
                if let Some(outcome) = turn.outcome {
                    self.finish(outcome);
                }
            }
            Err(err) => {
                log::error!("AI could not move: {err}");
                self.message = Some(format!("AI could not move: {err}"));
            }
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.scores.record(outcome);
        let text = match outcome {
            Outcome::Winner(Piece::Player) => format!("{} wins!", self.display_name()),
            Outcome::Winner(Piece::Ai) => "AI wins!".to_string(),
            Outcome::Draw => "It's a tie!".to_string(),
        };
        self.message = Some(format!("{text} Press Enter for timings."));
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match self.screen {
            Screen::Title | Screen::Nickname | Screen::ColorSelect | Screen::ColorConfirm => {
                super::menu_view::render(frame, self)
            }
            Screen::Playing => super::game_view::render(frame, self),
            Screen::Timing => super::timing_view::render_timings(frame, self),
            Screen::Scoreboard => super::timing_view::render_scoreboard(frame, self),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
