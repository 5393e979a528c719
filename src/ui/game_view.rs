use crate::game::{Board, Cell, Piece, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::App;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(4), // Last AI turn
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_board(frame, app, chunks[1]);
    render_search_stats(frame, app, chunks[2]);
    render_message(frame, &app.message, chunks[3]);
    render_controls(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let (name, color) = match app.session.to_move() {
        Piece::Player => (app.display_name(), app.player_color().color),
        Piece::Ai => ("AI", app.ai_color().color),
    };

    let status = if app.session.is_over() {
        "Game Over".to_string()
    } else {
        format!("Current Player: {name}")
    };
    let score_line = format!(
        "{} {}  |  AI {}  |  Ties {}",
        app.display_name(),
        app.scores.player_wins,
        app.scores.ai_wins,
        app.scores.draws
    );

    let header = Paragraph::new(format!("{status}  |  {score_line}"))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, app: &App, area: Rect) {
    let board: &Board = app.session.board();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        let label = format!(" {} ", col + 1);
        if col == app.selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔═════════════════════╗"));

    // Row 0 is the bottom, so draw from the top row down.
    for row in (0..ROWS).rev() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Player => (" ● ", app.player_color().color),
                Cell::Ai => (" ● ", app.ai_color().color),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚═════════════════════╝"));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_search_stats(frame: &mut Frame, app: &App, area: Rect) {
    let lines = match app.last_ai_turn {
        Some(turn) => {
            let minimax = turn.comparison.minimax;
            let alpha_beta = turn.comparison.alpha_beta;
            vec![
                Line::from(format!(
                    "AI played column {} (score {})",
                    turn.column + 1,
                    turn.score
                )),
                Line::from(format!(
                    "minimax {:.5}s / {} nodes   alpha-beta {:.5}s / {} nodes",
                    minimax.elapsed.as_secs_f64(),
                    minimax.nodes,
                    alpha_beta.elapsed.as_secs_f64(),
                    alpha_beta.nodes
                )),
            ]
        }
        None => vec![Line::from("Waiting for the AI's first move")],
    };

    let widget = Paragraph::new(lines)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Search"));
    frame.render_widget(widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  1-7 or Enter: Drop  |  Q/Esc: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
