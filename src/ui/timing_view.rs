use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

use super::app::App;

/// Rows of the controls and totals panels below the table.
const FOOTER_HEIGHT: u16 = 6;

/// Round rows that fit in a table area of `height` lines (borders and header
/// excluded).
fn table_capacity(height: u16) -> usize {
    height.saturating_sub(3) as usize
}

/// Round rows visible on a timing screen of `height` lines.
pub(super) fn visible_rounds(height: u16) -> usize {
    table_capacity(height.saturating_sub(FOOTER_HEIGHT).max(5))
}

/// End-of-match table of per-round minimax and alpha-beta times.
pub fn render_timings(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Table
            Constraint::Length(3), // Totals
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let timings = app.session.timings();
    let visible = table_capacity(chunks[0].height);
    let rows: Vec<Row> = timings
        .rounds()
        .iter()
        .enumerate()
        .skip(app.timing_scroll)
        .take(visible)
        .map(|(i, round)| {
            Row::new(vec![
                format!("{}", i + 1),
                format!("{:.5}", round.minimax.as_secs_f64()),
                format!("{:.5}", round.alpha_beta.as_secs_f64()),
            ])
            .style(Style::default().fg(Color::Red))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(7),
            Constraint::Length(14),
            Constraint::Length(16),
        ],
    )
    .header(
        Row::new(vec!["Round", "Minimax (s)", "Alpha-Beta (s)"])
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().borders(Borders::ALL).title("Search timings"));
    frame.render_widget(table, chunks[0]);

    let speedup = match timings.speedup() {
        Some(ratio) => format!("alpha-beta {ratio:.1}x faster"),
        None => "no AI turns recorded".to_string(),
    };
    let totals = Paragraph::new(format!(
        "Total: minimax {:.5}s  |  alpha-beta {:.5}s  |  {speedup}",
        timings.total_minimax().as_secs_f64(),
        timings.total_alpha_beta().as_secs_f64(),
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(totals, chunks[1]);

    let controls = Paragraph::new("↑/↓: Scroll  |  Space: Continue")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(controls, chunks[2]);
}

pub fn render_scoreboard(frame: &mut Frame, app: &App) {
    let lines = vec![
        Line::styled(
            "Scoreboard",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled(
            format!("{} Wins: {}", app.display_name(), app.scores.player_wins),
            Style::default().fg(app.player_color().color),
        ),
        Line::styled(
            format!("AI Wins: {}", app.scores.ai_wins),
            Style::default().fg(app.ai_color().color),
        ),
        Line::raw(format!("Ties: {}", app.scores.draws)),
        Line::raw(""),
        Line::raw("Press ENTER to play again"),
    ];

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));
    frame.render_widget(widget, frame.area());
}
