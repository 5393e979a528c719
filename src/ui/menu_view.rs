use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{App, Screen};
use super::palette::PALETTE;

/// Title, nickname entry, color selection and color confirmation screens.
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered(frame.area(), 9);
    let lines = match app.screen {
        Screen::Title => vec![
            Line::styled(
                "Welcome to Connect 4 AI",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::raw("Press SPACE to continue"),
        ],
        Screen::Nickname => vec![
            Line::raw("Enter your nickname:"),
            Line::raw(""),
            Line::from(vec![
                Span::styled(
                    app.nickname.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled("_", Style::default().fg(Color::DarkGray)),
            ]),
            Line::raw(""),
            Line::raw("Press ENTER to confirm"),
        ],
        Screen::ColorSelect => color_select_lines(app.color_index),
        _ => vec![
            Line::styled(
                format!("You chose {}!", app.player_color().name.to_uppercase()),
                Style::default().fg(app.player_color().color),
            ),
            Line::styled(
                format!("AI will be {}", app.ai_color().name.to_uppercase()),
                Style::default().fg(app.ai_color().color),
            ),
            Line::raw(""),
            Line::raw("Press SPACE to continue"),
        ],
    };

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));
    frame.render_widget(widget, area);
}

fn color_select_lines(selected: usize) -> Vec<Line<'static>> {
    let swatches: Vec<Span> = PALETTE
        .iter()
        .enumerate()
        .flat_map(|(i, entry)| {
            let style = Style::default().fg(entry.color);
            let swatch = if i == selected {
                Span::styled(
                    format!("[ ● {} ]", entry.name),
                    style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                )
            } else {
                Span::styled(format!("  ● {}  ", entry.name), style)
            };
            [swatch, Span::raw(" ")]
        })
        .collect();

    vec![
        Line::raw("Use ←/→ to choose a color, ENTER to select"),
        Line::raw(""),
        Line::from(swatches),
    ]
}

fn centered(area: Rect, height: u16) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    chunks[1]
}
