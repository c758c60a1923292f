use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

/// Heading lines, borders and a spare line around the quiz list.
const PANEL_CHROME: u16 = 7;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let catalog = app.catalog();

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(panel_height(catalog.len())),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "READING QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            format!("{} quizzes", catalog.len()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    for (position, (_, quiz)) in catalog.iter().enumerate() {
        let is_selected = position == app.home_cursor();
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        content.push(Line::from(vec![
            Span::styled(format!("{} ", marker), style),
            Span::styled(quiz.title.as_str(), style),
            Span::styled(
                format!("  ({} questions)", quiz.len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        content.push(Line::from(""));
    }

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);

    let controls = Paragraph::new("j/k choose  ·  enter start  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[3]);
}

/// Two lines per quiz plus chrome, saturating for absurd catalog sizes.
fn panel_height(quiz_count: usize) -> u16 {
    u16::try_from(quiz_count)
        .unwrap_or(u16::MAX)
        .saturating_mul(2)
        .saturating_add(PANEL_CHROME)
}
