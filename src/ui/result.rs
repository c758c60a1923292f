use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::remark::Remark;
use crate::ui::Theme;

pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: Theme) {
    let Some(summary) = app.summary() else {
        return;
    };
    let title = app.current_quiz().map_or("", |quiz| quiz.title.as_str());

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(11),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled("RESULTS", Style::default().fg(theme.accent).bold())),
        Line::from(title.fg(Color::DarkGray)),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}", summary.score, summary.total),
            Style::default().fg(grade_color(summary.remark)).bold(),
        )),
        Line::from(Span::styled(
            format!("{:.0}%", summary.percentage),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            summary.remark.message(),
            Style::default().fg(Color::White),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.accent),
    );
    frame.render_widget(widget, chunks[1]);

    render_controls(frame, chunks[3]);
}

fn grade_color(remark: Remark) -> Color {
    match remark {
        Remark::Perfect => Color::Green,
        Remark::Excellent => Color::Cyan,
        Remark::Fair => Color::Yellow,
        Remark::Completed => Color::Red,
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("r retry  ·  t passage  ·  h home  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
