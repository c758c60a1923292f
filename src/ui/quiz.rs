use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::Question;
use crate::session::AnswerOutcome;
use crate::ui::Theme;

const OPTION_LABELS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: Theme) {
    let Some(question) = app.current_question() else {
        return;
    };
    let outcome = app.last_outcome();

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(6),
        Constraint::Length(1),
    ])
    .spacing(1)
    .margin(1)
    .split(area);

    render_title(frame, chunks[0], app, theme);
    render_progress(frame, chunks[1], app, theme);
    render_header(frame, chunks[2], app, question, theme);
    render_question_text(frame, chunks[3], &question.text);
    render_options(frame, chunks[4], question, app.selected_option(), outcome.as_ref());
    if let Some(outcome) = &outcome {
        render_feedback(frame, chunks[5], outcome, theme);
    }
    render_controls(frame, chunks[6], outcome.is_some());
}

fn render_title(frame: &mut Frame, area: Rect, app: &App, theme: Theme) {
    let title = app.current_quiz().map_or("", |quiz| quiz.title.as_str());
    let widget = Paragraph::new(title).fg(theme.accent).bold();
    frame.render_widget(widget, area);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App, theme: Theme) {
    let widget = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent).bg(Color::DarkGray))
        .ratio(app.session().progress().clamp(0.0, 1.0))
        .label("");
    frame.render_widget(widget, area);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, question: &Question, theme: Theme) {
    let mut spans = vec![Span::styled(
        format!(
            "Question {} / {}",
            app.current_question_number(),
            app.total_questions()
        ),
        Style::default().fg(Color::Gray),
    )];
    if !question.level.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!(" {} ", question.level),
            Style::default().fg(Color::Black).bg(level_color(&question.level, theme)),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Badge color per difficulty tag; unknown tags use the quiz accent.
fn level_color(level: &str, theme: Theme) -> Color {
    match level.to_ascii_lowercase().as_str() {
        "basic" | "easy" => Color::Green,
        "standard" | "medium" => Color::Yellow,
        "advanced" | "hard" => Color::LightRed,
        _ => theme.accent,
    }
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn option_label(index: usize) -> char {
    OPTION_LABELS
        .get(index)
        .map_or('?', |&label| char::from(label))
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    selected: usize,
    outcome: Option<&AnswerOutcome>,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let (marker, style) = match outcome {
            Some(outcome) if index == outcome.correct_option => {
                ("✓", Style::default().fg(Color::Green).bold())
            }
            Some(outcome) if index == outcome.selected => {
                ("✗", Style::default().fg(Color::Red).bold())
            }
            Some(_) => (" ", Style::default().fg(Color::DarkGray)),
            None if index == selected => (">", Style::default().fg(Color::Cyan).bold()),
            None => (" ", Style::default().fg(Color::Gray)),
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", option_label(index)), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_feedback(frame: &mut Frame, area: Rect, outcome: &AnswerOutcome, theme: Theme) {
    let verdict = if outcome.is_correct {
        Span::styled("Correct!", Style::default().fg(Color::Green).bold())
    } else {
        Span::styled("Incorrect...", Style::default().fg(Color::Red).bold())
    };

    let content = vec![
        Line::from(verdict),
        Line::from(""),
        Line::from(outcome.explanation.as_str()).fg(Color::Gray),
    ];

    let widget = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(theme.accent)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, answered: bool) {
    let text = if answered {
        "enter next  ·  t passage  ·  esc home  ·  q quit"
    } else {
        "j/k navigate  ·  enter select  ·  1-9 pick  ·  t passage  ·  q quit"
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_label() {
        assert_eq!(option_label(0), 'A');
        assert_eq!(option_label(3), 'D');
        assert_eq!(option_label(40), '?');
    }

    #[test]
    fn test_level_color() {
        let theme = Theme::default();
        assert_eq!(level_color("basic", theme), Color::Green);
        assert_eq!(level_color("Standard", theme), Color::Yellow);
        assert_eq!(level_color("advanced", theme), Color::LightRed);
        assert_eq!(level_color("expert", theme), theme.accent);
    }
}
