use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::ui::Theme;

const MODAL_WIDTH_PERCENT: u16 = 80;
const MODAL_HEIGHT_PERCENT: u16 = 80;

/// Passage overlay drawn on top of the current screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: Theme) {
    let Some(reference) = app.reference_text() else {
        return;
    };
    let modal = centered(area, MODAL_WIDTH_PERCENT, MODAL_HEIGHT_PERCENT);

    let widget = Paragraph::new(reference.text)
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(app.reading_scroll()).unwrap_or(u16::MAX), 0))
        .fg(Color::White)
        .block(
            Block::default()
                .title(format!(" {} (passage) ", reference.title))
                .title_bottom(Line::from(" j/k scroll  ·  esc close ").centered())
                .borders(Borders::ALL)
                .border_style(theme.accent)
                .padding(Padding::uniform(1)),
        );

    frame.render_widget(Clear, modal);
    frame.render_widget(widget, modal);
}

fn centered(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, vertical, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, horizontal, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(vertical);

    horizontal
}
