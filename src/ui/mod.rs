mod home;
mod quiz;
mod reading;
mod result;
mod theme;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::AppState;

pub use theme::Theme;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let theme = match app.state {
        AppState::Home => Theme::default(),
        AppState::Quiz | AppState::Result => Theme::for_quiz(app.current_quiz()),
    };
    frame.render_widget(Block::default().bg(theme.background), area);

    match app.state {
        AppState::Home => home::render(frame, area, app),
        AppState::Quiz => quiz::render(frame, area, app, theme),
        AppState::Result => result::render(frame, area, app, theme),
    }

    if app.reading_open() {
        reading::render(frame, area, app, theme);
    }
}
