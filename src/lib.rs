//! # reading-quiz
//!
//! A terminal reading-comprehension quiz. A catalog of quizzes (each a
//! passage plus multiple-choice questions) is walked one question at a time;
//! every answer reveals the correct option and an explanation, and the end
//! screen shows the score with a remark.
//!
//! The quiz logic lives in [`QuizSession`], which publishes
//! [`SessionEvent`]s to any [`SessionObserver`]; the terminal front-end is
//! one such observer.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use reading_quiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load the catalog from a JSON file
//!     let quiz = Quiz::from_json("catalog.json")?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod models;
pub mod remark;
pub mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tracing::info;

pub use app::App;
pub use data::{LoadError, bundled_catalog, load_catalog_from_json, parse_catalog};
pub use models::{AppState, Question, QuizCatalog, QuizDefinition};
pub use remark::Remark;
pub use session::{
    AnswerOutcome, Phase, QuizSession, QuizSummary, SessionError, SessionEvent, SessionObserver,
};

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// Error loading the catalog.
    Load(LoadError),
    /// Error starting a quiz.
    Session(SessionError),
    /// IO error during quiz execution.
    Io(io::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Load(e) => write!(f, "Failed to load quizzes: {}", e),
            QuizError::Session(e) => write!(f, "Failed to start quiz: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Load(e) => Some(e),
            QuizError::Session(e) => Some(e),
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Load(err)
    }
}

impl From<SessionError> for QuizError {
    fn from(err: SessionError) -> Self {
        QuizError::Session(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

/// A quiz catalog that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz runner over a catalog.
    pub fn new(catalog: QuizCatalog) -> Self {
        Self {
            app: App::new(catalog),
        }
    }

    /// Load the catalog from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use reading_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_json("catalog.json").expect("Failed to load quizzes");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let catalog = load_catalog_from_json(path)?;
        Ok(Self::new(catalog))
    }

    /// Use the sample catalog shipped with the crate.
    pub fn bundled() -> Result<Self, QuizError> {
        Ok(Self::new(bundled_catalog()?))
    }

    /// Skip the home screen and open a quiz straight away.
    pub fn start_on(mut self, quiz_id: &str) -> Result<Self, QuizError> {
        self.app.start_quiz(quiz_id)?;
        Ok(self)
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        info!(quizzes = self.app.catalog().len(), "starting terminal session");
        let mut guard = terminal::init()?;
        run_event_loop(guard.terminal(), &mut self.app)
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                info!("quit requested");
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    if app.reading_open() {
        return handle_reading_input(app, key);
    }

    match app.state {
        AppState::Home => handle_home_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_reading_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_reading_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_reading_up(),
        KeyCode::Esc | KeyCode::Char('t') | KeyCode::Char('T') => app.close_reading(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

fn handle_home_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_quiz();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_quiz();
            false
        }
        KeyCode::Enter => {
            app.start_selected_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Char(digit @ '1'..='9') => {
            let option = digit as usize - '1' as usize;
            app.choose_option(option);
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.submit();
            false
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            app.advance();
            false
        }
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.toggle_reading();
            false
        }
        KeyCode::Esc => {
            app.go_home();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.toggle_reading();
            false
        }
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') => {
            app.go_home();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(bundled_catalog().unwrap())
    }

    #[test]
    fn test_full_run_through_keys() {
        let mut app = app();
        assert!(!handle_input(&mut app, KeyCode::Enter));
        assert_eq!(app.state, AppState::Quiz);

        let total = app.total_questions();
        for _ in 0..total {
            let answer = app.current_question().unwrap().answer;
            let digit = char::from_digit(answer as u32 + 1, 10).unwrap();
            handle_input(&mut app, KeyCode::Char(digit));
            assert!(app.last_outcome().unwrap().is_correct);
            handle_input(&mut app, KeyCode::Enter);
        }

        assert_eq!(app.state, AppState::Result);
        assert_eq!(app.summary().unwrap().remark, Remark::Perfect);

        handle_input(&mut app, KeyCode::Char('h'));
        assert_eq!(app.state, AppState::Home);
        assert!(handle_input(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_reading_modal_captures_keys() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Enter);
        handle_input(&mut app, KeyCode::Char('t'));
        assert!(app.reading_open());

        // Enter does not answer while the passage is open.
        handle_input(&mut app, KeyCode::Enter);
        assert!(!app.is_answered());

        handle_input(&mut app, KeyCode::Esc);
        assert!(!app.reading_open());
        assert_eq!(app.state, AppState::Quiz);
    }

    #[test]
    fn test_escape_returns_home_mid_quiz() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Enter);
        handle_input(&mut app, KeyCode::Esc);
        assert_eq!(app.state, AppState::Home);
    }

    #[test]
    fn test_start_on_unknown_quiz_fails() {
        let quiz = Quiz::bundled().unwrap();
        assert!(matches!(
            quiz.start_on("nope"),
            Err(QuizError::Session(SessionError::UnknownQuiz(_)))
        ));
    }
}
