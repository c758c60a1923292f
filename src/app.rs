use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::models::{AppState, Question, QuizCatalog, QuizDefinition};
use crate::session::{
    AnswerOutcome, Phase, QuizSession, QuizSummary, ReferenceText, SessionError, SessionEvent,
    SessionObserver,
};

/// What the screen should show about the last answer and the final score.
#[derive(Debug, Default)]
struct Feedback {
    outcome: Option<AnswerOutcome>,
    summary: Option<QuizSummary>,
}

/// Keeps `Feedback` in step with the session it subscribes to.
struct FeedbackRecorder(Rc<RefCell<Feedback>>);

impl SessionObserver for FeedbackRecorder {
    fn on_event(&mut self, event: &SessionEvent) {
        let mut feedback = self.0.borrow_mut();
        match event {
            SessionEvent::QuizStarted { .. } => *feedback = Feedback::default(),
            SessionEvent::QuestionLoaded { .. } => feedback.outcome = None,
            SessionEvent::AnswerRevealed(outcome) => feedback.outcome = Some(outcome.clone()),
            SessionEvent::QuizFinished(summary) => feedback.summary = Some(summary.clone()),
        }
    }
}

pub struct App {
    pub state: AppState,
    session: QuizSession,
    feedback: Rc<RefCell<Feedback>>,
    home_cursor: usize,
    selected_option: usize,
    reading_open: bool,
    reading_scroll: usize,
}

impl App {
    pub fn new(catalog: QuizCatalog) -> Self {
        let feedback = Rc::new(RefCell::new(Feedback::default()));
        let mut session = QuizSession::new(Arc::new(catalog));
        session.subscribe(Box::new(FeedbackRecorder(Rc::clone(&feedback))));

        Self {
            state: AppState::Home,
            session,
            feedback,
            home_cursor: 0,
            selected_option: 0,
            reading_open: false,
            reading_scroll: 0,
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn catalog(&self) -> &QuizCatalog {
        self.session.catalog()
    }

    pub fn home_cursor(&self) -> usize {
        self.home_cursor
    }

    pub fn select_next_quiz(&mut self) {
        let count = self.catalog().len();
        if count > 0 {
            self.home_cursor = (self.home_cursor + 1) % count;
        }
    }

    pub fn select_previous_quiz(&mut self) {
        let count = self.catalog().len();
        if count > 0 {
            self.home_cursor = (self.home_cursor + count - 1) % count;
        }
    }

    pub fn start_selected_quiz(&mut self) {
        let Some(id) = self.catalog().id_at(self.home_cursor).map(str::to_string) else {
            return;
        };
        if let Err(e) = self.start_quiz(&id) {
            warn!(error = %e, "could not start selected quiz");
        }
    }

    pub fn start_quiz(&mut self, quiz_id: &str) -> Result<(), SessionError> {
        self.session.start(quiz_id)?;
        if let Some(position) = self.catalog().position_of(quiz_id) {
            self.home_cursor = position;
        }
        self.selected_option = 0;
        self.close_reading();
        self.sync_state();
        Ok(())
    }

    pub fn current_quiz(&self) -> Option<&QuizDefinition> {
        self.session.current_quiz()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.session.current_question()
    }

    pub fn current_question_number(&self) -> usize {
        self.session.current_index() + 1
    }

    pub fn total_questions(&self) -> usize {
        self.session.total()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn is_answered(&self) -> bool {
        self.session.is_answered()
    }

    pub fn last_outcome(&self) -> Option<AnswerOutcome> {
        self.feedback.borrow().outcome.clone()
    }

    pub fn summary(&self) -> Option<QuizSummary> {
        self.feedback.borrow().summary.clone()
    }

    fn option_count(&self) -> usize {
        self.current_question().map_or(0, |q| q.options.len())
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 && !self.is_answered() {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 && !self.is_answered() {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    /// Jump the cursor to an option and answer with it.
    pub fn choose_option(&mut self, option: usize) {
        if option < self.option_count() && !self.is_answered() {
            self.selected_option = option;
            self.session.select(option);
        }
    }

    /// Answer with the highlighted option, or move on if already answered.
    pub fn submit(&mut self) {
        if self.is_answered() {
            self.advance();
        } else {
            self.session.select(self.selected_option);
        }
    }

    pub fn advance(&mut self) {
        self.session.next();
        self.selected_option = 0;
        self.sync_state();
    }

    pub fn restart(&mut self) {
        if let Some(id) = self.session.quiz_id().map(str::to_string) {
            if let Err(e) = self.start_quiz(&id) {
                warn!(error = %e, "could not restart quiz");
            }
        }
    }

    pub fn go_home(&mut self) {
        self.close_reading();
        self.state = AppState::Home;
    }

    pub fn reading_open(&self) -> bool {
        self.reading_open
    }

    pub fn reading_scroll(&self) -> usize {
        self.reading_scroll
    }

    pub fn reference_text(&self) -> Option<ReferenceText<'_>> {
        self.session.reference_text()
    }

    pub fn toggle_reading(&mut self) {
        if self.reading_open {
            self.close_reading();
        } else if self.reference_text().is_some() {
            self.reading_open = true;
            self.reading_scroll = 0;
        }
    }

    pub fn close_reading(&mut self) {
        self.reading_open = false;
        self.reading_scroll = 0;
    }

    pub fn scroll_reading_down(&mut self) {
        let max_scroll = self
            .reference_text()
            .map_or(0, |reference| reference.text.lines().count().saturating_sub(1));
        self.reading_scroll = (self.reading_scroll + 1).min(max_scroll);
    }

    pub fn scroll_reading_up(&mut self) {
        self.reading_scroll = self.reading_scroll.saturating_sub(1);
    }

    fn sync_state(&mut self) {
        let state = match self.session.phase() {
            Phase::Idle => AppState::Home,
            Phase::InProgress { .. } => AppState::Quiz,
            Phase::Finished => AppState::Result,
        };
        if state != self.state {
            debug!(from = ?self.state, to = ?state, "screen changed");
            self.state = state;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_catalog;
    use crate::remark::Remark;

    const CATALOG: &str = r#"{
        "alpha": {
            "title": "Alpha",
            "text": "Alpha passage",
            "questions": [
                { "question": "One?", "level": "basic", "options": ["x", "y"], "answer": 1, "explanation": "y" },
                { "question": "Two?", "level": "basic", "options": ["x", "y", "z"], "answer": 2, "explanation": "z" }
            ]
        },
        "beta": {
            "title": "Beta",
            "questions": [
                { "question": "Only?", "options": ["x", "y"], "answer": 0 }
            ]
        }
    }"#;

    fn app() -> App {
        App::new(parse_catalog(CATALOG).unwrap())
    }

    #[test]
    fn test_home_to_quiz_to_result_and_back() {
        let mut app = app();
        assert_eq!(app.state, AppState::Home);

        app.start_selected_quiz();
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.current_quiz().unwrap().title, "Alpha");

        app.select_next_option();
        app.submit();
        assert!(app.last_outcome().unwrap().is_correct);

        app.submit();
        assert_eq!(app.current_question_number(), 2);
        assert!(app.last_outcome().is_none());

        app.submit();
        assert!(!app.last_outcome().unwrap().is_correct);
        app.submit();

        assert_eq!(app.state, AppState::Result);
        let summary = app.summary().unwrap();
        assert_eq!((summary.score, summary.total), (1, 2));
        assert_eq!(summary.remark, Remark::Fair);

        app.go_home();
        assert_eq!(app.state, AppState::Home);
    }

    #[test]
    fn test_home_cursor_wraps() {
        let mut app = app();
        app.select_previous_quiz();
        assert_eq!(app.home_cursor(), 1);
        app.select_next_quiz();
        assert_eq!(app.home_cursor(), 0);
    }

    #[test]
    fn test_cursor_frozen_after_answer() {
        let mut app = app();
        app.start_quiz("alpha").unwrap();
        app.choose_option(0);
        app.select_next_option();
        assert_eq!(app.selected_option(), 0);
        assert!(app.is_answered());
    }

    #[test]
    fn test_choose_out_of_range_is_ignored() {
        let mut app = app();
        app.start_quiz("beta").unwrap();
        app.choose_option(5);
        assert!(!app.is_answered());
    }

    #[test]
    fn test_restart_resets_feedback() {
        let mut app = app();
        app.start_quiz("beta").unwrap();
        app.submit();
        app.submit();
        assert_eq!(app.state, AppState::Result);

        app.restart();
        assert_eq!(app.state, AppState::Quiz);
        assert!(app.summary().is_none());
        assert_eq!(app.session().score(), 0);
    }

    #[test]
    fn test_unknown_quiz_keeps_screen() {
        let mut app = app();
        assert!(app.start_quiz("gamma").is_err());
        assert_eq!(app.state, AppState::Home);
    }

    #[test]
    fn test_reading_modal() {
        let mut app = app();
        app.toggle_reading();
        assert!(!app.reading_open());

        app.start_quiz("alpha").unwrap();
        app.toggle_reading();
        assert!(app.reading_open());
        app.scroll_reading_down();
        app.scroll_reading_up();
        app.scroll_reading_up();
        assert_eq!(app.reading_scroll(), 0);
        assert_eq!(app.reference_text().unwrap().text, "Alpha passage");
        app.toggle_reading();
        assert!(!app.reading_open());
    }

    #[test]
    fn test_reading_scroll_stops_at_last_line() {
        let mut app = app();
        app.start_quiz("alpha").unwrap();
        app.toggle_reading();
        for _ in 0..50 {
            app.scroll_reading_down();
        }
        // One-line passage: the first line stays visible.
        assert_eq!(app.reading_scroll(), 0);
    }

    #[test]
    fn test_reading_scroll_bounded_by_line_count() {
        let catalog = parse_catalog(
            r#"{ "poem": { "title": "Poem", "text": "one\ntwo\nthree",
                "questions": [ { "question": "?", "options": ["a", "b"], "answer": 0 } ] } }"#,
        )
        .unwrap();
        let mut app = App::new(catalog);
        app.start_quiz("poem").unwrap();
        app.toggle_reading();
        for _ in 0..10 {
            app.scroll_reading_down();
        }
        assert_eq!(app.reading_scroll(), 2);
        app.scroll_reading_up();
        assert_eq!(app.reading_scroll(), 1);
    }
}
