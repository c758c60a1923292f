//! Quiz session state machine.
//!
//! A [`QuizSession`] walks through one quiz of a [`QuizCatalog`] question by
//! question, keeps the score and tells subscribed observers about every
//! transition. It knows nothing about rendering.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::models::{Question, QuizCatalog, QuizDefinition};
use crate::remark::{Remark, percentage};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No quiz started yet.
    Idle,
    /// Showing the question at `index`.
    InProgress { index: usize, answered: bool },
    /// All questions passed; only a new `start` leaves this phase.
    Finished,
}

/// Error type for session operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No quiz with this id in the catalog. Session state is left untouched.
    UnknownQuiz(String),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::UnknownQuiz(id) => write!(f, "unknown quiz '{}'", id),
        }
    }
}

impl std::error::Error for SessionError {}

/// What happened when an option was chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOutcome {
    pub question_index: usize,
    pub selected: usize,
    pub correct_option: usize,
    pub is_correct: bool,
    pub explanation: String,
}

/// Final tally of a finished quiz.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSummary {
    pub quiz_id: String,
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
    pub remark: Remark,
}

/// State changes published to observers.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    QuizStarted {
        quiz_id: String,
        title: String,
        total: usize,
    },
    QuestionLoaded {
        index: usize,
        total: usize,
    },
    AnswerRevealed(AnswerOutcome),
    QuizFinished(QuizSummary),
}

/// Receives session events, typically a presentation layer.
pub trait SessionObserver {
    fn on_event(&mut self, event: &SessionEvent);
}

impl<F: FnMut(&SessionEvent)> SessionObserver for F {
    fn on_event(&mut self, event: &SessionEvent) {
        self(event)
    }
}

/// Title and passage of the active quiz, for the reading view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceText<'a> {
    pub title: &'a str,
    pub text: &'a str,
}

pub struct QuizSession {
    catalog: Arc<QuizCatalog>,
    quiz_id: Option<String>,
    phase: Phase,
    score: usize,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl QuizSession {
    pub fn new(catalog: Arc<QuizCatalog>) -> Self {
        Self {
            catalog,
            quiz_id: None,
            phase: Phase::Idle,
            score: 0,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    pub fn catalog(&self) -> &QuizCatalog {
        &self.catalog
    }

    /// Begin (or restart) a quiz from its first question.
    ///
    /// An unknown id changes nothing and is reported as
    /// [`SessionError::UnknownQuiz`]; callers wanting a silent no-op can
    /// ignore the error.
    pub fn start(&mut self, quiz_id: &str) -> Result<(), SessionError> {
        let Some(quiz) = self.catalog.get(quiz_id) else {
            warn!(quiz = quiz_id, "start ignored: unknown quiz");
            return Err(SessionError::UnknownQuiz(quiz_id.to_string()));
        };

        let event = SessionEvent::QuizStarted {
            quiz_id: quiz_id.to_string(),
            title: quiz.title.clone(),
            total: quiz.len(),
        };
        info!(quiz = quiz_id, questions = quiz.len(), "quiz started");

        self.quiz_id = Some(quiz_id.to_string());
        self.score = 0;
        self.phase = Phase::InProgress {
            index: 0,
            answered: false,
        };
        self.emit(event);
        self.load_question();
        Ok(())
    }

    /// Choose an option for the current question.
    ///
    /// Returns `None` when there is nothing to answer: no question is
    /// showing or it was already answered.
    pub fn select(&mut self, option: usize) -> Option<AnswerOutcome> {
        let Phase::InProgress {
            index,
            answered: false,
        } = self.phase
        else {
            debug!(option, "select ignored");
            return None;
        };

        let question = self.current_question()?;
        let outcome = AnswerOutcome {
            question_index: index,
            selected: option,
            correct_option: question.answer,
            is_correct: question.is_correct(option),
            explanation: question.explanation.clone(),
        };

        self.phase = Phase::InProgress {
            index,
            answered: true,
        };
        if outcome.is_correct {
            self.score += 1;
        }
        debug!(
            question = index,
            option,
            correct = outcome.is_correct,
            score = self.score,
            "answer revealed"
        );

        self.emit(SessionEvent::AnswerRevealed(outcome.clone()));
        Some(outcome)
    }

    /// Move past the current question, finishing after the last one.
    pub fn next(&mut self) {
        let Phase::InProgress { index, .. } = self.phase else {
            debug!(phase = ?self.phase, "next ignored");
            return;
        };

        let next_index = index + 1;
        if next_index < self.total() {
            self.phase = Phase::InProgress {
                index: next_index,
                answered: false,
            };
            self.load_question();
        } else {
            self.phase = Phase::Finished;
            if let Some(summary) = self.show_result() {
                info!(
                    quiz = %summary.quiz_id,
                    score = summary.score,
                    total = summary.total,
                    "quiz finished"
                );
                self.emit(SessionEvent::QuizFinished(summary));
            }
        }
    }

    /// Score summary, available once the quiz is finished.
    pub fn show_result(&self) -> Option<QuizSummary> {
        if self.phase != Phase::Finished {
            return None;
        }
        let quiz_id = self.quiz_id.clone()?;
        let total = self.total();

        Some(QuizSummary {
            quiz_id,
            score: self.score,
            total,
            percentage: percentage(self.score, total),
            remark: Remark::for_score(self.score, total),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn quiz_id(&self) -> Option<&str> {
        self.quiz_id.as_deref()
    }

    pub fn current_quiz(&self) -> Option<&QuizDefinition> {
        self.quiz_id.as_deref().and_then(|id| self.catalog.get(id))
    }

    /// Question currently on screen, if any.
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::InProgress { index, .. } => self.current_quiz()?.questions.get(index),
            Phase::Idle | Phase::Finished => None,
        }
    }

    /// 0-based position; equals `total()` once finished.
    pub fn current_index(&self) -> usize {
        match self.phase {
            Phase::Idle => 0,
            Phase::InProgress { index, .. } => index,
            Phase::Finished => self.total(),
        }
    }

    pub fn total(&self) -> usize {
        self.current_quiz().map_or(0, QuizDefinition::len)
    }

    /// Fraction of questions already passed, `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.current_index() as f64 / total as f64
        }
    }

    pub fn is_answered(&self) -> bool {
        matches!(self.phase, Phase::InProgress { answered: true, .. })
    }

    pub fn reference_text(&self) -> Option<ReferenceText<'_>> {
        let quiz = self.current_quiz()?;
        Some(ReferenceText {
            title: &quiz.title,
            text: &quiz.text,
        })
    }

    fn load_question(&mut self) {
        let Phase::InProgress { index, .. } = self.phase else {
            return;
        };
        self.phase = Phase::InProgress {
            index,
            answered: false,
        };
        let total = self.total();
        debug!(question = index, total, "question loaded");
        self.emit(SessionEvent::QuestionLoaded { index, total });
    }

    fn emit(&mut self, event: SessionEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}
