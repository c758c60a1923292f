use std::collections::BTreeMap;

use serde::Deserialize;

use super::QuizDefinition;

/// Read-only mapping from quiz id to its definition, iterated in id order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct QuizCatalog {
    quizzes: BTreeMap<String, QuizDefinition>,
}

impl QuizCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a quiz, replacing any previous definition under the same id.
    pub fn insert(&mut self, id: impl Into<String>, quiz: QuizDefinition) {
        self.quizzes.insert(id.into(), quiz);
    }

    pub fn get(&self, id: &str) -> Option<&QuizDefinition> {
        self.quizzes.get(id)
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.quizzes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QuizDefinition)> {
        self.quizzes.iter().map(|(id, quiz)| (id.as_str(), quiz))
    }

    /// Id at a position of the ordered listing.
    pub fn id_at(&self, position: usize) -> Option<&str> {
        self.ids().nth(position)
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.ids().position(|candidate| candidate == id)
    }
}
