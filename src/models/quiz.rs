use serde::Deserialize;

use super::Question;

/// A named, ordered collection of questions sharing a reading passage and theme.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDefinition {
    pub title: String,
    pub questions: Vec<Question>,
    /// Background tint, `#rrggbb`.
    #[serde(default)]
    pub theme_color: Option<String>,
    /// Border and highlight color, `#rrggbb`.
    #[serde(default)]
    pub accent_color: Option<String>,
    /// Full reference text the questions are about.
    #[serde(default)]
    pub text: String,
}

impl QuizDefinition {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
