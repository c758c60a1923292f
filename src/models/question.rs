use serde::Deserialize;

/// One prompt with several options, exactly one of them correct.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    /// Difficulty tag shown as a badge (e.g. "basic", "advanced").
    #[serde(default)]
    pub level: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub answer: usize,
    #[serde(default)]
    pub explanation: String,
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.answer
    }
}
