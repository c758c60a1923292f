use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::models::QuizCatalog;

const BUNDLED_CATALOG: &str = include_str!("catalog.json");

/// Minimum number of options a question needs to be a choice at all.
const MIN_OPTIONS: usize = 2;

/// Error type for catalog loading.
#[derive(Debug)]
pub enum LoadError {
    /// The catalog file could not be read.
    Io(io::Error),
    /// The catalog is not valid JSON or does not match the expected shape.
    Parse(serde_json::Error),
    /// The catalog contains no quizzes.
    Empty,
    /// A quiz or question failed a presence check.
    Invalid(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "could not read catalog: {}", e),
            LoadError::Parse(e) => write!(f, "could not parse catalog: {}", e),
            LoadError::Empty => write!(f, "catalog must contain at least one quiz"),
            LoadError::Invalid(reason) => write!(f, "invalid catalog: {}", reason),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e),
            LoadError::Empty | LoadError::Invalid(_) => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err)
    }
}

/// The sample catalog compiled into the binary.
pub fn bundled_catalog() -> Result<QuizCatalog, LoadError> {
    parse_catalog(BUNDLED_CATALOG)
}

pub fn load_catalog_from_json<P: AsRef<Path>>(path: P) -> Result<QuizCatalog, LoadError> {
    let path = path.as_ref();
    let json_content = fs::read_to_string(path)?;
    let catalog = parse_catalog(&json_content)?;
    info!(path = %path.display(), quizzes = catalog.len(), "loaded catalog");
    Ok(catalog)
}

pub fn parse_catalog(json: &str) -> Result<QuizCatalog, LoadError> {
    let catalog: QuizCatalog = serde_json::from_str(json)?;
    validate(&catalog)?;
    Ok(catalog)
}

fn validate(catalog: &QuizCatalog) -> Result<(), LoadError> {
    if catalog.is_empty() {
        return Err(LoadError::Empty);
    }

    for (id, quiz) in catalog.iter() {
        if quiz.title.trim().is_empty() {
            return Err(LoadError::Invalid(format!("quiz '{}' has no title", id)));
        }
        if quiz.is_empty() {
            return Err(LoadError::Invalid(format!("quiz '{}' has no questions", id)));
        }

        for (number, question) in quiz.questions.iter().enumerate().map(|(i, q)| (i + 1, q)) {
            if question.text.trim().is_empty() {
                return Err(LoadError::Invalid(format!(
                    "quiz '{}' question {} has no prompt",
                    id, number
                )));
            }
            if question.options.len() < MIN_OPTIONS {
                return Err(LoadError::Invalid(format!(
                    "quiz '{}' question {} needs at least {} options",
                    id, number, MIN_OPTIONS
                )));
            }
            if question.answer >= question.options.len() {
                return Err(LoadError::Invalid(format!(
                    "quiz '{}' question {} answer {} is out of range (0..{})",
                    id,
                    number,
                    question.answer,
                    question.options.len()
                )));
            }
        }

        debug!(quiz = id, questions = quiz.len(), "quiz validated");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_QUIZ: &str = r##"{
        "intro": {
            "title": "Intro",
            "themeColor": "#fdf6e3",
            "accentColor": "#268bd2",
            "text": "Once upon a time.",
            "questions": [
                {
                    "question": "When?",
                    "level": "basic",
                    "options": ["Once", "Twice"],
                    "answer": 0,
                    "explanation": "It says once."
                }
            ]
        }
    }"##;

    #[test]
    fn test_bundled_catalog_is_valid() {
        let catalog = bundled_catalog().unwrap();
        assert!(!catalog.is_empty());
        for (_, quiz) in catalog.iter() {
            assert!(!quiz.text.is_empty());
        }
    }

    #[test]
    fn test_parse_field_names() {
        let catalog = parse_catalog(ONE_QUIZ).unwrap();
        let quiz = catalog.get("intro").unwrap();
        assert_eq!(quiz.title, "Intro");
        assert_eq!(quiz.theme_color.as_deref(), Some("#fdf6e3"));
        assert_eq!(quiz.accent_color.as_deref(), Some("#268bd2"));
        assert_eq!(quiz.questions[0].text, "When?");
        assert_eq!(quiz.questions[0].level, "basic");
        assert_eq!(quiz.questions[0].explanation, "It says once.");
    }

    #[test]
    fn test_rejects_out_of_range_answer() {
        let json = ONE_QUIZ.replace("\"answer\": 0", "\"answer\": 2");
        let err = parse_catalog(&json).unwrap_err();
        assert!(matches!(err, LoadError::Invalid(_)));
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_rejects_quiz_without_questions() {
        let json = r#"{ "empty": { "title": "Empty", "questions": [] } }"#;
        assert!(matches!(parse_catalog(json), Err(LoadError::Invalid(_))));
    }

    #[test]
    fn test_rejects_blank_title() {
        let json = ONE_QUIZ.replace("\"title\": \"Intro\"", "\"title\": \"  \"");
        let err = parse_catalog(&json).unwrap_err();
        assert!(err.to_string().contains("has no title"));
    }

    #[test]
    fn test_rejects_blank_prompt() {
        let json = ONE_QUIZ.replace("\"question\": \"When?\"", "\"question\": \"\"");
        let err = parse_catalog(&json).unwrap_err();
        assert!(err.to_string().contains("has no prompt"));
    }

    #[test]
    fn test_rejects_single_option() {
        let json = ONE_QUIZ.replace("[\"Once\", \"Twice\"]", "[\"Once\"]");
        let err = parse_catalog(&json).unwrap_err();
        assert!(matches!(err, LoadError::Invalid(_)));
        assert!(err.to_string().contains("at least 2 options"));
    }

    #[test]
    fn test_rejects_empty_catalog() {
        assert!(matches!(parse_catalog("{}"), Err(LoadError::Empty)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(parse_catalog("{ not json"), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_catalog_from_json("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
