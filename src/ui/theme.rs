use ratatui::style::Color;
use tracing::warn;

use crate::models::QuizDefinition;

const DEFAULT_BACKGROUND: Color = Color::Reset;
const DEFAULT_ACCENT: Color = Color::Cyan;

/// Terminal colors derived from a quiz's color metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND,
            accent: DEFAULT_ACCENT,
        }
    }
}

impl Theme {
    pub fn for_quiz(quiz: Option<&QuizDefinition>) -> Self {
        let Some(quiz) = quiz else {
            return Self::default();
        };
        Self {
            background: resolve(quiz.theme_color.as_deref(), DEFAULT_BACKGROUND),
            accent: resolve(quiz.accent_color.as_deref(), DEFAULT_ACCENT),
        }
    }
}

fn resolve(value: Option<&str>, fallback: Color) -> Color {
    match value {
        None => fallback,
        Some(raw) => parse_hex_color(raw).unwrap_or_else(|| {
            warn!(color = raw, "unparsable theme color, using default");
            fallback
        }),
    }
}

/// Parses `#rrggbb` or `#rgb`.
pub fn parse_hex_color(raw: &str) -> Option<Color> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
        }
        3 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            Some(Color::Rgb(channel(0)?, channel(1)?, channel(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#10233a"), Some(Color::Rgb(0x10, 0x23, 0x3a)));
        assert_eq!(parse_hex_color("#FFF"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex_color(" #f2c14e "), Some(Color::Rgb(0xf2, 0xc1, 0x4e)));
        assert_eq!(parse_hex_color("10233a"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
    }

    #[test]
    fn test_theme_fallbacks() {
        assert_eq!(Theme::for_quiz(None), Theme::default());

        let quiz = QuizDefinition {
            title: "T".to_string(),
            questions: Vec::new(),
            theme_color: Some("navy".to_string()),
            accent_color: Some("#00ff00".to_string()),
            text: String::new(),
        };
        let theme = Theme::for_quiz(Some(&quiz));
        assert_eq!(theme.background, DEFAULT_BACKGROUND);
        assert_eq!(theme.accent, Color::Rgb(0, 255, 0));
    }
}
