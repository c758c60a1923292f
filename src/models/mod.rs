mod catalog;
mod question;
mod quiz;

pub use catalog::QuizCatalog;
pub use question::Question;
pub use quiz::QuizDefinition;

/// Screen the terminal front-end is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Catalog listing.
    Home,
    Quiz,
    Result,
}
