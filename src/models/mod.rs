mod question;

pub use question::Question;

/// Top-level lifecycle of a quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Welcome screen, nothing answered yet.
    #[default]
    NotStarted,
    /// Cycling through the questions.
    InProgress,
    /// Past the last question, results on screen.
    Complete,
}
