//! # timed-quiz
//!
//! A terminal multiple-choice quiz with a per-question countdown and a
//! local top-10 leaderboard.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timed_quiz::{Quiz, QuizError, Settings};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     // Falls back to an empty question set (with a notice) if loading fails
//!     let quiz = Quiz::from_settings(&Settings::default());
//!
//!     // Run the quiz in the terminal
//!     quiz.run().await?;
//!
//!     Ok(())
//! }
//! ```

mod app;
pub mod config;
mod data;
pub mod input;
pub mod leaderboard;
mod models;
pub mod quiz;
pub mod terminal;
pub mod theme;
pub mod timer;
mod ui;

use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use thiserror::Error;

pub use app::{App, LOAD_FAILED_NOTICE, MISSING_NAME_NOTICE, NAME_MAX_LENGTH, NO_QUESTIONS_NOTICE};
pub use config::{QuizConfig, Settings};
pub use data::{LoadError, load_questions_from_json};
pub use leaderboard::{JsonFileStore, Leaderboard, LeaderboardEntry, LeaderboardStore, MemoryStore};
pub use models::{AppState, Question};

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading questions from file.
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),
    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    pub fn new(app: App) -> Self {
        Self { app }
    }

    /// Load questions and leaderboard from the configured paths.
    ///
    /// A broken question file does not fail here: the quiz starts with no
    /// questions and tells the player about it.
    pub fn from_settings(settings: &Settings) -> Self {
        let questions = load_questions_from_json(&settings.questions_path);
        let store = JsonFileStore::new(&settings.leaderboard_path);
        tracing::info!(path = %store.path().display(), "Using leaderboard file");

        let leaderboard = Leaderboard::open(Box::new(store));
        Self::new(App::from_load_result(questions, leaderboard, settings))
    }

    /// Load a quiz from a JSON file, failing on any load error.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use timed_quiz::{MemoryStore, Quiz};
    ///
    /// let quiz = Quiz::from_json("questions.json", Box::new(MemoryStore::default()))
    ///     .expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(
        path: P,
        store: Box<dyn LeaderboardStore>,
    ) -> Result<Self, QuizError> {
        let questions = load_questions_from_json(path)?;
        Ok(Self::new(App::new(
            questions,
            Leaderboard::open(store),
            &Settings::default(),
        )))
    }

    /// Run the quiz in the terminal.
    ///
    /// This takes over the terminal, displays the quiz UI, and returns
    /// when the player quits. Must be called inside a tokio runtime.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let mut session = terminal::TerminalSession::enter()?;
        run_event_loop(session.terminal(), &mut self.app).await
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

async fn run_event_loop(
    terminal: &mut terminal::QuizTerminal,
    app: &mut App,
) -> Result<(), QuizError> {
    let mut ticker = timer::Ticker::default();

    while !app.should_quit() {
        // Restart or clear the ticker before draining so ticks from a
        // previous question never count against the current one.
        ticker.sync(app.session().active_timer());
        app.tick(ticker.drain());
        ticker.sync(app.session().active_timer());

        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(INPUT_POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            handle_key(app, key);
        }

        tokio::task::yield_now().await;
    }

    ticker.clear();
    Ok(())
}

/// Any key first dismisses a visible notice.
fn handle_key(app: &mut App, key: KeyEvent) {
    if app.notice().is_some() {
        app.dismiss_notice();
        return;
    }

    if let Some(action) = input::action_for(app.state(), app.is_name_form_open(), key) {
        app.dispatch(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app(questions: Vec<Question>) -> App {
        App::new(
            questions,
            Leaderboard::open(Box::new(MemoryStore::default())),
            &Settings::default(),
        )
    }

    #[test]
    fn test_key_dismisses_notice_before_acting() {
        let mut app = app(Vec::new());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.notice(), Some(NO_QUESTIONS_NOTICE));

        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.notice(), None);
        assert!(!app.should_quit());

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_keyboard_run_through() {
        let mut app = app(vec![
            Question::new("First?", vec!["a", "b"], 0),
            Question::new("Second?", vec!["a", "b"], 1),
        ]);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state(), AppState::InProgress);

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state(), AppState::Complete);
        assert_eq!(app.session().score(), 2);
        assert!(app.is_name_form_open());
    }

    #[test]
    fn test_from_json_reports_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Quiz::from_json(
            dir.path().join("missing.json"),
            Box::new(MemoryStore::default()),
        );
        assert!(matches!(result, Err(QuizError::Load(LoadError::Read { .. }))));
    }

    #[test]
    fn test_from_settings_degrades_to_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            questions_path: dir.path().join("missing.json"),
            leaderboard_path: dir.path().join("leaderboard.json"),
            ..Settings::default()
        };

        let quiz = Quiz::from_settings(&settings);
        assert_eq!(quiz.app().notice(), Some(LOAD_FAILED_NOTICE));
        assert_eq!(quiz.app().session().total_questions(), 0);
        assert!(quiz.app().leaderboard().is_empty());
    }
}
