use crate::config::Settings;
use crate::data::LoadError;
use crate::input::Action;
use crate::leaderboard::{Leaderboard, LeaderboardEntry};
use crate::models::{AppState, Question};
use crate::quiz::{QuizSession, StartError, TickOutcome};
use crate::theme::Theme;

pub const NAME_MAX_LENGTH: usize = 16;

pub const NO_QUESTIONS_NOTICE: &str = "No questions available. Check the questions file and restart.";
pub const LOAD_FAILED_NOTICE: &str = "Error loading questions. Check the questions file and restart.";
pub const MISSING_NAME_NOTICE: &str = "Please enter your name to save your score.";

pub struct App {
    session: QuizSession,
    leaderboard: Leaderboard,
    theme: Theme,
    warning_secs: u32,
    notice: Option<String>,
    name_input: String,
    score_saved: bool,
    saved_rank: Option<usize>,
    result_scroll: usize,
    should_quit: bool,
}

impl App {
    pub fn new(questions: Vec<Question>, leaderboard: Leaderboard, settings: &Settings) -> Self {
        Self {
            session: QuizSession::new(questions, settings.time_limit_secs),
            leaderboard,
            theme: settings.theme,
            warning_secs: settings.warning_secs,
            notice: None,
            name_input: String::new(),
            score_saved: false,
            saved_rank: None,
            result_scroll: 0,
            should_quit: false,
        }
    }

    /// Build from a load result; a failed load becomes an empty question
    /// set plus a notice.
    pub fn from_load_result(
        questions: Result<Vec<Question>, LoadError>,
        leaderboard: Leaderboard,
        settings: &Settings,
    ) -> Self {
        match questions {
            Ok(questions) => {
                tracing::info!(count = questions.len(), "Questions loaded");
                Self::new(questions, leaderboard, settings)
            }
            Err(err) => {
                tracing::error!("Error loading questions: {}", err);
                let mut app = Self::new(Vec::new(), leaderboard, settings);
                app.notice = Some(LOAD_FAILED_NOTICE.to_string());
                app
            }
        }
    }

    pub fn state(&self) -> AppState {
        self.session.state()
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    /// The name form is shown until a score was saved for this run.
    pub fn is_name_form_open(&self) -> bool {
        self.state() == AppState::Complete && !self.score_saved
    }

    /// Rank of the score saved in this run, if it made the board.
    pub fn saved_rank(&self) -> Option<usize> {
        self.saved_rank
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The countdown is in its last seconds.
    pub fn is_time_running_out(&self) -> bool {
        self.session.active_timer().is_some() && self.session.time_left() <= self.warning_secs
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Start => self.start_quiz(),
            Action::CursorNext => self.session.move_cursor_next(),
            Action::CursorPrevious => self.session.move_cursor_previous(),
            Action::Select(option) => self.select_option(option),
            Action::Confirm => self.confirm(),
            Action::Next => self.next_question(),
            Action::NameChar(c) => self.name_input_push(c),
            Action::NameBackspace => self.name_input_pop(),
            Action::SaveScore => self.save_score(),
            Action::Restart => self.restart(),
            Action::ScrollDown => self.scroll_results_down(),
            Action::ScrollUp => self.scroll_results_up(),
            Action::ToggleTheme => self.toggle_theme(),
            Action::Quit => self.should_quit = true,
        }
    }

    pub fn start_quiz(&mut self) {
        self.begin_run("Quiz started");
    }

    pub fn restart(&mut self) {
        self.begin_run("Quiz restarted");
    }

    fn begin_run(&mut self, message: &str) {
        match self.session.start() {
            Ok(()) => {
                self.name_input.clear();
                self.score_saved = false;
                self.saved_rank = None;
                self.result_scroll = 0;
                tracing::info!(questions = self.session.total_questions(), "{}", message);
            }
            Err(StartError::NoQuestions) => {
                self.notice = Some(NO_QUESTIONS_NOTICE.to_string());
            }
        }
    }

    pub fn select_option(&mut self, option: usize) {
        if let Some(outcome) = self.session.select(option) {
            tracing::debug!(
                question = self.session.current_index(),
                selected = outcome.selected,
                correct = outcome.is_correct,
                "Answer selected"
            );
        }
    }

    /// Select the highlighted option, or move on once the question is resolved.
    pub fn confirm(&mut self) {
        if self.session.is_resolved() {
            self.next_question();
        } else {
            let cursor = self.session.cursor();
            self.select_option(cursor);
        }
    }

    pub fn next_question(&mut self) {
        if self.session.next_question() && self.state() == AppState::Complete {
            tracing::info!(
                score = self.session.score(),
                total = self.session.total_questions(),
                "Quiz complete"
            );
        }
    }

    /// Feed elapsed seconds to the countdown.
    pub fn tick(&mut self, ticks: usize) {
        for _ in 0..ticks {
            if let TickOutcome::Expired { correct_answer } = self.session.tick() {
                tracing::debug!(
                    question = self.session.current_index(),
                    correct_answer,
                    "Time expired"
                );
            }
        }
    }

    pub fn name_input_push(&mut self, c: char) {
        if self.is_name_form_open() && self.name_input.chars().count() < NAME_MAX_LENGTH {
            self.name_input.push(c);
        }
    }

    pub fn name_input_pop(&mut self) {
        if self.is_name_form_open() {
            self.name_input.pop();
        }
    }

    pub fn save_score(&mut self) {
        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        self.save_score_dated(date);
    }

    /// Save the finished run under the typed name.
    pub fn save_score_dated(&mut self, date: String) {
        if !self.is_name_form_open() {
            return;
        }

        let name = self.name_input.trim().to_string();
        if name.is_empty() {
            self.notice = Some(MISSING_NAME_NOTICE.to_string());
            return;
        }

        let score = self.session.score();
        let entry = LeaderboardEntry::new(name.as_str(), score, date);
        match self.leaderboard.submit(entry) {
            Ok(rank) => {
                tracing::info!(name = %name, score, ?rank, "Score saved");
                self.score_saved = true;
                self.saved_rank = rank;
            }
            Err(err) => {
                tracing::warn!("Failed to save score: {}", err);
                self.notice = Some(format!("Could not save your score: {}", err));
            }
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self.session.total_questions().saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }
}
