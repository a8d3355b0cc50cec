//! Quiz progression, countdown and scoring.
//!
//! [`QuizSession`] owns the question set and all transient state of a run.
//! It never touches the clock itself: the event loop feeds it one
//! [`QuizSession::tick`] per elapsed second while [`QuizSession::active_timer`]
//! reports a running countdown.

use thiserror::Error;

use crate::models::{AppState, Question};

pub const DEFAULT_TIME_LIMIT_SECS: u32 = 15;

/// Why a run could not be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    #[error("no questions available")]
    NoQuestions,
}

/// How a question was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player committed to this option.
    Answered(usize),
    /// The countdown ran out before any selection.
    Expired,
}

/// Result of an accepted selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionOutcome {
    pub selected: usize,
    pub correct_answer: usize,
    pub is_correct: bool,
}

/// Result of feeding one second to the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No countdown was running.
    Ignored,
    /// Still counting, with this many seconds left.
    Counting(u32),
    /// Time ran out with nothing selected; the correct option is revealed.
    Expired { correct_answer: usize },
}

pub struct QuizSession {
    questions: Vec<Question>,
    time_limit: u32,
    state: AppState,
    current_index: usize,
    score: usize,
    cursor: usize,
    selection: Option<usize>,
    expired: bool,
    outcomes: Vec<Option<Outcome>>,
    time_left: u32,
    // Epoch of the running countdown; bumped every time a question loads.
    timer: Option<u64>,
    timer_epoch: u64,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>, time_limit: u32) -> Self {
        let num_questions = questions.len();
        let time_limit = if time_limit == 0 {
            DEFAULT_TIME_LIMIT_SECS
        } else {
            time_limit
        };

        Self {
            questions,
            time_limit,
            state: AppState::NotStarted,
            current_index: 0,
            score: 0,
            cursor: 0,
            selection: None,
            expired: false,
            outcomes: vec![None; num_questions],
            time_left: time_limit,
            timer: None,
            timer_epoch: 0,
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn time_limit(&self) -> u32 {
        self.time_limit
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question_number(&self) -> usize {
        self.current_index + 1
    }

    /// The question on screen, or `None` outside of a run.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            AppState::InProgress => self.questions.get(self.current_index),
            _ => None,
        }
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn outcomes(&self) -> &[Option<Outcome>] {
        &self.outcomes
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Epoch of the running countdown, if any.
    pub fn active_timer(&self) -> Option<u64> {
        self.timer
    }

    /// Fraction of the question set already behind the player.
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        match self.state {
            AppState::NotStarted => 0.0,
            AppState::InProgress => self.current_index as f64 / self.questions.len() as f64,
            AppState::Complete => 1.0,
        }
    }

    /// A question is resolved once something was selected or time ran out.
    pub fn is_resolved(&self) -> bool {
        self.selection.is_some() || self.expired
    }

    /// The correct option, once it may be shown.
    pub fn revealed_answer(&self) -> Option<usize> {
        if !self.is_resolved() {
            return None;
        }
        self.current_question().map(|q| q.correct_answer)
    }

    pub fn start(&mut self) -> Result<(), StartError> {
        if self.questions.is_empty() {
            return Err(StartError::NoQuestions);
        }

        self.reset();
        self.state = AppState::InProgress;
        self.load_question();
        Ok(())
    }

    /// Back to the first question with a clean score.
    pub fn restart(&mut self) -> Result<(), StartError> {
        self.start()
    }

    pub fn move_cursor_next(&mut self) {
        if let Some(count) = self.current_option_count() {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    pub fn move_cursor_previous(&mut self) {
        if let Some(count) = self.current_option_count() {
            self.cursor = (self.cursor + count - 1) % count;
        }
    }

    pub fn select_cursor(&mut self) -> Option<SelectionOutcome> {
        self.select(self.cursor)
    }

    /// Commit to an option. Returns `None` when the selection is ignored.
    pub fn select(&mut self, option: usize) -> Option<SelectionOutcome> {
        if self.is_resolved() {
            return None;
        }
        let question = self.current_question()?;
        if option >= question.options.len() {
            return None;
        }

        let correct_answer = question.correct_answer;
        let is_correct = question.is_correct(option);

        self.timer = None;
        self.selection = Some(option);
        self.cursor = option;
        self.outcomes[self.current_index] = Some(Outcome::Answered(option));
        if is_correct {
            self.score += 1;
        }

        Some(SelectionOutcome {
            selected: option,
            correct_answer,
            is_correct,
        })
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.timer.is_none() || self.state != AppState::InProgress {
            return TickOutcome::Ignored;
        }

        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left > 0 {
            return TickOutcome::Counting(self.time_left);
        }

        self.timer = None;
        let Some(correct_answer) = self.current_question().map(|q| q.correct_answer) else {
            return TickOutcome::Ignored;
        };

        self.expired = true;
        self.outcomes[self.current_index] = Some(Outcome::Expired);
        TickOutcome::Expired { correct_answer }
    }

    /// Advance past a resolved question. Returns `false` when progression
    /// is still blocked.
    pub fn next_question(&mut self) -> bool {
        if self.state != AppState::InProgress || !self.is_resolved() {
            return false;
        }

        self.current_index += 1;
        if self.current_index < self.questions.len() {
            self.load_question();
        } else {
            self.timer = None;
            self.state = AppState::Complete;
        }
        true
    }

    /// Recount the score from the recorded outcomes.
    pub fn calculate_score(&self) -> usize {
        self.outcomes
            .iter()
            .zip(self.questions.iter())
            .filter(|(outcome, question)| {
                matches!(outcome, Some(Outcome::Answered(option)) if question.is_correct(*option))
            })
            .count()
    }

    fn current_option_count(&self) -> Option<usize> {
        self.current_question()
            .map(|q| q.options.len())
            .filter(|count| *count > 0)
    }

    fn reset(&mut self) {
        self.current_index = 0;
        self.score = 0;
        self.outcomes = vec![None; self.questions.len()];
        self.timer = None;
    }

    fn load_question(&mut self) {
        self.selection = None;
        self.expired = false;
        self.cursor = 0;
        self.time_left = self.time_limit;
        self.timer_epoch += 1;
        self.timer = Some(self.timer_epoch);
    }
}
