use std::fs::{self, OpenOptions};
use std::iter;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use timed_quiz::theme::Theme;
use timed_quiz::{Quiz, QuizConfig};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE_NAME: &str = "timed-quiz.log";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// JSON file the leaderboard is kept in
    #[arg(short, long)]
    leaderboard: Option<PathBuf>,

    /// Seconds allowed per question
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    time_limit: Option<u32>,

    /// Colour theme (dark or light)
    #[arg(long)]
    theme: Option<Theme>,

    /// Config file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    init_tracing();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => QuizConfig::load_from(path),
        None => QuizConfig::load(),
    }
    .unwrap_or_default();

    let mut settings = config.settings();
    if let Some(questions) = args.questions {
        settings.questions_path = questions;
    }
    if let Some(leaderboard) = args.leaderboard {
        settings.leaderboard_path = leaderboard;
    }
    if let Some(secs) = args.time_limit {
        settings.time_limit_secs = secs;
    }
    if let Some(theme) = args.theme {
        settings.theme = theme;
    }
    tracing::debug!(?settings, "Resolved settings");

    let quiz = Quiz::from_settings(&settings);
    if let Err(e) = quiz.run().await {
        tracing::error!("Quiz exited with error: {}", e);
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // The terminal belongs to the TUI; no log file means no logs.
    match open_log_file() {
        Some((path, file)) => {
            registry
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .init();
            tracing::info!(path = %path.display(), "Logging initialized");
        }
        None => registry.init(),
    }
}

/// The first log location that can be opened for appending.
fn open_log_file() -> Option<(PathBuf, fs::File)> {
    log_locations().into_iter().find_map(|path| {
        fs::create_dir_all(path.parent()?).ok()?;
        let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;
        Some((path, file))
    })
}

fn log_locations() -> Vec<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join("timed-quiz"))
        .into_iter()
        .chain(iter::once(PathBuf::from(".timed-quiz")))
        .map(|dir| dir.join("logs").join(LOG_FILE_NAME))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_locations_fall_back_to_local_dir() {
        let locations = log_locations();
        assert_eq!(
            locations.last(),
            Some(&PathBuf::from(".timed-quiz/logs/timed-quiz.log"))
        );
        assert!(locations.iter().all(|path| path.ends_with("logs/timed-quiz.log")));
    }

    #[test]
    fn test_args_reject_zero_time_limit() {
        assert!(Args::try_parse_from(["timed-quiz", "--time-limit", "0"]).is_err());
        let args = Args::try_parse_from(["timed-quiz", "-t", "5", "--theme", "light"]).unwrap();
        assert_eq!(args.time_limit, Some(5));
        assert_eq!(args.theme, Some(Theme::Light));
    }
}
