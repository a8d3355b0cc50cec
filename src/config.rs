use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::data::DEFAULT_QUESTIONS_PATH;
use crate::leaderboard::JsonFileStore;
use crate::quiz::DEFAULT_TIME_LIMIT_SECS;
use crate::theme::Theme;

pub const DEFAULT_WARNING_SECS: u32 = 5;

/// Contents of `config.toml`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct QuizConfig {
    pub quiz: Option<QuizSection>,
    pub storage: Option<StorageSection>,
    pub ui: Option<UiSection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuizSection {
    pub questions: Option<PathBuf>,
    pub time_limit_secs: Option<u32>,
    pub warning_secs: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StorageSection {
    pub leaderboard: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UiSection {
    pub theme: Option<String>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub questions_path: PathBuf,
    pub leaderboard_path: PathBuf,
    pub time_limit_secs: u32,
    pub warning_secs: u32,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            questions_path: PathBuf::from(DEFAULT_QUESTIONS_PATH),
            leaderboard_path: JsonFileStore::default_path(),
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            warning_secs: DEFAULT_WARNING_SECS,
            theme: Theme::default(),
        }
    }
}

impl QuizConfig {
    /// Load from the default location. Missing or broken files yield `None`.
    pub fn load() -> Option<Self> {
        Self::load_from(&config_path()?)
    }

    pub fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return None;
            }
        };

        Self::parse(&content)
            .inspect_err(|err| tracing::warn!("Failed to parse config at {:?}: {}", path, err))
            .ok()
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Merge onto the defaults.
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(quiz) = &self.quiz {
            if let Some(questions) = &quiz.questions {
                settings.questions_path = questions.clone();
            }
            match quiz.time_limit_secs {
                Some(0) => tracing::warn!("Ignoring time_limit_secs = 0 in config"),
                Some(secs) => settings.time_limit_secs = secs,
                None => {}
            }
            if let Some(secs) = quiz.warning_secs {
                settings.warning_secs = secs;
            }
        }

        if let Some(leaderboard) = self.storage.as_ref().and_then(|s| s.leaderboard.as_ref()) {
            settings.leaderboard_path = leaderboard.clone();
        }

        if let Some(raw) = self.ui.as_ref().and_then(|ui| ui.theme.as_deref()) {
            match raw.parse::<Theme>() {
                Ok(theme) => settings.theme = theme,
                Err(err) => tracing::warn!("{}", err),
            }
        }

        settings
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("timed-quiz").join("config.toml"))
}
