//! Persistent top-10 leaderboard.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const LEADERBOARD_CAPACITY: usize = 10;
pub const LEADERBOARD_FILE_NAME: &str = "leaderboard.json";

/// One saved result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: usize,
    pub date: String,
}

impl LeaderboardEntry {
    pub fn new<N: Into<String>, D: Into<String>>(name: N, score: usize, date: D) -> Self {
        Self {
            name: name.into(),
            score,
            date: date.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("failed to write leaderboard to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize leaderboard: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("leaderboard storage is unavailable")]
    Unavailable,
}

/// Where the leaderboard lives between runs.
pub trait LeaderboardStore {
    /// Saved entries. Missing or unreadable storage yields an empty board.
    fn load(&self) -> Vec<LeaderboardEntry>;

    fn save(&self, entries: &[LeaderboardEntry]) -> Result<(), LeaderboardError>;
}

/// Order by score (highest first) and cut down to [`LEADERBOARD_CAPACITY`].
///
/// The sort is stable, so entries with the same score keep their order.
fn rank_and_cap(entries: &mut Vec<LeaderboardEntry>) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(LEADERBOARD_CAPACITY);
}

/// Insert `entry` into the ranked board and return the board together with
/// the 1-based rank of `entry`, or `None` when it did not make the cut.
///
/// A new entry ranks below older ones with the same score.
pub fn record(
    mut entries: Vec<LeaderboardEntry>,
    entry: LeaderboardEntry,
) -> (Vec<LeaderboardEntry>, Option<usize>) {
    rank_and_cap(&mut entries);
    let position = entries
        .iter()
        .take_while(|existing| existing.score >= entry.score)
        .count();
    if position >= LEADERBOARD_CAPACITY {
        return (entries, None);
    }

    entries.insert(position, entry);
    entries.truncate(LEADERBOARD_CAPACITY);
    (entries, Some(position + 1))
}

/// The leaderboard as shown on screen, backed by a store.
pub struct Leaderboard {
    store: Box<dyn LeaderboardStore>,
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn open(store: Box<dyn LeaderboardStore>) -> Self {
        let mut entries = store.load();
        rank_and_cap(&mut entries);
        tracing::debug!(entries = entries.len(), "Leaderboard loaded");
        Self { store, entries }
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Re-read the stored board, record `entry` and write it back. Returns
    /// the rank `entry` landed on.
    ///
    /// The in-memory board only changes once the write succeeded.
    pub fn submit(&mut self, entry: LeaderboardEntry) -> Result<Option<usize>, LeaderboardError> {
        let (updated, rank) = record(self.store.load(), entry);
        self.store.save(&updated)?;
        self.entries = updated;
        Ok(rank)
    }
}

/// A single JSON file holding the whole board.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `<data dir>/timed-quiz/leaderboard.json`, or a local fallback when
    /// the platform has no data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join("timed-quiz"))
            .unwrap_or_else(|| PathBuf::from(".timed-quiz"))
            .join(LEADERBOARD_FILE_NAME)
    }
}

impl LeaderboardStore for JsonFileStore {
    fn load(&self) -> Vec<LeaderboardEntry> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "Failed to read leaderboard: {}", err);
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "Ignoring corrupt leaderboard: {}", err);
                Vec::new()
            }
        }
    }

    fn save(&self, entries: &[LeaderboardEntry]) -> Result<(), LeaderboardError> {
        let json = serde_json::to_string_pretty(entries)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| LeaderboardError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        fs::write(&self.path, json).map_err(|source| LeaderboardError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// In-process store, shared through `Arc` when the caller needs to inspect it.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<Vec<LeaderboardEntry>>,
}

impl MemoryStore {
    pub fn new(entries: Vec<LeaderboardEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }
}

impl LeaderboardStore for MemoryStore {
    fn load(&self) -> Vec<LeaderboardEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    fn save(&self, entries: &[LeaderboardEntry]) -> Result<(), LeaderboardError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|_| LeaderboardError::Unavailable)?;
        *guard = entries.to_vec();
        Ok(())
    }
}

impl<S: LeaderboardStore + ?Sized> LeaderboardStore for std::sync::Arc<S> {
    fn load(&self) -> Vec<LeaderboardEntry> {
        (**self).load()
    }

    fn save(&self, entries: &[LeaderboardEntry]) -> Result<(), LeaderboardError> {
        (**self).save(entries)
    }
}
