//! High score persistence.
//!
//! The leaderboard lives in a single JSON file. Reading is tolerant: a
//! missing or corrupt file is an empty leaderboard. Writing is
//! authoritative: the whole file is replaced with the caller's state.
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::QuizError;

/// Path of the leaderboard file, relative to the working directory
pub const HIGH_SCORES_FILE: &str = "high_scores.json";

/// How many entries the leaderboard keeps
pub const MAX_HIGH_SCORES: usize = 5;

/// One recorded quiz attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
    pub total: u32,
    pub percentage: f64,
}

impl ScoreEntry {
    pub fn new(name: &str, score: u32, total: u32) -> Self {
        Self {
            name: name.to_string(),
            score,
            total,
            percentage: percentage(score, total),
        }
    }
}

pub type Leaderboard = Vec<ScoreEntry>;

/// Percentage of correct answers; an empty quiz counts as 0%.
pub fn percentage(score: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    score as f64 / total as f64 * 100.0
}

/// Owner of the persisted leaderboard
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
    capacity: usize,
}

impl Default for ScoreStore {
    fn default() -> Self {
        Self::new(HIGH_SCORES_FILE)
    }
}

impl ScoreStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            capacity: MAX_HIGH_SCORES,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the leaderboard, treating a missing or unreadable file as empty.
    pub fn load(&self) -> Leaderboard {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no high score file yet");
                return Vec::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "could not read high scores");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Leaderboard>(&raw) {
            Ok(scores) => {
                debug!(entries = scores.len(), "loaded high scores");
                scores
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring corrupt high score file");
                Vec::new()
            }
        }
    }

    /// Replaces the file contents with `scores`.
    pub fn save(&self, scores: &[ScoreEntry]) -> Result<(), QuizError> {
        let json = serde_json::to_string(scores)?;
        fs::write(&self.path, json).map_err(|source| QuizError::Save {
            path: self.path.clone(),
            source,
        })?;
        debug!(entries = scores.len(), path = %self.path.display(), "saved high scores");
        Ok(())
    }

    /// Records an attempt, keeping only the best entries by percentage.
    ///
    /// Entries with equal percentages keep their insertion order.
    pub fn add_entry(&self, name: &str, score: u32, total: u32) -> Result<Leaderboard, QuizError> {
        let mut scores = self.load();
        scores.push(ScoreEntry::new(name, score, total));

        // sort_by is stable, ties stay in insertion order
        scores.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
        scores.truncate(self.capacity);

        self.save(&scores)?;
        info!(player = name, score, total, "recorded high score");
        Ok(scores)
    }

    /// Renders the leaderboard for the console.
    pub fn display(&self) -> String {
        render_leaderboard(&self.load())
    }
}

pub fn render_leaderboard(scores: &[ScoreEntry]) -> String {
    if scores.is_empty() {
        return "No high scores yet!".to_string();
    }

    let mut out = String::from("=== HIGH SCORES ===");
    for (i, entry) in scores.iter().enumerate() {
        let _ = write!(
            out,
            "\n{}. {}: {}/{} ({:.1}%)",
            i + 1,
            entry.name,
            entry.score,
            entry.total,
            entry.percentage
        );
    }
    out
}
