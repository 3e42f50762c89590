//! High score leaderboard system
//!
//! Persisted through a [`Storage`] backend, tracks top 5 scores.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::persistence::{Storage, StorageError};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 5;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Final score of the run
    pub score: u64,
    /// When the run ended
    pub timestamp: DateTime<Utc>,
}

/// High score leaderboard, sorted descending by score.
///
/// Serialized as a bare JSON array of entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score would make the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Ties with the lowest entry lose to the older entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Insert a score, keeping the list sorted and trimmed.
    /// Returns the rank achieved (1-indexed) or None if it fell off the end.
    pub fn add_score(&mut self, score: u64, timestamp: DateTime<Utc>) -> Option<usize> {
        let entry = HighScoreEntry { score, timestamp };

        // Insert after any equal scores so earlier runs keep their place
        let pos = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, entry);

        // Trim to max size
        self.entries.truncate(MAX_HIGH_SCORES);

        (pos < MAX_HIGH_SCORES).then_some(pos + 1)
    }

    /// Restore the sorted/trimmed shape after loading untrusted data
    fn normalize(&mut self) {
        // Stable sort keeps stored order among equal scores
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_HIGH_SCORES);
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}

/// The leaderboard bound to its storage backend.
///
/// Storage failures never escape `load`/`record`: they are logged and the
/// in-memory view is left as it was.
pub struct ScoreLedger {
    storage: Box<dyn Storage>,
    scores: HighScores,
}

impl ScoreLedger {
    /// Storage key
    const STORAGE_KEY: &'static str = "highScores";

    /// Bind a ledger to storage without reading it
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self {
            storage,
            scores: HighScores::new(),
        }
    }

    /// Bind a ledger to storage and load it
    pub fn open(storage: Box<dyn Storage>) -> Self {
        let mut ledger = Self::new(storage);
        ledger.load();
        ledger
    }

    /// Current leaderboard
    pub fn scores(&self) -> &HighScores {
        &self.scores
    }

    /// Underlying storage (shared with other persisted settings)
    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    pub fn storage_mut(&mut self) -> &mut dyn Storage {
        self.storage.as_mut()
    }

    /// Reload from storage. Absent or corrupt data yields an empty board.
    pub fn load(&mut self) -> &HighScores {
        self.scores = match self.storage.get(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<HighScores>(&json) {
                Ok(mut scores) => {
                    scores.normalize();
                    log::info!("Loaded {} high scores", scores.len());
                    scores
                }
                Err(e) => {
                    log::warn!("Discarding unreadable high scores: {}", e);
                    HighScores::new()
                }
            },
            Ok(None) => {
                log::info!("No high scores found, starting fresh");
                HighScores::new()
            }
            Err(e) => {
                log::error!("Error loading high scores: {}", e);
                HighScores::new()
            }
        };
        &self.scores
    }

    /// Record a finished run. Returns the rank achieved if the score made
    /// the board and was saved.
    pub fn record(&mut self, score: u64, timestamp: DateTime<Utc>) -> Option<usize> {
        let mut updated = self.scores.clone();
        let rank = updated.add_score(score, timestamp);

        if let Err(e) = self.write(&updated) {
            log::error!("Error saving high score: {}", e);
            return None;
        }

        log::info!(
            "High scores saved ({} entries, rank {:?})",
            updated.len(),
            rank
        );
        self.scores = updated;
        rank
    }

    /// Clear every stored score
    pub fn reset(&mut self) -> Result<(), StorageError> {
        let empty = HighScores::new();
        self.write(&empty).inspect_err(|e| {
            log::error!("Error resetting high scores: {}", e);
        })?;
        self.scores = empty;
        log::info!("High scores cleared");
        Ok(())
    }

    fn write(&mut self, scores: &HighScores) -> Result<(), StorageError> {
        let json = serde_json::to_string(scores)?;
        self.storage.set(Self::STORAGE_KEY, &json)
    }
}

/// Format a timestamp as a relative date string
pub fn format_date(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(timestamp);
    let days = diff.num_days();
    let hours = diff.num_hours();
    let mins = diff.num_minutes();

    if days >= 1 {
        if days == 1 {
            "Yesterday".to_string()
        } else if days < 7 {
            format!("{} days ago", days)
        } else {
            format!(
                "{}/{}/{}",
                timestamp.month(),
                timestamp.day(),
                timestamp.year() % 100
            )
        }
    } else if hours >= 1 {
        if hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{} hours ago", hours)
        }
    } else if mins >= 1 {
        if mins == 1 {
            "1 min ago".to_string()
        } else {
            format!("{} mins ago", mins)
        }
    } else {
        "Just now".to_string()
    }
}
