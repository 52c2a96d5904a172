//! High score leaderboard system
//!
//! Persisted as a JSON list of `[name, score]` pairs, tracks the top 15.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, read_to_string};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 15;

/// Receives the final score when a session ends
pub trait HighScoreSink {
    /// Offer `score` to the leaderboard. Returns the rank achieved
    /// (1-indexed) or None if it didn't qualify.
    fn check_high_score(&mut self, score: u64) -> Option<usize>;
}

/// A single high score entry, stored on disk as `[name, score]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, u64)", into = "(String, u64)")]
pub struct HighScoreEntry {
    pub name: String,
    pub score: u64,
}

impl From<(String, u64)> for HighScoreEntry {
    fn from((name, score): (String, u64)) -> Self {
        Self { name, score }
    }
}

impl From<HighScoreEntry> for (String, u64) {
    fn from(entry: HighScoreEntry) -> Self {
        (entry.name, entry.score)
    }
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
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

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Check if score beats the lowest entry
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

    /// Add a new score to the leaderboard (if it qualifies).
    /// Ties rank below the entries already there.
    pub fn add_score(&mut self, name: &str, score: u64) -> Option<usize> {
        let rank = self.potential_rank(score)?;
        self.entries.insert(
            rank - 1,
            HighScoreEntry {
                name: name.to_string(),
                score,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Parse a leaderboard, keeping it sorted and within size
    pub fn from_json(json: &str) -> Result<Self> {
        let mut scores: HighScores = serde_json::from_str(json)?;
        scores.entries.sort_by(|a, b| b.score.cmp(&a.score));
        scores.entries.truncate(MAX_HIGH_SCORES);
        Ok(scores)
    }

    /// Load high scores from disk. A missing file is an empty board.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No high scores found, starting fresh");
            return Ok(Self::new());
        }
        let scores = Self::from_json(&read_to_string(path)?)?;
        log::info!("Loaded {} high scores", scores.entries.len());
        Ok(scores)
    }

    /// Save high scores to disk
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string(self)?;
        fs::write(path, json).map_err(|e| Error::io(path, e))?;
        log::info!("High scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}

/// Leaderboard file bound to a player name; saves after every new entry
#[derive(Debug, Clone)]
pub struct HighScoreFile {
    path: PathBuf,
    player_name: String,
    scores: HighScores,
}

impl HighScoreFile {
    /// Open the leaderboard at `path`. An unreadable file is logged and
    /// replaced with an empty board.
    pub fn open(path: impl Into<PathBuf>, player_name: impl Into<String>) -> Self {
        let path = path.into();
        let scores = HighScores::load(&path).unwrap_or_else(|e| {
            log::warn!("Ignoring high scores: {}", e);
            HighScores::new()
        });
        Self {
            path,
            player_name: player_name.into(),
            scores,
        }
    }

    pub fn scores(&self) -> &HighScores {
        &self.scores
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }
}

impl HighScoreSink for HighScoreFile {
    fn check_high_score(&mut self, score: u64) -> Option<usize> {
        let rank = self.scores.add_score(&self.player_name, score)?;
        if let Err(e) = self.scores.save(&self.path) {
            log::warn!("Failed to save high scores: {}", e);
        }
        Some(rank)
    }
}

impl HighScoreSink for HighScores {
    fn check_high_score(&mut self, score: u64) -> Option<usize> {
        self.add_score("player", score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(scores: &[u64]) -> HighScores {
        let mut hs = HighScores::new();
        for (i, &s) in scores.iter().enumerate() {
            hs.add_score(&format!("p{}", i), s);
        }
        hs
    }

    #[test]
    fn test_zero_never_qualifies() {
        let hs = HighScores::new();
        assert!(!hs.qualifies(0));
        assert_eq!(hs.potential_rank(0), None);
    }

    #[test]
    fn test_sorted_insertion() {
        let mut hs = board(&[10, 30, 20]);
        let scores: Vec<u64> = hs.entries.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![30, 20, 10]);
        assert_eq!(hs.add_score("new", 25), Some(2));
        assert_eq!(hs.top_score(), Some(30));
    }

    #[test]
    fn test_ties_rank_below() {
        let mut hs = board(&[20]);
        assert_eq!(hs.add_score("late", 20), Some(2));
        assert_eq!(hs.entries[0].name, "p0");
    }

    #[test]
    fn test_full_board() {
        let scores: Vec<u64> = (1..=MAX_HIGH_SCORES as u64).collect();
        let mut hs = board(&scores);
        assert_eq!(hs.entries.len(), MAX_HIGH_SCORES);
        assert!(!hs.qualifies(1));
        assert_eq!(hs.add_score("x", 1), None);
        assert_eq!(hs.add_score("y", 2), Some(MAX_HIGH_SCORES));
        assert_eq!(hs.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(hs.entries.last().map(|e| e.score), Some(2));
    }

    #[test]
    fn test_json_pairs() {
        let hs = board(&[5, 7]);
        let json = serde_json::to_string(&hs).unwrap();
        assert_eq!(json, r#"[["p1",7],["p0",5]]"#);

        let parsed = HighScores::from_json(r#"[["a",3],["b",9]]"#).unwrap();
        assert_eq!(parsed.entries[0].name, "b");
        assert_eq!(parsed.top_score(), Some(9));
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "snake-levels-scores-{}.json",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);

        let mut file = HighScoreFile::open(&path, "tester");
        assert!(file.scores().is_empty());
        assert_eq!(file.check_high_score(42), Some(1));
        assert_eq!(file.check_high_score(0), None);

        let reloaded = HighScores::load(&path).unwrap();
        assert_eq!(reloaded.entries.len(), 1);
        assert_eq!(reloaded.entries[0].name, "tester");
        let _ = fs::remove_file(&path);
    }
}
