//! Session leaderboard
//!
//! Kept in memory for the lifetime of a [`Simulation`](crate::Simulation),
//! never written anywhere. Holds the best completed runs, best first.

use serde::{Deserialize, Serialize};

/// Maximum number of runs kept
pub const MAX_HIGH_SCORES: usize = 10;

/// A completed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    /// Stage index showing when the run ended
    pub stage: u32,
    /// Ticks survived
    pub ticks: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed run. Returns its 1-indexed rank, or None for a
    /// scoreless run or one that falls off the bottom of the table.
    pub fn add_score(&mut self, score: u64, stage: u32, ticks: u64) -> Option<usize> {
        if score == 0 {
            return None;
        }

        // Equal scores keep the earlier run ahead
        let index = self.entries.partition_point(|e| e.score >= score);
        if index >= MAX_HIGH_SCORES {
            return None;
        }

        self.entries.insert(index, HighScoreEntry { score, stage, ticks });
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(index + 1)
    }

    /// High score for the session (0 before any scoring run)
    pub fn best(&self) -> u64 {
        self.entries.first().map_or(0, |e| e.score)
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }
}
