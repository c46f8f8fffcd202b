//! High score leaderboard system
//!
//! One leaderboard per difficulty tier, each capped at `MAX_HIGH_SCORES`
//! entries sorted descending by score. Equal scores keep insertion order.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_PLAYER_NAME, MAX_HIGH_SCORES, MAX_NAME_LEN};
use crate::difficulty::Difficulty;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Player name (trimmed, at most `MAX_NAME_LEN` chars)
    pub name: String,
    /// Platforms passed
    pub score: u32,
}

impl LeaderboardEntry {
    pub fn new(name: &str, score: u32) -> Self {
        Self {
            name: sanitize_name(name),
            score,
        }
    }
}

/// Trim a submitted name, substituting the default for empty input
pub fn sanitize_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return DEFAULT_PLAYER_NAME.to_string();
    }
    trimmed.chars().take(MAX_NAME_LEN).collect()
}

/// A single tier's leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score would make it onto the board
    pub fn qualifies(&self, score: u32) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Ties rank below existing entries, so strictly greater is required
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Insert an entry, keeping the board sorted and capped.
    /// Returns the rank achieved (1-indexed) or None if it fell off the end.
    pub fn insert(&mut self, entry: LeaderboardEntry) -> Option<usize> {
        // First entry with a strictly lower score; equal scores stay ahead
        let pos = self
            .entries
            .iter()
            .position(|e| entry.score > e.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, entry);
        self.entries.truncate(MAX_HIGH_SCORES);

        (pos < MAX_HIGH_SCORES).then_some(pos + 1)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Restore the board invariants on data read from disk
    pub fn sanitized(mut self) -> Self {
        for entry in &mut self.entries {
            entry.name = sanitize_name(&entry.name);
        }
        // Stable sort keeps file order among equal scores
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_HIGH_SCORES);
        self
    }
}

/// Leaderboards for every tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Leaderboards {
    #[serde(rename = "Easy")]
    pub easy: Leaderboard,
    #[serde(rename = "Normal")]
    pub normal: Leaderboard,
    #[serde(rename = "Hard")]
    pub hard: Leaderboard,
}

impl Leaderboards {
    pub fn get(&self, tier: Difficulty) -> &Leaderboard {
        match tier {
            Difficulty::Easy => &self.easy,
            Difficulty::Normal => &self.normal,
            Difficulty::Hard => &self.hard,
        }
    }

    pub fn get_mut(&mut self, tier: Difficulty) -> &mut Leaderboard {
        match tier {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Normal => &mut self.normal,
            Difficulty::Hard => &mut self.hard,
        }
    }

    /// Record a finished session's score on the tier it was played at
    pub fn insert(&mut self, tier: Difficulty, name: &str, score: u32) -> Option<usize> {
        let rank = self.get_mut(tier).insert(LeaderboardEntry::new(name, score));
        log::info!(
            "Recorded score {} on {} board (rank {:?})",
            score,
            tier.as_str(),
            rank
        );
        rank
    }

    pub fn clear(&mut self, tier: Difficulty) {
        self.get_mut(tier).clear();
        log::info!("Cleared {} leaderboard", tier.as_str());
    }

    pub fn sanitized(self) -> Self {
        Self {
            easy: self.easy.sanitized(),
            normal: self.normal.sanitized(),
            hard: self.hard.sanitized(),
        }
    }
}
