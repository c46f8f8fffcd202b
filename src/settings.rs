//! Game settings and preferences
//!
//! Persisted alongside the leaderboards in the save document.

use serde::{Deserialize, Serialize};

use crate::difficulty::Difficulty;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Tier used for new sessions
    pub difficulty: Difficulty,
    /// Scroll speed grows with score
    pub gradual_speed: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            gradual_speed: true,
        }
    }
}

impl Settings {
    /// Select a tier. Returns true if the setting changed.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if self.difficulty == difficulty {
            return false;
        }
        self.difficulty = difficulty;
        true
    }

    pub fn toggle_gradual_speed(&mut self) {
        self.gradual_speed = !self.gradual_speed;
    }
}
