//! Difficulty tiers
//!
//! Each tier maps to fixed physics constants. Speeds and gravity are in
//! pixels per tick; the spawn interval is in seconds.

use serde::{Deserialize, Serialize};

use crate::consts::GRADUAL_SPEED_PER_POINT;

/// Difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

/// Physics constants for a tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyParams {
    /// Downward acceleration applied every tick
    pub gravity: f32,
    /// Seconds between platform spawns
    pub spawn_interval: f32,
    /// Platform scroll speed before any gradual increase
    pub base_speed: f32,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn params(&self) -> DifficultyParams {
        match self {
            Difficulty::Easy => DifficultyParams {
                gravity: 0.4,
                spawn_interval: 1.5,
                base_speed: 1.0,
            },
            Difficulty::Normal => DifficultyParams {
                gravity: 0.5,
                spawn_interval: 1.0,
                base_speed: 1.5,
            },
            Difficulty::Hard => DifficultyParams {
                gravity: 0.6,
                spawn_interval: 0.75,
                base_speed: 2.2,
            },
        }
    }
}

/// Current scroll speed for a session.
///
/// With gradual speed on, speed grows linearly with the score; otherwise the
/// tier's base speed is returned unchanged.
pub fn current_speed(base_speed: f32, score: u32, gradual: bool) -> f32 {
    if gradual {
        base_speed + GRADUAL_SPEED_PER_POINT * score as f32
    } else {
        base_speed
    }
}
