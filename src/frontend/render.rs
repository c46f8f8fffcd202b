//! Render snapshots
//!
//! A `Frame` is everything a renderer needs to draw one tick. It carries no
//! references back into the game.

use crate::difficulty::Difficulty;
use crate::highscores::LeaderboardEntry;
use crate::sim::Rect;

/// A button as drawn
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonView {
    pub region: Rect,
    pub label: String,
    pub focused: bool,
}

/// Snapshot of the active screen
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Menu {
        difficulty: Difficulty,
        buttons: Vec<ButtonView>,
    },
    Playing {
        player: Rect,
        /// Solid platform segments
        platforms: Vec<Rect>,
        /// Openings between segments, one per platform
        gaps: Vec<Rect>,
        score: u32,
        difficulty: Difficulty,
        game_over: bool,
    },
    NameEntry {
        score: u32,
        difficulty: Difficulty,
        name: String,
        /// Rank the score will take on its board, if it places
        rank: Option<usize>,
        buttons: Vec<ButtonView>,
    },
    Leaderboard {
        tier: Difficulty,
        entries: Vec<LeaderboardEntry>,
        /// Index of the entry just added
        highlight: Option<usize>,
        buttons: Vec<ButtonView>,
    },
    Settings {
        difficulty: Difficulty,
        /// None while the toggle is still hidden
        gradual_speed: Option<bool>,
        buttons: Vec<ButtonView>,
    },
}

impl Frame {
    pub fn buttons(&self) -> &[ButtonView] {
        match self {
            Frame::Playing { .. } => &[],
            Frame::Menu { buttons, .. }
            | Frame::NameEntry { buttons, .. }
            | Frame::Leaderboard { buttons, .. }
            | Frame::Settings { buttons, .. } => buttons,
        }
    }
}

/// Anything that can draw a frame
pub trait RenderSink {
    fn present(&mut self, frame: &Frame);
}
