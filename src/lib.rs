//! Vertical Descent - a single-screen arcade dodger
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (player physics, platforms, scoring)
//! - `difficulty`: Per-tier physics constants and gradual speed
//! - `highscores`: Per-tier leaderboards
//! - `settings`: Player preferences
//! - `persistence`: Save document load/store with fallback to defaults
//! - `app`: Screen state machine (menu, playing, name entry, leaderboard, settings)
//! - `frontend`: Input source and render sink seams

pub mod app;
pub mod difficulty;
pub mod frontend;
pub mod highscores;
pub mod persistence;
pub mod settings;
pub mod sim;

pub use app::{App, AppControl};
pub use difficulty::{Difficulty, DifficultyParams};
pub use highscores::{Leaderboard, LeaderboardEntry, Leaderboards};
pub use persistence::{SaveDocument, SaveStore};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;

    /// Viewport dimensions
    pub const VIEWPORT_WIDTH: f32 = 400.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 30.0;
    pub const PLAYER_START_Y: f32 = 50.0;
    /// Horizontal (and fast-drop) movement per tick
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Upward velocity applied by a grounded jump
    pub const JUMP_STRENGTH: f32 = 9.0;

    /// Platform defaults
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    pub const GAP_WIDTH: f32 = 100.0;

    /// Scroll speed added per point scored when gradual speed is on
    pub const GRADUAL_SPEED_PER_POINT: f32 = 0.05;

    /// Ticks the final frame is held after the player leaves the screen
    pub const GAME_OVER_HOLD_TICKS: u32 = 30;

    /// Leaderboard size per difficulty tier
    pub const MAX_HIGH_SCORES: usize = 5;
    /// Longest name accepted on the name entry screen
    pub const MAX_NAME_LEN: usize = 10;
    /// Name used when the player submits an empty name
    pub const DEFAULT_PLAYER_NAME: &str = "Player";
}
