//! Session state and core simulation types
//!
//! A `GameSession` is one play-through: created when play starts and
//! dropped when it finishes or is aborted.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use super::platform::Platform;
use super::player::Player;
use crate::consts::*;
use crate::difficulty::{Difficulty, DifficultyParams};

/// Geometry and tuning shared by every session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub player_size: f32,
    pub player_start_y: f32,
    pub player_speed: f32,
    pub jump_strength: f32,
    pub platform_height: f32,
    pub gap_width: f32,
    /// Ticks to hold the final frame after the player leaves the screen
    pub game_over_hold_ticks: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            player_size: PLAYER_SIZE,
            player_start_y: PLAYER_START_Y,
            player_speed: PLAYER_SPEED,
            jump_strength: JUMP_STRENGTH,
            platform_height: PLATFORM_HEIGHT,
            gap_width: GAP_WIDTH,
            game_over_hold_ticks: GAME_OVER_HOLD_TICKS,
        }
    }
}

impl SessionConfig {
    /// The floor is the bottom edge of the viewport
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.viewport_height
    }

    pub fn viewport(&self) -> Rect {
        Rect::new(0.0, 0.0, self.viewport_width, self.viewport_height)
    }
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Active gameplay
    Running,
    /// Player left the top of the screen; final frame is being held
    GameOver { hold_ticks: u32 },
}

/// Complete state of one play-through
#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: SessionConfig,
    /// Tier the session is played at (its score goes on this board)
    pub difficulty: Difficulty,
    pub params: DifficultyParams,
    pub gradual_speed: bool,
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub player: Player,
    /// Active platforms, oldest first
    pub platforms: Vec<Platform>,
    /// Platforms passed
    pub score: u32,
    /// Ticks since the last spawn
    pub spawn_timer: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: SessionPhase,
    next_id: u32,
}

impl GameSession {
    pub fn new(
        config: SessionConfig,
        difficulty: Difficulty,
        gradual_speed: bool,
        seed: u64,
    ) -> Self {
        let player = Player::new(
            Vec2::new(
                (config.viewport_width - config.player_size) / 2.0,
                config.player_start_y,
            ),
            config.player_size,
        );
        log::info!(
            "Session start: {} (gradual speed {}), seed {}",
            difficulty.as_str(),
            if gradual_speed { "on" } else { "off" },
            seed
        );
        Self {
            config,
            difficulty,
            params: difficulty.params(),
            gradual_speed,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player,
            platforms: Vec::new(),
            score: 0,
            spawn_timer: 0,
            time_ticks: 0,
            phase: SessionPhase::Running,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn interval in whole ticks (at least one)
    pub fn spawn_interval_ticks(&self) -> u32 {
        ((self.params.spawn_interval * TICK_RATE as f32).round() as u32).max(1)
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, SessionPhase::GameOver { .. })
    }

    /// Solid rectangles of every active platform
    pub fn platform_rects(&self) -> Vec<Rect> {
        let width = self.config.viewport_width;
        self.platforms
            .iter()
            .flat_map(|p| p.solid_segments(width))
            .collect()
    }
}
