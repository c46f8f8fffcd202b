//! Fixed timestep simulation tick
//!
//! Per tick, in order: input, speed, spawn, platform scroll and prune,
//! player physics, scoring, top-exit check.

use super::platform::{self, Platform};
use super::player::Motion;
use super::state::{GameSession, SessionPhase};
use crate::difficulty::current_speed;

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move left held
    pub left: bool,
    /// Move right held
    pub right: bool,
    /// Fast drop held
    pub down: bool,
    /// Jump pressed this tick
    pub jump: bool,
    /// Abandon the session
    pub cancel: bool,
}

/// Result of advancing a session by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep ticking
    Running,
    /// Player left the top of the screen with this score
    Finished(u32),
    /// Cancelled by the player; nothing to record
    Aborted,
}

/// Advance the session by one fixed timestep
pub fn tick(session: &mut GameSession, input: &TickInput) -> TickOutcome {
    if let SessionPhase::GameOver { hold_ticks } = session.phase {
        // Cancel skips the hold; the score still counts
        if input.cancel || hold_ticks == 0 {
            return finish(session);
        }
        session.phase = SessionPhase::GameOver {
            hold_ticks: hold_ticks - 1,
        };
        return TickOutcome::Running;
    }

    if input.cancel {
        log::info!("Session aborted at score {}", session.score);
        return TickOutcome::Aborted;
    }

    session.time_ticks += 1;

    if input.jump {
        session.player.jump(session.config.jump_strength);
    }

    let speed = current_speed(session.params.base_speed, session.score, session.gradual_speed);

    session.spawn_timer += 1;
    if session.spawn_timer >= session.spawn_interval_ticks() {
        let id = session.next_entity_id();
        let cfg = &session.config;
        let platform = platform::spawn(
            &mut session.rng,
            id,
            cfg.viewport_width,
            cfg.viewport_height,
            cfg.gap_width,
            cfg.platform_height,
        );
        session.platforms.push(platform);
        session.spawn_timer = 0;
    }

    platform::advance(&mut session.platforms, speed);
    platform::prune(&mut session.platforms);

    let motion = player_motion(input, session.config.player_speed);
    session.player.update(
        session.params.gravity,
        motion,
        &session.platforms,
        session.config.viewport_width,
        session.config.floor_y(),
    );

    let passed = score_passed(&mut session.platforms, session.player.pos.y);
    if passed > 0 {
        session.score += passed;
        log::debug!("Score {}", session.score);
    }

    if session.player.exited_top() {
        log::info!(
            "Player left the screen after {} ticks, score {}",
            session.time_ticks,
            session.score
        );
        let hold_ticks = session.config.game_over_hold_ticks;
        session.phase = SessionPhase::GameOver { hold_ticks };
        if hold_ticks == 0 {
            return finish(session);
        }
    }

    TickOutcome::Running
}

fn finish(session: &GameSession) -> TickOutcome {
    log::info!("Session finished with score {}", session.score);
    TickOutcome::Finished(session.score)
}

fn player_motion(input: &TickInput, speed: f32) -> Motion {
    let mut dx = 0.0;
    if input.left {
        dx -= speed;
    }
    if input.right {
        dx += speed;
    }
    Motion {
        dx,
        drop: if input.down { speed } else { 0.0 },
    }
}

/// Mark every platform the player has dropped below as scored.
/// Returns how many were newly passed.
pub fn score_passed(platforms: &mut [Platform], player_y: f32) -> u32 {
    let mut passed = 0;
    for platform in platforms.iter_mut().filter(|p| !p.scored) {
        if platform.bottom() < player_y {
            platform.scored = true;
            passed += 1;
        }
    }
    passed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::{Difficulty, DifficultyParams};
    use crate::sim::state::SessionConfig;
    use glam::Vec2;

    fn wide_config() -> SessionConfig {
        SessionConfig {
            viewport_width: 800.0,
            viewport_height: 600.0,
            player_size: 40.0,
            gap_width: 150.0,
            ..Default::default()
        }
    }

    /// A session with no gravity and no automatic spawns
    fn floating_session(speed: f32) -> GameSession {
        let mut session = GameSession::new(wide_config(), Difficulty::Normal, false, 42);
        session.params = DifficultyParams {
            gravity: 0.0,
            spawn_interval: 1000.0,
            base_speed: speed,
        };
        session.player.pos = Vec2::new(400.0, 500.0);
        session
    }

    #[test]
    fn test_basic_scoring() {
        let mut session = floating_session(3.0);
        // Gap 325..475 lets the player at 400..440 through
        session.platforms.push(Platform::new(1, 600.0, 400.0, 150.0, 20.0));

        let input = TickInput::default();
        let mut scored_at = None;
        for n in 0..100 {
            assert_eq!(tick(&mut session, &input), TickOutcome::Running);
            let platform = &session.platforms[0];
            if platform.y >= 540.0 {
                assert_eq!(session.score, 0);
            }
            if session.score == 1 && scored_at.is_none() {
                scored_at = Some(n);
                assert!(platform.scored);
                assert!(platform.bottom() < 500.0);
            }
        }
        assert!(scored_at.is_some());
        assert_eq!(session.score, 1);
        assert_eq!(session.player.pos.y, 500.0);
    }

    #[test]
    fn test_score_passed_counts_once() {
        let mut platforms = vec![
            Platform::new(1, 100.0, 200.0, 100.0, 20.0),
            Platform::new(2, 400.0, 200.0, 100.0, 20.0),
        ];
        assert_eq!(score_passed(&mut platforms, 300.0), 1);
        assert!(platforms[0].scored);
        assert!(!platforms[1].scored);
        assert_eq!(score_passed(&mut platforms, 300.0), 0);
        assert_eq!(score_passed(&mut platforms, 450.0), 1);
    }

    #[test]
    fn test_cancel_aborts() {
        let mut session = GameSession::new(SessionConfig::default(), Difficulty::Normal, true, 1);
        let input = TickInput {
            cancel: true,
            ..Default::default()
        };
        assert_eq!(tick(&mut session, &input), TickOutcome::Aborted);
    }

    #[test]
    fn test_spawns_on_interval() {
        let mut session = GameSession::new(SessionConfig::default(), Difficulty::Normal, false, 3);
        let interval = session.spawn_interval_ticks();
        let input = TickInput::default();
        for _ in 0..interval - 1 {
            tick(&mut session, &input);
        }
        assert!(session.platforms.is_empty());
        tick(&mut session, &input);
        assert_eq!(session.platforms.len(), 1);
        let speed = session.params.base_speed;
        assert_eq!(session.platforms[0].y, session.config.viewport_height - speed);
    }

    #[test]
    fn test_top_exit_finishes_after_hold() {
        let mut config = SessionConfig::default();
        config.game_over_hold_ticks = 2;
        let mut session = GameSession::new(config, Difficulty::Normal, false, 1);
        session.score = 7;
        session.player.pos.y = 0.5;
        session.player.vel_y = -5.0;

        let input = TickInput::default();
        assert_eq!(tick(&mut session, &input), TickOutcome::Running);
        assert!(session.is_game_over());
        let frozen = session.player.pos;
        assert_eq!(tick(&mut session, &input), TickOutcome::Running);
        assert_eq!(tick(&mut session, &input), TickOutcome::Running);
        assert_eq!(session.player.pos, frozen);
        assert_eq!(tick(&mut session, &input), TickOutcome::Finished(7));
    }

    #[test]
    fn test_cancel_during_hold_keeps_score() {
        let mut session = GameSession::new(SessionConfig::default(), Difficulty::Easy, false, 1);
        session.score = 3;
        session.player.pos.y = 0.2;
        session.player.vel_y = -5.0;
        tick(&mut session, &TickInput::default());
        assert!(session.is_game_over());

        let cancel = TickInput {
            cancel: true,
            ..Default::default()
        };
        assert_eq!(tick(&mut session, &cancel), TickOutcome::Finished(3));
    }

    #[test]
    fn test_jump_input() {
        let mut session = GameSession::new(SessionConfig::default(), Difficulty::Normal, false, 1);
        // Let the player fall to the floor
        let idle = TickInput::default();
        for _ in 0..50 {
            tick(&mut session, &idle);
        }
        assert!(session.player.is_grounded());

        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut session, &jump);
        let gravity = session.params.gravity;
        assert_eq!(session.player.vel_y, -session.config.jump_strength + gravity);
        assert!(!session.player.is_grounded());
    }

    #[test]
    fn test_lateral_input() {
        let mut session = GameSession::new(SessionConfig::default(), Difficulty::Normal, false, 1);
        let start_x = session.player.pos.x;
        let input = TickInput {
            left: true,
            ..Default::default()
        };
        tick(&mut session, &input);
        assert_eq!(session.player.pos.x, start_x - session.config.player_speed);

        let both = TickInput {
            left: true,
            right: true,
            ..Default::default()
        };
        tick(&mut session, &both);
        assert_eq!(session.player.pos.x, start_x - session.config.player_speed);
    }

    #[test]
    fn test_same_seed_same_platforms() {
        let mut a = GameSession::new(SessionConfig::default(), Difficulty::Hard, true, 99);
        let mut b = GameSession::new(SessionConfig::default(), Difficulty::Hard, true, 99);
        let input = TickInput::default();
        for _ in 0..200 {
            tick(&mut a, &input);
            tick(&mut b, &input);
        }
        let gaps_a: Vec<_> = a.platforms.iter().map(|p| p.gap_center).collect();
        let gaps_b: Vec<_> = b.platforms.iter().map(|p| p.gap_center).collect();
        assert!(!gaps_a.is_empty());
        assert_eq!(gaps_a, gaps_b);
    }

    #[test]
    fn test_score_steps_by_one_per_platform() {
        let mut session = GameSession::new(SessionConfig::default(), Difficulty::Normal, false, 5);
        session.params.spawn_interval = 1000.0;
        // Player spans x 185..215; every gap spans 150..250
        for (i, y) in [150.0, 250.0, 350.0, 450.0, 550.0].into_iter().enumerate() {
            session
                .platforms
                .push(Platform::new(i as u32 + 100, y, 200.0, 100.0, 20.0));
        }

        let input = TickInput::default();
        let mut scored_ids = std::collections::HashSet::new();
        let mut last = 0;
        for _ in 0..150 {
            assert_eq!(tick(&mut session, &input), TickOutcome::Running);

            let newly: Vec<u32> = session
                .platforms
                .iter()
                .filter(|p| p.scored && !scored_ids.contains(&p.id))
                .map(|p| p.id)
                .collect();
            if session.score == last {
                assert!(newly.is_empty());
            } else {
                assert_eq!(session.score, last + 1);
                assert_eq!(newly.len(), 1);
            }
            scored_ids.extend(newly);
            last = session.score;
        }
        assert_eq!(session.score, 5);
        assert_eq!(session.player.bottom(), session.config.floor_y());
    }
}
