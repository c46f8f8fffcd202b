//! The player's square body
//!
//! Gravity and velocity are per tick, not scaled by dt, so they stay in
//! step with the platforms' per-tick scrolling.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, lands_on};
use super::platform::Platform;

/// What the player is standing on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contact {
    Airborne,
    Floor,
    /// Resting on a solid segment of the platform with this id
    Platform(u32),
}

/// Per-tick movement requested by input
#[derive(Debug, Clone, Copy, Default)]
pub struct Motion {
    /// Signed horizontal displacement
    pub dx: f32,
    /// Extra downward displacement (fast drop)
    pub drop: f32,
}

/// The player entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    /// Side length
    pub size: f32,
    /// Vertical velocity (positive is down)
    pub vel_y: f32,
    pub contact: Contact,
}

impl Player {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self {
            pos,
            size,
            vel_y: 0.0,
            contact: Contact::Airborne,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }

    pub fn is_grounded(&self) -> bool {
        self.contact != Contact::Airborne
    }

    /// Jump if standing on something. Returns false (and does nothing) when airborne.
    pub fn jump(&mut self, strength: f32) -> bool {
        if !self.is_grounded() {
            return false;
        }
        self.vel_y = -strength;
        self.contact = Contact::Airborne;
        true
    }

    /// Reached the top edge of the screen
    pub fn exited_top(&self) -> bool {
        self.pos.y <= 0.0
    }

    /// Advance one tick: gravity, motion, floor, platform landings, then
    /// horizontal movement.
    ///
    /// Platforms must already have been advanced this tick so their
    /// `prev_y` describes where they were when the tick began.
    pub fn update(
        &mut self,
        gravity: f32,
        motion: Motion,
        platforms: &[Platform],
        viewport_width: f32,
        floor_y: f32,
    ) {
        let prev_bottom = self.bottom();

        self.vel_y += gravity;
        self.pos.y += self.vel_y + motion.drop.max(0.0);
        self.contact = Contact::Airborne;

        if self.bottom() >= floor_y {
            self.pos.y = floor_y - self.size;
            self.vel_y = 0.0;
            self.contact = Contact::Floor;
        }

        self.resolve_landing(prev_bottom, platforms, viewport_width);
        self.move_horizontal(motion.dx, platforms, viewport_width);
    }

    /// Snap onto the highest segment the player fell onto this tick
    fn resolve_landing(&mut self, prev_bottom: f32, platforms: &[Platform], viewport_width: f32) {
        let body = self.rect();
        let mut landing: Option<(f32, u32)> = None;

        for platform in platforms {
            for segment in platform.solid_segments(viewport_width) {
                if !lands_on(&body, prev_bottom, &segment, platform.prev_y) {
                    continue;
                }
                if landing.is_none_or(|(top, _)| segment.top() < top) {
                    landing = Some((segment.top(), platform.id));
                }
            }
        }

        if let Some((top, id)) = landing {
            self.pos.y = top - self.size;
            self.vel_y = 0.0;
            self.contact = Contact::Platform(id);
        }
    }

    /// Move sideways, stopping at the screen edges and at the sides of
    /// segments level with the player
    fn move_horizontal(&mut self, dx: f32, platforms: &[Platform], viewport_width: f32) {
        if dx == 0.0 {
            return;
        }
        let old = self.rect();
        let mut x = (self.pos.x + dx).clamp(0.0, viewport_width - self.size);

        for platform in platforms {
            for segment in platform.solid_segments(viewport_width) {
                if !old.overlaps_vertically(&segment) {
                    continue;
                }
                if dx > 0.0 && old.right() <= segment.left() && x + self.size > segment.left() {
                    x = segment.left() - self.size;
                } else if dx < 0.0 && old.left() >= segment.right() && x < segment.right() {
                    x = segment.right();
                }
            }
        }

        self.pos.x = x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const WIDTH: f32 = 400.0;
    const FLOOR: f32 = 600.0;

    fn grounded_player() -> Player {
        let mut player = Player::new(Vec2::new(100.0, FLOOR - 30.0), 30.0);
        player.contact = Contact::Floor;
        player
    }

    #[test]
    fn test_falls_under_gravity() {
        let mut player = Player::new(Vec2::new(100.0, 50.0), 30.0);
        player.update(0.5, Motion::default(), &[], WIDTH, FLOOR);
        assert_eq!(player.vel_y, 0.5);
        assert_eq!(player.pos.y, 50.5);
        assert_eq!(player.contact, Contact::Airborne);
    }

    #[test]
    fn test_floor_clamp() {
        let mut player = Player::new(Vec2::new(100.0, FLOOR - 31.0), 30.0);
        player.vel_y = 4.0;
        player.update(0.5, Motion::default(), &[], WIDTH, FLOOR);
        assert_eq!(player.pos.y, FLOOR - 30.0);
        assert_eq!(player.vel_y, 0.0);
        assert_eq!(player.contact, Contact::Floor);
    }

    #[test]
    fn test_jump_from_ground() {
        let mut player = grounded_player();
        assert!(player.jump(15.0));
        assert_eq!(player.vel_y, -15.0);
        assert!(!player.is_grounded());

        // No double jump
        assert!(!player.jump(15.0));
        assert_eq!(player.vel_y, -15.0);

        player.update(0.5, Motion::default(), &[], WIDTH, FLOOR);
        assert_eq!(player.vel_y, -14.5);
        assert!(!player.jump(15.0));
        assert_eq!(player.vel_y, -14.5);
    }

    #[test]
    fn test_lands_on_segment() {
        // Platform with the gap far to the right of the player
        let mut platform = Platform::new(1, 300.0, 350.0, 100.0, 20.0);
        platform.prev_y = 301.0;
        let mut player = Player::new(Vec2::new(100.0, 265.0), 30.0);
        player.vel_y = 6.0;

        player.update(0.5, Motion::default(), &[platform], WIDTH, FLOOR);
        assert_eq!(player.pos.y, 300.0 - 30.0);
        assert_eq!(player.vel_y, 0.0);
        assert_eq!(player.contact, Contact::Platform(1));
    }

    #[test]
    fn test_falls_through_gap() {
        let platform = Platform::new(1, 300.0, 115.0, 100.0, 20.0);
        let mut player = Player::new(Vec2::new(100.0, 265.0), 30.0);
        player.vel_y = 6.0;

        player.update(0.5, Motion::default(), &[platform], WIDTH, FLOOR);
        assert_eq!(player.contact, Contact::Airborne);
        assert!(player.pos.y > 270.0);
    }

    #[test]
    fn test_rising_platform_lifts_player_off_floor() {
        let mut platform = Platform::new(1, FLOOR, 350.0, 100.0, 20.0);
        platform.prev_y = FLOOR;
        platform.y = FLOOR - 2.0;

        let mut player = grounded_player();
        player.update(0.5, Motion::default(), &[platform], WIDTH, FLOOR);
        assert_eq!(player.bottom(), FLOOR - 2.0);
        assert_eq!(player.contact, Contact::Platform(1));
    }

    #[test]
    fn test_rides_rising_platform() {
        let mut platforms = vec![Platform::new(1, 300.0, 350.0, 100.0, 20.0)];
        let mut player = Player::new(Vec2::new(100.0, 270.0), 30.0);
        player.contact = Contact::Platform(1);

        for _ in 0..10 {
            super::super::platform::advance(&mut platforms, 2.0);
            player.update(0.5, Motion::default(), &platforms, WIDTH, FLOOR);
            assert_eq!(player.bottom(), platforms[0].y);
            assert_eq!(player.contact, Contact::Platform(1));
        }
    }

    #[test]
    fn test_jumping_from_below_passes_through() {
        let platform = Platform::new(1, 300.0, 350.0, 100.0, 20.0);
        // Player's top is inside the platform, moving up
        let mut player = Player::new(Vec2::new(100.0, 310.0), 30.0);
        player.vel_y = -8.0;
        player.update(0.5, Motion::default(), &[platform], WIDTH, FLOOR);
        assert_eq!(player.contact, Contact::Airborne);
        assert_eq!(player.pos.y, 302.5);
    }

    #[test]
    fn test_horizontal_clamped_to_viewport() {
        let mut player = grounded_player();
        player.pos.x = 2.0;
        player.update(0.5, Motion { dx: -5.0, drop: 0.0 }, &[], WIDTH, FLOOR);
        assert_eq!(player.pos.x, 0.0);

        player.pos.x = WIDTH - 32.0;
        player.update(0.5, Motion { dx: 5.0, drop: 0.0 }, &[], WIDTH, FLOOR);
        assert_eq!(player.pos.x, WIDTH - 30.0);
    }

    #[test]
    fn test_blocked_by_segment_side() {
        // Player sits in the gap (150..250), level with the platform
        let platform = Platform::new(1, 560.0, 200.0, 100.0, 40.0);
        let mut player = grounded_player();
        player.pos.x = 218.0;
        player.update(0.5, Motion { dx: 5.0, drop: 0.0 }, &[platform.clone()], WIDTH, FLOOR);
        assert_eq!(player.pos.x, 220.0);

        player.pos.x = 152.0;
        player.update(0.5, Motion { dx: -5.0, drop: 0.0 }, &[platform], WIDTH, FLOOR);
        assert_eq!(player.pos.x, 150.0);
    }

    #[test]
    fn test_fast_drop() {
        let mut player = Player::new(Vec2::new(100.0, 50.0), 30.0);
        player.update(0.5, Motion { dx: 0.0, drop: 5.0 }, &[], WIDTH, FLOOR);
        assert_eq!(player.pos.y, 55.5);
    }

    proptest! {
        #[test]
        fn prop_no_tunneling(
            start_gap in 0.0f32..5.0,
            vel in 0.0f32..60.0,
            rise in 0.0f32..6.0,
            x in 0.0f32..200.0,
        ) {
            // Segment covers 0..250; player starts just above its previous top
            let top = 300.0;
            let mut platform = Platform::new(1, top - rise, 350.0, 200.0, 20.0);
            platform.prev_y = top;
            let mut player = Player::new(Vec2::new(x, top - 30.0 - start_gap), 30.0);
            player.vel_y = vel;

            player.update(0.5, Motion::default(), &[platform.clone()], WIDTH, FLOOR);

            if player.contact == Contact::Platform(1) {
                prop_assert!((player.bottom() - platform.y).abs() < 1e-3);
            } else {
                // Not landing means the player never reached the segment
                prop_assert!(player.bottom() <= platform.y);
            }
        }
    }
}
