//! Scrolling gap platforms
//!
//! A platform is a full-width bar with one gap. It spawns at the bottom
//! edge of the viewport and scrolls upward until it leaves the top.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;

/// A platform entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    /// Top edge
    pub y: f32,
    /// Top edge before the last advance
    pub prev_y: f32,
    /// Horizontal center of the gap
    pub gap_center: f32,
    pub gap_width: f32,
    pub height: f32,
    /// Set once the player has dropped below this platform
    pub scored: bool,
}

impl Platform {
    pub fn new(id: u32, y: f32, gap_center: f32, gap_width: f32, height: f32) -> Self {
        Self {
            id,
            y,
            prev_y: y,
            gap_center,
            gap_width,
            height,
            scored: false,
        }
    }

    #[inline]
    pub fn gap_start(&self) -> f32 {
        self.gap_center - self.gap_width / 2.0
    }

    #[inline]
    pub fn gap_end(&self) -> f32 {
        self.gap_center + self.gap_width / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Solid parts of the platform (zero-width segments are omitted)
    pub fn solid_segments(&self, viewport_width: f32) -> impl Iterator<Item = Rect> + use<> {
        let left_w = self.gap_start();
        let right_x = self.gap_end();
        let right_w = viewport_width - right_x;

        let left = (left_w > 0.0).then(|| Rect::new(0.0, self.y, left_w, self.height));
        let right = (right_w > 0.0).then(|| Rect::new(right_x, self.y, right_w, self.height));
        [left, right].into_iter().flatten()
    }

    /// The opening the player can drop through
    pub fn gap_rect(&self) -> Rect {
        Rect::new(self.gap_start(), self.y, self.gap_width, self.height)
    }

    /// Off-screen past the top edge
    pub fn is_gone(&self) -> bool {
        self.bottom() < 0.0
    }
}

/// Create a platform at the bottom edge with a uniformly placed gap
pub fn spawn<R: Rng>(
    rng: &mut R,
    id: u32,
    viewport_width: f32,
    viewport_height: f32,
    gap_width: f32,
    height: f32,
) -> Platform {
    debug_assert!(gap_width > 0.0 && gap_width < viewport_width);
    let gap_start = rng.random_range(0.0..=viewport_width - gap_width);
    let platform = Platform::new(
        id,
        viewport_height,
        gap_start + gap_width / 2.0,
        gap_width,
        height,
    );
    log::debug!(
        "Spawned platform {} with gap {:.1}..{:.1}",
        id,
        platform.gap_start(),
        platform.gap_end()
    );
    platform
}

/// Scroll every platform toward the top by `speed` pixels
pub fn advance(platforms: &mut [Platform], speed: f32) {
    for platform in platforms {
        platform.prev_y = platform.y;
        platform.y -= speed;
    }
}

/// Drop platforms that have left the screen (order of survivors kept)
pub fn prune(platforms: &mut Vec<Platform>) {
    platforms.retain(|p| !p.is_gone());
}
