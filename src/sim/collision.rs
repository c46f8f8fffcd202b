//! Axis-aligned collision geometry
//!
//! Screen space: x grows right, y grows down. Platforms scroll upward
//! (decreasing y) toward the player.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap: touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Strict overlap on the vertical axis only
    pub fn overlaps_vertically(&self, other: &Rect) -> bool {
        self.top() < other.bottom() && self.bottom() > other.top()
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }
}

/// Slack for a body resting exactly on a segment's top edge
pub const CONTACT_EPSILON: f32 = 1e-3;

/// Check whether a falling box lands on a segment this tick.
///
/// `prev_bottom` is the box's bottom edge before this tick's motion and
/// `prev_top` the segment's top edge before it scrolled. A landing counts
/// when the box started at or above the segment and its bottom is now past
/// the segment's top, however far it travelled. Boxes entering from below
/// are ignored.
pub fn lands_on(body: &Rect, prev_bottom: f32, segment: &Rect, prev_top: f32) -> bool {
    body.left() < segment.right()
        && body.right() > segment.left()
        && prev_bottom <= prev_top + CONTACT_EPSILON
        && body.bottom() > segment.top()
}
