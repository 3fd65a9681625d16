//! Collision detection
//!
//! Pure overlap tests between the bird's bounding box, the vertical field
//! bounds, and pipe pairs. The bird never moves horizontally; its box is
//! derived at check time from its vertical position and a fixed size.

use glam::Vec2;

use super::state::Pipe;

/// Axis-aligned bounding box for the bird
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirdRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl BirdRect {
    /// Build the box around a center point with the given edge length
    pub fn from_center(center: Vec2, size: f32) -> Self {
        let half = Vec2::splat(size / 2.0);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }
}

/// True once the bird's center leaves the vertical field bounds.
///
/// Strict comparisons: sitting exactly on a bound is still in play.
#[inline]
pub fn out_of_bounds(y: f32, field_height: f32) -> bool {
    y < 0.0 || y > field_height
}

/// Bird-vs-pipe overlap test.
///
/// Horizontal separation rejects first. Otherwise the bird collides when
/// its box pokes above the gap top or below the gap bottom; a box exactly
/// flush with the gap does not collide.
pub fn bird_pipe_collision(rect: &BirdRect, pipe: &Pipe, pipe_width: f32) -> bool {
    if rect.right() < pipe.x || rect.left() > pipe.x + pipe_width {
        return false;
    }
    rect.top() < pipe.gap_y || rect.bottom() > pipe.gap_bottom()
}
