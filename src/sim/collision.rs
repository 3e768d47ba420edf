//! Collision detection for rectangular entities
//!
//! Ball and paddles are both axis-aligned boxes, so a single strict
//! overlap test covers every contact in the arena.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
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

    /// Strict overlap on both axes; boxes that only share an edge don't overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Check whether the ball's box overlaps a paddle's box
#[inline]
pub fn check_collision(ball: &Aabb, paddle: &Aabb) -> bool {
    ball.overlaps(paddle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_boxes_collide() {
        let ball = Aabb::new(100.0, 100.0, 12.0, 12.0);
        let paddle = Aabb::new(95.0, 95.0, 15.0, 100.0);
        assert!(check_collision(&ball, &paddle));
    }

    #[test]
    fn test_disjoint_boxes_miss() {
        let paddle = Aabb::new(95.0, 95.0, 15.0, 100.0);

        // Separated horizontally
        assert!(!check_collision(&Aabb::new(200.0, 100.0, 12.0, 12.0), &paddle));
        // Separated vertically
        assert!(!check_collision(&Aabb::new(100.0, 300.0, 12.0, 12.0), &paddle));
        // Separated on both axes
        assert!(!check_collision(&Aabb::new(0.0, 0.0, 12.0, 12.0), &paddle));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let paddle = Aabb::new(95.0, 95.0, 15.0, 100.0);

        // Ball right edge == paddle left edge
        let ball = Aabb::new(83.0, 100.0, 12.0, 12.0);
        assert_eq!(ball.right(), paddle.left());
        assert!(!check_collision(&ball, &paddle));

        // Ball top edge == paddle bottom edge
        let ball = Aabb::new(100.0, 195.0, 12.0, 12.0);
        assert_eq!(ball.top(), paddle.bottom());
        assert!(!check_collision(&ball, &paddle));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = Aabb::new(10.0, 10.0, 20.0, 20.0);
        let b = Aabb::new(25.0, 25.0, 20.0, 20.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }
}
