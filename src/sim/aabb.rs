//! Axis-aligned bounding boxes
//!
//! Every collision test in the game is a box-vs-box overlap. Intersection is
//! inclusive: boxes that merely touch count as intersecting.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build a box from two corners, normalizing so `min <= max` on both axes
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Box with top-left corner `pos` and the given size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos, pos + size)
    }

    pub fn from_center_half_extents(center: Vec2, half: Vec2) -> Self {
        Self::new(center - half, center + half)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Check if two boxes overlap (touching edges count)
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_corners() {
        let aabb = Aabb::new(Vec2::new(10.0, 5.0), Vec2::new(0.0, 20.0));
        assert_eq!(aabb.min, Vec2::new(0.0, 5.0));
        assert_eq!(aabb.max, Vec2::new(10.0, 20.0));
        assert_eq!(aabb.width(), 10.0);
        assert_eq!(aabb.height(), 15.0);
    }

    #[test]
    fn test_intersects_overlap_and_touch() {
        let a = Aabb::from_pos_size(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let overlapping = Aabb::from_pos_size(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        let touching = Aabb::from_pos_size(Vec2::new(10.0, 0.0), Vec2::new(5.0, 5.0));
        let apart = Aabb::from_pos_size(Vec2::new(11.0, 0.0), Vec2::new(5.0, 5.0));

        assert!(a.intersects(&overlapping));
        assert!(overlapping.intersects(&a));
        assert!(a.intersects(&touching), "Touching boxes should intersect");
        assert!(!a.intersects(&apart));
    }

    #[test]
    fn test_center_half_extents() {
        let aabb = Aabb::from_center_half_extents(Vec2::new(50.0, 50.0), Vec2::splat(10.0));
        assert_eq!(aabb.min, Vec2::new(40.0, 40.0));
        assert_eq!(aabb.max, Vec2::new(60.0, 60.0));
        assert_eq!(aabb.center(), Vec2::new(50.0, 50.0));
        assert!(aabb.contains(Vec2::new(40.0, 60.0)));
        assert!(!aabb.contains(Vec2::new(39.9, 50.0)));
    }
}
