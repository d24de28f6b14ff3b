//! Axis-aligned bounding rectangles and the collider component.
//!
//! [`Rect`] is the world-space AABB used across the engine: entity bounds,
//! spatial-index regions, and the world boundary. [`BoxCollider`] attaches a
//! rectangle to an entity together with the previous tick's rectangle (for
//! index resynchronization and motion detection) and the solid flag that
//! makes it block movers during collision resolution.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Axis-aligned rectangle in world space. `min` is the top-left corner,
/// `max` the bottom-right; `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Create a rectangle from its edges.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        // Normalize so min/max hold regardless of argument order.
        Self {
            min: Vec2::new(left.min(right), top.min(bottom)),
            max: Vec2::new(left.max(right), top.max(bottom)),
        }
    }

    /// Create a rectangle from a top-left position and a size.
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, pos.x + size.x, pos.y + size.y)
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// The same rectangle translated by `delta`.
    #[must_use]
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// AABB vs AABB overlap test. Touching edges do not count as overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Whether `other` lies entirely inside this rectangle (edges included).
    pub fn contains(&self, other: &Rect) -> bool {
        self.min.x <= other.min.x
            && self.min.y <= other.min.y
            && self.max.x >= other.max.x
            && self.max.y >= other.max.y
    }

    /// Point containment in world space.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Entity bounding box plus the previous tick's box and the solid flag.
///
/// `last_rect` is snapshotted by the
/// [`movement`](crate::systems::movement::movement) system at the start of
/// every tick; `rect != last_rect` marks the entity as moved, which drives
/// spatial-index resynchronization and collision resolution.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct BoxCollider {
    pub rect: Rect,
    pub last_rect: Rect,
    /// Only solid entities block movement during resolution.
    pub solid: bool,
}

impl BoxCollider {
    /// Create a non-solid collider at the given bounds.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            last_rect: rect,
            solid: false,
        }
    }

    /// Create a solid (blocking) collider at the given bounds.
    pub fn solid(rect: Rect) -> Self {
        Self {
            rect,
            last_rect: rect,
            solid: true,
        }
    }

    /// Whether the bounds changed since the last tick's snapshot.
    pub fn is_moving(&self) -> bool {
        self.rect != self.last_rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_accessors() {
        let r = Rect::new(10.0, 20.0, 30.0, 60.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.right(), 30.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.width(), 20.0);
        assert_eq!(r.height(), 40.0);
        assert_eq!(r.center(), Vec2::new(20.0, 40.0));
    }

    #[test]
    fn test_rect_normalizes_swapped_edges() {
        let r = Rect::new(30.0, 60.0, 10.0, 20.0);
        assert_eq!(r, Rect::new(10.0, 20.0, 30.0, 60.0));
    }

    #[test]
    fn test_rect_from_pos_size() {
        let r = Rect::from_pos_size(Vec2::new(5.0, 5.0), Vec2::new(10.0, 20.0));
        assert_eq!(r, Rect::new(5.0, 5.0, 15.0, 25.0));
    }

    #[test]
    fn test_intersects_overlap_and_touching() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 15.0, 15.0);
        let touching = Rect::new(10.0, 0.0, 20.0, 10.0);
        let apart = Rect::new(11.0, 0.0, 20.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&touching));
        assert!(!a.intersects(&apart));
    }

    #[test]
    fn test_contains() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(10.0, 10.0, 20.0, 20.0);
        let straddling = Rect::new(90.0, 10.0, 110.0, 20.0);
        assert!(outer.contains(&inner));
        assert!(outer.contains(&outer));
        assert!(!outer.contains(&straddling));
        assert!(!inner.contains(&outer));
    }

    #[test]
    fn test_translated() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(
            r.translated(Vec2::new(5.0, -5.0)),
            Rect::new(5.0, -5.0, 15.0, 5.0)
        );
    }

    #[test]
    fn test_collider_is_moving() {
        let mut collider = BoxCollider::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(!collider.is_moving());
        collider.rect = collider.rect.translated(Vec2::new(1.0, 0.0));
        assert!(collider.is_moving());
        collider.last_rect = collider.rect;
        assert!(!collider.is_moving());
    }
}
