//! Axis-aligned rectangle geometry for viewport regions
//!
//! Every screen element works inside a `Rect` pushed to it by its owner each
//! frame. Containment follows the half-open convention: a point on the left
//! or top edge is inside, one on the right or bottom edge is not.

use glam::Vec2;

/// An axis-aligned rectangle in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// A rectangle of the given size anchored at the origin
    pub const fn from_size(w: f32, h: f32) -> Self {
        Self::new(0.0, 0.0, w, h)
    }

    /// A square of the given size centered on a point
    pub fn centered_square(center: Vec2, size: f32) -> Self {
        Self::new(center.x - size / 2.0, center.y - size / 2.0, size, size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Length of the shorter side
    #[inline]
    pub fn shortest_axis(&self) -> f32 {
        self.w.min(self.h)
    }

    /// Half-open containment: [x, x + w) x [y, y + h)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x < self.x + self.w
            && point.y >= self.y
            && point.y < self.y + self.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_half_open() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(rect.contains(Vec2::new(10.0, 20.0)));
        assert!(rect.contains(Vec2::new(39.9, 59.9)));
        assert!(!rect.contains(Vec2::new(40.0, 30.0)));
        assert!(!rect.contains(Vec2::new(20.0, 60.0)));
        assert!(!rect.contains(Vec2::new(9.9, 30.0)));
    }

    #[test]
    fn test_center() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(rect.center(), Vec2::new(50.0, 25.0));
    }

    #[test]
    fn test_centered_square() {
        let square = Rect::centered_square(Vec2::new(50.0, 50.0), 20.0);
        assert_eq!(square, Rect::new(40.0, 40.0, 20.0, 20.0));
        assert!(square.contains(Vec2::new(50.0, 50.0)));
    }

    #[test]
    fn test_shortest_axis() {
        assert_eq!(Rect::from_size(100.0, 60.0).shortest_axis(), 60.0);
        assert_eq!(Rect::from_size(30.0, 60.0).shortest_axis(), 30.0);
    }
}
