//! Plain geometric value types consumed by the rasterizers.
//!
//! These only carry coordinates. Intersection and clipping live in
//! [`crate::render::clip`].

use crate::math::{Point2, Point3, Vec2};

/// A directed line segment from `start` to `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment2 {
    pub start: Point2,
    pub end: Point2,
}

impl Segment2 {
    pub const fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> Point2 {
        self.start
    }

    pub fn end(&self) -> Point2 {
        self.end
    }

    pub fn delta(&self) -> Vec2 {
        self.end - self.start
    }

    /// A segment is degenerate when both endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Point at parameter `t`, where `t = 0` is `start` and `t = 1` is `end`.
    pub fn at(&self, t: f32) -> Point2 {
        self.start + self.delta() * t
    }
}

/// A triangle in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle2 {
    pub points: [Point2; 3],
}

impl Triangle2 {
    pub const fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self { points: [a, b, c] }
    }

    pub fn vertex(&self, index: usize) -> Point2 {
        self.points[index]
    }

    /// Twice the signed area. Positive for counter-clockwise winding in a y-up frame.
    pub fn signed_area2(&self) -> f32 {
        let [a, b, c] = self.points;
        let ab = b - a;
        let ac = c - a;
        ab.x * ac.y - ab.y * ac.x
    }
}

/// A triangle whose vertices carry `(x, y, w)`, where `x, y` are already
/// projected to screen space and `w` is the homogeneous divisor used for
/// perspective-correct attribute interpolation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle3 {
    pub points: [Point3; 3],
}

impl Triangle3 {
    pub const fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Self { points: [a, b, c] }
    }

    pub fn vertex(&self, index: usize) -> Point3 {
        self.points[index]
    }

    /// The screen-space projection of this triangle.
    pub fn to_triangle2(&self) -> Triangle2 {
        let [a, b, c] = self.points;
        Triangle2::new(a.xy(), b.xy(), c.xy())
    }
}

/// An axis-aligned box `[min.x, max.x] × [min.y, max.y]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlignedBox2 {
    min: Point2,
    max: Point2,
}

impl AlignedBox2 {
    /// Creates a box from its corners.
    ///
    /// # Panics
    /// Panics if `min` exceeds `max` on either axis.
    pub fn new(min: Point2, max: Point2) -> Self {
        assert!(
            min.x <= max.x && min.y <= max.y,
            "aligned box has negative extent: min {:?}, max {:?}",
            min,
            max
        );
        Self { min, max }
    }

    /// The unit square `[0, 1] × [0, 1]`.
    pub const UNIT: Self = Self {
        min: Vec2::ZERO,
        max: Vec2::ONE,
    };

    pub fn from_coords(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Self {
        Self::new(Vec2::new(x_min, y_min), Vec2::new(x_max, y_max))
    }

    pub fn min(&self) -> Point2 {
        self.min
    }

    pub fn max(&self) -> Point2 {
        self.max
    }

    pub fn extent(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn is_empty(&self) -> bool {
        let extent = self.extent();
        extent.x <= 0.0 || extent.y <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_with_equal_endpoints_is_degenerate() {
        let p = Vec2::new(1.5, 2.5);
        assert!(Segment2::new(p, p).is_degenerate());
        assert!(!Segment2::new(p, Vec2::new(2.0, 2.5)).is_degenerate());
    }

    #[test]
    fn segment_parameterization_hits_endpoints() {
        let s = Segment2::new(Vec2::new(1.0, 2.0), Vec2::new(5.0, -2.0));
        assert_eq!(s.at(0.0), s.start());
        assert_eq!(s.at(1.0), s.end());
        assert_eq!(s.at(0.5), Vec2::new(3.0, 0.0));
    }

    #[test]
    fn signed_area_follows_winding() {
        let ccw = Triangle2::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), Vec2::new(0.0, 4.0));
        let cw = Triangle2::new(Vec2::new(0.0, 0.0), Vec2::new(0.0, 4.0), Vec2::new(4.0, 0.0));
        assert_eq!(ccw.signed_area2(), 16.0);
        assert_eq!(cw.signed_area2(), -16.0);
    }

    #[test]
    fn box_extent_is_max_minus_min() {
        let b = AlignedBox2::from_coords(1.0, 2.0, 4.0, 8.0);
        assert_eq!(b.extent(), Vec2::new(3.0, 6.0));
        assert!(!b.is_empty());
        assert!(AlignedBox2::from_coords(1.0, 1.0, 1.0, 3.0).is_empty());
    }

    #[test]
    #[should_panic(expected = "negative extent")]
    fn inverted_box_is_a_precondition_violation() {
        AlignedBox2::from_coords(4.0, 0.0, 1.0, 1.0);
    }
}
