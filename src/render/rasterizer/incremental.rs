//! Shared incremental-arithmetic helpers for the scan converters.
//!
//! Everything here is evaluated once per vertex, edge or row. The only
//! divisions happen while setting up an edge or a gradient, and both are
//! skipped when the divisor is exactly zero.

use std::cmp::Ordering;

use crate::math::{Vec2, Vec3};

/// A value that can be interpolated linearly across a triangle.
///
/// Implemented for `()` (no attributes, flat fill), `f32`, [`Vec2`]
/// (affine texture coordinates) and [`Vec3`] (homogeneous `u/w, v/w, 1/w`).
pub trait Interpolant: Copy {
    const ZERO: Self;

    fn sum(self, other: Self) -> Self;

    fn difference(self, other: Self) -> Self;

    fn scaled(self, factor: f32) -> Self;
}

impl Interpolant for () {
    const ZERO: Self = ();

    #[inline]
    fn sum(self, _other: Self) -> Self {}

    #[inline]
    fn difference(self, _other: Self) -> Self {}

    #[inline]
    fn scaled(self, _factor: f32) -> Self {}
}

impl Interpolant for f32 {
    const ZERO: Self = 0.0;

    #[inline]
    fn sum(self, other: Self) -> Self {
        self + other
    }

    #[inline]
    fn difference(self, other: Self) -> Self {
        self - other
    }

    #[inline]
    fn scaled(self, factor: f32) -> Self {
        self * factor
    }
}

impl Interpolant for Vec2 {
    const ZERO: Self = Vec2::ZERO;

    #[inline]
    fn sum(self, other: Self) -> Self {
        self + other
    }

    #[inline]
    fn difference(self, other: Self) -> Self {
        self - other
    }

    #[inline]
    fn scaled(self, factor: f32) -> Self {
        self * factor
    }
}

impl Interpolant for Vec3 {
    const ZERO: Self = Vec3::ZERO;

    #[inline]
    fn sum(self, other: Self) -> Self {
        self + other
    }

    #[inline]
    fn difference(self, other: Self) -> Self {
        self - other
    }

    #[inline]
    fn scaled(self, factor: f32) -> Self {
        self * factor
    }
}

/// A triangle corner tagged with its position in the caller's triangle.
///
/// The ordinal breaks ties between coincident vertices so the sorted order,
/// and with it the long-edge classification, is repeatable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Vertex<A> {
    pub x: f32,
    pub y: f32,
    pub attr: A,
    pub ordinal: u8,
}

impl<A: Interpolant> Vertex<A> {
    pub fn new(position: Vec2, attr: A, ordinal: u8) -> Self {
        debug_assert!(position.is_finite(), "non-finite vertex {position:?}");
        Self {
            x: position.x,
            y: position.y,
            attr,
            ordinal,
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    fn coord(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Axis {
    X,
    Y,
}

impl Axis {
    fn other(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// Lexicographic order by `primary`, then the other coordinate, then ordinal.
fn compare<A>(a: &Vertex<A>, b: &Vertex<A>, primary: Axis) -> Ordering
where
    A: Interpolant,
{
    let by = |axis: Axis| {
        a.coord(axis)
            .partial_cmp(&b.coord(axis))
            .unwrap_or(Ordering::Equal)
    };
    by(primary)
        .then_with(|| by(primary.other()))
        .then_with(|| a.ordinal.cmp(&b.ordinal))
}

/// Sorts three vertices along `primary` (ascending).
///
/// Three compare-and-swaps suffice for three elements.
pub(crate) fn sort_along<A: Interpolant>(mut v: [Vertex<A>; 3], primary: Axis) -> [Vertex<A>; 3] {
    if compare(&v[1], &v[0], primary) == Ordering::Less {
        v.swap(0, 1);
    }
    if compare(&v[2], &v[1], primary) == Ordering::Less {
        v.swap(1, 2);
    }
    if compare(&v[1], &v[0], primary) == Ordering::Less {
        v.swap(0, 1);
    }
    v
}

/// Signed side of `p` relative to the directed line `from -> to`.
///
/// Negative when `p` lies on the clockwise side of the direction in a
/// y-up frame: for a line pointing to increasing y, that is the side of
/// increasing x.
#[inline]
pub(crate) fn side(p: Vec2, from: Vec2, to: Vec2) -> f32 {
    (p - from).dot((to - from).perpendicular())
}

/// A boundary sample on one scanline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Boundary<A> {
    pub x: f32,
    pub attr: A,
}

/// A triangle edge evaluated per scanline.
///
/// The edge always originates at its lower-y endpoint, so two triangles
/// sharing an edge evaluate it with identical operands and produce
/// bit-identical boundaries.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Edge<A> {
    origin_x: f32,
    origin_y: f32,
    origin_attr: A,
    dx_dy: f32,
    dattr_dy: A,
}

impl<A: Interpolant> Edge<A> {
    pub fn between(from: &Vertex<A>, to: &Vertex<A>) -> Self {
        let dy = to.y - from.y;
        let (dx_dy, dattr_dy) = if dy != 0.0 {
            let inv_dy = 1.0 / dy;
            (
                (to.x - from.x) * inv_dy,
                to.attr.difference(from.attr).scaled(inv_dy),
            )
        } else {
            // A horizontal edge only ever bounds a phase with zero rows.
            (0.0, A::ZERO)
        };
        Self {
            origin_x: from.x,
            origin_y: from.y,
            origin_attr: from.attr,
            dx_dy,
            dattr_dy,
        }
    }

    /// The edge crossing at the sample height of pixel row `row`.
    #[inline]
    pub fn at_row(&self, row: i32) -> Boundary<A> {
        let offset = (row as f32 + 0.5) - self.origin_y;
        Boundary {
            x: self.origin_x + self.dx_dy * offset,
            attr: self.origin_attr.sum(self.dattr_dy.scaled(offset)),
        }
    }
}

/// Rate of change of the attribute along the minor axis of a sorted triple.
///
/// `sorted` is ordered along `major`. The rate is measured between the middle
/// vertex and the point of the long edge (first to last vertex) at the same
/// major coordinate. Since attributes vary linearly over the triangle this is
/// the partial derivative along the minor axis. Returns zero for triangles
/// with no extent across the major axis.
pub(crate) fn cross_gradient<A: Interpolant>(sorted: &[Vertex<A>; 3], major: Axis) -> A {
    let minor = major.other();
    let [lo, mid, hi] = sorted;

    let major_delta = hi.coord(major) - lo.coord(major);
    let (minor_slope, attr_slope) = if major_delta != 0.0 {
        let inv = 1.0 / major_delta;
        (
            (hi.coord(minor) - lo.coord(minor)) * inv,
            hi.attr.difference(lo.attr).scaled(inv),
        )
    } else {
        (0.0, A::ZERO)
    };

    let t = mid.coord(major) - lo.coord(major);
    let minor_on_edge = lo.coord(minor) + minor_slope * t;
    let attr_on_edge = lo.attr.sum(attr_slope.scaled(t));

    let minor_delta = mid.coord(minor) - minor_on_edge;
    if minor_delta == 0.0 {
        return A::ZERO;
    }
    mid.attr.difference(attr_on_edge).scaled(1.0 / minor_delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn v(x: f32, y: f32, ordinal: u8) -> Vertex<f32> {
        Vertex::new(Vec2::new(x, y), 0.0, ordinal)
    }

    fn ordinals(vs: [Vertex<f32>; 3]) -> [u8; 3] {
        [vs[0].ordinal, vs[1].ordinal, vs[2].ordinal]
    }

    #[test]
    fn vertical_sort_breaks_ties_by_x_then_ordinal() {
        let sorted = sort_along([v(5.0, 2.0, 0), v(1.0, 2.0, 1), v(0.0, 1.0, 2)], Axis::Y);
        assert_eq!(ordinals(sorted), [2, 1, 0]);

        let coincident = sort_along([v(1.0, 1.0, 2), v(1.0, 1.0, 0), v(1.0, 1.0, 1)], Axis::Y);
        assert_eq!(ordinals(coincident), [0, 1, 2]);
    }

    #[test]
    fn horizontal_sort_uses_x_first() {
        let sorted = sort_along([v(3.0, 0.0, 0), v(1.0, 9.0, 1), v(1.0, 2.0, 2)], Axis::X);
        assert_eq!(ordinals(sorted), [2, 1, 0]);
    }

    #[test]
    fn side_is_negative_toward_increasing_x() {
        let from = Vec2::new(0.0, 0.0);
        let to = Vec2::new(0.0, 10.0);
        assert!(side(Vec2::new(5.0, 5.0), from, to) < 0.0);
        assert!(side(Vec2::new(-5.0, 5.0), from, to) > 0.0);
        assert_eq!(side(Vec2::new(0.0, 3.0), from, to), 0.0);
    }

    #[test]
    fn edge_is_evaluated_at_row_centers() {
        let from = Vertex::new(Vec2::new(0.0, 0.0), 0.0f32, 0);
        let to = Vertex::new(Vec2::new(4.0, 8.0), 8.0f32, 1);
        let edge = Edge::between(&from, &to);
        let b = edge.at_row(1);
        assert_relative_eq!(b.x, 0.75);
        assert_relative_eq!(b.attr, 1.5);
    }

    #[test]
    fn horizontal_edge_has_zero_slope() {
        let from = Vertex::new(Vec2::new(0.0, 3.0), 1.0f32, 0);
        let to = Vertex::new(Vec2::new(9.0, 3.0), 5.0f32, 1);
        let b = Edge::between(&from, &to).at_row(7);
        assert_eq!(b.x, 0.0);
        assert_eq!(b.attr, 1.0);
    }

    #[test]
    fn cross_gradient_recovers_plane_derivatives() {
        // attr = 2x + 3y + 1
        let f = |x: f32, y: f32| 2.0 * x + 3.0 * y + 1.0;
        let vs = [
            Vertex::new(Vec2::new(1.0, 1.0), f(1.0, 1.0), 0),
            Vertex::new(Vec2::new(7.0, 3.0), f(7.0, 3.0), 1),
            Vertex::new(Vec2::new(2.0, 9.0), f(2.0, 9.0), 2),
        ];
        let by_y = sort_along(vs, Axis::Y);
        let by_x = sort_along(vs, Axis::X);
        assert_relative_eq!(cross_gradient(&by_y, Axis::Y), 2.0, epsilon = 1e-5);
        assert_relative_eq!(cross_gradient(&by_x, Axis::X), 3.0, epsilon = 1e-5);
    }

    #[test]
    fn cross_gradient_of_collinear_triangle_is_zero() {
        let vs = [
            Vertex::new(Vec2::new(0.0, 0.0), 0.0f32, 0),
            Vertex::new(Vec2::new(1.0, 1.0), 5.0f32, 1),
            Vertex::new(Vec2::new(2.0, 2.0), 1.0f32, 2),
        ];
        assert_eq!(cross_gradient(&sort_along(vs, Axis::Y), Axis::Y), 0.0);
    }
}
