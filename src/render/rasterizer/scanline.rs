//! Scanline-based triangle rasterization.
//!
//! Triangles are scan-converted one pixel row at a time between a left and a
//! right boundary edge. The same traversal serves flat fills, affine texture
//! mapping and perspective-correct texture mapping; only the per-pixel work
//! differs.
//!
//! # Long edge and short edges
//!
//! After sorting the vertices by y, the edge from the lowest to the highest
//! vertex spans every row of the triangle. This is the *long edge*. The other
//! two edges each cover one phase of the scan:
//!
//! ```text
//!   y_min  *
//!          |\
//!          | \   short edge 1    phase 1: rows [y_min, y_mid)
//!     long |  \
//!     edge |   * y_mid
//!          |  /                  phase 2: rows [y_mid, y_max)
//!          | /   short edge 2
//!          |/
//!   y_max  *
//! ```
//!
//! Whether the long edge is the left or the right boundary follows from the
//! side of the long edge the middle vertex is on.
//!
//! # Fill convention
//!
//! A pixel is filled when its center `(x + 0.5, y + 0.5)` lies in the
//! half-open region: rows `[y_min, y_max)` and, per row, columns
//! `[left, right)`. Each boundary is evaluated directly from its lower
//! endpoint at the row's sample height, so two triangles sharing an edge
//! compute bit-identical boundaries for it and every pixel along the edge
//! is painted by exactly one of them.
//!
//! # Attributes
//!
//! Textured fills interpolate an attribute linearly in screen space. The
//! horizontal gradient is measured at the middle vertex against the long edge
//! of the y-sorted triangle; the vertical gradient is the same measurement on
//! the x-sorted triangle. Along a row the attribute is advanced by one
//! addition per pixel.
//!
//! For perspective correction the attribute is `(u/w, v/w, 1/w)`. Each pixel
//! divides back by the interpolated `1/w` and reconstructs the texture-space
//! derivatives with the quotient rule:
//!
//! ```text
//! w       = 1 / (1/w)
//! dw/dx   = -d(1/w)/dx * w²
//! duv/dx  = d(uv/w)/dx * w + (uv/w) * dw/dx
//! ```

use log::trace;

use super::incremental::{
    cross_gradient, side, sort_along, Axis, Boundary, Edge, Interpolant, Vertex,
};
use crate::geometry::{Triangle2, Triangle3};
use crate::math::{Point2, Vec2, Vec3};
use crate::render::clip::{clamp_span, to_pixel_span_point};
use crate::render::fill::fill_row;
use crate::render::shader::{ColorMixer, TextureSampler};
use crate::render::surface::{extent, Surface};

/// Scanline triangle rasterizer.
///
/// Stateless: every call sorts its own vertices and keeps all intermediate
/// values on the stack. Input vertices may be in any order and winding.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    /// Creates a new scanline rasterizer instance.
    pub fn new() -> Self {
        Self
    }

    /// Fills a triangle with a solid color.
    pub fn fill_triangle<S, M>(
        &self,
        triangle: &Triangle2,
        color: S::Color,
        surface: &mut S,
        mixer: &M,
    ) where
        S: Surface + ?Sized,
        M: ColorMixer<S::Color> + ?Sized,
    {
        let (width, height) = extent(surface);
        let by_y = sort_along(tag(triangle.points, [(); 3]), Axis::Y);

        scan(&by_y, width, height, |span| {
            fill_row(
                span.row,
                to_pixel_span_point(span.left.x),
                to_pixel_span_point(span.right.x),
                width,
                color,
                surface,
                mixer,
            );
        });
    }

    /// Fills a triangle with texture coordinates interpolated linearly in
    /// screen space.
    ///
    /// `uv` holds the texture coordinate of each vertex of `triangle`, in the
    /// same order.
    pub fn fill_textured_triangle<S, T, M>(
        &self,
        triangle: &Triangle2,
        uv: &Triangle2,
        sampler: &T,
        surface: &mut S,
        mixer: &M,
    ) where
        S: Surface + ?Sized,
        T: TextureSampler<S::Color> + ?Sized,
        M: ColorMixer<S::Color> + ?Sized,
    {
        let (width, height) = extent(surface);
        let vertices = tag(triangle.points, uv.points);
        let by_y = sort_along(vertices, Axis::Y);
        let gradients = Gradients::of(&by_y, &sort_along(vertices, Axis::X));

        scan(&by_y, width, height, |span| {
            shade_span(&span, width, gradients.d_dx, surface, mixer, |uv: Vec2| {
                sampler.sample(uv, gradients.d_dx, gradients.d_dy)
            });
        });
    }

    /// Fills a triangle with perspective-correct texture coordinates.
    ///
    /// Each vertex of `triangle` is `(x, y, w)`: its screen position and the
    /// homogeneous divisor of its projection. `uv` holds the texture
    /// coordinate of each vertex, in the same order.
    ///
    /// # Panics
    /// Panics if any `w` is zero or not finite.
    pub fn fill_perspective_triangle<S, T, M>(
        &self,
        triangle: &Triangle3,
        uv: &Triangle2,
        sampler: &T,
        surface: &mut S,
        mixer: &M,
    ) where
        S: Surface + ?Sized,
        T: TextureSampler<S::Color> + ?Sized,
        M: ColorMixer<S::Color> + ?Sized,
    {
        let homogeneous: [Vec3; 3] = std::array::from_fn(|i| {
            let w = triangle.points[i].z;
            assert!(w != 0.0 && w.is_finite(), "invalid w {w} at vertex {i}");
            let inv_w = 1.0 / w;
            Vec3::extend(uv.points[i] * inv_w, inv_w)
        });

        let (width, height) = extent(surface);
        let vertices = tag(triangle.to_triangle2().points, homogeneous);
        let by_y = sort_along(vertices, Axis::Y);
        let gradients = Gradients::of(&by_y, &sort_along(vertices, Axis::X));

        scan(&by_y, width, height, |span| {
            shade_span(&span, width, gradients.d_dx, surface, mixer, |h: Vec3| {
                let w = 1.0 / h.z;
                let uv_over_w = h.xy();
                let dw_dx = -gradients.d_dx.z * w * w;
                let dw_dy = -gradients.d_dy.z * w * w;
                let duv_dx = gradients.d_dx.xy() * w + uv_over_w * dw_dx;
                let duv_dy = gradients.d_dy.xy() * w + uv_over_w * dw_dy;
                sampler.sample(uv_over_w * w, duv_dx, duv_dy)
            });
        });
    }
}

/// Pairs each position with its attribute and ordinal.
fn tag<A: Interpolant>(points: [Point2; 3], attrs: [A; 3]) -> [Vertex<A>; 3] {
    std::array::from_fn(|i| Vertex::new(points[i], attrs[i], i as u8))
}

/// Screen-space partial derivatives of the interpolated attribute.
#[derive(Clone, Copy, Debug)]
struct Gradients<A> {
    d_dx: A,
    d_dy: A,
}

impl<A: Interpolant> Gradients<A> {
    fn of(by_y: &[Vertex<A>; 3], by_x: &[Vertex<A>; 3]) -> Self {
        Self {
            d_dx: cross_gradient(by_y, Axis::Y),
            d_dy: cross_gradient(by_x, Axis::X),
        }
    }
}

/// The boundaries of one pixel row.
#[derive(Clone, Copy, Debug)]
struct RowSpan<A> {
    row: i32,
    left: Boundary<A>,
    right: Boundary<A>,
}

/// Walks the visible rows of a y-sorted triangle, handing each row's left and
/// right boundary to `emit`.
///
/// Rows are clamped to `[0, height)`. Triangles entirely above, below, left
/// or right of the surface emit nothing.
fn scan<A, F>(by_y: &[Vertex<A>; 3], width: i32, height: i32, mut emit: F)
where
    A: Interpolant,
    F: FnMut(RowSpan<A>),
{
    let [lo, mid, hi] = by_y;

    let x_min = lo.x.min(mid.x).min(hi.x);
    let x_max = lo.x.max(mid.x).max(hi.x);
    let (x_begin, x_end) = (to_pixel_span_point(x_min), to_pixel_span_point(x_max));
    let (y_begin, y_mid, y_end) = (
        to_pixel_span_point(lo.y),
        to_pixel_span_point(mid.y),
        to_pixel_span_point(hi.y),
    );

    if y_begin >= y_end || y_end <= 0 || y_begin >= height || x_end <= 0 || x_begin >= width {
        trace!("triangle culled: rows {y_begin}..{y_end}, columns {x_begin}..{x_end}");
        return;
    }

    let long_left = side(mid.position(), lo.position(), hi.position()) < 0.0;
    let long = Edge::between(lo, hi);
    let phases = [
        (y_begin, y_mid, Edge::between(lo, mid)),
        (y_mid, y_end, Edge::between(mid, hi)),
    ];

    for (first, last, short) in phases {
        let Some((first, last)) = clamp_span(first, last, height) else {
            continue;
        };
        for row in first..last {
            let (a, b) = (long.at_row(row), short.at_row(row));
            let (left, right) = if long_left { (a, b) } else { (b, a) };
            emit(RowSpan { row, left, right });
        }
    }
}

/// Shades the covered pixels of one row, advancing the attribute by `d_dx`
/// per pixel.
fn shade_span<A, S, M, F>(
    span: &RowSpan<A>,
    width: i32,
    d_dx: A,
    surface: &mut S,
    mixer: &M,
    mut shade: F,
) where
    A: Interpolant,
    S: Surface + ?Sized,
    M: ColorMixer<S::Color> + ?Sized,
    F: FnMut(A) -> S::Color,
{
    let x_begin = to_pixel_span_point(span.left.x);
    let x_end = to_pixel_span_point(span.right.x);
    let Some((x_begin, x_end)) = clamp_span(x_begin, x_end, width) else {
        return;
    };

    let mut attr = span
        .left
        .attr
        .sum(d_dx.scaled((x_begin as f32 + 0.5) - span.left.x));
    for x in x_begin..x_end {
        let existing = surface.get(x, span.row);
        let incoming = shade(attr);
        surface.set(x, span.row, mixer.mix(existing, incoming));
        attr = attr.sum(d_dx);
    }
}
