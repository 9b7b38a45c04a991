//! Clipping and the continuous-to-pixel sampling convention.
//!
//! Pixel `(x, y)` covers `[x, x + 1) × [y, y + 1)` and is sampled at its
//! center `(x + 0.5, y + 0.5)`. Every inclusion test in the rasterizers goes
//! through [`to_pixel_span_point`] or `floor`, so adjacent primitives agree on
//! which pixels they own.

use crate::geometry::{AlignedBox2, Segment2};
use crate::math::Vec2;

/// Converts a continuous coordinate to the first pixel whose sample point is
/// not less than it.
///
/// A half-open continuous interval `[a, b)` covers exactly the pixels
/// `[to_pixel_span_point(a), to_pixel_span_point(b))`.
#[inline]
pub fn to_pixel_span_point(t: f32) -> i32 {
    // Saturating float->int cast keeps far-off geometry from wrapping.
    (t - 0.5).ceil() as i32
}

/// Clamps a half-open pixel range to `[0, limit)`.
///
/// Returns `None` when nothing of the range is left.
#[inline]
pub fn clamp_span(begin: i32, end: i32, limit: i32) -> Option<(i32, i32)> {
    let begin = begin.max(0);
    let end = end.min(limit);
    (begin < end).then_some((begin, end))
}

/// Integer pixel rectangle `[x_min, x_max) × [y_min, y_max)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl PixelRect {
    /// The pixels whose sample points fall inside `bounds` (min inclusive, max exclusive).
    pub fn covering(bounds: &AlignedBox2) -> Self {
        Self {
            x_min: to_pixel_span_point(bounds.min().x),
            y_min: to_pixel_span_point(bounds.min().y),
            x_max: to_pixel_span_point(bounds.max().x),
            y_max: to_pixel_span_point(bounds.max().y),
        }
    }

    /// Intersects with `[0, width) × [0, height)`.
    pub fn clip(&self, width: i32, height: i32) -> Option<Self> {
        let (x_min, x_max) = clamp_span(self.x_min, self.x_max, width)?;
        let (y_min, y_max) = clamp_span(self.y_min, self.y_max, height)?;
        Some(Self {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    pub fn width(&self) -> i32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> i32 {
        self.y_max - self.y_min
    }
}

/// Clips a segment to the closed box `[0, width] × [0, height]`
/// (Liang-Barsky).
///
/// Endpoints that lie inside the box are returned bit-for-bit unchanged, so
/// decision variables computed from the clipped segment match the unclipped
/// one. Returns `None` if the segment misses the box.
pub fn clip_segment(segment: &Segment2, width: f32, height: f32) -> Option<Segment2> {
    let start = segment.start;
    let delta = segment.delta();

    let mut t_enter = 0.0f32;
    let mut t_exit = 1.0f32;

    // Each boundary as (p, q): the segment is inside where p * t <= q.
    let boundaries = [
        (-delta.x, start.x),
        (delta.x, width - start.x),
        (-delta.y, start.y),
        (delta.y, height - start.y),
    ];

    for (p, q) in boundaries {
        if p == 0.0 {
            if q < 0.0 {
                // Parallel to this boundary and outside it.
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            t_enter = t_enter.max(t);
        } else {
            t_exit = t_exit.min(t);
        }
        if t_enter > t_exit {
            return None;
        }
    }

    let clipped_start = if t_enter > 0.0 {
        clamp_point(segment.at(t_enter), width, height)
    } else {
        start
    };
    let clipped_end = if t_exit < 1.0 {
        clamp_point(segment.at(t_exit), width, height)
    } else {
        segment.end
    };
    Some(Segment2::new(clipped_start, clipped_end))
}

/// Snaps a computed intersection back onto the box against rounding drift.
fn clamp_point(p: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(p.x.clamp(0.0, width), p.y.clamp(0.0, height))
}
