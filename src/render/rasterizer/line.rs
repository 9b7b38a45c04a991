//! Octant-based incremental line rasterization.
//!
//! Endpoints may be fractional. The segment is clipped to the surface first,
//! then traced one pixel per step along its major axis. A decision variable
//! proportional to the signed distance between the ideal line and the
//! candidate sample points selects when to step the minor axis, so the loop
//! itself only adds precomputed constants.
//!
//! Two tracers share the setup: [`FloatSegmentRasterizer`] keeps the decision
//! variable in floating point, [`FixedSegmentRasterizer`] in 16.16 fixed
//! point. Both choose the same pixels.

use std::ops::AddAssign;

use log::trace;

use super::SegmentRasterizer;
use crate::geometry::Segment2;
use crate::render::clip::clip_segment;
use crate::render::fill::plot;
use crate::render::shader::ColorMixer;
use crate::render::surface::Surface;

/// Fractional bits of the fixed-point decision variable.
pub const FIXED_SHIFT: u32 = 16;
const FIXED_ONE: f64 = (1u32 << FIXED_SHIFT) as f64;

/// Everything the tracer needs, derived once per segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct LineSetup {
    /// Octant index 0..8, counter-clockwise from the positive x axis in a
    /// y-up frame.
    pub octant: u8,
    pub x: i32,
    pub y: i32,
    pub steps: i32,
    pub x_major: bool,
    pub major_step: i32,
    pub minor_step: i32,
    /// Whether the minor axis advances on `s >= 0` (otherwise on `s < 0`).
    pub minor_on_non_negative: bool,
    /// Initial decision value.
    pub s: f64,
    /// Added to `s` when only the major axis advances.
    pub major_increment: f64,
    /// Added to `s` when both axes advance.
    pub diagonal_increment: f64,
}

impl LineSetup {
    pub fn new(segment: &Segment2) -> Self {
        let (xs, ys) = (segment.start.x as f64, segment.start.y as f64);
        let (xe, ye) = (segment.end.x as f64, segment.end.y as f64);
        let (dx, dy) = (xe - xs, ye - ys);

        let x = xs.floor() as i32;
        let y = ys.floor() as i32;
        let x_span = (xe.floor() as i64 - x as i64).abs();
        let y_span = (ye.floor() as i64 - y as i64).abs();
        let steps = (x_span.max(y_span) + 1).min(i32::MAX as i64) as i32;

        let x_major = dx.abs() >= dy.abs();
        let x_sign = if dx >= 0.0 { 1 } else { -1 };
        let y_sign = if dy >= 0.0 { 1 } else { -1 };

        // Offsets of the first sample point from the start, and the deltas,
        // expressed along the major and minor axes.
        let (major_offset, minor_offset) = ((x as f64 + 0.5) - xs, (y as f64 + 0.5) - ys);
        let (major_offset, minor_offset, major_delta, minor_delta, major_step, minor_step) =
            if x_major {
                (major_offset, minor_offset, dx, dy, x_sign, y_sign)
            } else {
                (minor_offset, major_offset, dy, dx, y_sign, x_sign)
            };

        let base = 2.0 * minor_offset * major_delta - 2.0 * major_offset * minor_delta;
        let major_increment = -2.0 * major_step as f64 * minor_delta;
        let diagonal_increment = major_increment + 2.0 * minor_step as f64 * major_delta;
        let s = base + major_increment + minor_step as f64 * major_delta;

        let octant = match (x_major, x_sign > 0, y_sign > 0) {
            (true, true, true) => 0,
            (false, true, true) => 1,
            (false, false, true) => 2,
            (true, false, true) => 3,
            (true, false, false) => 4,
            (false, false, false) => 5,
            (false, true, false) => 6,
            (true, true, false) => 7,
        };

        Self {
            octant,
            x,
            y,
            steps,
            x_major,
            major_step,
            minor_step,
            minor_on_non_negative: major_step != minor_step,
            s,
            major_increment,
            diagonal_increment,
        }
    }

    /// Walks the pixels of the line, calling `visit` once per step.
    ///
    /// `s`, `major_increment` and `diagonal_increment` are the decision
    /// variable and its increments in the tracer's number format.
    fn trace<D, F>(&self, mut s: D, major_increment: D, diagonal_increment: D, mut visit: F)
    where
        D: Copy + Default + PartialOrd + AddAssign,
        F: FnMut(i32, i32),
    {
        let zero = D::default();
        let (mut major, mut minor) = if self.x_major {
            (self.x, self.y)
        } else {
            (self.y, self.x)
        };

        for _ in 0..self.steps {
            if self.x_major {
                visit(major, minor);
            } else {
                visit(minor, major);
            }

            major += self.major_step;
            let step_minor = if self.minor_on_non_negative {
                s >= zero
            } else {
                s < zero
            };
            if step_minor {
                minor += self.minor_step;
                s += diagonal_increment;
            } else {
                s += major_increment;
            }
        }
    }

    pub fn trace_float<F: FnMut(i32, i32)>(&self, visit: F) {
        self.trace(self.s, self.major_increment, self.diagonal_increment, visit);
    }

    pub fn trace_fixed<F: FnMut(i32, i32)>(&self, visit: F) {
        self.trace(
            to_fixed(self.s),
            to_fixed(self.major_increment),
            to_fixed(self.diagonal_increment),
            visit,
        );
    }
}

/// Truncating conversion to 16.16 fixed point.
#[inline]
fn to_fixed(value: f64) -> i64 {
    (value * FIXED_ONE) as i64
}

/// Clips `segment` against the surface and builds its setup.
fn prepare<S: Surface + ?Sized>(segment: &Segment2, surface: &S) -> Option<LineSetup> {
    let clipped = clip_segment(segment, surface.width() as f32, surface.height() as f32);
    let Some(clipped) = clipped else {
        trace!("segment {segment:?} culled");
        return None;
    };
    let setup = LineSetup::new(&clipped);
    trace!("segment {clipped:?}: octant {}, {} steps", setup.octant, setup.steps);
    Some(setup)
}

/// Line rasterizer with a floating-point decision variable.
#[derive(Clone, Copy, Debug, Default)]
pub struct FloatSegmentRasterizer;

impl FloatSegmentRasterizer {
    pub fn new() -> Self {
        Self
    }
}

impl SegmentRasterizer for FloatSegmentRasterizer {
    fn draw_segment<S, M>(&self, segment: &Segment2, color: S::Color, surface: &mut S, mixer: &M)
    where
        S: Surface + ?Sized,
        M: ColorMixer<S::Color> + ?Sized,
    {
        if let Some(setup) = prepare(segment, surface) {
            setup.trace_float(|x, y| plot(x, y, color, surface, mixer));
        }
    }
}

/// Line rasterizer with a 16.16 fixed-point decision variable.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedSegmentRasterizer;

impl FixedSegmentRasterizer {
    pub fn new() -> Self {
        Self
    }
}

impl SegmentRasterizer for FixedSegmentRasterizer {
    fn draw_segment<S, M>(&self, segment: &Segment2, color: S::Color, surface: &mut S, mixer: &M)
    where
        S: Surface + ?Sized,
        M: ColorMixer<S::Color> + ?Sized,
    {
        if let Some(setup) = prepare(segment, surface) {
            setup.trace_fixed(|x, y| plot(x, y, color, surface, mixer));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;
    use crate::render::canvas::Canvas;
    use crate::render::shader::AssignMixer;
    use proptest::prelude::*;

    fn segment(x0: f32, y0: f32, x1: f32, y1: f32) -> Segment2 {
        Segment2::new(Vec2::new(x0, y0), Vec2::new(x1, y1))
    }

    fn float_pixels(s: &Segment2) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        LineSetup::new(s).trace_float(|x, y| out.push((x, y)));
        out
    }

    fn fixed_pixels(s: &Segment2) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        LineSetup::new(s).trace_fixed(|x, y| out.push((x, y)));
        out
    }

    fn painted(canvas: &Canvas<u8>) -> Vec<(i32, i32)> {
        canvas
            .enumerate()
            .filter(|&(_, _, c)| c != 0)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn horizontal_segment_between_centers() {
        let mut canvas = Canvas::new(10, 10, 0u8);
        FloatSegmentRasterizer.draw_segment(
            &segment(0.5, 0.5, 3.5, 0.5),
            1,
            &mut canvas,
            &AssignMixer,
        );
        assert_eq!(painted(&canvas), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    }

    #[test]
    fn every_octant_is_classified() {
        let cases = [
            (segment(0.5, 0.5, 8.5, 2.5), 0),
            (segment(0.5, 0.5, 2.5, 8.5), 1),
            (segment(8.5, 0.5, 6.5, 8.5), 2),
            (segment(8.5, 0.5, 0.5, 2.5), 3),
            (segment(8.5, 8.5, 0.5, 6.5), 4),
            (segment(8.5, 8.5, 6.5, 0.5), 5),
            (segment(0.5, 8.5, 2.5, 0.5), 6),
            (segment(0.5, 8.5, 8.5, 6.5), 7),
        ];
        for (s, octant) in cases {
            assert_eq!(LineSetup::new(&s).octant, octant, "{s:?}");
        }
    }

    #[test]
    fn diagonal_steps_both_axes() {
        assert_eq!(
            float_pixels(&segment(0.5, 0.5, 3.5, 3.5)),
            vec![(0, 0), (1, 1), (2, 2), (3, 3)]
        );
        assert_eq!(
            float_pixels(&segment(3.5, 0.5, 0.5, 3.5)),
            vec![(3, 0), (2, 1), (1, 2), (0, 3)]
        );
    }

    #[test]
    fn shallow_line_follows_the_ideal_line() {
        // y = 0.5 + x / 4 through pixel centers; ties at row boundaries stay low.
        assert_eq!(
            float_pixels(&segment(0.5, 0.5, 8.5, 2.5)),
            vec![(0, 0), (1, 0), (2, 0), (3, 1), (4, 1), (5, 1), (6, 1), (7, 2), (8, 2)]
        );
    }

    #[test]
    fn fractional_endpoints_start_in_the_containing_pixel() {
        assert_eq!(
            float_pixels(&segment(0.3, 1.7, 8.9, 4.1)),
            vec![(0, 1), (1, 2), (2, 2), (3, 2), (4, 2), (5, 3), (6, 3), (7, 3), (8, 3)]
        );
    }

    #[test]
    fn zero_length_segment_draws_one_pixel() {
        let mut canvas = Canvas::new(4, 4, 0u8);
        let p = segment(2.3, 1.7, 2.3, 1.7);
        FloatSegmentRasterizer.draw_segment(&p, 1, &mut canvas, &AssignMixer);
        assert_eq!(painted(&canvas), vec![(2, 1)]);

        let mut off = Canvas::new(4, 4, 0u8);
        FixedSegmentRasterizer.draw_segment(
            &segment(5.0, 1.0, 5.0, 1.0),
            1,
            &mut off,
            &AssignMixer,
        );
        assert!(painted(&off).is_empty());
    }

    #[test]
    fn segment_crossing_the_surface_is_clipped() {
        let mut canvas = Canvas::new(4, 4, 0u8);
        FloatSegmentRasterizer.draw_segment(
            &segment(-10.5, 1.5, 20.5, 1.5),
            1,
            &mut canvas,
            &AssignMixer,
        );
        assert_eq!(painted(&canvas), vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn segment_outside_writes_nothing() {
        let mut canvas = Canvas::new(4, 4, 0u8);
        let no_writes = |_: u8, _: u8| -> u8 { panic!("unexpected write") };
        FloatSegmentRasterizer.draw_segment(
            &segment(-3.0, -3.0, -1.0, 8.0),
            1,
            &mut canvas,
            &no_writes,
        );
        FixedSegmentRasterizer.draw_segment(
            &segment(0.0, 5.0, 4.0, 9.0),
            1,
            &mut canvas,
            &no_writes,
        );
    }

    #[test]
    fn fixed_point_matches_float_on_fractional_endpoints() {
        let cases = [
            segment(0.3, 1.7, 8.9, 4.1),
            segment(7.25, 0.6, 1.1, 9.4),
            segment(9.9, 9.9, 0.1, 0.2),
            segment(4.5, 0.1, 4.6, 9.8),
        ];
        for s in cases {
            assert_eq!(float_pixels(&s), fixed_pixels(&s), "{s:?}");
        }
    }

    fn grid_coordinate() -> impl Strategy<Value = f32> {
        // Sixteenths keep every intermediate exactly representable.
        (0i32..=40 * 16).prop_map(|v| v as f32 / 16.0)
    }

    proptest! {
        #[test]
        fn fixed_and_float_choose_identical_pixels(
            x0 in grid_coordinate(), y0 in grid_coordinate(),
            x1 in grid_coordinate(), y1 in grid_coordinate()
        ) {
            let s = segment(x0, y0, x1, y1);
            prop_assert_eq!(float_pixels(&s), fixed_pixels(&s));
        }

        #[test]
        fn center_to_center_lines_are_connected(
            x0 in 0i32..32, y0 in 0i32..32, x1 in 0i32..32, y1 in 0i32..32
        ) {
            let s = segment(x0 as f32 + 0.5, y0 as f32 + 0.5, x1 as f32 + 0.5, y1 as f32 + 0.5);
            let pixels = float_pixels(&s);

            let expected = (x1 - x0).abs().max((y1 - y0).abs()) + 1;
            prop_assert_eq!(pixels.len() as i32, expected);
            prop_assert_eq!(pixels.first().copied(), Some((x0, y0)));
            prop_assert_eq!(pixels.last().copied(), Some((x1, y1)));

            let x_major = (x1 - x0).abs() >= (y1 - y0).abs();
            for pair in pixels.windows(2) {
                let (ddx, ddy) = ((pair[1].0 - pair[0].0).abs(), (pair[1].1 - pair[0].1).abs());
                let (major, minor) = if x_major { (ddx, ddy) } else { (ddy, ddx) };
                prop_assert_eq!(major, 1);
                prop_assert!(minor <= 1);
            }
        }
    }
}
