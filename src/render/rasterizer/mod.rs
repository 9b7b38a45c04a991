//! Line and triangle rasterization algorithms.
//!
//! Lines have two interchangeable implementations that can be swapped at
//! runtime through [`LineDispatcher`]:
//! - [`FloatSegmentRasterizer`]: floating-point decision variable
//! - [`FixedSegmentRasterizer`]: 16.16 fixed-point decision variable
//!
//! Triangles go through [`ScanlineRasterizer`], which handles flat,
//! affine-textured and perspective-correct fills.

mod incremental;
mod line;
mod scanline;

pub use incremental::Interpolant;
pub use line::{FixedSegmentRasterizer, FloatSegmentRasterizer, FIXED_SHIFT};
pub use scanline::ScanlineRasterizer;

use crate::geometry::{Segment2, Triangle2};
use crate::render::shader::ColorMixer;
use crate::render::surface::Surface;

/// Trait for line rasterization algorithms.
///
/// Implementors clip the segment to the surface and write one pixel per
/// major-axis step through the mixer.
pub trait SegmentRasterizer {
    /// Draw a one-pixel-wide line.
    ///
    /// # Arguments
    /// * `segment` - Endpoints in continuous pixel coordinates
    /// * `color` - The color handed to the mixer for every pixel
    /// * `surface` - The surface to draw into
    /// * `mixer` - Combines the existing pixel with `color`
    fn draw_segment<S, M>(&self, segment: &Segment2, color: S::Color, surface: &mut S, mixer: &M)
    where
        S: Surface + ?Sized,
        M: ColorMixer<S::Color> + ?Sized;

    /// Draw the three edges of a triangle.
    ///
    /// Corners are shared by two edges, so the mixer sees them twice.
    fn draw_triangle_wireframe<S, M>(
        &self,
        triangle: &Triangle2,
        color: S::Color,
        surface: &mut S,
        mixer: &M,
    ) where
        S: Surface + ?Sized,
        M: ColorMixer<S::Color> + ?Sized,
    {
        let [a, b, c] = triangle.points;
        for edge in [Segment2::new(a, b), Segment2::new(b, c), Segment2::new(c, a)] {
            self.draw_segment(&edge, color, surface, mixer);
        }
    }
}

/// Available line algorithms.
///
/// Both produce identical pixels; the choice only affects the arithmetic
/// used in the inner loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineAlgorithm {
    /// Decision variable kept in floating point.
    #[default]
    FloatingPoint,
    /// Decision variable kept in 16.16 fixed point.
    FixedPoint,
}

impl std::fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineAlgorithm::FloatingPoint => write!(f, "FloatingPoint"),
            LineAlgorithm::FixedPoint => write!(f, "FixedPoint"),
        }
    }
}

/// Holds both line implementations and forwards to the active one.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineDispatcher {
    float: FloatSegmentRasterizer,
    fixed: FixedSegmentRasterizer,
    active: LineAlgorithm,
}

impl LineDispatcher {
    pub fn new(algorithm: LineAlgorithm) -> Self {
        Self {
            float: FloatSegmentRasterizer::new(),
            fixed: FixedSegmentRasterizer::new(),
            active: algorithm,
        }
    }

    pub fn set_algorithm(&mut self, algorithm: LineAlgorithm) {
        self.active = algorithm;
    }

    pub fn algorithm(&self) -> LineAlgorithm {
        self.active
    }
}

impl SegmentRasterizer for LineDispatcher {
    #[inline]
    fn draw_segment<S, M>(&self, segment: &Segment2, color: S::Color, surface: &mut S, mixer: &M)
    where
        S: Surface + ?Sized,
        M: ColorMixer<S::Color> + ?Sized,
    {
        match self.active {
            LineAlgorithm::FloatingPoint => self.float.draw_segment(segment, color, surface, mixer),
            LineAlgorithm::FixedPoint => self.fixed.draw_segment(segment, color, surface, mixer),
        }
    }
}
