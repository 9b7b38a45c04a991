//! A CPU software rasterizer over caller-supplied pixel surfaces.
//!
//! Draws one-pixel lines (floating-point or 16.16 fixed-point), axis-aligned
//! boxes and lines, flat, affine-textured and perspective-correct triangles,
//! and flood fills. Every primitive follows one sampling rule: pixel `(x, y)`
//! is sampled at its center `(x + 0.5, y + 0.5)` and spans are half-open, so
//! adjacent primitives tile without gaps or double writes.
//!
//! Geometry outside the surface is clipped or culled silently. Pixel writes
//! go through a [`ColorMixer`](render::ColorMixer); textured fills pull colors
//! from a [`TextureSampler`](render::TextureSampler).
//!
//! # Quick Start
//!
//! ```
//! use softraster::prelude::*;
//!
//! let mut canvas = Canvas::new(64, 64, colors::BLACK);
//! let triangle = Triangle2::new(
//!     Vec2::new(4.0, 4.0),
//!     Vec2::new(60.0, 10.0),
//!     Vec2::new(20.0, 58.0),
//! );
//! ScanlineRasterizer::new().fill_triangle(&triangle, colors::RED, &mut canvas, &AssignMixer);
//!
//! let lines = LineDispatcher::new(LineAlgorithm::FixedPoint);
//! lines.draw_triangle_wireframe(&triangle, colors::WHITE, &mut canvas, &AssignMixer);
//!
//! flood_fill(0, 0, colors::BLUE, &mut canvas);
//! ```

pub mod colors;
pub mod error;
pub mod geometry;
pub mod math;
pub mod render;
pub mod texture;

pub use error::{Error, Result};
pub use render::{LineAlgorithm, LineDispatcher, ScanlineRasterizer};
pub use texture::Texture;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use softraster::prelude::*;
/// ```
pub mod prelude {
    // Colors
    pub use crate::colors;

    // Geometry
    pub use crate::geometry::{AlignedBox2, Segment2, Triangle2, Triangle3};
    pub use crate::math::{Point2, Point3, Vec2, Vec3};

    // Surfaces
    pub use crate::render::{Canvas, FrameBuffer, Surface};

    // Policies
    pub use crate::render::{
        AlphaBlendMixer, AssignMixer, ColorMixer, ConstantSampler, TextureSampler,
    };
    pub use crate::texture::Texture;

    // Rasterizers
    pub use crate::render::{
        draw_box, draw_horizontal_line, draw_pixel, draw_textured_box, draw_vertical_line,
        draw_view, flood_fill, FixedSegmentRasterizer, FloatSegmentRasterizer, LineAlgorithm,
        LineDispatcher, ScanlineRasterizer, SegmentRasterizer,
    };
}
