//! Axis-aligned fillers: single pixels, horizontal and vertical lines, boxes,
//! textured boxes and surface blits.
//!
//! All of them use the same half-open sampling rule as the triangle scan
//! converter, so abutting boxes and lines tile without seams.

use log::trace;

use super::clip::{clamp_span, to_pixel_span_point, PixelRect};
use super::shader::{ColorMixer, TextureSampler};
use super::surface::{extent, Surface};
use crate::geometry::AlignedBox2;
use crate::math::{Point2, Vec2};

/// Writes one pixel through `mixer`, ignoring coordinates off the surface.
#[inline]
pub(crate) fn plot<S, M>(x: i32, y: i32, color: S::Color, surface: &mut S, mixer: &M)
where
    S: Surface + ?Sized,
    M: ColorMixer<S::Color> + ?Sized,
{
    if surface.contains(x, y) {
        let existing = surface.get(x, y);
        surface.set(x, y, mixer.mix(existing, color));
    }
}

/// Draws the pixel containing the continuous point `p`.
pub fn draw_pixel<S, M>(p: Point2, color: S::Color, surface: &mut S, mixer: &M)
where
    S: Surface + ?Sized,
    M: ColorMixer<S::Color> + ?Sized,
{
    plot(p.x.floor() as i32, p.y.floor() as i32, color, surface, mixer);
}

/// Fills the pixels of row `floor(y)` whose sample points lie in `[x, x2)`.
pub fn draw_horizontal_line<S, M>(
    x: f32,
    y: f32,
    x2: f32,
    color: S::Color,
    surface: &mut S,
    mixer: &M,
) where
    S: Surface + ?Sized,
    M: ColorMixer<S::Color> + ?Sized,
{
    let (width, height) = extent(surface);
    let row = y.floor() as i32;
    if row < 0 || row >= height {
        return;
    }
    fill_row(row, to_pixel_span_point(x), to_pixel_span_point(x2), width, color, surface, mixer);
}

/// Fills the pixels of column `floor(x)` whose sample points lie in `[y, y2)`.
pub fn draw_vertical_line<S, M>(
    x: f32,
    y: f32,
    y2: f32,
    color: S::Color,
    surface: &mut S,
    mixer: &M,
) where
    S: Surface + ?Sized,
    M: ColorMixer<S::Color> + ?Sized,
{
    let (width, height) = extent(surface);
    let column = x.floor() as i32;
    if column < 0 || column >= width {
        return;
    }
    let rows = clamp_span(to_pixel_span_point(y), to_pixel_span_point(y2), height);
    let Some((y_begin, y_end)) = rows else {
        return;
    };
    for y in y_begin..y_end {
        let existing = surface.get(column, y);
        surface.set(column, y, mixer.mix(existing, color));
    }
}

/// Fills the half-open pixel span `[x_begin, x_end)` of `row`, clamped to `[0, width)`.
///
/// `row` must already be inside the surface.
#[inline]
pub(crate) fn fill_row<S, M>(
    row: i32,
    x_begin: i32,
    x_end: i32,
    width: i32,
    color: S::Color,
    surface: &mut S,
    mixer: &M,
) where
    S: Surface + ?Sized,
    M: ColorMixer<S::Color> + ?Sized,
{
    let Some((x_begin, x_end)) = clamp_span(x_begin, x_end, width) else {
        return;
    };
    for x in x_begin..x_end {
        let existing = surface.get(x, row);
        surface.set(x, row, mixer.mix(existing, color));
    }
}

/// Fills every pixel whose sample point lies inside `bounds`.
pub fn draw_box<S, M>(bounds: &AlignedBox2, color: S::Color, surface: &mut S, mixer: &M)
where
    S: Surface + ?Sized,
    M: ColorMixer<S::Color> + ?Sized,
{
    let (width, height) = extent(surface);
    let Some(rect) = PixelRect::covering(bounds).clip(width, height) else {
        trace!("box {bounds:?} culled");
        return;
    };
    for y in rect.y_min..rect.y_max {
        fill_row(y, rect.x_min, rect.x_max, width, color, surface, mixer);
    }
}

/// Fills `bounds` with a texture, mapping it linearly onto `texture_box`.
///
/// Pass [`AlignedBox2::UNIT`] to map the whole `[0, 1]²` texture space onto
/// the box. Each covered pixel samples the coordinate of its center; the
/// texture-space derivatives are constant across the box.
pub fn draw_textured_box<S, T, M>(
    bounds: &AlignedBox2,
    sampler: &T,
    surface: &mut S,
    texture_box: &AlignedBox2,
    mixer: &M,
) where
    S: Surface + ?Sized,
    T: TextureSampler<S::Color> + ?Sized,
    M: ColorMixer<S::Color> + ?Sized,
{
    let (width, height) = extent(surface);
    let Some(rect) = PixelRect::covering(bounds).clip(width, height) else {
        trace!("textured box {bounds:?} culled");
        return;
    };

    // A box covering at least one pixel has non-zero extent on both axes.
    let scale = texture_box.extent() / bounds.extent();
    let duv_dx = Vec2::new(scale.x, 0.0);
    let duv_dy = Vec2::new(0.0, scale.y);

    let sample_origin = Vec2::new(rect.x_min as f32 + 0.5, rect.y_min as f32 + 0.5);
    let row_start = texture_box.min() + (sample_origin - bounds.min()) * scale;

    let mut uv_row = row_start;
    for y in rect.y_min..rect.y_max {
        let mut uv = uv_row;
        for x in rect.x_min..rect.x_max {
            let existing = surface.get(x, y);
            let incoming = sampler.sample(uv, duv_dx, duv_dy);
            surface.set(x, y, mixer.mix(existing, incoming));
            uv += duv_dx;
        }
        uv_row += duv_dy;
    }
}

/// Copies `source` into `target` with its top-left corner at `position`.
///
/// Only the overlap of the two surfaces is touched.
pub fn draw_view<S, D, M>(source: &S, position: (i32, i32), target: &mut D, mixer: &M)
where
    S: Surface + ?Sized,
    D: Surface<Color = S::Color> + ?Sized,
    M: ColorMixer<S::Color> + ?Sized,
{
    let (source_width, source_height) = extent(source);
    let (target_width, target_height) = extent(target);
    let (left, top) = position;

    let x_range = clamp_span(left, left.saturating_add(source_width), target_width);
    let y_range = clamp_span(top, top.saturating_add(source_height), target_height);
    let (Some((x_begin, x_end)), Some((y_begin, y_end))) = (x_range, y_range) else {
        trace!("view at {position:?} culled");
        return;
    };

    for y in y_begin..y_end {
        for x in x_begin..x_end {
            let incoming = source.get(x - left, y - top);
            let existing = target.get(x, y);
            target.set(x, y, mixer.mix(existing, incoming));
        }
    }
}
