//! Per-pixel strategy objects: color mixers and texture samplers.
//!
//! The rasterizers decide *which* pixels are written. These traits decide
//! *what* is written:
//!
//! - [`ColorMixer`] combines the color already on the surface with the
//!   incoming color (replace, blend, accumulate, ...).
//! - [`TextureSampler`] produces the incoming color for textured fills from
//!   a texture coordinate and its screen-space derivatives.
//!
//! Both are plain values passed by reference for the duration of a draw call.
//! Closures implement both traits, so ad-hoc policies need no new type.

use crate::colors;
use crate::math::Vec2;

/// Combines an existing pixel value with an incoming one.
pub trait ColorMixer<C> {
    /// Returns the value to store given the current and incoming colors.
    fn mix(&self, existing: C, incoming: C) -> C;
}

/// The default mixer: the incoming color replaces the existing one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AssignMixer;

impl<C> ColorMixer<C> for AssignMixer {
    #[inline]
    fn mix(&self, _existing: C, incoming: C) -> C {
        incoming
    }
}

/// Source-over alpha blending of packed ARGB colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlphaBlendMixer;

impl ColorMixer<u32> for AlphaBlendMixer {
    #[inline]
    fn mix(&self, existing: u32, incoming: u32) -> u32 {
        colors::blend_over(existing, incoming)
    }
}

impl<C, F> ColorMixer<C> for F
where
    F: Fn(C, C) -> C,
{
    #[inline]
    fn mix(&self, existing: C, incoming: C) -> C {
        self(existing, incoming)
    }
}

/// Produces a color for a texture coordinate.
///
/// `duv_dx` and `duv_dy` are the rates of change of the texture coordinate
/// per pixel step along screen x and y. Filtering samplers use them to pick a
/// footprint; nearest-neighbor samplers may ignore them.
pub trait TextureSampler<C> {
    fn sample(&self, uv: Vec2, duv_dx: Vec2, duv_dy: Vec2) -> C;
}

/// Returns the same color everywhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantSampler<C> {
    color: C,
}

impl<C: Copy> ConstantSampler<C> {
    pub fn new(color: C) -> Self {
        Self { color }
    }
}

impl<C: Copy> TextureSampler<C> for ConstantSampler<C> {
    #[inline]
    fn sample(&self, _uv: Vec2, _duv_dx: Vec2, _duv_dy: Vec2) -> C {
        self.color
    }
}

impl<C, F> TextureSampler<C> for F
where
    F: Fn(Vec2, Vec2, Vec2) -> C,
{
    #[inline]
    fn sample(&self, uv: Vec2, duv_dx: Vec2, duv_dy: Vec2) -> C {
        self(uv, duv_dx, duv_dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_mixer_replaces() {
        assert_eq!(AssignMixer.mix(3u8, 9u8), 9);
    }

    #[test]
    fn closures_are_mixers() {
        let add = |a: u8, b: u8| a.saturating_add(b);
        assert_eq!(add.mix(250, 10), 255);
    }

    #[test]
    fn alpha_blend_mixer_uses_source_alpha() {
        assert_eq!(AlphaBlendMixer.mix(colors::BLUE, colors::RED), colors::RED);
        assert_eq!(
            AlphaBlendMixer.mix(colors::BLUE, colors::TRANSPARENT),
            colors::BLUE
        );
    }

    #[test]
    fn closures_are_samplers() {
        let u_only = |uv: Vec2, _dx: Vec2, _dy: Vec2| uv.x;
        assert_eq!(u_only.sample(Vec2::new(0.25, 0.75), Vec2::ZERO, Vec2::ZERO), 0.25);
        assert_eq!(
            ConstantSampler::new(4u8).sample(Vec2::ONE, Vec2::ZERO, Vec2::ZERO),
            4
        );
    }
}
