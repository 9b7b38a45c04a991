use std::path::Path;

use log::debug;

use crate::colors;
use crate::error::{Error, Result};
use crate::math::Vec2;
use crate::render::shader::TextureSampler;

/// A 2D ARGB texture sampled with nearest-neighbor filtering.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    data: Vec<u32>, // ARGB, row-major, first row at v = 0.
    width: u32,
    height: u32,
}

impl Texture {
    /// Load a texture from an image file (PNG, JPG, etc.)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path)?.to_rgba8();
        let (width, height) = img.dimensions();

        let data: Vec<u32> = img
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                colors::argb(a, r, g, b)
            })
            .collect();

        debug!("loaded {}x{} texture from {}", width, height, path.display());
        Self::from_pixels(width, height, data)
    }

    /// Wraps row-major ARGB pixels.
    ///
    /// # Errors
    /// [`Error::InvalidDimensions`] if either dimension is zero,
    /// [`Error::SizeMismatch`] if `data` does not hold `width * height` pixels.
    pub fn from_pixels(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Sample the texture at UV coordinates using nearest-neighbor filtering.
    ///
    /// Coordinates wrap (repeat) outside `[0, 1)`; `rem_euclid` keeps
    /// negative values wrapping the same way as positive ones.
    #[inline]
    pub fn sample_nearest(&self, uv: Vec2) -> u32 {
        let u = uv.x.rem_euclid(1.0);
        let v = uv.y.rem_euclid(1.0);

        let x = ((u * self.width as f32) as u32).min(self.width - 1);
        let y = ((v * self.height as f32) as u32).min(self.height - 1);

        self.data[y as usize * self.width as usize + x as usize]
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl TextureSampler<u32> for Texture {
    #[inline]
    fn sample(&self, uv: Vec2, _duv_dx: Vec2, _duv_dy: Vec2) -> u32 {
        self.sample_nearest(uv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> Texture {
        let pixels = vec![colors::RED, colors::GREEN, colors::BLUE, colors::WHITE];
        Texture::from_pixels(2, 2, pixels).unwrap()
    }

    #[test]
    fn samples_nearest_texel() {
        let t = checker();
        assert_eq!(t.sample_nearest(Vec2::new(0.25, 0.25)), colors::RED);
        assert_eq!(t.sample_nearest(Vec2::new(0.75, 0.25)), colors::GREEN);
        assert_eq!(t.sample_nearest(Vec2::new(0.25, 0.75)), colors::BLUE);
        assert_eq!(t.sample_nearest(Vec2::new(0.99, 0.99)), colors::WHITE);
    }

    #[test]
    fn coordinates_wrap() {
        let t = checker();
        assert_eq!(t.sample_nearest(Vec2::new(1.25, 0.25)), colors::RED);
        assert_eq!(t.sample_nearest(Vec2::new(-0.25, 0.25)), colors::GREEN);
        assert_eq!(t.sample_nearest(Vec2::new(0.25, -0.25)), colors::BLUE);
    }

    #[test]
    fn from_pixels_validates() {
        assert!(matches!(
            Texture::from_pixels(0, 4, vec![]),
            Err(Error::InvalidDimensions { width: 0, height: 4 })
        ));
        assert!(matches!(
            Texture::from_pixels(2, 2, vec![0; 3]),
            Err(Error::SizeMismatch { expected: 4, actual: 3 })
        ));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(matches!(
            Texture::from_file("does/not/exist.png"),
            Err(Error::TextureLoad(_))
        ));
    }

    #[test]
    fn texture_is_a_sampler() {
        let t = checker();
        let sampled = TextureSampler::sample(&t, Vec2::new(0.75, 0.75), Vec2::ZERO, Vec2::ZERO);
        assert_eq!(sampled, colors::WHITE);
    }
}
