//! An owned pixel buffer implementing [`Surface`].

use super::framebuffer::FrameBuffer;
use super::surface::Surface;
use crate::error::{Error, Result};

/// Owns a row-major pixel buffer.
///
/// Use [`Canvas::frame_buffer`] to hand a borrowed view to code that works
/// with [`FrameBuffer`], or pass the canvas itself to any rasterizer.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas<C> {
    pixels: Vec<C>,
    width: u32,
    height: u32,
}

impl<C: Copy + PartialEq> Canvas<C> {
    /// Creates a `width` x `height` canvas filled with `fill`.
    pub fn new(width: u32, height: u32, fill: C) -> Self {
        let size = width as usize * height as usize;
        Self {
            pixels: vec![fill; size],
            width,
            height,
        }
    }

    /// Wraps existing pixels.
    ///
    /// # Errors
    /// Returns [`Error::SizeMismatch`] if `pixels.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, pixels: Vec<C>) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimensions { width, height })?;
        if pixels.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Reallocates the canvas, discarding its contents.
    pub fn resize(&mut self, width: u32, height: u32, fill: C) {
        self.pixels = vec![fill; width as usize * height as usize];
        self.width = width;
        self.height = height;
    }

    pub fn clear(&mut self, color: C) {
        self.pixels.fill(color);
    }

    pub fn pixels(&self) -> &[C] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<C> {
        self.pixels
    }

    pub fn frame_buffer(&mut self) -> FrameBuffer<'_, C> {
        FrameBuffer::from_parts(&mut self.pixels, self.width, self.height)
    }

    /// Iterates over `(x, y, color)` for every pixel, row by row.
    pub fn enumerate(&self) -> impl Iterator<Item = (i32, i32, C)> + '_ {
        let width = self.width.max(1) as usize;
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, &c)| ((i % width) as i32, (i / width) as i32, c))
    }
}

impl<C: Copy + PartialEq> Surface for Canvas<C> {
    type Color = C;

    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn get(&self, x: i32, y: i32) -> C {
        debug_assert!(self.contains(x, y), "read outside surface: ({x}, {y})");
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    #[inline]
    fn set(&mut self, x: i32, y: i32, color: C) {
        debug_assert!(self.contains(x, y), "write outside surface: ({x}, {y})");
        self.pixels[y as usize * self.width as usize + x as usize] = color;
    }
}
