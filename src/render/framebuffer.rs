//! Frame buffer abstraction for 2D pixel access.
//!
//! Provides a borrowed, bounds-checked 2D view over a caller-owned pixel slice.

use super::surface::Surface;
use crate::error::{Error, Result};

/// A view into a row-major pixel buffer.
///
/// Wraps a 1D slice with width/height metadata to enable 2D pixel access.
/// This is a borrowed view, not an owning type - it's meant to be created
/// temporarily when you need to pass a buffer + dimensions together.
pub struct FrameBuffer<'a, C> {
    pixels: &'a mut [C],
    width: u32,
    height: u32,
}

impl<'a, C: Copy + PartialEq> FrameBuffer<'a, C> {
    /// Create a new FrameBuffer view from a pixel slice and dimensions.
    ///
    /// # Errors
    /// Returns [`Error::SizeMismatch`] if the slice length is not `width * height`.
    pub fn new(pixels: &'a mut [C], width: u32, height: u32) -> Result<Self> {
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

    /// Wraps a slice whose dimensions were already validated by the owner.
    pub(crate) fn from_parts(pixels: &'a mut [C], width: u32, height: u32) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            pixels,
            width,
            height,
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<C> {
        if self.contains(x, y) {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    /// Set a pixel, silently ignoring out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: C) {
        if self.contains(x, y) {
            let idx = self.index(x, y);
            self.pixels[idx] = color;
        }
    }

    pub fn pixels(&self) -> &[C] {
        self.pixels
    }
}

impl<C: Copy + PartialEq> Surface for FrameBuffer<'_, C> {
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
        self.pixels[self.index(x, y)]
    }

    #[inline]
    fn set(&mut self, x: i32, y: i32, color: C) {
        debug_assert!(self.contains(x, y), "write outside surface: ({x}, {y})");
        let idx = self.index(x, y);
        self.pixels[idx] = color;
    }
}
