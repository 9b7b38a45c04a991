//! The pixel surface abstraction every rasterizer writes through.

/// An addressable 2D grid of pixels.
///
/// Implementors may assume every `get`/`set` call satisfies
/// `0 <= x < width` and `0 <= y < height`; the rasterizers clip before
/// touching a pixel.
pub trait Surface {
    /// The pixel value type.
    type Color: Copy + PartialEq;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn get(&self, x: i32, y: i32) -> Self::Color;

    fn set(&mut self, x: i32, y: i32, color: Self::Color);

    /// Returns true if `(x, y)` addresses a pixel of this surface.
    #[inline]
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as i64) < self.width() as i64 && (y as i64) < self.height() as i64
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    type Color = S::Color;

    #[inline]
    fn width(&self) -> u32 {
        (**self).width()
    }

    #[inline]
    fn height(&self) -> u32 {
        (**self).height()
    }

    #[inline]
    fn get(&self, x: i32, y: i32) -> Self::Color {
        (**self).get(x, y)
    }

    #[inline]
    fn set(&mut self, x: i32, y: i32, color: Self::Color) {
        (**self).set(x, y, color)
    }
}

/// Width and height as signed loop bounds.
#[inline]
pub(crate) fn extent<S: Surface + ?Sized>(surface: &S) -> (i32, i32) {
    (
        surface.width().min(i32::MAX as u32) as i32,
        surface.height().min(i32::MAX as u32) as i32,
    )
}
