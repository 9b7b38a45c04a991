//! Error types for surface and texture construction.
//!
//! Drawing calls never return errors: geometry outside the surface is clipped
//! or culled, and malformed draw arguments are precondition violations that
//! panic.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A surface or texture was given a zero width or height where pixels are required.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel storage does not match `width * height`.
    #[error("size mismatch: expected {expected} pixels, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A texture image could not be opened or decoded.
    #[error("failed to load texture: {0}")]
    TextureLoad(#[from] image::ImageError),
}
