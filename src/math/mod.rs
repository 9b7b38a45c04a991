//! Minimal vector types used as coordinates and interpolated attributes.

pub mod vec2;
pub mod vec3;

pub use vec2::Vec2;
pub use vec3::Vec3;

/// A position in the plane. Same representation as [`Vec2`].
pub type Point2 = Vec2;

/// A position carrying a homogeneous third component. Same representation as [`Vec3`].
pub type Point3 = Vec3;
