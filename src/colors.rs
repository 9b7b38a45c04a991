//! Packed ARGB color helpers.
//!
//! Colors are stored as `0xAARRGGBB` in a `u32`, the same layout the
//! [`Texture`](crate::texture::Texture) loader produces.

pub const TRANSPARENT: u32 = 0x0000_0000;
pub const BLACK: u32 = 0xFF00_0000;
pub const WHITE: u32 = 0xFFFF_FFFF;
pub const RED: u32 = 0xFFFF_0000;
pub const GREEN: u32 = 0xFF00_FF00;
pub const BLUE: u32 = 0xFF00_00FF;

/// Packs 8-bit channels into ARGB.
#[inline]
pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Splits an ARGB color into `[a, r, g, b]`.
#[inline]
pub const fn channels(color: u32) -> [u8; 4] {
    [
        (color >> 24) as u8,
        (color >> 16) as u8,
        (color >> 8) as u8,
        color as u8,
    ]
}

/// Source-over blend of `src` onto `dst` using the source alpha.
///
/// The result keeps the larger of the two alphas.
#[inline]
pub fn blend_over(dst: u32, src: u32) -> u32 {
    let [sa, sr, sg, sb] = channels(src);
    let [da, dr, dg, db] = channels(dst);
    let alpha = sa as u32;
    let mix = |s: u8, d: u8| -> u8 {
        let v = s as u32 * alpha + d as u32 * (255 - alpha);
        // Rounded division by 255.
        ((v + 127) / 255) as u8
    };
    argb(sa.max(da), mix(sr, dr), mix(sg, dg), mix(sb, db))
}
