//! Pixel surfaces, per-pixel policies and the rasterizers that write through
//! them.

pub mod canvas;
pub mod clip;
pub mod fill;
pub mod flood;
pub mod framebuffer;
pub mod rasterizer;
pub mod shader;
pub mod surface;

pub use canvas::Canvas;
pub use clip::{clip_segment, to_pixel_span_point, PixelRect};
pub use fill::{
    draw_box, draw_horizontal_line, draw_pixel, draw_textured_box, draw_vertical_line, draw_view,
};
pub use flood::flood_fill;
pub use framebuffer::FrameBuffer;
pub use rasterizer::{
    FixedSegmentRasterizer, FloatSegmentRasterizer, Interpolant, LineAlgorithm, LineDispatcher,
    ScanlineRasterizer, SegmentRasterizer,
};
pub use shader::{AlphaBlendMixer, AssignMixer, ColorMixer, ConstantSampler, TextureSampler};
pub use surface::Surface;
