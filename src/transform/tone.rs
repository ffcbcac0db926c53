//! Per-pixel tone adjustments.

use crate::{
    foundation::core::{Rgb, clamp_channel, clamp_channel_f64},
    raster::buffer::PixelBuffer,
};

/// Row-major sepia matrix applied to `(r, g, b)`.
pub const SEPIA_MATRIX: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Add `delta` to every channel, clamping into `[0, 255]`. Negative `delta` darkens.
pub fn brighten(delta: i32, image: &PixelBuffer) -> PixelBuffer {
    image.map_pixels(|px| px.map(|c| clamp_channel(c.saturating_add(delta))))
}

/// Classic sepia tone. Each output channel is truncated toward zero and capped at 255.
pub fn sepia(image: &PixelBuffer) -> PixelBuffer {
    image.map_pixels(|px| {
        let src = [f64::from(px.r), f64::from(px.g), f64::from(px.b)];
        let row = |m: &[f64; 3]| clamp_channel_f64(m[0] * src[0] + m[1] * src[1] + m[2] * src[2]);
        Rgb::new(
            row(&SEPIA_MATRIX[0]),
            row(&SEPIA_MATRIX[1]),
            row(&SEPIA_MATRIX[2]),
        )
    })
}

#[cfg(test)]
#[path = "../../tests/unit/transform/tone.rs"]
mod tests;
