//! Neighborhood filters.
//!
//! Kernel taps that land outside the image are dropped from the weighted sum and the
//! remaining weights are not renormalized, so border pixels come out darker than
//! interior pixels of the same color. Each channel is truncated toward zero and then
//! clamped into `[0, 255]`.

use crate::{
    foundation::core::{Rgb, clamp_channel_f64},
    raster::buffer::PixelBuffer,
};

/// Square `N x N` kernel, indexed `[row][col]` = `[dy][dx]`, centered on the target pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kernel<const N: usize> {
    pub weights: [[f64; N]; N],
}

impl<const N: usize> Kernel<N> {
    pub const fn new(weights: [[f64; N]; N]) -> Self {
        assert!(N % 2 == 1, "kernel size must be odd");
        Self { weights }
    }

    pub const fn radius(&self) -> usize {
        N / 2
    }
}

const E: f64 = 1.0 / 16.0;
const Q: f64 = 1.0 / 8.0;
const C: f64 = 1.0 / 4.0;

/// 3x3 Gaussian-like blur kernel.
pub const BLUR_KERNEL: Kernel<3> = Kernel::new([[E, Q, E], [Q, C, Q], [E, Q, E]]);

const N8: f64 = -1.0 / 8.0;

/// 5x5 sharpen kernel: center 1, inner ring 1/4, outer ring -1/8.
pub const SHARPEN_KERNEL: Kernel<5> = Kernel::new([
    [N8, N8, N8, N8, N8],
    [N8, C, C, C, N8],
    [N8, C, 1.0, C, N8],
    [N8, C, C, C, N8],
    [N8, N8, N8, N8, N8],
]);

/// Convolve each channel independently with `kernel`.
pub fn convolve<const N: usize>(image: &PixelBuffer, kernel: &Kernel<N>) -> PixelBuffer {
    let r = kernel.radius() as i64;
    let w = i64::from(image.width());
    let h = i64::from(image.height());

    image.derive(|x, y| {
        let mut acc = [0.0f64; 3];
        for (row, weights) in kernel.weights.iter().enumerate() {
            let sy = i64::from(y) + row as i64 - r;
            if sy < 0 || sy >= h {
                continue;
            }
            for (col, &k) in weights.iter().enumerate() {
                let sx = i64::from(x) + col as i64 - r;
                if sx < 0 || sx >= w {
                    continue;
                }
                let px = image.get(sx as u32, sy as u32);
                acc[0] += f64::from(px.r) * k;
                acc[1] += f64::from(px.g) * k;
                acc[2] += f64::from(px.b) * k;
            }
        }
        Rgb::new(
            clamp_channel_f64(acc[0]),
            clamp_channel_f64(acc[1]),
            clamp_channel_f64(acc[2]),
        )
    })
}

pub fn blur(image: &PixelBuffer) -> PixelBuffer {
    convolve(image, &BLUR_KERNEL)
}

pub fn sharpen(image: &PixelBuffer) -> PixelBuffer {
    convolve(image, &SHARPEN_KERNEL)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/convolve.rs"]
mod tests;
