//! PNG and JPEG through the `image` crate. Alpha is dropped on decode.

use std::io::Cursor;

use anyhow::Context;

use crate::{
    foundation::{core::Rgb, error::PhotolabResult},
    raster::buffer::PixelBuffer,
};

pub fn decode_compressed(
    bytes: &[u8],
    format: image::ImageFormat,
    name: &str,
) -> PhotolabResult<PixelBuffer> {
    let dyn_img = image::load_from_memory_with_format(bytes, format)
        .with_context(|| format!("decode {format:?} image from memory"))?;
    let rgb = dyn_img.to_rgb8();
    let (width, height) = rgb.dimensions();
    let pixels = rgb.pixels().map(|p| Rgb::from(p.0)).collect();
    PixelBuffer::from_pixels(name, width, height, pixels)
}

pub fn encode_compressed(
    buffer: &PixelBuffer,
    format: image::ImageFormat,
) -> PhotolabResult<Vec<u8>> {
    let raw: Vec<u8> = buffer.pixels().iter().flat_map(|px| px.to_rgb8()).collect();
    let rgb = image::RgbImage::from_raw(buffer.width(), buffer.height(), raw)
        .context("pixel count does not match image dimensions")?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(rgb)
        .write_to(&mut Cursor::new(&mut buf), format)
        .with_context(|| format!("encode {format:?} image"))?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/codec/compressed.rs"]
mod tests;
