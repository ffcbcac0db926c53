//! Plain-text PPM (`P3`) reader and writer.
//!
//! Lines whose first character is `#` are comments. After the `P3` magic come width,
//! height and max value, then one `r g b` triplet per pixel in row-major order. The max
//! value is read but not used for scaling; samples are stored exactly as written.

use std::fmt::Write as _;

use crate::{
    foundation::{
        core::Rgb,
        error::{PhotolabError, PhotolabResult},
    },
    raster::buffer::PixelBuffer,
};

pub const MAGIC: &str = "P3";

pub fn decode_ppm(bytes: &[u8], name: &str) -> PhotolabResult<PixelBuffer> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| PhotolabError::decode(format!("ppm is not valid utf-8: {e}")))?;

    let mut tokens = text
        .lines()
        .filter(|line| !line.starts_with('#'))
        .flat_map(str::split_whitespace);

    match tokens.next() {
        Some(MAGIC) => {}
        Some(other) => {
            return Err(PhotolabError::decode(format!(
                "expected magic '{MAGIC}', found '{other}'"
            )));
        }
        None => return Err(PhotolabError::decode("empty ppm")),
    }

    let width = next_u32(&mut tokens, "width")?;
    let height = next_u32(&mut tokens, "height")?;
    let _max_value = next_i32(&mut tokens, "max value")?;

    let count = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| PhotolabError::decode("ppm size overflow"))?;
    // Each sample needs at least one digit and a separator.
    let mut pixels = Vec::with_capacity(count.min(text.len() / 6));
    for _ in 0..count {
        let r = next_i32(&mut tokens, "red sample")?;
        let g = next_i32(&mut tokens, "green sample")?;
        let b = next_i32(&mut tokens, "blue sample")?;
        pixels.push(Rgb::new(r, g, b));
    }

    PixelBuffer::from_pixels(name, width, height, pixels)
}

pub fn encode_ppm(image: &PixelBuffer) -> Vec<u8> {
    let mut out = String::with_capacity(16 + image.pixels().len() * 12);
    let _ = writeln!(out, "{MAGIC}");
    let _ = writeln!(out, "{} {}", image.width(), image.height());
    let _ = writeln!(out, "255");
    for px in image.pixels() {
        let _ = writeln!(out, "{} {} {}", px.r, px.g, px.b);
    }
    out.into_bytes()
}

fn next_i32<'a>(tokens: &mut impl Iterator<Item = &'a str>, what: &str) -> PhotolabResult<i32> {
    let tok = tokens
        .next()
        .ok_or_else(|| PhotolabError::decode(format!("ppm truncated: missing {what}")))?;
    tok.parse::<i32>()
        .map_err(|_| PhotolabError::decode(format!("ppm {what} is not an integer: '{tok}'")))
}

fn next_u32<'a>(tokens: &mut impl Iterator<Item = &'a str>, what: &str) -> PhotolabResult<u32> {
    let v = next_i32(tokens, what)?;
    u32::try_from(v)
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| PhotolabError::decode(format!("ppm {what} must be > 0, got {v}")))
}

#[cfg(test)]
#[path = "../../tests/unit/codec/ppm.rs"]
mod tests;
