use crate::foundation::{
    core::Rgb,
    error::{PhotolabError, PhotolabResult},
};

/// Fixed-size 2-D grid of 3-channel pixels.
///
/// `name` is informational only; the lookup key lives in [`crate::ImageStore`].
/// Width and height never change after construction. Pixels are addressed as `(x, y)`
/// and stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    name: String,
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// Create a black buffer of exactly `width x height`. Both must be > 0.
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> PhotolabResult<Self> {
        let len = checked_len(width, height)?;
        Ok(Self {
            name: name.into(),
            width,
            height,
            pixels: vec![Rgb::BLACK; len],
        })
    }

    /// Create a buffer whose every pixel is produced by `f(x, y)`.
    ///
    /// Transforms build their outputs this way so a buffer is never observed half-written.
    pub fn from_fn(
        name: impl Into<String>,
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> Rgb,
    ) -> PhotolabResult<Self> {
        let len = checked_len(width, height)?;
        let mut pixels = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Ok(Self {
            name: name.into(),
            width,
            height,
            pixels,
        })
    }

    /// Build from row-major pixels. `pixels.len()` must equal `width * height`.
    pub fn from_pixels(
        name: impl Into<String>,
        width: u32,
        height: u32,
        pixels: Vec<Rgb>,
    ) -> PhotolabResult<Self> {
        let len = checked_len(width, height)?;
        if pixels.len() != len {
            return Err(PhotolabError::invalid_argument(format!(
                "expected {len} pixels for {width}x{height}, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            name: name.into(),
            width,
            height,
            pixels,
        })
    }

    /// New buffer with this buffer's name and dimensions, populated by `f(x, y)`.
    pub fn derive(&self, mut f: impl FnMut(u32, u32) -> Rgb) -> Self {
        let mut pixels = Vec::with_capacity(self.pixels.len());
        for y in 0..self.height {
            for x in 0..self.width {
                pixels.push(f(x, y));
            }
        }
        Self {
            name: self.name.clone(),
            width: self.width,
            height: self.height,
            pixels,
        }
    }

    /// New buffer with every pixel passed through `f`.
    pub fn map_pixels(&self, f: impl FnMut(Rgb) -> Rgb) -> Self {
        Self {
            name: self.name.clone(),
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().copied().map(f).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Same pixels under a different informational name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the buffer. Callers derive coordinates from
    /// the buffer's own dimensions, so this only fires on a programming error.
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.pixels[self.index(x, y)]
    }

    /// Pixel at `(x, y)`, or `None` when out of range.
    pub fn try_get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.offset(x, y)])
        } else {
            None
        }
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the buffer.
    pub fn set(&mut self, x: u32, y: u32, px: Rgb) {
        let i = self.index(x, y);
        self.pixels[i] = px;
    }

    /// Row-major pixel slice.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of range for {}x{} buffer",
            self.width,
            self.height
        );
        self.offset(x, y)
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

fn checked_len(width: u32, height: u32) -> PhotolabResult<usize> {
    if width == 0 || height == 0 {
        return Err(PhotolabError::invalid_argument(format!(
            "image dimensions must be > 0, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| PhotolabError::invalid_argument("image size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/buffer.rs"]
mod tests;
