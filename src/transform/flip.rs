use crate::{foundation::core::clamp_channel, raster::buffer::PixelBuffer};

/// Mirror across the vertical midline. An odd middle column maps onto itself.
pub fn horizontal_flip(image: &PixelBuffer) -> PixelBuffer {
    let w = image.width();
    image.derive(|x, y| image.get(w - 1 - x, y).map(clamp_channel))
}

/// Mirror across the horizontal midline. An odd middle row maps onto itself.
pub fn vertical_flip(image: &PixelBuffer) -> PixelBuffer {
    let h = image.height();
    image.derive(|x, y| image.get(x, h - 1 - y).map(clamp_channel))
}

#[cfg(test)]
#[path = "../../tests/unit/transform/flip.rs"]
mod tests;
