use crate::{
    foundation::{
        core::{Rgb, clamp_channel},
        error::{PhotolabError, PhotolabResult},
    },
    raster::buffer::PixelBuffer,
    transform::component::{Component, adjust_component},
};

/// Red, green and blue component images of one source, in that order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbSplit {
    pub red: PixelBuffer,
    pub green: PixelBuffer,
    pub blue: PixelBuffer,
}

impl RgbSplit {
    pub fn into_array(self) -> [PixelBuffer; 3] {
        [self.red, self.green, self.blue]
    }
}

pub fn split(image: &PixelBuffer) -> RgbSplit {
    RgbSplit {
        red: adjust_component(image, Component::Red),
        green: adjust_component(image, Component::Green),
        blue: adjust_component(image, Component::Blue),
    }
}

/// Take red from `red`, green from `green` and blue from `blue` at every coordinate.
///
/// All three sources must share width and height.
pub fn combine(
    red: &PixelBuffer,
    green: &PixelBuffer,
    blue: &PixelBuffer,
) -> PhotolabResult<PixelBuffer> {
    let dims = red.dimensions();
    if green.dimensions() != dims || blue.dimensions() != dims {
        return Err(PhotolabError::dimension_mismatch(format!(
            "red {}x{}, green {}x{}, blue {}x{}",
            dims.0,
            dims.1,
            green.width(),
            green.height(),
            blue.width(),
            blue.height()
        )));
    }

    Ok(red.derive(|x, y| {
        Rgb::new(
            clamp_channel(red.get(x, y).r),
            clamp_channel(green.get(x, y).g),
            clamp_channel(blue.get(x, y).b),
        )
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/transform/channels.rs"]
mod tests;
