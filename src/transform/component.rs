//! Single-value-per-pixel views of an image.

use crate::{
    foundation::core::{Rgb, clamp_channel},
    raster::buffer::PixelBuffer,
};

/// Derived greyscale view selected by a `<name>-component` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Red,
    Green,
    Blue,
    /// Rec. 709 luma, truncated toward zero.
    Luma,
    /// Largest of the three channels.
    Value,
    /// Integer mean of the three channels.
    Intensity,
}

impl Component {
    pub const ALL: [Component; 6] = [
        Component::Red,
        Component::Green,
        Component::Blue,
        Component::Luma,
        Component::Value,
        Component::Intensity,
    ];

    /// Case-insensitive lookup by name (`"red"`, `"luma"`, ...).
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Component::Red => "red",
            Component::Green => "green",
            Component::Blue => "blue",
            Component::Luma => "luma",
            Component::Value => "value",
            Component::Intensity => "intensity",
        }
    }

    /// Scalar value of this component for one pixel.
    pub fn of(self, px: Rgb) -> i32 {
        let Rgb { r, g, b } = px;
        match self {
            Component::Red => r,
            Component::Green => g,
            Component::Blue => b,
            Component::Luma => {
                (0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b)) as i32
            }
            Component::Value => r.max(g).max(b),
            Component::Intensity => {
                let mean = (i64::from(r) + i64::from(g) + i64::from(b)) / 3;
                i32::try_from(mean).unwrap_or(if mean < 0 { i32::MIN } else { i32::MAX })
            }
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Replace every pixel with `(v, v, v)` where `v` is `component` of the source pixel.
pub fn adjust_component(image: &PixelBuffer, component: Component) -> PixelBuffer {
    image.map_pixels(|px| Rgb::gray(clamp_channel(component.of(px))))
}

/// Name-driven variant of [`adjust_component`].
///
/// An unrecognized name matches no component and yields an all-black image of the same size.
pub fn adjust_component_named(image: &PixelBuffer, name: &str) -> PixelBuffer {
    match Component::parse(name) {
        Some(component) => adjust_component(image, component),
        None => image.map_pixels(|_| Rgb::BLACK),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/component.rs"]
mod tests;
