/// Largest value a channel may hold after any transform writes it.
pub const CHANNEL_MAX: i32 = 255;

/// One 3-channel pixel.
///
/// Channels are plain integers: values read from a file are stored as-is, and only
/// transform outputs are guaranteed to lie in `[0, CHANNEL_MAX]`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Rgb {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Same value on all three channels.
    pub const fn gray(v: i32) -> Self {
        Self { r: v, g: v, b: v }
    }

    pub fn to_array(self) -> [i32; 3] {
        [self.r, self.g, self.b]
    }

    pub fn from_array(c: [i32; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }

    /// Channel-wise map.
    pub fn map(self, mut f: impl FnMut(i32) -> i32) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// Saturating conversion to 8-bit channels for encoders.
    pub fn to_rgb8(self) -> [u8; 3] {
        [clamp_u8(self.r), clamp_u8(self.g), clamp_u8(self.b)]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Self::new(i32::from(c[0]), i32::from(c[1]), i32::from(c[2]))
    }
}

#[inline]
pub fn clamp_channel(v: i32) -> i32 {
    v.clamp(0, CHANNEL_MAX)
}

/// Truncate toward zero, then clamp into the channel range.
#[inline]
pub fn clamp_channel_f64(v: f64) -> i32 {
    // `as` saturates on overflow and truncates toward zero.
    clamp_channel(v as i32)
}

#[inline]
fn clamp_u8(v: i32) -> u8 {
    clamp_channel(v) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
