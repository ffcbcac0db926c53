//! Pure image transforms. Every function returns a new buffer and leaves its inputs alone.

pub mod channels;
pub mod component;
pub mod convolve;
pub mod flip;
pub mod tone;
