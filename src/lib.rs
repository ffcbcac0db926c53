//! Photolab is a scriptable raster image editor.
//!
//! Images are loaded from PPM (`P3`), PNG or JPEG files into named [`PixelBuffer`]s held by an
//! [`ImageStore`], transformed by pure functions that always return a new buffer, and saved
//! back to disk. A [`Dispatcher`] turns text commands (one per line, or whole scripts) into
//! those operations and reports one outcome per command through a [`Feedback`] sink.
//!
//! ```text
//! load images/koala.ppm koala
//! brighten 10 koala koala-brighter
//! rgb-split koala r g b
//! rgb-combine koala-again r g b
//! save out/koala-brighter.png koala-brighter
//! ```
//!
//! A failing command never aborts a session or script: it leaves the store untouched and is
//! recorded as a [`CommandOutcome::Failed`].
#![forbid(unsafe_code)]

pub mod codec;
pub mod command;
pub mod feedback;
pub mod foundation;
pub mod raster;
pub mod transform;

pub use codec::{FileFormat, load_image, save_image};
pub use command::dispatch::{CommandOutcome, Dispatcher};
pub use command::parse::{Command, is_blank_or_comment, parse_command};
pub use command::script::{EXIT_TOKEN, Input, LineOutcome, ScriptReport};
pub use feedback::{Feedback, StdoutFeedback};
pub use foundation::core::{CHANNEL_MAX, Rgb};
pub use foundation::error::{ErrorKind, PhotolabError, PhotolabResult};
pub use raster::buffer::PixelBuffer;
pub use raster::store::ImageStore;
pub use transform::channels::{RgbSplit, combine, split};
pub use transform::component::{Component, adjust_component, adjust_component_named};
pub use transform::convolve::{BLUR_KERNEL, Kernel, SHARPEN_KERNEL, blur, convolve, sharpen};
pub use transform::flip::{horizontal_flip, vertical_flip};
pub use transform::tone::{brighten, sepia};
